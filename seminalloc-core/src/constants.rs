/// Reason attached to `InvalidTopic` when a ranking names a topic outside the topic set.
pub const REASON_UNKNOWN_TOPIC: &str = "not in the topic list";

/// Reason attached to `InvalidTopic` when the topic list itself repeats a name.
pub const REASON_DUPLICATE_TOPIC: &str = "listed more than once";

/// Reason attached to `InvalidTopic` when a participant's ranking was built for another topic set.
pub const REASON_FOREIGN_TOPIC_SET: &str = "ranking was built against a different topic list";

/// Owner label used for errors in the topic list itself.
pub const TOPIC_LIST_OWNER: &str = "topic list";

/// Default cap on the number of improving swaps in a single `assign()` run.
///
/// Every accepted swap strictly lowers the rank sum, so a correct run never gets
/// near this. Reaching it is reported as `AllocError::Convergence`.
///
/// `max(1, participants² × topics²)`, saturating on overflow.
pub fn iteration_cap(num_participants: usize, num_topics: usize) -> usize {
    let p2 = num_participants.saturating_mul(num_participants);
    let t2 = num_topics.saturating_mul(num_topics);
    p2.saturating_mul(t2).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_cap_small() {
        assert_eq!(iteration_cap(3, 4), 9 * 16);
        assert_eq!(iteration_cap(0, 5), 1);
    }

    #[test]
    fn test_iteration_cap_saturates() {
        assert_eq!(iteration_cap(usize::MAX, 2), usize::MAX);
    }
}
