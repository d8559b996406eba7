/// Error taxonomy for building participants and running the allocator.
///
/// "No improving swap left" is not an error; see `allocator::StepOutcome`.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    /// A ranking source had no name line.
    #[error("ranking input {source_name} is empty: expected the participant's name on the first line")]
    EmptyInput { source_name: String },

    /// A ranking line is not of the form `<rank> <topic>`.
    #[error("{participant}: malformed ranking entry on line {line_number}: \"{line}\" (expected \"<rank> <topic>\")")]
    MalformedEntry {
        participant: String,
        line_number: usize,
        line: String,
    },

    /// A topic outside the topic set, or a topic listed twice in the topic set.
    #[error("{owner} has invalid topic \"{topic}\": {reason}")]
    InvalidTopic {
        owner: String,
        topic: String,
        reason: &'static str,
    },

    #[error("not enough topics: {topics} topics for {participants} participants")]
    InsufficientTopics { topics: usize, participants: usize },

    /// The defensive swap cap was hit. Indicates a bug, not bad input.
    #[error("internal error: allocation did not converge within {cap} swaps")]
    Convergence { cap: usize },
}

pub type Result<T> = std::result::Result<T, AllocError>;
