/// Household allocation: random initial draw, then first-improvement pairwise swaps
/// until no swap helps one participant without hurting the other.
///
/// Single-threaded and pure apart from the caller-supplied RNG.
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::constants::{iteration_cap, REASON_FOREIGN_TOPIC_SET};
use crate::error::{AllocError, Result};
use crate::participant::Participant;
use crate::types::{Assignment, ParticipantId, TopicId, TopicSet};

/// Result of one improvement attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// A fresh assignment with the topics of `swapped.0` and `swapped.1` exchanged.
    Improved {
        assignment: Assignment,
        swapped: (ParticipantId, ParticipantId),
    },
    /// No ordered pair of participants forms an improving swap. Normal termination.
    NoImprovementPossible,
}

/// Acceptance rule for swapping the topics of `s1` and `s2`.
///
/// `s1` must strictly prefer `s2`'s topic, and `s2` must like `s1`'s topic at least as
/// much as its own.
pub fn is_improving_swap(
    participants: &[Participant],
    assignment: &Assignment,
    s1: ParticipantId,
    s2: ParticipantId,
) -> bool {
    if s1 == s2 {
        return false;
    }
    let t1 = assignment.topic_of(s1);
    let t2 = assignment.topic_of(s2);
    let p1 = &participants[s1];
    let p2 = &participants[s2];
    p1.rank(t2) < p1.rank(t1) && p2.rank(t1) <= p2.rank(t2)
}

pub struct Allocator<'a> {
    topics: &'a TopicSet,
    participants: &'a [Participant],
    max_swaps: usize,
}

impl<'a> Allocator<'a> {
    /// Fails with `InsufficientTopics` if there are fewer topics than participants, and
    /// with `InvalidTopic` if a participant's ranking doesn't cover exactly `topics`.
    pub fn new(topics: &'a TopicSet, participants: &'a [Participant]) -> Result<Self> {
        if topics.len() < participants.len() {
            return Err(AllocError::InsufficientTopics {
                topics: topics.len(),
                participants: participants.len(),
            });
        }
        if let Some(p) = participants.iter().find(|p| p.ranking().len() != topics.len()) {
            let topic = if p.ranking().len() < topics.len() {
                topics.name(p.ranking().len()).to_string()
            } else {
                format!("topic #{}", topics.len() + 1)
            };
            return Err(AllocError::InvalidTopic {
                owner: p.name().to_string(),
                topic,
                reason: REASON_FOREIGN_TOPIC_SET,
            });
        }

        Ok(Allocator {
            topics,
            participants,
            max_swaps: iteration_cap(participants.len(), topics.len()),
        })
    }

    /// Override the defensive cap on improving swaps per `assign()` call.
    pub fn with_iteration_cap(mut self, max_swaps: usize) -> Self {
        self.max_swaps = max_swaps;
        self
    }

    pub fn topics(&self) -> &TopicSet {
        self.topics
    }

    pub fn participants(&self) -> &[Participant] {
        self.participants
    }

    pub fn iteration_cap(&self) -> usize {
        self.max_swaps
    }

    /// Run the full allocation: random initial draw, then improve until stuck.
    ///
    /// Fails with `Convergence` only if more than `iteration_cap()` swaps are needed.
    pub fn assign<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Assignment> {
        let mut assignment = self.initial_assignment(rng);
        let mut swaps = 0usize;

        loop {
            match self.improvement_step(&assignment, rng) {
                StepOutcome::Improved { assignment: next, swapped: (s1, s2) } => {
                    swaps += 1;
                    if swaps > self.max_swaps {
                        return Err(AllocError::Convergence { cap: self.max_swaps });
                    }
                    debug!(
                        swap = swaps,
                        gains = self.participants[s1].name(),
                        gives = self.participants[s2].name(),
                        from = self.topics.name(assignment.topic_of(s1)),
                        to = self.topics.name(next.topic_of(s1)),
                        "applied improving swap"
                    );
                    assignment = next;
                }
                StepOutcome::NoImprovementPossible => break,
            }
        }

        info!(
            participants = self.participants.len(),
            topics = self.topics.len(),
            swaps,
            total_rank = assignment.total_rank(self.participants),
            "allocation converged"
        );
        Ok(assignment)
    }

    /// Uniformly shuffle all topics; participant `i` gets the `i`-th shuffled topic.
    pub fn initial_assignment<R: Rng + ?Sized>(&self, rng: &mut R) -> Assignment {
        let mut shuffled: Vec<TopicId> = (0..self.topics.len()).collect();
        shuffled.shuffle(rng);
        shuffled.truncate(self.participants.len());
        Assignment::from_topics(shuffled)
    }

    /// One first-improvement scan over all ordered participant pairs.
    ///
    /// Participants are visited in a freshly shuffled order each call. The first
    /// improving pair found is applied to a copy of `assignment` and returned.
    pub fn improvement_step<R: Rng + ?Sized>(
        &self,
        assignment: &Assignment,
        rng: &mut R,
    ) -> StepOutcome {
        let mut order: Vec<ParticipantId> = (0..assignment.len()).collect();
        order.shuffle(rng);

        for &s1 in &order {
            for &s2 in &order {
                if is_improving_swap(self.participants, assignment, s1, s2) {
                    return StepOutcome::Improved {
                        assignment: assignment.with_swapped(s1, s2),
                        swapped: (s1, s2),
                    };
                }
            }
        }

        StepOutcome::NoImprovementPossible
    }

    /// True if no ordered pair is improving. Deterministic, unlike `improvement_step`.
    pub fn is_local_optimum(&self, assignment: &Assignment) -> bool {
        let n = assignment.len();
        (0..n).all(|s1| (0..n).all(|s2| !is_improving_swap(self.participants, assignment, s1, s2)))
    }
}
