/// seminalloc-core: seminar topic allocation by household swaps.
///
/// Random initial assignment → repeated pairwise swaps that help one participant
/// without hurting the other → a local optimum. No IO, no printing, no hidden
/// randomness: the caller owns the RNG and can seed it.
///
/// Participants and topics are addressed by index internally; callers work with
/// names and read results back through `Assignment::entries`.
///
/// # Quick start
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use seminalloc_core::{Allocator, Participant, TopicSet};
///
/// let topics = TopicSet::new(["Sorting", "Graphs"]).unwrap();
/// let participants = vec![
///     Participant::new("Ada", [(1, "Sorting"), (2, "Graphs")], &topics).unwrap(),
///     Participant::from_ranking_text("bob.txt", "Bob\n1 Graphs\n", &topics).unwrap(),
/// ];
///
/// let allocator = Allocator::new(&topics, &participants).unwrap();
/// let assignment = allocator.assign(&mut StdRng::seed_from_u64(7)).unwrap();
///
/// for row in assignment.entries(&participants, &topics) {
///     println!("{}: {} (Rank {})", row.participant, row.topic, row.rank);
/// }
/// ```

pub mod allocator;
pub mod constants;
pub mod error;
pub mod participant;
pub mod types;

// Re-export primary public API at crate root.
pub use allocator::{is_improving_swap, Allocator, StepOutcome};
pub use error::{AllocError, Result};
pub use participant::{parse_ranking_line, Participant, Rank};
pub use types::{Assignment, AssignmentEntry, ParticipantId, TopicId, TopicSet};
