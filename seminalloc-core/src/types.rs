use std::collections::HashMap;

use crate::constants::{REASON_DUPLICATE_TOPIC, TOPIC_LIST_OWNER};
use crate::error::{AllocError, Result};
use crate::participant::{Participant, Rank};

/// Index of a topic inside its `TopicSet`.
pub type TopicId = usize;

/// Index of a participant in the slice handed to the `Allocator`.
pub type ParticipantId = usize;

/// The fixed, ordered set of topics for one run.
///
/// Topics are addressed internally by `TopicId` (their position in the input list),
/// so rank lookups are plain vector indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSet {
    names: Vec<String>,
    name_to_id: HashMap<String, TopicId>,
}

impl TopicSet {
    /// Build a topic set. Duplicate names are rejected with `InvalidTopic`.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut name_to_id = HashMap::with_capacity(names.len());
        for (id, name) in names.iter().enumerate() {
            if name_to_id.insert(name.clone(), id).is_some() {
                return Err(AllocError::InvalidTopic {
                    owner: TOPIC_LIST_OWNER.to_string(),
                    topic: name.clone(),
                    reason: REASON_DUPLICATE_TOPIC,
                });
            }
        }
        Ok(TopicSet { names, name_to_id })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Topic name for an id. Panics if `id` is out of range.
    pub fn name(&self, id: TopicId) -> &str {
        &self.names[id]
    }

    pub fn id_of(&self, name: &str) -> Option<TopicId> {
        self.name_to_id.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TopicId, &str)> {
        self.names.iter().enumerate().map(|(id, n)| (id, n.as_str()))
    }
}

/// One participant → topic mapping. Position `i` holds the topic of participant `i`.
///
/// Never mutated in place by the allocator: each improving swap produces a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    topics: Vec<TopicId>,
}

impl Assignment {
    pub(crate) fn from_topics(topics: Vec<TopicId>) -> Self {
        Assignment { topics }
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn topic_of(&self, participant: ParticipantId) -> TopicId {
        self.topics[participant]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, TopicId)> + '_ {
        self.topics.iter().copied().enumerate()
    }

    /// A copy of this assignment with the topics of `a` and `b` exchanged.
    pub fn with_swapped(&self, a: ParticipantId, b: ParticipantId) -> Assignment {
        let mut topics = self.topics.clone();
        topics.swap(a, b);
        Assignment { topics }
    }

    /// True if every assigned topic is a valid id and no topic is used twice.
    pub fn is_bijection(&self, num_topics: usize) -> bool {
        let mut seen = vec![false; num_topics];
        for &t in &self.topics {
            if t >= num_topics || seen[t] {
                return false;
            }
            seen[t] = true;
        }
        true
    }

    /// Sum of every participant's rank for their assigned topic, saturating at `Rank::MAX`.
    pub fn total_rank(&self, participants: &[Participant]) -> Rank {
        self.iter()
            .map(|(p, t)| participants[p].rank(t))
            .fold(0, Rank::saturating_add)
    }

    /// Display rows, sorted by participant name (ties by participant index).
    pub fn entries<'a>(
        &self,
        participants: &'a [Participant],
        topics: &'a TopicSet,
    ) -> Vec<AssignmentEntry<'a>> {
        let mut rows: Vec<(ParticipantId, AssignmentEntry<'a>)> = self
            .iter()
            .map(|(p, t)| {
                let participant = &participants[p];
                (p, AssignmentEntry {
                    participant: participant.name(),
                    topic: topics.name(t),
                    rank: participant.rank(t),
                })
            })
            .collect();
        rows.sort_by(|a, b| a.1.participant.cmp(b.1.participant).then(a.0.cmp(&b.0)));
        rows.into_iter().map(|(_, row)| row).collect()
    }
}

/// A resolved row of an assignment, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentEntry<'a> {
    pub participant: &'a str,
    pub topic: &'a str,
    /// The participant's own rank for `topic`.
    pub rank: Rank,
}
