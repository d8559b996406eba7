/// Ranking model: a participant's name and complete preference ranking over topics.
///
/// Lower rank = more preferred. Topics a participant doesn't rank explicitly get
/// the default rank `topics.len()`, i.e. tied for worst.
use crate::constants::REASON_UNKNOWN_TOPIC;
use crate::error::{AllocError, Result};
use crate::types::{TopicId, TopicSet};

/// Preference rank of a topic. Smaller is better; ties are allowed.
pub type Rank = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    name: String,
    /// `ranking[topic_id]` is this participant's rank for that topic.
    /// Always exactly one entry per topic in the topic set.
    ranking: Vec<Rank>,
}

impl Participant {
    /// Build a participant from sparse `(rank, topic)` pairs.
    ///
    /// Every topic not mentioned in `pairs` gets rank `topics.len()`. A topic ranked
    /// twice keeps its last rank. Fails with `InvalidTopic` if a pair names a topic
    /// outside `topics`, and with `EmptyInput` if `name` is blank.
    pub fn new<I, S>(name: impl Into<String>, pairs: I, topics: &TopicSet) -> Result<Self>
    where
        I: IntoIterator<Item = (Rank, S)>,
        S: AsRef<str>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AllocError::EmptyInput { source_name: "<unnamed participant>".to_string() });
        }

        let mut ranking = vec![topics.len(); topics.len()];
        for (rank, topic) in pairs {
            let topic = topic.as_ref();
            let id = topics.id_of(topic).ok_or_else(|| AllocError::InvalidTopic {
                owner: name.clone(),
                topic: topic.to_string(),
                reason: REASON_UNKNOWN_TOPIC,
            })?;
            ranking[id] = rank;
        }

        Ok(Participant { name, ranking })
    }

    /// Parse a ranking document and build the participant from it.
    ///
    /// The first non-blank line is the participant's name; every following non-blank
    /// line must be `<rank> <topic>`. `source_name` (typically the file path) is only
    /// used in error messages. The whole document is validated before the
    /// participant is built.
    pub fn from_ranking_text(source_name: &str, text: &str, topics: &TopicSet) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l))
            .filter(|(_, l)| !l.trim().is_empty());

        let name = match lines.next() {
            Some((_, line)) => line.trim(),
            None => return Err(AllocError::EmptyInput { source_name: source_name.to_string() }),
        };

        let mut pairs: Vec<(Rank, &str)> = Vec::new();
        for (line_number, line) in lines {
            let entry = parse_ranking_line(line).ok_or_else(|| AllocError::MalformedEntry {
                participant: name.to_string(),
                line_number,
                line: line.to_string(),
            })?;
            pairs.push(entry);
        }

        Participant::new(name, pairs, topics)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rank of a topic for this participant, O(1).
    pub fn rank(&self, topic: TopicId) -> Rank {
        self.ranking[topic]
    }

    pub fn ranking(&self) -> &[Rank] {
        &self.ranking
    }
}

/// Parse one `<rank> <topic>` line.
///
/// The rank is a run of ASCII digits, separated from the topic by whitespace.
/// The topic is the rest of the line, trimmed. Returns `None` on anything else.
pub fn parse_ranking_line(line: &str) -> Option<(Rank, &str)> {
    let line = line.trim();
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits_end == 0 {
        return None;
    }

    let (digits, rest) = line.split_at(digits_end);
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let rank = digits.parse::<Rank>().ok()?;
    Some((rank, rest.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics() -> TopicSet {
        TopicSet::new(["Sorting", "Graphs", "Hashing", "Compilers"]).unwrap()
    }

    #[test]
    fn test_parse_ranking_line() {
        assert_eq!(parse_ranking_line("1 Sorting"), Some((1, "Sorting")));
        assert_eq!(parse_ranking_line("12\tGraph theory  "), Some((12, "Graph theory")));
        assert_eq!(parse_ranking_line("0 Hashing"), Some((0, "Hashing")));
        assert_eq!(parse_ranking_line("Sorting"), None);
        assert_eq!(parse_ranking_line("1"), None);
        assert_eq!(parse_ranking_line("1Sorting"), None);
        assert_eq!(parse_ranking_line("-1 Sorting"), None);
        assert_eq!(parse_ranking_line("99999999999999999999999999 Sorting"), None);
    }

    #[test]
    fn test_sparse_ranking_gets_default_rank() {
        let topics = topics();
        let p = Participant::new("Ada", [(1, "Graphs"), (2, "Compilers")], &topics).unwrap();
        assert_eq!(p.name(), "Ada");
        assert_eq!(p.ranking(), &[4, 1, 4, 2]);
        assert_eq!(p.rank(topics.id_of("Graphs").unwrap()), 1);
    }

    #[test]
    fn test_no_explicit_ranks_is_indifferent() {
        let topics = topics();
        let p = Participant::new("Bob", Vec::<(Rank, &str)>::new(), &topics).unwrap();
        assert!(p.ranking().iter().all(|&r| r == topics.len()));
    }

    #[test]
    fn test_repeated_topic_keeps_last_rank() {
        let topics = topics();
        let p = Participant::new("Cy", [(1, "Hashing"), (3, "Hashing")], &topics).unwrap();
        assert_eq!(p.rank(topics.id_of("Hashing").unwrap()), 3);
    }

    #[test]
    fn test_unknown_topic_is_rejected() {
        let err = Participant::new("Dee", [(1, "Quantum")], &topics()).unwrap_err();
        assert_eq!(
            err,
            AllocError::InvalidTopic {
                owner: "Dee".to_string(),
                topic: "Quantum".to_string(),
                reason: REASON_UNKNOWN_TOPIC,
            }
        );
        assert!(err.to_string().contains("Dee"));
        assert!(err.to_string().contains("Quantum"));
    }

    #[test]
    fn test_from_ranking_text() {
        let text = "Eve Example\n1 Compilers\n\n2 Sorting\n";
        let topics = topics();
        let p = Participant::from_ranking_text("eve.txt", text, &topics).unwrap();
        assert_eq!(p.name(), "Eve Example");
        assert_eq!(p.ranking(), &[2, 4, 4, 1]);
    }

    #[test]
    fn test_from_ranking_text_empty() {
        let err = Participant::from_ranking_text("empty.txt", "\n  \n", &topics()).unwrap_err();
        assert_eq!(err, AllocError::EmptyInput { source_name: "empty.txt".to_string() });
    }

    #[test]
    fn test_from_ranking_text_malformed_line() {
        let text = "Finn\n1 Sorting\nGraphs\n";
        let err = Participant::from_ranking_text("finn.txt", text, &topics()).unwrap_err();
        assert_eq!(
            err,
            AllocError::MalformedEntry {
                participant: "Finn".to_string(),
                line_number: 3,
                line: "Graphs".to_string(),
            }
        );
    }

    #[test]
    fn test_from_ranking_text_invalid_topic() {
        let text = "Gus\n1 Sorting\n2 Databases\n";
        let err = Participant::from_ranking_text("gus.txt", text, &topics()).unwrap_err();
        assert!(matches!(err, AllocError::InvalidTopic { ref topic, .. } if topic == "Databases"));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = Participant::new("  ", [(1, "Sorting")], &topics()).unwrap_err();
        assert!(matches!(err, AllocError::EmptyInput { .. }));
    }
}
