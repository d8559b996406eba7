/// Reading topic lists and ranking files from disk.
use seminalloc_core::{Participant, TopicSet};
use std::path::Path;

use crate::bail;

/// Parse a topic list: either a JSON array of strings or plain text, one topic per line.
/// Lines are trimmed and blank lines dropped.
///
/// Content that starts with `[` but isn't a JSON string array is read as plain text,
/// so a first topic like `[WIP] Compilers` stays a topic.
pub fn parse_topics_from_str(content: &str) -> Vec<String> {
    let trimmed = content.trim();
    if trimmed.starts_with('[') {
        match serde_json::from_str::<Vec<String>>(trimmed) {
            Ok(topics) => {
                return topics
                    .into_iter()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            Err(e) => tracing::debug!("topic list is not a JSON array ({e}), reading it as plain lines"),
        }
    }
    trimmed
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Load and validate the topic set.
pub fn load_topics(path: &Path) -> TopicSet {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| bail(format!("Failed to read topic file {}: {e}", path.display())));
    TopicSet::new(parse_topics_from_str(&content)).unwrap_or_else(|e| bail(e))
}

/// Load one participant per ranking file, in the order given.
pub fn load_participants(paths: &[impl AsRef<Path>], topics: &TopicSet) -> Vec<Participant> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .unwrap_or_else(|e| bail(format!("Failed to read ranking file {}: {e}", path.display())));
            let participant = Participant::from_ranking_text(&path.display().to_string(), &content, topics)
                .unwrap_or_else(|e| bail(e));
            tracing::debug!(participant = participant.name(), file = %path.display(), "loaded ranking");
            participant
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_topics() {
        let topics = parse_topics_from_str("  Sorting \n\nGraph theory\r\nHashing\n");
        assert_eq!(topics, vec!["Sorting", "Graph theory", "Hashing"]);
    }

    #[test]
    fn test_parse_json_topics() {
        let topics = parse_topics_from_str("[\"Sorting\", \" \", \"Graphs\"]");
        assert_eq!(topics, vec!["Sorting", "Graphs"]);
    }

    #[test]
    fn test_bracketed_first_topic_is_plain_text() {
        let topics = parse_topics_from_str("[WIP] Compilers\nSorting\n");
        assert_eq!(topics, vec!["[WIP] Compilers", "Sorting"]);
    }

    #[test]
    fn test_unterminated_json_falls_back_to_lines() {
        let topics = parse_topics_from_str("[\"Sorting\",\nGraphs\n");
        assert_eq!(topics, vec!["[\"Sorting\",", "Graphs"]);
    }
}
