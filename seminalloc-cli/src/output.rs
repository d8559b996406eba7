/// Output formatting: plain lines and JSON.
use seminalloc_core::{AssignmentEntry, Rank};
use serde::Serialize;

#[derive(Serialize)]
struct JsonAssignment<'a> {
    name: &'a str,
    topic: &'a str,
    rank: Rank,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    assignments: Vec<JsonAssignment<'a>>,
    total_rank: Rank,
    seed: u64,
}

/// One `name: topic (Rank n)` line per participant. `rows` must already be sorted.
pub fn format_lines(rows: &[AssignmentEntry<'_>]) -> String {
    rows.iter()
        .map(|r| format!("{}: {} (Rank {})\n", r.participant, r.topic, r.rank))
        .collect()
}

pub fn format_json(rows: &[AssignmentEntry<'_>], total_rank: Rank, seed: u64) -> serde_json::Result<String> {
    let output = JsonOutput {
        assignments: rows
            .iter()
            .map(|r| JsonAssignment { name: r.participant, topic: r.topic, rank: r.rank })
            .collect(),
        total_rank,
        seed,
    };
    serde_json::to_string_pretty(&output)
}

/// Print results as plain lines.
pub fn print_lines(rows: &[AssignmentEntry<'_>]) {
    print!("{}", format_lines(rows));
}

/// Print results as JSON.
pub fn print_json(rows: &[AssignmentEntry<'_>], total_rank: Rank, seed: u64) -> serde_json::Result<()> {
    println!("{}", format_json(rows, total_rank, seed)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<AssignmentEntry<'static>> {
        vec![
            AssignmentEntry { participant: "Ada", topic: "Graphs", rank: 1 },
            AssignmentEntry { participant: "Bob", topic: "Sorting", rank: 3 },
        ]
    }

    #[test]
    fn test_format_lines() {
        assert_eq!(format_lines(&rows()), "Ada: Graphs (Rank 1)\nBob: Sorting (Rank 3)\n");
    }

    #[test]
    fn test_format_json() {
        let json = format_json(&rows(), 4, 11).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_rank"], 4);
        assert_eq!(value["seed"], 11);
        assert_eq!(value["assignments"][1]["name"], "Bob");
        assert_eq!(value["assignments"][1]["topic"], "Sorting");
        assert_eq!(value["assignments"][0]["rank"], 1);
    }
}
