//! Human readable verdicts for checked samples.

use serde::Serialize;
use tracing::debug;

use crate::unique::{first_duplicate, is_unique_str, Duplicate, ASCII_SIZE};

/// Outcome of a uniqueness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Unique,
    Duplicated,
}

impl From<bool> for Verdict {
    fn from(unique: bool) -> Self {
        if unique {
            Verdict::Unique
        } else {
            Verdict::Duplicated
        }
    }
}

/// A checked sample together with its verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub input: String,
    pub verdict: Verdict,
    /// First repeat, when the scan found one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate: Option<Duplicate>,
}

impl Report {
    /// Sentence describing the verdict, quoting the input.
    pub fn message(&self) -> String {
        let tail = match self.verdict {
            Verdict::Unique => "only unique characters.",
            Verdict::Duplicated => "duplicated characters.",
        };
        format!("\"{}\" contains {}", self.input, tail)
    }
}

/// Check `input` and build its report.
pub fn check(input: &str) -> Report {
    let verdict = Verdict::from(is_unique_str(input));
    let duplicate = match verdict {
        Verdict::Unique => None,
        Verdict::Duplicated => first_duplicate(input.as_bytes()),
    };
    debug!(len = input.len(), ?verdict, ?duplicate, "checked sample");
    Report {
        input: input.to_string(),
        verdict,
        duplicate,
    }
}

/// The fixed sample set: two words, the empty string, and one more
/// character than the alphabet holds.
pub fn demo_samples() -> Vec<String> {
    vec![
        "bar".to_string(),
        "foobar".to_string(),
        String::new(),
        ".".repeat(ASCII_SIZE + 1),
    ]
}
