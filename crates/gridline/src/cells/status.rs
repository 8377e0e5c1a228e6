//! Status categories and the synonym table that feeds them.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The closed set of status categories a status cell can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Done,
    Processing,
    Warning,
    Error,
    /// Anything not in the synonym table.
    #[default]
    Neutral,
}

impl StatusCategory {
    /// Indicator color of the category.
    pub fn color(self) -> &'static str {
        match self {
            StatusCategory::Done => "green",
            StatusCategory::Processing => "blue",
            StatusCategory::Warning => "amber",
            StatusCategory::Error => "red",
            StatusCategory::Neutral => "gray",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusCategory::Done => "done",
            StatusCategory::Processing => "processing",
            StatusCategory::Warning => "warning",
            StatusCategory::Error => "error",
            StatusCategory::Neutral => "neutral",
        }
    }

    /// Classifies a status string, ignoring case and surrounding whitespace.
    ///
    /// ```
    /// use gridline::StatusCategory;
    ///
    /// assert_eq!(StatusCategory::classify("Cancelled"), StatusCategory::Error);
    /// assert_eq!(StatusCategory::classify(" ACTIVE "), StatusCategory::Done);
    /// assert_eq!(StatusCategory::classify("mystery"), StatusCategory::Neutral);
    /// ```
    pub fn classify(status: &str) -> Self {
        let normalized = normalize(status);
        SYNONYMS
            .get(normalized.as_str())
            .copied()
            .unwrap_or(StatusCategory::Neutral)
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

static SYNONYMS: Lazy<HashMap<&'static str, StatusCategory>> = Lazy::new(|| {
    use StatusCategory::*;

    let table: &[(StatusCategory, &[&str])] = &[
        (
            Done,
            &[
                "done", "active", "complete", "completed", "success", "successful",
                "succeeded", "ready", "approved", "finished", "valid", "validated",
                "uploaded", "available", "published", "ok",
            ],
        ),
        (
            Processing,
            &[
                "processing", "pending", "in progress", "running", "queued",
                "uploading", "validating", "generating", "submitted", "started",
                "waiting", "scheduled",
            ],
        ),
        (
            Warning,
            &[
                "warning", "paused", "on hold", "draft", "review", "in review",
                "needs review", "incomplete", "partial", "expiring", "stale",
            ],
        ),
        (
            Error,
            &[
                "error", "cancelled", "canceled", "failed", "failure", "rejected",
                "invalid", "expired", "blocked", "missing", "declined",
            ],
        ),
        (Neutral, &["neutral", "inactive", "unknown", "not started", "none"]),
    ];

    let mut map = HashMap::new();
    for (category, words) in table {
        for word in *words {
            map.insert(*word, *category);
        }
    }
    map
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_is_error_in_any_case() {
        for s in ["Cancelled", "CANCELLED", "cancelled", "Canceled"] {
            assert_eq!(StatusCategory::classify(s), StatusCategory::Error, "{}", s);
        }
    }

    #[test]
    fn synonyms() {
        assert_eq!(StatusCategory::classify("Active"), StatusCategory::Done);
        assert_eq!(StatusCategory::classify("Pending"), StatusCategory::Processing);
        assert_eq!(StatusCategory::classify("On Hold"), StatusCategory::Warning);
        assert_eq!(StatusCategory::classify("in_progress"), StatusCategory::Processing);
        assert_eq!(StatusCategory::classify("In-Progress"), StatusCategory::Processing);
    }

    #[test]
    fn unknown_and_empty_are_neutral() {
        assert_eq!(StatusCategory::classify(""), StatusCategory::Neutral);
        assert_eq!(StatusCategory::classify("purple"), StatusCategory::Neutral);
    }

    #[test]
    fn colors_are_distinct() {
        let all = [
            StatusCategory::Done,
            StatusCategory::Processing,
            StatusCategory::Warning,
            StatusCategory::Error,
            StatusCategory::Neutral,
        ];
        let colors: std::collections::HashSet<_> = all.iter().map(|c| c.color()).collect();
        assert_eq!(colors.len(), all.len());
    }
}
