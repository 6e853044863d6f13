//! Problem model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Problem database model
///
/// This is the full record. `test_cases`, `expected_output` and `created_by`
/// are sensitive and must never reach a contest viewer; handlers serve the
/// redacted projections in `handlers::contests::response` instead of this
/// struct.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub id: Uuid,
    pub title: String,
    /// Unique slug, the cross-reference key to submissions
    pub slug: String,
    pub description: Option<String>,
    pub difficulty: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing)]
    pub test_cases: serde_json::Value,
    pub expected_output: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Problem difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl Difficulty {
    /// Parse a stored difficulty string, falling back to `Unknown`
    pub fn parse(s: Option<&str>) -> Self {
        match s.map(|s| s.to_ascii_lowercase()).as_deref() {
            Some("easy") => Self::Easy,
            Some("medium") => Self::Medium,
            Some("hard") => Self::Hard,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Per-viewer solve status of a problem
///
/// Derived fresh per request, never stored. Ordered so that merging
/// submission records is a plain max-reduction: once solved, a problem can
/// never be downgraded by a later record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemStatus {
    Unsolved,
    Attempted,
    Solved,
}

impl std::fmt::Display for ProblemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsolved => write!(f, "unsolved"),
            Self::Attempted => write!(f, "attempted"),
            Self::Solved => write!(f, "solved"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse(Some("easy")), Difficulty::Easy);
        assert_eq!(Difficulty::parse(Some("Medium")), Difficulty::Medium);
        assert_eq!(Difficulty::parse(Some("hard")), Difficulty::Hard);
        assert_eq!(Difficulty::parse(Some("insane")), Difficulty::Unknown);
        assert_eq!(Difficulty::parse(None), Difficulty::Unknown);
    }

    #[test]
    fn test_status_ordering() {
        assert!(ProblemStatus::Unsolved < ProblemStatus::Attempted);
        assert!(ProblemStatus::Attempted < ProblemStatus::Solved);
    }
}
