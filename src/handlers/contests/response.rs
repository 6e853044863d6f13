//! Contest response DTOs
//!
//! The two problem projections here are the only shapes a problem ever
//! leaves this service in. Each is a separate named struct built by explicit
//! field assignment, so what a surface exposes is checkable from its
//! definition alone:
//!
//! - [`ProblemMetadata`] (metadata surface): no test cases, no authorship.
//! - [`ViewerProblem`] (viewer surface): additionally no expected output.
//!   A viewer surface must never expose a field the metadata surface hides.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Contest, Difficulty, Phase, Problem, ProblemStatus};

/// Standard success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Problem as served on the metadata surface
///
/// Used by administrative and editing flows fetching the contest
/// definition. Hidden test cases and authorship are stripped.
#[derive(Debug, Serialize)]
pub struct ProblemMetadata {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub expected_output: Option<String>,
}

impl From<&Problem> for ProblemMetadata {
    fn from(problem: &Problem) -> Self {
        Self {
            id: problem.id,
            title: problem.title.clone(),
            slug: problem.slug.clone(),
            description: problem.description.clone(),
            difficulty: Difficulty::parse(problem.difficulty.as_deref()),
            tags: problem.tags.clone(),
            expected_output: problem.expected_output.clone(),
        }
    }
}

/// Problem as served to a contest viewer
///
/// Reachable by participants, so the redaction is strictly stronger than
/// the metadata surface: hidden test cases, expected output and authorship
/// are all stripped. Carries the viewer's solve status.
#[derive(Debug, Serialize)]
pub struct ViewerProblem {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    // Wire name kept for existing clients
    #[serde(rename = "userStatus")]
    pub user_status: ProblemStatus,
}

impl ViewerProblem {
    /// Project a problem for the viewer surface, attaching solve status
    pub fn redact(problem: &Problem, user_status: ProblemStatus) -> Self {
        Self {
            id: problem.id,
            title: problem.title.clone(),
            slug: problem.slug.clone(),
            description: problem.description.clone(),
            difficulty: Difficulty::parse(problem.difficulty.as_deref()),
            tags: problem.tags.clone(),
            user_status,
        }
    }
}

/// Contest definition response (metadata surface)
#[derive(Debug, Serialize)]
pub struct ContestDetail {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub audience: Vec<String>,
    pub question_count: i32,
    pub problems: Vec<ProblemMetadata>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContestDetail {
    pub fn assemble(contest: Contest, problems: &[Problem]) -> Self {
        Self {
            id: contest.id,
            title: contest.title,
            description: contest.description,
            start_time: contest.start_time,
            end_time: contest.end_time,
            audience: contest.audience,
            question_count: contest.question_count,
            problems: problems.iter().map(ProblemMetadata::from).collect(),
            created_at: contest.created_at,
            updated_at: contest.updated_at,
        }
    }
}

/// Per-viewer contest view
///
/// A pure projection of (contest, problems, submissions, now, role); it has
/// no identity of its own and is recomputed on every request.
#[derive(Debug, Serialize)]
pub struct ContestView {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Omitted from the locked shell, which carries only the fields a
    /// locked lobby needs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<Vec<String>>,
    pub question_count: i32,
    pub status: Phase,
    pub problems: Vec<ViewerProblem>,
}

impl ContestView {
    /// The locked lobby served to students before a contest starts.
    ///
    /// The problem list is present and empty, not omitted, so clients can
    /// always render a well-formed shell. Audience tags are not part of
    /// the shell.
    pub fn locked(contest: Contest, status: Phase) -> Self {
        Self {
            id: contest.id,
            title: contest.title,
            description: contest.description,
            start_time: contest.start_time,
            end_time: contest.end_time,
            audience: None,
            question_count: contest.question_count,
            status,
            problems: Vec::new(),
        }
    }

    pub fn assemble(contest: Contest, status: Phase, problems: Vec<ViewerProblem>) -> Self {
        Self {
            id: contest.id,
            title: contest.title,
            description: contest.description,
            start_time: contest.start_time,
            end_time: contest.end_time,
            audience: Some(contest.audience),
            question_count: contest.question_count,
            status,
            problems,
        }
    }

    /// Number of problems the viewer has solved
    pub fn solved_count(&self) -> usize {
        self.problems
            .iter()
            .filter(|p| p.user_status == ProblemStatus::Solved)
            .count()
    }

    /// Flat score: 100 points per solved problem
    pub fn score(&self) -> usize {
        self.solved_count() * 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn problem() -> Problem {
        let created = Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap();
        Problem {
            id: Uuid::new_v4(),
            title: "Two Sum".to_string(),
            slug: "two-sum".to_string(),
            description: Some("Find two numbers that add up to a target".to_string()),
            difficulty: Some("easy".to_string()),
            tags: vec!["arrays".to_string()],
            test_cases: serde_json::json!([{"input": "1 2", "output": "3"}]),
            expected_output: Some("3".to_string()),
            created_by: Uuid::new_v4(),
            created_at: created,
            updated_at: created,
        }
    }

    fn contest() -> Contest {
        let created = Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap();
        Contest {
            id: Uuid::new_v4(),
            title: "Winter Sprint".to_string(),
            description: None,
            start_time: Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
            audience: vec![],
            question_count: 2,
            created_at: created,
            updated_at: created,
        }
    }

    fn keys(value: &serde_json::Value) -> Vec<String> {
        value
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect::<Vec<_>>()
    }

    #[test]
    fn test_metadata_surface_hides_tests_and_author() {
        let json = serde_json::to_value(ProblemMetadata::from(&problem())).unwrap();
        let keys = keys(&json);
        assert!(!keys.contains(&"test_cases".to_string()));
        assert!(!keys.contains(&"created_by".to_string()));
        // Expected output is still visible on this surface
        assert!(keys.contains(&"expected_output".to_string()));
    }

    #[test]
    fn test_viewer_surface_is_strictly_stronger() {
        let json =
            serde_json::to_value(ViewerProblem::redact(&problem(), ProblemStatus::Unsolved))
                .unwrap();
        let keys = keys(&json);
        assert!(!keys.contains(&"test_cases".to_string()));
        assert!(!keys.contains(&"created_by".to_string()));
        assert!(!keys.contains(&"expected_output".to_string()));
    }

    #[test]
    fn test_viewer_surface_never_exposes_metadata_hidden_fields() {
        // Every field hidden by the metadata surface must also be hidden here
        let metadata = serde_json::to_value(ProblemMetadata::from(&problem())).unwrap();
        let viewer =
            serde_json::to_value(ViewerProblem::redact(&problem(), ProblemStatus::Solved))
                .unwrap();
        let metadata_keys = keys(&metadata);
        for key in keys(&viewer) {
            if key == "userStatus" {
                continue;
            }
            assert!(metadata_keys.contains(&key), "viewer leaked field {key}");
        }
    }

    #[test]
    fn test_user_status_wire_name() {
        let json =
            serde_json::to_value(ViewerProblem::redact(&problem(), ProblemStatus::Attempted))
                .unwrap();
        assert_eq!(json["userStatus"], "attempted");
    }

    #[test]
    fn test_locked_view_is_well_formed_shell() {
        let c = contest();
        let title = c.title.clone();
        let view = ContestView::locked(c, Phase::Upcoming);
        assert_eq!(view.title, title);
        assert_eq!(view.status, Phase::Upcoming);
        assert!(view.problems.is_empty());

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["status"], "upcoming");
        assert_eq!(json["problems"], serde_json::json!([]));
        assert_eq!(json["question_count"], 2);
        // Audience tags are dropped from the locked shell entirely
        assert!(!json.as_object().unwrap().contains_key("audience"));
    }

    #[test]
    fn test_full_view_carries_audience() {
        let json = serde_json::to_value(ContestView::assemble(
            contest(),
            Phase::Live,
            Vec::new(),
        ))
        .unwrap();
        assert!(json.as_object().unwrap().contains_key("audience"));
    }

    #[test]
    fn test_solved_count_and_score() {
        let view = ContestView::assemble(
            contest(),
            Phase::Live,
            vec![
                ViewerProblem::redact(&problem(), ProblemStatus::Solved),
                ViewerProblem::redact(&problem(), ProblemStatus::Attempted),
                ViewerProblem::redact(&problem(), ProblemStatus::Solved),
            ],
        );
        assert_eq!(view.solved_count(), 2);
        assert_eq!(view.score(), 200);
    }
}
