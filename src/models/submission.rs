//! Submission model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Slim (slug, status) row used for solve-status reconciliation
///
/// Full submission records are written by the judge worker; this service
/// only ever reads these two columns. Many rows may exist for the same
/// (user, slug) pair.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SubmissionStatus {
    pub problem_slug: String,
    pub status: String,
}
