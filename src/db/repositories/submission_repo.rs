//! Submission repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::SubmissionStatus};

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Fetch (slug, status) rows for one user restricted to a slug set
    ///
    /// Row order is whatever the database returns; callers must not rely on
    /// it being chronological.
    pub async fn statuses_for_user(
        pool: &PgPool,
        user_id: &Uuid,
        slugs: &[String],
    ) -> AppResult<Vec<SubmissionStatus>> {
        let rows = sqlx::query_as::<_, SubmissionStatus>(
            r#"
            SELECT problem_slug, status
            FROM submissions
            WHERE user_id = $1 AND problem_slug = ANY($2)
            "#,
        )
        .bind(user_id)
        .bind(slugs)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}
