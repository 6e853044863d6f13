//! Contest service

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ContestRepository, ProblemRepository, SubmissionRepository},
    error::{AppError, AppResult},
    handlers::contests::response::{ContestDetail, ContestView, ViewerProblem},
    middleware::auth::AuthenticatedUser,
    services::{solve_status, visibility},
};

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// Get a contest definition with its problems (metadata surface)
    pub async fn get_contest(pool: &PgPool, id: &Uuid) -> AppResult<ContestDetail> {
        let contest = ContestRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest".to_string()))?;

        let problems = ProblemRepository::find_for_contest(pool, id).await?;

        Ok(ContestDetail::assemble(contest, &problems))
    }

    /// Get the per-viewer contest view (viewer surface)
    ///
    /// Resolves visibility first: a student viewing an upcoming contest gets
    /// the locked shell and no problem or submission lookups happen at all.
    /// Otherwise problems are projected for the viewer surface and annotated
    /// with the viewer's reconciled solve status.
    pub async fn view_contest(
        pool: &PgPool,
        id: &Uuid,
        viewer: &AuthenticatedUser,
        now: DateTime<Utc>,
    ) -> AppResult<ContestView> {
        let contest = ContestRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest".to_string()))?;

        let visibility = visibility::resolve(&contest, &viewer.role, now);

        if !visibility.reveal {
            return Ok(ContestView::locked(contest, visibility.phase));
        }

        let problems = ProblemRepository::find_for_contest(pool, id).await?;
        let slugs: Vec<String> = problems.iter().map(|p| p.slug.clone()).collect();

        let submissions = SubmissionRepository::statuses_for_user(pool, &viewer.id, &slugs).await?;
        let status_map = solve_status::reconcile(&submissions);

        let problems = problems
            .iter()
            .map(|p| ViewerProblem::redact(p, solve_status::status_for(&status_map, &p.slug)))
            .collect();

        Ok(ContestView::assemble(contest, visibility.phase, problems))
    }
}
