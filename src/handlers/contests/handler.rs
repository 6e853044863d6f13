//! Contest handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::ContestService,
    state::AppState,
};

use super::response::{ApiResponse, ContestDetail, ContestView};

/// Get a contest definition (metadata surface, no auth required)
pub async fn get_contest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ContestDetail>>> {
    let contest = ContestService::get_contest(state.db(), &id).await?;
    Ok(Json(ApiResponse::ok(contest)))
}

/// Get the per-viewer contest view
///
/// The `AuthenticatedUser` extractor rejects unauthenticated callers with
/// 401 before the contest lookup runs.
pub async fn view_contest(
    State(state): State<AppState>,
    viewer: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ContestView>>> {
    let view = ContestService::view_contest(state.db(), &id, &viewer, Utc::now()).await?;
    Ok(Json(ApiResponse::ok(view)))
}
