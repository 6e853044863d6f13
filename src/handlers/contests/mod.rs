//! Contest handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Contest routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(handler::get_contest))
        .route("/{id}/view", get(handler::view_contest))
}
