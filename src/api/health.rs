//! Health check endpoints

use axum::extract::State;

use crate::{error::AppResult, AppState};

/// Liveness: the process answers
pub async fn health_check() -> &'static str {
    "healthy"
}

/// Readiness: the database answers
pub async fn readiness_check(State(state): State<AppState>) -> AppResult<&'static str> {
    state.services.catalog.ping().await?;
    Ok("ready")
}
