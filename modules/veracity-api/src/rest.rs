use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use veracity_common::{AnalysisRecord, AnalyticsSummary, ArticleInput, Classification};
use veracity_scorer::AnalysisReport;

use crate::error::ApiError;
use crate::state::AppState;

// --- Response bodies ---

#[derive(Serialize)]
pub struct SessionCreated {
    pub session_id: Uuid,
}

#[derive(Serialize)]
pub struct BandCount {
    pub band: Classification,
    pub count: usize,
}

#[derive(Serialize)]
pub struct AnalyticsResponse {
    #[serde(flatten)]
    pub summary: AnalyticsSummary,
    /// Non-empty bands only.
    pub distribution: Vec<BandCount>,
    pub records: Vec<AnalysisRecord>,
}

// --- Handlers ---

pub async fn create_session(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session_id = state.sessions.create().await;
    info!(session = %session_id, "Session created");
    (StatusCode::CREATED, Json(SessionCreated { session_id }))
}

pub async fn end_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.sessions.end(id).await {
        info!(session = %id, "Session ended");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::SessionNotFound(id))
    }
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(input): Json<ArticleInput>,
) -> Result<Json<AnalysisReport>, ApiError> {
    // Fail fast on unknown sessions; the registry lock is not held while the
    // article is retrieved and verified.
    if !state.sessions.exists(id).await {
        return Err(ApiError::SessionNotFound(id));
    }

    let report = state.analyzer.analyze(&input).await.map_err(|e| {
        warn!(session = %id, error = %e, "Analysis not run");
        ApiError::from(e)
    })?;

    state
        .sessions
        .with_session(id, |session| session.record(&report))
        .await
        .ok_or(ApiError::SessionNotFound(id))?;

    Ok(Json(report))
}

pub async fn analytics(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalyticsResponse>, ApiError> {
    state
        .sessions
        .with_session(id, |session| {
            let summary = session.summary();
            let distribution = summary
                .distribution()
                .into_iter()
                .map(|(band, count)| BandCount { band, count })
                .collect();
            AnalyticsResponse {
                summary,
                distribution,
                records: session.history().records().to_vec(),
            }
        })
        .await
        .map(Json)
        .ok_or(ApiError::SessionNotFound(id))
}

pub async fn reset_analytics(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .sessions
        .with_session(id, |session| session.reset())
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(ApiError::SessionNotFound(id))
}
