//! Study session endpoints

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::auth::AuthenticatedUser;
use crate::routes::lists::load_list;
use crate::services::results::ResultsKey;
use crate::AppState;

/// POST /api/lists/:id/study
pub async fn start(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(list_id): Path<Uuid>,
) -> Result<Json<StartSessionResponse>> {
    let list = load_list(&state, list_id).await?;
    let started = state.sessions.start(auth.user_id, &list).await?;

    tracing::info!(
        session_id = %started.session_id,
        list_id = %list_id,
        total_words = started.total_words,
        "Started study session"
    );

    Ok(Json(started))
}

/// POST /api/study/:session_id/submit
pub async fn submit(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>> {
    let response = state
        .sessions
        .submit(session_id, auth.user_id, &payload.input)
        .await?;

    if let Some(feedback) = &response.feedback {
        tracing::debug!(session_id = %session_id, word = feedback.word(), "Classified submission");
    }

    Ok(Json(response))
}

/// POST /api/study/:session_id/finish
pub async fn finish(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ResultsResponse>> {
    let finished = state.sessions.finish(session_id, auth.user_id).await?;

    let key = ResultsKey {
        user_id: auth.user_id,
        list_id: finished.list_id,
    };
    state.results.put(key, finished.results.clone());

    let response = ResultsResponse::new(finished.results);

    tracing::info!(
        session_id = %session_id,
        list_id = %finished.list_id,
        score = response.score,
        "Finished study session"
    );

    Ok(Json(response))
}

/// DELETE /api/study/:session_id
pub async fn abandon(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<DeleteResponse>> {
    state.sessions.abandon(session_id, auth.user_id).await?;
    Ok(Json(DeleteResponse { success: true }))
}

/// GET /api/lists/:id/results
/// Latest finished results for this list, sorted for display
pub async fn results(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(list_id): Path<Uuid>,
) -> Result<Json<ResultsResponse>> {
    let key = ResultsKey {
        user_id: auth.user_id,
        list_id,
    };
    let results = state
        .results
        .get(key)
        .ok_or_else(|| ApiError::NotFound("No results found".to_string()))?;

    Ok(Json(ResultsResponse::new(results.sorted_for_display())))
}
