//! Word list endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use recall_core::{to_text, ListDraft};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::auth::AuthenticatedUser;
use crate::AppState;

/// POST /api/lists
pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(payload): Json<WordListRequest>,
) -> Result<(StatusCode, Json<WordListResponse>)> {
    let draft = validate(&state, &payload)?;
    let list = state.db.create_word_list(auth.user_id, &draft).await?;

    tracing::info!(
        list_id = %list.id,
        words = list.entries.len(),
        "Created word list"
    );

    Ok((
        StatusCode::CREATED,
        Json(WordListResponse::new(list, auth.name)),
    ))
}

/// GET /api/lists
pub async fn index(State(state): State<AppState>) -> Result<Json<WordListIndexResponse>> {
    let lists = state.db.get_all_word_lists().await?;
    Ok(Json(WordListIndexResponse { lists }))
}

/// GET /api/lists/:id
pub async fn show(
    State(state): State<AppState>,
    Path(list_id): Path<Uuid>,
) -> Result<Json<WordListResponse>> {
    let list = load_list(&state, list_id).await?;
    let owner_name = state
        .db
        .get_user(list.owner_id)
        .await?
        .map(|u| u.name)
        .unwrap_or_default();

    Ok(Json(WordListResponse::new(list, owner_name)))
}

/// GET /api/lists/:id/text
/// The list in its pasted-text form, for prefilling an edit form
pub async fn text(
    State(state): State<AppState>,
    Path(list_id): Path<Uuid>,
) -> Result<Json<WordListTextResponse>> {
    let list = load_list(&state, list_id).await?;

    Ok(Json(WordListTextResponse {
        words_text: to_text(&list.entries),
        name: list.name,
    }))
}

/// PUT /api/lists/:id
pub async fn update(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(list_id): Path<Uuid>,
    Json(payload): Json<WordListRequest>,
) -> Result<Json<WordListResponse>> {
    ensure_owner(&state, list_id, &auth, "edit").await?;

    let draft = validate(&state, &payload)?;
    let list = state.db.replace_word_list(list_id, &draft).await?;

    tracing::info!(
        list_id = %list.id,
        words = list.entries.len(),
        "Replaced word list"
    );

    Ok(Json(WordListResponse::new(list, auth.name)))
}

/// DELETE /api/lists/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(list_id): Path<Uuid>,
) -> Result<Json<DeleteResponse>> {
    ensure_owner(&state, list_id, &auth, "delete").await?;

    let success = state.db.delete_word_list(list_id).await?;
    state.results.remove_list(list_id);

    tracing::info!(list_id = %list_id, "Deleted word list");

    Ok(Json(DeleteResponse { success }))
}

fn validate(state: &AppState, payload: &WordListRequest) -> Result<ListDraft> {
    if payload.words_text.len() > state.max_words_text_bytes {
        return Err(ApiError::BadRequest(format!(
            "Words text exceeds {} bytes",
            state.max_words_text_bytes
        )));
    }

    Ok(ListDraft::new(&payload.name, &payload.words_text)?)
}

pub(crate) async fn load_list(state: &AppState, list_id: Uuid) -> Result<WordList> {
    state
        .db
        .get_word_list(list_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Word list not found".to_string()))
}

async fn ensure_owner(
    state: &AppState,
    list_id: Uuid,
    auth: &AuthenticatedUser,
    action: &str,
) -> Result<()> {
    let owner_id = state
        .db
        .get_word_list_owner(list_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Word list not found".to_string()))?;

    if owner_id != auth.user_id {
        return Err(ApiError::Forbidden(format!(
            "You can only {} your own word lists",
            action
        )));
    }

    Ok(())
}
