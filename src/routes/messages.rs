use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::message_dto::SendMessagePayload, error::Result, middleware::auth::AuthUser, AppState,
};

#[axum::debug_handler]
pub async fn send_message(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<SendMessagePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let message = state.messages.send(&user, payload).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

#[axum::debug_handler]
pub async fn conversation(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(peer): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let messages = state.messages.conversation(&user, peer).await?;
    Ok(Json(messages))
}

#[axum::debug_handler]
pub async fn mark_conversation_read(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(peer): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let updated = state.messages.mark_conversation_read(&user, peer).await?;
    Ok(Json(json!({ "updated": updated })))
}

#[axum::debug_handler]
pub async fn unread_count(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let count = state.messages.unread_count(&user).await?;
    Ok(Json(json!({ "unread_count": count })))
}
