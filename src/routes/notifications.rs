use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
    Extension,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    dto::notification_dto::{LatestNotificationsQuery, NotificationFeedResponse},
    error::Result,
    middleware::auth::AuthUser,
    AppState,
};

#[utoipa::path(
    get,
    path = "/notifications/latest",
    params(
        ("limit" = Option<i64>, Query, description = "Max notifications to return, clamped to 1..=100")
    ),
    responses(
        (status = 200, description = "Latest notifications with unread count", body = NotificationFeedResponse)
    )
)]
#[axum::debug_handler]
pub async fn latest(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<LatestNotificationsQuery>,
) -> Result<impl IntoResponse> {
    let (notifications, unread_count) = state.notifications.latest(&user, query.limit).await?;
    Ok(Json(NotificationFeedResponse {
        notifications,
        unread_count,
    }))
}

#[utoipa::path(
    post,
    path = "/notifications/{id}/mark-as-read",
    params(
        ("id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Marked read, or no-op when already read or not the caller's")
    )
)]
#[axum::debug_handler]
pub async fn mark_read(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.notifications.mark_read(&user, id).await?;
    Ok(Json(json!({ "success": true })))
}

#[utoipa::path(
    post,
    path = "/notifications/mark-all-read",
    responses(
        (status = 200, description = "All unread notifications marked read")
    )
)]
#[axum::debug_handler]
pub async fn mark_all_read(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let updated = state.notifications.mark_all_read(&user).await?;
    Ok(Json(json!({ "updated": updated })))
}
