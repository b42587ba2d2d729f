use axum::{
    extract::State,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::profile_dto::{UpsertEmployerProfilePayload, UpsertSeekerProfilePayload},
    error::Result,
    middleware::auth::AuthUser,
    AppState,
};

#[axum::debug_handler]
pub async fn own_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let profile = state.profiles.own(&user).await?;
    Ok(Json(profile))
}

#[axum::debug_handler]
pub async fn upsert_seeker_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<UpsertSeekerProfilePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let profile = state.profiles.upsert_seeker(&user, payload).await?;
    Ok(Json(profile))
}

#[axum::debug_handler]
pub async fn upsert_employer_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<UpsertEmployerProfilePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let profile = state.profiles.upsert_employer(&user, payload).await?;
    Ok(Json(profile))
}
