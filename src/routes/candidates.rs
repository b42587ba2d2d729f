use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::search_dto::CandidateSearchQuery, error::Result, middleware::auth::AuthUser, AppState,
};

#[axum::debug_handler]
pub async fn search_candidates(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<CandidateSearchQuery>,
) -> Result<impl IntoResponse> {
    let page = state.search.search(&user, query).await?;
    Ok(Json(page))
}
