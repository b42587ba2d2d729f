use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::interview_dto::{
        InterviewDecisionPayload, ScheduleInterviewPayload, UpdateInterviewPayload,
    },
    error::Result,
    middleware::auth::AuthUser,
    models::interview::InterviewInvitation,
    AppState,
};

#[utoipa::path(
    post,
    path = "/applications/{id}/interviews",
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    request_body = ScheduleInterviewPayload,
    responses(
        (status = 201, description = "Interview scheduled", body = InterviewInvitation),
        (status = 400, description = "Scheduled time is in the past"),
        (status = 401, description = "Application belongs to another employer"),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn schedule(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ScheduleInterviewPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interview = state.interviews.schedule(&user, id, payload).await?;
    Ok((StatusCode::CREATED, Json(interview)))
}

#[utoipa::path(
    put,
    path = "/interviews/{id}",
    params(
        ("id" = Uuid, Path, description = "Interview ID")
    ),
    request_body = UpdateInterviewPayload,
    responses(
        (status = 200, description = "Interview rescheduled", body = InterviewInvitation),
        (status = 400, description = "Scheduled time is in the past"),
        (status = 401, description = "Interview belongs to another employer"),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn reschedule(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInterviewPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interview = state.interviews.reschedule(&user, id, payload).await?;
    Ok(Json(interview))
}

#[utoipa::path(
    delete,
    path = "/interviews/{id}",
    params(
        ("id" = Uuid, Path, description = "Interview ID")
    ),
    responses(
        (status = 204, description = "Interview cancelled"),
        (status = 401, description = "Interview belongs to another employer"),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn cancel(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.interviews.cancel(&user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/interviews/{id}/respond",
    params(
        ("id" = Uuid, Path, description = "Interview ID")
    ),
    request_body = InterviewDecisionPayload,
    responses(
        (status = 200, description = "Decision recorded", body = InterviewInvitation),
        (status = 400, description = "Invitation already answered or decision invalid"),
        (status = 401, description = "Invitation belongs to another seeker"),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn respond(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<InterviewDecisionPayload>,
) -> Result<impl IntoResponse> {
    let interview = state.interviews.respond(&user, id, payload).await?;
    Ok(Json(interview))
}
