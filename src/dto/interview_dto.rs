use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::interview::{InterviewStatus, InterviewType};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ScheduleInterviewPayload {
    pub scheduled_at: DateTime<Utc>,
    #[validate(length(min = 1))]
    pub location: String,
    pub interview_type: InterviewType,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateInterviewPayload {
    pub scheduled_at: DateTime<Utc>,
    #[validate(length(min = 1))]
    pub location: String,
    pub interview_type: InterviewType,
    pub notes: Option<String>,
}

/// Only `accepted` and `declined` are valid decisions; the service rejects
/// the rest of the status space.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InterviewDecisionPayload {
    pub decision: InterviewStatus,
}
