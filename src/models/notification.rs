use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::interview::InterviewType;

/// Polymorphic recipient discriminator. Only users receive notifications
/// today; the column keeps the door open for other recipient kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "notifiable_kind", rename_all = "snake_case")]
pub enum NotifiableKind {
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "notification_kind", rename_all = "snake_case")]
pub enum NotificationKind {
    InterviewScheduled,
    InterviewRescheduled,
    InterviewCancelled,
    ApplicationReceived,
}

/// Everything the notification panel needs to render an entry without
/// fetching the job or interview again. Stored as JSONB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotificationPayload {
    InterviewScheduled {
        job_title: String,
        employer_name: String,
        scheduled_at: DateTime<Utc>,
        location: String,
        interview_type: InterviewType,
    },
    InterviewRescheduled {
        job_title: String,
        scheduled_at: DateTime<Utc>,
        location: String,
        interview_type: InterviewType,
    },
    InterviewCancelled {
        job_title: String,
        employer_name: String,
    },
    ApplicationReceived {
        job_title: String,
        applicant_name: String,
    },
}

impl NotificationPayload {
    pub fn kind(&self) -> NotificationKind {
        match self {
            NotificationPayload::InterviewScheduled { .. } => NotificationKind::InterviewScheduled,
            NotificationPayload::InterviewRescheduled { .. } => {
                NotificationKind::InterviewRescheduled
            }
            NotificationPayload::InterviewCancelled { .. } => NotificationKind::InterviewCancelled,
            NotificationPayload::ApplicationReceived { .. } => NotificationKind::ApplicationReceived,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub notifiable_kind: NotifiableKind,
    pub notifiable_id: Uuid,
    pub kind: NotificationKind,
    #[schema(value_type = NotificationPayload)]
    pub payload: Json<NotificationPayload>,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_round_trips_with_kind_tag() {
        let payload = NotificationPayload::InterviewCancelled {
            job_title: "Backend Engineer".into(),
            employer_name: "Initech".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["kind"], "interview_cancelled");
        let back: NotificationPayload = serde_json::from_value(value).unwrap();
        assert_eq!(back, payload);
        assert_eq!(back.kind(), NotificationKind::InterviewCancelled);
    }
}
