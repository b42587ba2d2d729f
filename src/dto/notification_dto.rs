use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::notification::Notification;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NotificationFeedResponse {
    pub notifications: Vec<Notification>,
    pub unread_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LatestNotificationsQuery {
    pub limit: Option<i64>,
}
