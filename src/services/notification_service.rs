use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::notification::{Notification, NotificationPayload};
use crate::store::NotificationStore;

/// Dispatch capability injected into the workflow services. Callers treat
/// delivery as best-effort: a failed dispatch is logged, never propagated.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn dispatch(&self, recipient: Uuid, payload: NotificationPayload)
        -> Result<Notification>;
}

#[derive(Clone)]
pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
}

impl NotificationService {
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    /// Marks one notification read. A foreign or already-read id is a
    /// silent no-op, so the first read_at timestamp always wins.
    pub async fn mark_read(&self, user: &AuthUser, id: Uuid) -> Result<Option<Notification>> {
        self.store.mark_read(id, user.id).await
    }

    pub async fn mark_all_read(&self, user: &AuthUser) -> Result<u64> {
        self.store.mark_all_read(user.id).await
    }

    /// Newest first, read and unread alike, with the unread total alongside.
    pub async fn latest(
        &self,
        user: &AuthUser,
        limit: Option<i64>,
    ) -> Result<(Vec<Notification>, i64)> {
        let limit = limit.unwrap_or(20).clamp(1, 100);
        let notifications = self.store.latest_for_user(user.id, limit).await?;
        let unread_count = self.store.unread_count(user.id).await?;
        Ok((notifications, unread_count))
    }
}

#[async_trait]
impl NotificationSender for NotificationService {
    async fn dispatch(
        &self,
        recipient: Uuid,
        payload: NotificationPayload,
    ) -> Result<Notification> {
        self.store.insert_notification(recipient, payload).await
    }
}
