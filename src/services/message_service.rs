use std::sync::Arc;

use uuid::Uuid;

use crate::dto::message_dto::SendMessagePayload;
use crate::error::{Error, Result};
use crate::middleware::auth::AuthUser;
use crate::models::message::Message;
use crate::store::{MessageStore, UserStore};

#[derive(Clone)]
pub struct MessageService {
    users: Arc<dyn UserStore>,
    messages: Arc<dyn MessageStore>,
}

impl MessageService {
    pub fn new(users: Arc<dyn UserStore>, messages: Arc<dyn MessageStore>) -> Self {
        Self { users, messages }
    }

    pub async fn send(&self, user: &AuthUser, payload: SendMessagePayload) -> Result<Message> {
        let sender = self
            .users
            .find_user(user.id)
            .await?
            .ok_or_else(|| Error::Unauthorized("Unknown user".to_string()))?;
        if !sender.is_active() {
            return Err(Error::Forbidden("Account is suspended".to_string()));
        }
        if payload.receiver_id == user.id {
            return Err(Error::BadRequest(
                "Cannot send a message to yourself".to_string(),
            ));
        }
        self.users
            .find_user(payload.receiver_id)
            .await?
            .ok_or_else(|| Error::NotFound("Recipient not found".to_string()))?;

        self.messages
            .insert_message(user.id, payload.receiver_id, &payload.body)
            .await
    }

    pub async fn conversation(&self, user: &AuthUser, peer_id: Uuid) -> Result<Vec<Message>> {
        self.messages.conversation(user.id, peer_id).await
    }

    pub async fn mark_conversation_read(&self, user: &AuthUser, peer_id: Uuid) -> Result<u64> {
        self.messages.mark_conversation_read(user.id, peer_id).await
    }

    pub async fn unread_count(&self, user: &AuthUser) -> Result<i64> {
        self.messages.unread_count(user.id).await
    }
}
