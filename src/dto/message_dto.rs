use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessagePayload {
    pub receiver_id: Uuid,
    #[validate(length(min = 1))]
    pub body: String,
}
