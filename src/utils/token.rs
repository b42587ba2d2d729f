use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use crate::config::get_config;
use crate::error::Result;
use crate::middleware::auth::Claims;
use crate::models::user::UserRole;

/// Mints an HS256 bearer token for the given identity. Token issuance lives
/// outside this service; this helper backs tests and local tooling.
pub fn issue_token(user_id: Uuid, role: UserRole, ttl_secs: i64) -> Result<String> {
    let exp = (Utc::now() + chrono::Duration::seconds(ttl_secs)).timestamp() as usize;
    let claims = Claims {
        sub: user_id.to_string(),
        exp,
        role: role.as_str().to_string(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(get_config().jwt_secret.as_bytes()),
    )
    .map_err(anyhow::Error::from)?;
    Ok(token)
}
