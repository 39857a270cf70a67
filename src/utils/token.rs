use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::{distributions::Alphanumeric, thread_rng, Rng};
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const SESSION_KEY_LENGTH: usize = 48;

pub fn generate_session_key() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_KEY_LENGTH)
        .map(char::from)
        .collect()
}

/// Bearer token claims. `sid` names the session entry the token is bound to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub sid: String,
    pub exp: usize,
}

pub fn issue_token(user_id: i64, session_key: &str, secret: &str, ttl_hours: i64) -> Result<String> {
    let expires_at = super::time::now() + Duration::hours(ttl_hours);
    let claims = Claims {
        sub: user_id.to_string(),
        sid: session_key.to_string(),
        exp: expires_at.timestamp().max(0) as usize,
    };
    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}
