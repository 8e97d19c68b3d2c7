//! Session token signing and verification (HS256, one-hour expiry).

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::ApiError;

const TOKEN_TTL_SECONDS: i64 = 3600;

static JWT_SECRET: Lazy<Option<String>> = Lazy::new(|| std::env::var("JWT_SECRET").ok());

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

fn secret() -> Result<&'static [u8], ApiError> {
    JWT_SECRET
        .as_deref()
        .map(str::as_bytes)
        .ok_or(ApiError::MissingConfig("JWT_SECRET"))
}

pub fn sign_token(user_id: &str, email: &str) -> Result<String, ApiError> {
    sign_with(secret()?, user_id, email)
}

/// `None` for anything that does not verify: bad signature, expired,
/// malformed. Callers treat all of those as "not logged in".
pub fn verify_token(token: &str) -> Option<Claims> {
    verify_with(secret().ok()?, token)
}

fn sign_with(secret: &[u8], user_id: &str, email: &str) -> Result<String, ApiError> {
    let now = time::OffsetDateTime::now_utc().unix_timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        iat: now,
        exp: now + TOKEN_TTL_SECONDS,
    };
    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )?)
}

fn verify_with(secret: &[u8], token: &str) -> Option<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    )
    .ok()
    .map(|data| data.claims)
}
