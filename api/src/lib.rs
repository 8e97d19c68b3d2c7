//! Shared wire types and the server boundary for Pulseboard.
//!
//! The dashboard views only ever talk to the outside world through the
//! server functions defined here: a full-collection fetch from the document
//! store, a wipe-and-seed write, and the signup/login/session trio.

use dioxus::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "server")]
pub mod auth;
#[cfg(feature = "server")]
mod error;
#[cfg(feature = "server")]
pub mod store;

#[cfg(feature = "server")]
pub use error::ApiError;

/// One flat item of the seeded dataset. Documents in the store may carry
/// extra fields (`_id` among them); they are ignored on deserialize, and
/// absent fields fall back to their defaults so partial documents load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub pestle: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub end_year: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub swot: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "de_loose_number")]
    pub intensity: Option<f64>,
    #[serde(default, deserialize_with = "de_loose_number")]
    pub likelihood: Option<f64>,
    #[serde(default, deserialize_with = "de_loose_number")]
    pub impact: Option<f64>,
    #[serde(default, deserialize_with = "de_loose_number")]
    pub relevance: Option<f64>,
}

/// The authenticated identity attached to a session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
}

/// Numeric dataset fields arrive as numbers, numeric strings, empty strings
/// or nulls depending on how a document was seeded. Everything that does not
/// parse to a number becomes `None`.
fn de_loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Number(value)) => Some(value),
        Some(Loose::Text(raw)) => raw.trim().parse::<f64>().ok(),
        None => None,
    })
}

/// Fetches the full, unfiltered record collection. No pagination, filtering
/// or sorting happens on the server; the report pages derive everything
/// client-side from this one response.
#[server]
pub async fn list_records() -> Result<Vec<Record>, ServerFnError> {
    let records = store::all_records().await.map_err(log_api_error)?;
    Ok(records)
}

/// Replaces the dataset with the given records and returns how many were
/// inserted. Used by the seeding flow only.
#[server]
pub async fn seed_records(records: Vec<Record>) -> Result<u64, ServerFnError> {
    let inserted = store::replace_records(&records)
        .await
        .map_err(log_api_error)?;
    dioxus::logger::tracing::info!("seeded {inserted} records");
    Ok(inserted)
}

/// Creates an account. Duplicate emails are rejected with the same message
/// the login flow produces for an unknown account.
#[server]
pub async fn signup(email: String, password: String) -> Result<(), ServerFnError> {
    if store::user_by_email(&email)
        .await
        .map_err(log_api_error)?
        .is_some()
    {
        return Err(ServerFnError::new("User already exists"));
    }

    let hashed =
        bcrypt::hash(&password, 10).map_err(|err| ServerFnError::new(err.to_string()))?;
    let user = store::UserDoc {
        id: uuid::Uuid::new_v4().to_string(),
        email,
        password: hashed,
    };
    store::insert_user(&user).await.map_err(log_api_error)?;
    Ok(())
}

/// Verifies credentials, signs a one-hour token, and attaches it to the
/// response as an http-only cookie.
#[server]
pub async fn login(email: String, password: String) -> Result<SessionUser, ServerFnError> {
    const BAD_CREDENTIALS: &str = "Invalid email or password";

    let user = store::user_by_email(&email)
        .await
        .map_err(log_api_error)?
        .ok_or_else(|| ServerFnError::new(BAD_CREDENTIALS))?;

    let valid = bcrypt::verify(&password, &user.password)
        .map_err(|err| ServerFnError::new(err.to_string()))?;
    if !valid {
        return Err(ServerFnError::new(BAD_CREDENTIALS));
    }

    let token = auth::sign_token(&user.id, &user.email).map_err(log_api_error)?;
    set_cookie(&format!(
        "token={token}; HttpOnly; Path=/; SameSite=Lax; Max-Age=3600"
    ))?;

    Ok(SessionUser {
        id: user.id,
        email: user.email,
    })
}

/// Resolves the current session from the request cookie. Absent or invalid
/// tokens yield `None`, never an error.
#[server]
pub async fn current_user() -> Result<Option<SessionUser>, ServerFnError> {
    let headers: axum::http::HeaderMap = extract().await?;
    let Some(token) = cookie_value(&headers, "token") else {
        return Ok(None);
    };
    Ok(auth::verify_token(&token).map(|claims| SessionUser {
        id: claims.sub,
        email: claims.email,
    }))
}

/// Drops the session cookie.
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    set_cookie("token=; HttpOnly; Path=/; SameSite=Lax; Max-Age=0")?;
    Ok(())
}

#[cfg(feature = "server")]
fn log_api_error(err: ApiError) -> ServerFnError {
    dioxus::logger::tracing::error!("api error: {err}");
    ServerFnError::new(err.to_string())
}

#[cfg(feature = "server")]
fn set_cookie(cookie: &str) -> Result<(), ServerFnError> {
    let value = axum::http::HeaderValue::from_str(cookie)
        .map_err(|err| ServerFnError::new(err.to_string()))?;
    server_context()
        .response_parts_mut()
        .headers
        .append(axum::http::header::SET_COOKIE, value);
    Ok(())
}

#[cfg(feature = "server")]
fn cookie_value(headers: &axum::http::HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::Record;

    #[test]
    fn record_accepts_messy_numeric_fields() {
        let raw = r#"{
            "country": "India",
            "sector": "Energy",
            "intensity": 6,
            "likelihood": "3",
            "impact": "",
            "relevance": null,
            "date": "2020-06-01"
        }"#;

        let record: Record = serde_json::from_str(raw).expect("record should deserialize");
        assert_eq!(record.country, "India");
        assert_eq!(record.intensity, Some(6.0));
        assert_eq!(record.likelihood, Some(3.0));
        assert_eq!(record.impact, None);
        assert_eq!(record.relevance, None);
    }

    #[test]
    fn record_ignores_unknown_fields_and_defaults_missing_ones() {
        let raw = r#"{"_id": {"$oid": "64ae"}, "topic": "oil", "added": "whenever"}"#;

        let record: Record = serde_json::from_str(raw).expect("record should deserialize");
        assert_eq!(record.topic, "oil");
        assert_eq!(record.country, "");
        assert_eq!(record.intensity, None);
    }

    #[test]
    fn record_treats_non_numeric_text_as_missing() {
        let raw = r#"{"intensity": "high"}"#;
        let record: Record = serde_json::from_str(raw).expect("record should deserialize");
        assert_eq!(record.intensity, None);
    }
}
