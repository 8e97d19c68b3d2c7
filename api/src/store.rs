//! Document-store glue. One lazily connected client per process; the
//! dataset lives in a single `dashboard` collection, accounts in `users`.

use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::{ApiError, Record};

const RECORDS_COLLECTION: &str = "dashboard";
const USERS_COLLECTION: &str = "users";

static CLIENT: OnceCell<Client> = OnceCell::const_new();

/// A stored account. `password` holds the bcrypt hash, never the plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDoc {
    pub id: String,
    pub email: String,
    pub password: String,
}

async fn client() -> Result<&'static Client, ApiError> {
    CLIENT
        .get_or_try_init(|| async {
            let uri = std::env::var("MONGODB_URI")
                .map_err(|_| ApiError::MissingConfig("MONGODB_URI"))?;
            Ok(Client::with_uri_str(&uri).await?)
        })
        .await
}

fn database_name() -> String {
    std::env::var("PULSEBOARD_DB").unwrap_or_else(|_| "pulseboard".to_string())
}

async fn records() -> Result<Collection<Record>, ApiError> {
    Ok(client()
        .await?
        .database(&database_name())
        .collection(RECORDS_COLLECTION))
}

async fn users() -> Result<Collection<UserDoc>, ApiError> {
    Ok(client()
        .await?
        .database(&database_name())
        .collection(USERS_COLLECTION))
}

/// Fetches every record in insertion order.
pub async fn all_records() -> Result<Vec<Record>, ApiError> {
    let cursor = records().await?.find(doc! {}).await?;
    Ok(cursor.try_collect().await?)
}

/// Wipes the dataset and inserts the given records.
pub async fn replace_records(batch: &[Record]) -> Result<u64, ApiError> {
    let collection = records().await?;
    collection.delete_many(doc! {}).await?;
    if batch.is_empty() {
        return Ok(0);
    }
    let outcome = collection.insert_many(batch).await?;
    Ok(outcome.inserted_ids.len() as u64)
}

pub async fn user_by_email(email: &str) -> Result<Option<UserDoc>, ApiError> {
    Ok(users().await?.find_one(doc! { "email": email }).await?)
}

pub async fn insert_user(user: &UserDoc) -> Result<(), ApiError> {
    users().await?.insert_one(user).await?;
    Ok(())
}
