//! Seeds the document store from a JSON array file.
//!
//! Usage: `cargo run -p pulseboard-api --features server --bin seed [path]`
//! (defaults to `data/records.json`). Requires `MONGODB_URI`.

use api::Record;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/records.json".to_string());

    let text = std::fs::read_to_string(&path)?;
    let records: Vec<Record> = serde_json::from_str(&text)?;

    let inserted = api::store::replace_records(&records).await?;
    println!("seeded {inserted} records from {path}");
    Ok(())
}
