//! Looks up companies, their email addresses and one named person.
//!
//! Run with `HUNTER_API_KEY=... cargo run --example discover`.
//! Set `RUST_LOG=hunter_client=debug` to see each request.

use std::env;
use std::error::Error;

use hunter_client::Client;
use serde_json::Value as JsonValue;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = env::var("HUNTER_API_KEY").map_err(|_| "HUNTER_API_KEY is not set")?;
    let client = Client::builder().api_key(&api_key).build()?;

    let companies = client.discover("fintech in Germany", Some(2))?;
    println!("{:#}", JsonValue::Object(companies));

    let emails = client.domain_search("example.com", Some(2))?;
    println!("{:#}", JsonValue::Object(emails));

    let person = client.email_finder("example.com", "Jane", "Doe")?;
    println!("{:#}", JsonValue::Object(person));

    Ok(())
}
