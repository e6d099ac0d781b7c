//! This example shows:
//! - Configuring a client with the builder
//! - Adding a user to the developer blacklist
//! - Checking and listing the blacklist

use std::time::Duration;

use superchief::{Blacklist, Client};

/// Type alias for simplifying error handling
type Result<T> = anyhow::Result<T>;

#[tokio::main]
async fn main() -> Result<()> {
    simple_logger::init_with_level(log::Level::Debug)?;

    let client = Client::builder()
        .api_key(std::env::var("SUPERCHIEF_API_KEY")?)
        .timeout(Duration::from_secs(10))
        .build()?;

    let user = "264811613708746752";
    let added = client.blacklist(Blacklist::Users, user, Some("spam")).await;
    println!("add: {}", added.to_value());

    let check = client.is_blacklisted(Blacklist::Users, user).await;
    println!("check: {}", check.to_value());

    let all = client.blacklisted(Blacklist::Users).await;
    println!("list: {}", all.to_value());
    Ok(())
}
