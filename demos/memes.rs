//! This example shows:
//! - Binding an API key at construction
//! - Fetching a clean meme and an 8-ball answer
//! - Branching on the envelope status

use superchief::Client;

/// Type alias for simplifying error handling
type Result<T> = anyhow::Result<T>;

#[tokio::main]
async fn main() -> Result<()> {
    simple_logger::init_with_level(log::Level::Info)?;

    let key = std::env::args().nth(1).unwrap_or_default();
    let client = Client::new(key);

    let meme = client.meme(true).await;
    match meme.message() {
        Some(why) => println!("no meme today: {why}"),
        None => println!("meme: {}", meme.to_value()),
    }

    let answer = client.eight_ball().await;
    println!("8ball: {}", answer.to_value());
    Ok(())
}
