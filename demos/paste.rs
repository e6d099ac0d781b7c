//! This example shows:
//! - Creating a superchief client from `SUPERCHIEF_API_KEY`
//! - Uploading a document to hastebin
//! - Creating a private paste and reading it back

use superchief::{Client, HasteOptions};

/// Type alias for simplifying error handling
type Result<T> = anyhow::Result<T>;

#[tokio::main]
async fn main() -> Result<()> {
    simple_logger::init_with_level(log::Level::Info)?;

    let client = Client::from_env();

    // hastebin needs no key
    let upload = client
        .upload("fn main() { println!(\"hi\"); }", HasteOptions::extension("rs"))
        .await;
    println!("haste: {}", upload.to_value());

    let created = client.create_paste(Some("demo"), "hello from superchief", true).await;
    let id = match created.body().and_then(|b| b.get("id")).and_then(|id| id.as_str()) {
        Some(id) => id.to_string(),
        None => anyhow::bail!("paste was not created: {}", created.to_value()),
    };

    let paste = client.paste(&id).await;
    println!("paste {id}: {}", paste.to_value());
    Ok(())
}
