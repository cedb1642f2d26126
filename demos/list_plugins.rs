//! Downloads portal example.
//!
//! Lists the products available on the Tenable Downloads portal.
//!
//! Run with: TENABLE_DOWNLOADS_TOKEN=... cargo run --example list_plugins

use tenable_rs::Downloads;

#[tokio::main]
async fn main() -> tenable_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let token = std::env::var("TENABLE_DOWNLOADS_TOKEN")
        .expect("TENABLE_DOWNLOADS_TOKEN environment variable required");

    let downloads = Downloads::new(token)?;
    let pages: serde_json::Value = downloads.request_json("/pages").await?;

    for page in pages.as_array().into_iter().flatten() {
        println!(
            "  - {} ({})",
            page["title"].as_str().unwrap_or("untitled"),
            page["slug"].as_str().unwrap_or("-")
        );
    }

    Ok(())
}
