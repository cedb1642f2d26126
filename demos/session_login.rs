//! Tenable.sc session example.
//!
//! Logs in with a username and password (falling back to `tenable.toml`),
//! lists repositories and logs out again.
//!
//! Run with: cargo run --example session_login

use tenable_rs::{ClientConfig, ConfigStore, Method, TenableSc};

#[tokio::main]
async fn main() -> tenable_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let mut config = ClientConfig::new().with_config(ConfigStore::load_default()?);
    if let (Ok(host), Ok(username), Ok(password)) = (
        std::env::var("TSC_HOST"),
        std::env::var("TSC_USERNAME"),
        std::env::var("TSC_PASSWORD"),
    ) {
        config = config.with_host(host).with_login(username, password);
    }

    let tsc = TenableSc::connect(config).await?;
    println!("Connected to {}", tsc.connection().host);

    let repositories: serde_json::Value = tsc
        .request_json(Method::GET, "/repository?fields=name,type", None)
        .await?;
    for repository in repositories["response"].as_array().into_iter().flatten() {
        println!("  - {} ({})", repository["name"], repository["type"]);
    }

    tsc.logout().await?;
    Ok(())
}
