//! # tenable-rs
//!
//! A lightweight Rust client for three Tenable HTTP APIs:
//!
//! - **Downloads** - `www.tenable.com/downloads/api/v2`, bearer token
//! - **Tenable.io** - `cloud.tenable.com`, API keys or session login
//! - **Tenable.sc** - `<host>/rest`, API keys or session login
//!
//! Each client resolves its credentials once (explicit arguments first, then
//! an optional configuration store), authenticates once, and then exposes a
//! `request` call that returns the raw response for the caller to parse.
//! There is no retry, rate limiting, pagination or caching: every call is a
//! single round trip, and every failure comes back as an [`Error`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tenable_rs::{Method, TenableIo};
//!
//! #[tokio::main]
//! async fn main() -> tenable_rs::Result<()> {
//!     let tio = TenableIo::from_api_keys("access-key", "secret-key").await?;
//!
//!     let response = tio.request(Method::GET, "/scans", None).await?;
//!     let scans: serde_json::Value = response.json().await?;
//!     println!("{}", scans["scans"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration Store
//!
//! ```rust,no_run
//! use tenable_rs::{ClientConfig, ConfigStore, Method, TenableSc};
//!
//! #[tokio::main]
//! async fn main() -> tenable_rs::Result<()> {
//!     // [tenable_sc] host / username / password / proxy / verify
//!     let store = ConfigStore::load("tenable.toml")?;
//!     let tsc = TenableSc::connect(ClientConfig::new().with_config(store)).await?;
//!
//!     let body = serde_json::json!({"name": "weekly", "type": "vuln"});
//!     tsc.request(Method::POST, "/query", Some(&body)).await?;
//!     tsc.logout().await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod store;

// Re-export primary types at crate root for convenience
pub use api::{Downloads, TenableIo, TenableSc};
pub use auth::AuthHeaders;
pub use client::{ClientConfig, ConnectionConfig, Scheme, Transport};
pub use error::{Error, Result};
pub use models::{Credentials, Platform};
pub use store::{ConfigSource, ConfigStore};

pub use reqwest::{Method, Response, StatusCode};

/// Prelude module for convenient imports.
///
/// ```rust
/// use tenable_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{Downloads, TenableIo, TenableSc};
    pub use crate::auth::AuthHeaders;
    pub use crate::client::{ClientConfig, ConnectionConfig, Scheme};
    pub use crate::error::{Error, Result};
    pub use crate::models::{Credentials, Platform};
    pub use crate::store::{ConfigSource, ConfigStore};
    pub use reqwest::Method;
}
