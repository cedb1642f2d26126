//! HTTP transport and connection configuration.
//!
//! [`Transport`] performs one JSON round trip against a host described by a
//! [`ConnectionConfig`]. The platform clients in [`crate::api`] are thin
//! wrappers around it.

mod config;
mod http;

pub use config::{ClientConfig, ConnectionConfig, Scheme};
pub use http::Transport;
