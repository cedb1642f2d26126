//! Client for the Tenable.io (Vulnerability Management) API.

use std::sync::Arc;

use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::AuthHeaders;
use crate::client::{ClientConfig, ConnectionConfig};
use crate::store::ConfigSource;
use crate::{Credentials, Platform, Result};

use super::base::ClientInner;

/// Client for `https://cloud.tenable.com`.
///
/// Authenticates with an API key pair (`x-apikeys`) or, for username and
/// password, with a session token obtained from `POST /session` when the
/// client is built (`x-cookie`).
///
/// # Example
///
/// ```no_run
/// use tenable_rs::TenableIo;
/// use tenable_rs::Method;
///
/// # async fn example() -> tenable_rs::Result<()> {
/// let tio = TenableIo::from_api_keys("access-key", "secret-key").await?;
/// let scans: serde_json::Value = tio.request_json(Method::GET, "/scans", None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TenableIo {
    inner: Arc<ClientInner>,
}

impl TenableIo {
    /// Create a client from an API key pair.
    pub async fn from_api_keys(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self> {
        Self::connect(ClientConfig::new().with_api_keys(access_key, secret_key)).await
    }

    /// Create a client by logging in with a username and password.
    pub async fn from_credentials(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::connect(ClientConfig::new().with_login(username, password)).await
    }

    /// Create a client from the `[tenable_io]` section of `source`.
    pub async fn from_config(source: impl ConfigSource + 'static) -> Result<Self> {
        Self::connect(ClientConfig::new().with_config(source)).await
    }

    /// Create a client from explicit arguments with config-source fallback.
    ///
    /// Logs in first if the resolved credentials are a username/password.
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let inner = ClientInner::connect(Platform::TenableIo, &config).await?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Send a request to `endpoint` with the stored authentication headers.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `endpoint` - Path such as `/scans` or `/workbenches/assets`
    /// * `body` - Optional JSON payload
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Response> {
        self.inner.request(method, endpoint, body).await
    }

    /// [`request`](Self::request) and deserialize the JSON body.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<T> {
        self.inner.request_json(method, endpoint, body).await
    }

    /// End the session with `DELETE /session`.
    ///
    /// The client keeps its headers; calling this for a key-pair client is
    /// harmless but pointless.
    pub async fn logout(&self) -> Result<()> {
        self.inner.request(Method::DELETE, "/session", None).await?;
        tracing::info!(host = %self.connection().host, "Logged out of Tenable.io");
        Ok(())
    }

    /// Headers sent with every request.
    pub fn headers(&self) -> &AuthHeaders {
        &self.inner.headers
    }

    /// Credentials this client was built with.
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Connection settings of this client.
    pub fn connection(&self) -> &ConnectionConfig {
        self.inner.connection()
    }

    /// Platform this client talks to.
    pub fn platform(&self) -> Platform {
        self.inner.platform
    }
}
