//! Client for the Tenable.sc (SecurityCenter) REST API.

use std::sync::Arc;

use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::AuthHeaders;
use crate::client::{ClientConfig, ConnectionConfig};
use crate::store::ConfigSource;
use crate::{Credentials, Platform, Result};

use super::base::ClientInner;

/// Client for `https://<host>/rest`.
///
/// Authenticates with an API key pair (`x-apikey`) or with a username and
/// password, in which case the `/rest/system` + `/rest/token` handshake runs
/// when the client is built and `X-SecurityCenter` plus `Cookie` are sent
/// afterwards.
///
/// # Example
///
/// ```no_run
/// use tenable_rs::TenableSc;
/// use tenable_rs::Method;
///
/// # async fn example() -> tenable_rs::Result<()> {
/// let tsc = TenableSc::from_credentials("sc.example.com", "admin", "password").await?;
/// let repos: serde_json::Value = tsc.request_json(Method::GET, "/repository", None).await?;
/// tsc.logout().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TenableSc {
    inner: Arc<ClientInner>,
}

impl TenableSc {
    /// Create a client for `host` from an API key pair.
    pub async fn from_api_keys(
        host: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self> {
        Self::connect(
            ClientConfig::new()
                .with_host(host)
                .with_api_keys(access_key, secret_key),
        )
        .await
    }

    /// Create a client for `host` by logging in with a username and password.
    pub async fn from_credentials(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::connect(
            ClientConfig::new()
                .with_host(host)
                .with_login(username, password),
        )
        .await
    }

    /// Create a client from the `[tenable_sc]` section of `source`.
    pub async fn from_config(source: impl ConfigSource + 'static) -> Result<Self> {
        Self::connect(ClientConfig::new().with_config(source)).await
    }

    /// Create a client from explicit arguments with config-source fallback.
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let inner = ClientInner::connect(Platform::TenableSc, &config).await?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Send a request to `/rest{endpoint}` with the stored headers.
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

    /// End the session with `DELETE /rest/token`.
    pub async fn logout(&self) -> Result<()> {
        self.request(Method::DELETE, "/token", None).await?;
        tracing::info!(host = %self.connection().host, "Logged out of Tenable.sc");
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
