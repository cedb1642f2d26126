//! Client for the Tenable Downloads portal API.

use std::sync::Arc;

use reqwest::{Method, Response};
use serde::de::DeserializeOwned;

use crate::auth::AuthHeaders;
use crate::client::{ClientConfig, ConnectionConfig};
use crate::store::ConfigSource;
use crate::{Platform, Result};

use super::base::ClientInner;

/// Client for `https://www.tenable.com/downloads/api/v2`.
///
/// Authenticates with a bearer token generated on the Downloads portal.
/// The API is read-only, so every request is a `GET`.
///
/// # Example
///
/// ```no_run
/// use tenable_rs::Downloads;
///
/// # async fn example() -> tenable_rs::Result<()> {
/// let downloads = Downloads::new("my-bearer-token")?;
/// let pages: serde_json::Value = downloads.request_json("/pages").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Downloads {
    inner: Arc<ClientInner>,
}

impl Downloads {
    /// Create a client from a bearer token.
    pub fn new(bearer_token: impl Into<String>) -> Result<Self> {
        Self::connect(ClientConfig::new().with_bearer_token(bearer_token))
    }

    /// Create a client from the `[downloads]` section of `source`.
    pub fn from_config(source: impl ConfigSource + 'static) -> Result<Self> {
        Self::connect(ClientConfig::new().with_config(source))
    }

    /// Create a client from explicit arguments, falling back to the config
    /// source in `config` if no bearer token was given.
    pub fn connect(config: ClientConfig) -> Result<Self> {
        let inner = ClientInner::connect_static(Platform::Downloads, &config)?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// `GET /downloads/api/v2{endpoint}`.
    pub async fn request(&self, endpoint: &str) -> Result<Response> {
        self.inner.request(Method::GET, endpoint, None).await
    }

    /// [`request`](Self::request) and deserialize the JSON body.
    pub async fn request_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.inner.request_json(Method::GET, endpoint, None).await
    }

    /// Headers sent with every request.
    pub fn headers(&self) -> &AuthHeaders {
        &self.inner.headers
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ConfigStore;
    use crate::Error;

    #[test]
    fn test_new_builds_bearer_headers() {
        let downloads = Downloads::new("abc").unwrap();
        assert_eq!(downloads.headers().get("authorization"), Some("Bearer abc"));
        assert_eq!(downloads.connection().host, "www.tenable.com");
        assert!(downloads.connection().verify);
        assert_eq!(downloads.platform(), Platform::Downloads);
    }

    #[test]
    fn test_from_config() {
        let store = ConfigStore::new()
            .with_value("downloads", "bearer_token", "stored")
            .with_value("downloads", "verify", "false");
        let downloads = Downloads::from_config(store).unwrap();
        assert_eq!(downloads.headers().get("authorization"), Some("Bearer stored"));
        assert!(!downloads.connection().verify);
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let err = Downloads::from_config(ConfigStore::new()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_debug_hides_token() {
        let downloads = Downloads::new("secret-bearer").unwrap();
        let debug = format!("{:?}", downloads);
        assert!(!debug.contains("secret-bearer"));
        assert!(debug.contains("www.tenable.com"));
    }
}
