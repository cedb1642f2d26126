//! State shared by the three platform clients.

use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::{authenticate, resolve, AuthHeaders, Resolved};
use crate::client::{ClientConfig, ConnectionConfig, Transport};
use crate::{Credentials, Error, Platform, Result};

/// Everything a client fixes at construction.
pub(crate) struct ClientInner {
    pub(crate) platform: Platform,
    pub(crate) transport: Transport,
    pub(crate) credentials: Credentials,
    pub(crate) headers: AuthHeaders,
}

impl ClientInner {
    /// Resolve credentials and authenticate, logging in if required.
    pub(crate) async fn connect(platform: Platform, config: &ClientConfig) -> Result<Self> {
        let Resolved {
            credentials,
            connection,
        } = resolve(platform, config)?;
        let transport = Transport::new(connection)?;
        let headers = authenticate(platform, &transport, &credentials).await?;

        Ok(Self {
            platform,
            transport,
            credentials,
            headers,
        })
    }

    /// Like [`connect`](Self::connect) for credentials that never need a
    /// login round trip.
    pub(crate) fn connect_static(platform: Platform, config: &ClientConfig) -> Result<Self> {
        let Resolved {
            credentials,
            connection,
        } = resolve(platform, config)?;
        let headers = AuthHeaders::from_static(platform, &credentials)?.ok_or_else(|| {
            Error::Config(format!("{} cannot use {:?} without logging in", platform, credentials))
        })?;

        Ok(Self {
            platform,
            transport: Transport::new(connection)?,
            credentials,
            headers,
        })
    }

    pub(crate) fn connection(&self) -> &ConnectionConfig {
        self.transport.connection()
    }

    /// Send `endpoint` under the platform's base path with the stored headers.
    pub(crate) async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Response> {
        let path = format!("{}{}", self.platform.base_path(), endpoint);
        self.transport
            .send(method, &path, Some(self.headers.as_header_map()), body)
            .await
    }

    /// [`request`](Self::request) and deserialize the JSON response body.
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<T> {
        let response = self.request(method, endpoint, body).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl std::fmt::Debug for ClientInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("platform", &self.platform)
            .field("connection", self.connection())
            .field("credentials", &self.credentials)
            .field("headers", &self.headers)
            .finish()
    }
}
