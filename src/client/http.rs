//! Single-round-trip HTTP transport shared by all platform clients.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Response};
use serde_json::Value;

use crate::{Error, Result};

use super::config::ConnectionConfig;

/// Issues JSON requests against one host.
///
/// Proxy, certificate validation and timeout are fixed per transport, so
/// turning verification off for one client never affects another.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    connection: ConnectionConfig,
}

impl Transport {
    /// Build a transport for the given connection settings.
    pub fn new(connection: ConnectionConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(connection.timeout)
            .user_agent(&connection.user_agent);

        if let Some(ref proxy) = connection.proxy {
            let target = proxy_url(proxy)?;
            builder = builder.proxy(reqwest::Proxy::https(target.as_str())?);
        }

        if !connection.verify {
            tracing::warn!(host = %connection.host, "TLS certificate verification disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            http: builder.build()?,
            connection,
        })
    }

    /// The settings this transport was built with.
    pub fn connection(&self) -> &ConnectionConfig {
        &self.connection
    }

    /// Send one request and return the response if its status is 2xx.
    ///
    /// `path` is appended verbatim to `scheme://host`. Caller headers are
    /// applied after the JSON `accept`/`content-type` defaults and win on
    /// collision. A non-2xx status becomes [`Error::Api`].
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        headers: Option<&HeaderMap>,
        body: Option<&Value>,
    ) -> Result<Response> {
        let request = self.build_request(method, path, headers, body)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "Sending request");

        let response = self.http.execute(request).await?;
        Self::handle_response(response).await
    }

    pub(crate) fn build_request(
        &self,
        method: Method,
        path: &str,
        headers: Option<&HeaderMap>,
        body: Option<&Value>,
    ) -> Result<reqwest::Request> {
        let url = format!("{}{}", self.connection.base_url(), path);

        let mut request_headers = HeaderMap::new();
        request_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        request_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(extra) = headers {
            for (name, value) in extra {
                request_headers.insert(name.clone(), value.clone());
            }
        }

        let mut builder = self.http.request(method, &url).headers(request_headers);
        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        Ok(builder.build()?)
    }

    async fn handle_response(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().clone();
        let reason = status.canonical_reason().unwrap_or("Unknown Status");
        let text = response.text().await.unwrap_or_default();
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        tracing::error!(status = status.as_u16(), %url, reason, "Request failed");
        Err(Error::from_api_response(status.as_u16(), reason, body))
    }
}

/// Parse a proxy setting. A bare `host:port` is taken as an HTTP proxy.
fn proxy_url(proxy: &str) -> Result<url::Url> {
    if proxy.contains("://") {
        Ok(url::Url::parse(proxy)?)
    } else {
        Ok(url::Url::parse(&format!("http://{}", proxy))?)
    }
}
