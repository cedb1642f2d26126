//! Session login handshakes for username/password credentials.

use reqwest::header::{HeaderMap, HeaderValue, COOKIE, SET_COOKIE};
use reqwest::{Method, Response};
use serde_json::Value;

use crate::client::Transport;
use crate::{Credentials, Error, Platform, Result};

use super::headers::{cookie_pair, AuthHeaders};

/// Produce the headers a client will send with every request.
///
/// Key pairs and bearer tokens are encoded directly without any network
/// traffic. Username/password credentials perform exactly one login
/// handshake against the platform.
pub async fn authenticate(
    platform: Platform,
    transport: &Transport,
    credentials: &Credentials,
) -> Result<AuthHeaders> {
    if let Some(headers) = AuthHeaders::from_static(platform, credentials)? {
        return Ok(headers);
    }

    let body = credentials
        .login_body()
        .ok_or_else(|| Error::Config(format!("{} cannot log in with {:?}", platform, credentials)))?;

    match platform {
        Platform::TenableIo => tenable_io_login(transport, &body).await,
        Platform::TenableSc => tenable_sc_login(transport, &body).await,
        Platform::Downloads => Err(Error::Config(
            "the Downloads portal only accepts bearer tokens".to_string(),
        )),
    }
}

/// `POST /session`, then `x-cookie: token=<token>`.
async fn tenable_io_login(transport: &Transport, body: &Value) -> Result<AuthHeaders> {
    let response = transport.send(Method::POST, "/session", None, Some(body)).await?;
    let payload = json_body(response, "/session").await?;
    let token = token_text(payload.get("token"))
        .ok_or_else(|| Error::Protocol("/session response has no token".to_string()))?;

    let mut headers = AuthHeaders::new();
    headers.insert("x-cookie", &format!("token={}", token))?;
    tracing::info!(host = %transport.connection().host, "Logged in to Tenable.io");
    Ok(headers)
}

/// Bootstrap with `GET /rest/system`, then `POST /rest/token`.
///
/// The bootstrap cookie is only sent with the token request. The session
/// cookie kept afterwards is the one set by the token response.
async fn tenable_sc_login(transport: &Transport, body: &Value) -> Result<AuthHeaders> {
    let system = transport.send(Method::GET, "/rest/system", None, None).await?;
    let bootstrap_cookie = set_cookie(&system, "/rest/system")?;
    drop(system);

    let mut login_headers = HeaderMap::new();
    login_headers.insert(
        COOKIE,
        HeaderValue::from_str(&bootstrap_cookie)
            .map_err(|_| Error::Protocol("/rest/system set an unusable cookie".to_string()))?,
    );

    let response = transport
        .send(Method::POST, "/rest/token", Some(&login_headers), Some(body))
        .await?;
    let session_cookie = set_cookie(&response, "/rest/token")?;
    let payload = json_body(response, "/rest/token").await?;
    let token = token_text(payload.pointer("/response/token"))
        .ok_or_else(|| Error::Protocol("/rest/token response has no response.token".to_string()))?;

    let mut headers = AuthHeaders::new();
    headers.insert("x-securitycenter", &token)?;
    headers.insert("cookie", &session_cookie)?;
    tracing::info!(host = %transport.connection().host, "Logged in to Tenable.sc");
    Ok(headers)
}

fn set_cookie(response: &Response, endpoint: &str) -> Result<String> {
    let raw = response
        .headers()
        .get(SET_COOKIE)
        .ok_or_else(|| Error::Protocol(format!("{} response has no Set-Cookie header", endpoint)))?
        .to_str()
        .map_err(|_| Error::Protocol(format!("{} set a non-ASCII cookie", endpoint)))?;

    let pair = cookie_pair(raw);
    if pair.is_empty() {
        return Err(Error::Protocol(format!("{} set an empty cookie", endpoint)));
    }
    Ok(pair.to_string())
}

async fn json_body(response: Response, endpoint: &str) -> Result<Value> {
    let text = response.text().await?;
    serde_json::from_str(&text)
        .map_err(|e| Error::Protocol(format!("{} response is not valid JSON: {}", endpoint, e)))
}

/// Tokens arrive as strings from Tenable.io and as numbers from some
/// Tenable.sc releases.
fn token_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
