//! Authentication headers attached to every request of a client.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::ExposeSecret;

use crate::{Credentials, Error, Platform, Result};

/// Header name/value pairs derived from a client's credentials.
///
/// Computed once when the client is constructed (after the login exchange
/// for session-based auth) and reused for all subsequent requests.
#[derive(Clone, Default)]
pub struct AuthHeaders {
    headers: HeaderMap,
}

impl AuthHeaders {
    /// Create an empty header set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Headers for credentials that need no login round trip.
    ///
    /// Returns `Ok(None)` for [`Credentials::Login`], which must go through
    /// the platform's session handshake instead.
    pub fn from_static(platform: Platform, credentials: &Credentials) -> Result<Option<Self>> {
        let mut headers = Self::new();

        match (platform, credentials) {
            (_, Credentials::Login { .. }) => return Ok(None),
            (Platform::Downloads, Credentials::BearerToken(token)) => {
                headers.insert("authorization", &format!("Bearer {}", token.expose_secret()))?;
                headers.insert("user-agent", "Mozilla/5.0")?;
            }
            (Platform::TenableIo, Credentials::ApiKeys { access_key, secret_key }) => {
                headers.insert(
                    "x-apikeys",
                    &format!("accessKey={};secretKey={}", access_key, secret_key.expose_secret()),
                )?;
            }
            (Platform::TenableSc, Credentials::ApiKeys { access_key, secret_key }) => {
                headers.insert(
                    "x-apikey",
                    &format!("accesskey={}; secretkey={}", access_key, secret_key.expose_secret()),
                )?;
            }
            (platform, credentials) => {
                return Err(Error::Config(format!(
                    "{} does not accept {:?}",
                    platform, credentials
                )))
            }
        }

        Ok(Some(headers))
    }

    /// Add a header. The name is stored lowercased.
    pub(crate) fn insert(&mut self, name: &str, value: &str) -> Result<()> {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| Error::InvalidInput(format!("invalid header name {}", name)))?;
        let mut value = HeaderValue::from_str(value)
            .map_err(|_| Error::InvalidInput(format!("invalid value for header {}", name)))?;
        value.set_sensitive(true);
        self.headers.insert(header_name, value);
        Ok(())
    }

    /// Value of a header, looked up case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Names of all headers in the set.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.headers.keys().map(|k| k.as_str())
    }

    /// Number of headers.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// The underlying header map.
    pub fn as_header_map(&self) -> &HeaderMap {
        &self.headers
    }
}

impl fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.names().map(|name| (name, "[REDACTED]")))
            .finish()
    }
}

/// Cookie `name=value` pair from a `Set-Cookie` header value.
pub(crate) fn cookie_pair(set_cookie: &str) -> &str {
    set_cookie.split(';').next().unwrap_or_default().trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downloads_bearer_headers() {
        let headers = AuthHeaders::from_static(Platform::Downloads, &Credentials::bearer_token("abc"))
            .unwrap()
            .unwrap();
        assert_eq!(headers.get("Authorization"), Some("Bearer abc"));
        assert_eq!(headers.get("user-agent"), Some("Mozilla/5.0"));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_tenable_io_key_pair_header() {
        let headers = AuthHeaders::from_static(Platform::TenableIo, &Credentials::api_keys("k", "s"))
            .unwrap()
            .unwrap();
        assert_eq!(headers.get("x-apikeys"), Some("accessKey=k;secretKey=s"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_tenable_sc_key_pair_header() {
        let headers = AuthHeaders::from_static(Platform::TenableSc, &Credentials::api_keys("k", "s"))
            .unwrap()
            .unwrap();
        assert_eq!(headers.get("x-apikey"), Some("accesskey=k; secretkey=s"));
    }

    #[test]
    fn test_login_needs_session() {
        let login = Credentials::login("admin", "pw");
        assert!(AuthHeaders::from_static(Platform::TenableIo, &login).unwrap().is_none());
        assert!(AuthHeaders::from_static(Platform::TenableSc, &login).unwrap().is_none());
    }

    #[test]
    fn test_mismatched_credentials_rejected() {
        let err = AuthHeaders::from_static(Platform::TenableIo, &Credentials::bearer_token("t"))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(!err.to_string().contains("\"t\""));

        let err = AuthHeaders::from_static(Platform::Downloads, &Credentials::api_keys("k", "s"))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_header_value() {
        let err = AuthHeaders::from_static(Platform::TenableIo, &Credentials::api_keys("k\n", "s"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_insert_normalizes_name_case() {
        let mut headers = AuthHeaders::new();
        headers.insert("X-SecurityCenter", "tok").unwrap();
        assert_eq!(headers.get("x-securitycenter"), Some("tok"));
        assert_eq!(headers.names().collect::<Vec<_>>(), vec!["x-securitycenter"]);

        let err = headers.insert("bad header", "v").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_debug_redacts_values() {
        let headers = AuthHeaders::from_static(Platform::TenableIo, &Credentials::api_keys("k", "top-secret"))
            .unwrap()
            .unwrap();
        let debug = format!("{:?}", headers);
        assert!(debug.contains("x-apikeys"));
        assert!(!debug.contains("top-secret"));
    }

    #[test]
    fn test_cookie_pair() {
        assert_eq!(cookie_pair("TNS_SESSIONID=abc; Path=/; HttpOnly"), "TNS_SESSIONID=abc");
        assert_eq!(cookie_pair("JSESSIONID=111"), "JSESSIONID=111");
        assert_eq!(cookie_pair(""), "");
    }
}
