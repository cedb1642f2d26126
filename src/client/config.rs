//! Client configuration options.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use crate::store::ConfigSource;

/// URL scheme used to reach a host.
///
/// Tenable endpoints are HTTPS-only; [`Scheme::Http`] exists for local
/// mock servers and lab appliances behind a TLS-terminating proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// `https://`
    #[default]
    Https,
    /// `http://`
    Http,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Https => write!(f, "https"),
            Scheme::Http => write!(f, "http"),
        }
    }
}

/// Explicit arguments for building a platform client.
///
/// Anything left unset here may be filled from the config source passed to
/// [`with_config`](Self::with_config), following the resolution order
/// described on [`resolve`](crate::auth::resolve).
///
/// # Example
///
/// ```
/// use tenable_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_api_keys("access", "secret")
///     .with_proxy("http://proxy.internal:3128")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    pub(crate) access_key: Option<String>,
    pub(crate) secret_key: Option<SecretString>,
    pub(crate) username: Option<String>,
    pub(crate) password: Option<SecretString>,
    pub(crate) bearer_token: Option<SecretString>,
    pub(crate) host: Option<String>,
    pub(crate) proxy: Option<String>,
    pub(crate) verify: bool,
    pub(crate) scheme: Scheme,
    pub(crate) timeout: Duration,
    pub(crate) user_agent: String,
    pub(crate) source: Option<Arc<dyn ConfigSource>>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            secret_key: None,
            username: None,
            password: None,
            bearer_token: None,
            host: None,
            proxy: None,
            verify: true,
            scheme: Scheme::default(),
            timeout: Duration::from_secs(30),
            user_agent: format!("tenable-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            source: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticate with a static access/secret key pair.
    pub fn with_api_keys(mut self, access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(SecretString::from(secret_key.into()));
        self
    }

    /// Authenticate with a username/password session login.
    pub fn with_login(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(SecretString::from(password.into()));
        self
    }

    /// Authenticate with a Downloads portal bearer token.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(SecretString::from(token.into()));
        self
    }

    /// Set the host (`sc.example.com`, `fedcloud.tenable.com`, `127.0.0.1:8443`).
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Route HTTPS traffic through a proxy.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Enable or disable TLS certificate validation for this client.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Set the URL scheme.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the default User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Fall back to `source` when explicit credentials are missing.
    pub fn with_config(self, source: impl ConfigSource + 'static) -> Self {
        self.with_config_source(Arc::new(source))
    }

    /// Like [`with_config`](Self::with_config) for an already shared source.
    pub fn with_config_source(mut self, source: Arc<dyn ConfigSource>) -> Self {
        self.source = Some(source);
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |set: bool| if set { "[REDACTED]" } else { "None" };
        f.debug_struct("ClientConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &redact(self.secret_key.is_some()))
            .field("username", &self.username)
            .field("password", &redact(self.password.is_some()))
            .field("bearer_token", &redact(self.bearer_token.is_some()))
            .field("host", &self.host)
            .field("proxy", &self.proxy)
            .field("verify", &self.verify)
            .field("scheme", &self.scheme)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("config_source", &self.source.is_some())
            .finish()
    }
}

/// Resolved connection settings of one client.
///
/// Fixed when the client is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Host name, optionally with a port
    pub host: String,
    /// HTTPS proxy URL
    pub proxy: Option<String>,
    /// Whether TLS certificates are validated
    pub verify: bool,
    /// URL scheme
    pub scheme: Scheme,
    /// Request timeout
    pub timeout: Duration,
    /// Default User-Agent header
    pub user_agent: String,
}

impl ConnectionConfig {
    /// Create settings for `host` with defaults for everything else.
    pub fn new(host: impl Into<String>) -> Self {
        let defaults = ClientConfig::default();
        Self {
            host: host.into(),
            proxy: None,
            verify: defaults.verify,
            scheme: defaults.scheme,
            timeout: defaults.timeout,
            user_agent: defaults.user_agent,
        }
    }

    /// `scheme://host`, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.verify);
        assert_eq!(config.scheme, Scheme::Https);
        assert!(config.user_agent.starts_with("tenable-rs/"));
        assert!(config.source.is_none());
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = ClientConfig::new()
            .with_api_keys("access", "secret")
            .with_host("sc.example.com")
            .with_proxy("http://proxy:3128")
            .with_verify(false)
            .with_scheme(Scheme::Http);

        assert_eq!(config.access_key.as_deref(), Some("access"));
        assert!(config.secret_key.is_some());
        assert_eq!(config.host.as_deref(), Some("sc.example.com"));
        assert_eq!(config.proxy.as_deref(), Some("http://proxy:3128"));
        assert!(!config.verify);
        assert_eq!(config.scheme, Scheme::Http);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ClientConfig::new()
            .with_api_keys("access", "very-secret")
            .with_login("admin", "hunter2")
            .with_bearer_token("bearer-xyz");
        let debug = format!("{:?}", config);

        assert!(debug.contains("access"));
        assert!(!debug.contains("very-secret"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("bearer-xyz"));
    }

    #[test]
    fn test_base_url() {
        let mut connection = ConnectionConfig::new("cloud.tenable.com");
        assert_eq!(connection.base_url(), "https://cloud.tenable.com");
        connection.scheme = Scheme::Http;
        assert_eq!(connection.base_url(), "http://cloud.tenable.com");
    }
}
