//! Credential variants accepted by the Tenable APIs.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// The authentication material a client was constructed with.
///
/// Exactly one variant is active per client. It is resolved once when the
/// client is built and never changes afterwards.
#[derive(Clone)]
pub enum Credentials {
    /// Static access/secret key pair, sent on every request. No login.
    ApiKeys {
        /// Access key
        access_key: String,
        /// Secret key
        secret_key: SecretString,
    },
    /// Username and password, exchanged for a session token at construction.
    Login {
        /// Username
        username: String,
        /// Password
        password: SecretString,
    },
    /// Bearer token for the Downloads portal.
    BearerToken(SecretString),
}

impl Credentials {
    /// Create a key-pair credential.
    pub fn api_keys(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Credentials::ApiKeys {
            access_key: access_key.into(),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// Create a username/password credential.
    pub fn login(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials::Login {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Create a bearer-token credential.
    pub fn bearer_token(token: impl Into<String>) -> Self {
        Credentials::BearerToken(SecretString::from(token.into()))
    }

    /// Returns `true` if these credentials require a login round trip.
    pub fn requires_login(&self) -> bool {
        matches!(self, Credentials::Login { .. })
    }

    /// JSON body for a login request, if these are login credentials.
    pub(crate) fn login_body(&self) -> Option<serde_json::Value> {
        match self {
            Credentials::Login { username, password } => Some(serde_json::json!({
                "username": username,
                "password": password.expose_secret(),
            })),
            _ => None,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::ApiKeys { access_key, .. } => f
                .debug_struct("ApiKeys")
                .field("access_key", access_key)
                .field("secret_key", &"[REDACTED]")
                .finish(),
            Credentials::Login { username, .. } => f
                .debug_struct("Login")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Credentials::BearerToken(_) => f.debug_tuple("BearerToken").field(&"[REDACTED]").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_secrets() {
        let keys = format!("{:?}", Credentials::api_keys("access", "super-secret-key"));
        assert!(keys.contains("access"));
        assert!(!keys.contains("super-secret-key"));

        let login = format!("{:?}", Credentials::login("admin", "hunter2"));
        assert!(login.contains("admin"));
        assert!(!login.contains("hunter2"));

        let bearer = format!("{:?}", Credentials::bearer_token("abc123"));
        assert!(!bearer.contains("abc123"));
        assert!(bearer.contains("REDACTED"));
    }

    #[test]
    fn test_login_body() {
        let body = Credentials::login("admin", "hunter2").login_body().unwrap();
        assert_eq!(body["username"], "admin");
        assert_eq!(body["password"], "hunter2");
        assert!(Credentials::api_keys("a", "s").login_body().is_none());
    }

    #[test]
    fn test_requires_login() {
        assert!(Credentials::login("u", "p").requires_login());
        assert!(!Credentials::api_keys("a", "s").requires_login());
        assert!(!Credentials::bearer_token("t").requires_login());
    }
}
