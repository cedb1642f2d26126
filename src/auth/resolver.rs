//! Credential resolution shared by all platform clients.

use secrecy::{ExposeSecret, SecretString};

use crate::client::{ClientConfig, ConnectionConfig};
use crate::store::ConfigSource;
use crate::{Credentials, Error, Platform, Result};

/// Outcome of [`resolve`]: what to authenticate with and where to connect.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// Credentials chosen for the client
    pub credentials: Credentials,
    /// Connection settings chosen for the client
    pub connection: ConnectionConfig,
}

/// Pick the credentials and connection settings for `platform`.
///
/// Resolution stops at the first branch that is satisfied:
///
/// 1. Explicit credentials in `config`. The Downloads portal takes a bearer
///    token; Tenable.io and Tenable.sc take a key pair or a
///    username/password (both halves of a pair are required, and the key
///    pair wins if both pairs are given). Proxy and verify come from
///    `config`; the config source is not consulted, except for a Tenable.sc
///    host that was not given explicitly.
/// 2. The equivalent fields in the platform's section of the config source,
///    together with that section's `proxy` and `verify` values.
/// 3. Otherwise [`Error::Config`].
///
/// Tenable.sc has no default host, so a host must come from `config` or the
/// config source.
pub fn resolve(platform: Platform, config: &ClientConfig) -> Result<Resolved> {
    let section = platform.section();
    let source = config.source.as_deref();

    if let Some(credentials) = explicit_credentials(platform, config) {
        let host = match non_empty_ref(&config.host).or_else(|| default_host(platform)) {
            Some(host) => host,
            None => source
                .and_then(|s| non_empty(s.get(section, "host")))
                .ok_or_else(|| missing_host(platform))?,
        };
        tracing::debug!(%platform, %host, "Using explicitly supplied credentials");

        return Ok(Resolved {
            credentials,
            connection: connection(config, host, config.proxy.clone(), config.verify),
        });
    }

    if let Some(source) = source {
        if let Some(credentials) = stored_credentials(platform, source) {
            let host = non_empty_ref(&config.host)
                .or_else(|| non_empty(source.get(section, "host")))
                .or_else(|| default_host(platform))
                .ok_or_else(|| missing_host(platform))?;
            let proxy = non_empty(source.get(section, "proxy"));
            let verify = source.get_bool(section, "verify")?.unwrap_or(true);
            tracing::debug!(%platform, %host, section, "Using credentials from configuration");

            return Ok(Resolved {
                credentials,
                connection: connection(config, host, proxy, verify),
            });
        }
    }

    let wanted = if platform.uses_bearer_token() {
        "a bearer token"
    } else {
        "an API key pair or a username and password"
    };
    Err(Error::Config(format!(
        "invalid authentication data: {} requires {}, either explicitly or in the [{}] section",
        platform, wanted, section
    )))
}

fn explicit_credentials(platform: Platform, config: &ClientConfig) -> Option<Credentials> {
    if platform.uses_bearer_token() {
        return non_empty_secret(&config.bearer_token).map(Credentials::BearerToken);
    }

    if let (Some(access_key), Some(secret_key)) = (
        non_empty_ref(&config.access_key),
        non_empty_secret(&config.secret_key),
    ) {
        return Some(Credentials::ApiKeys {
            access_key,
            secret_key,
        });
    }

    if let (Some(username), Some(password)) = (
        non_empty_ref(&config.username),
        non_empty_secret(&config.password),
    ) {
        return Some(Credentials::Login { username, password });
    }

    None
}

fn stored_credentials(platform: Platform, source: &dyn ConfigSource) -> Option<Credentials> {
    let section = platform.section();
    let get = |key: &str| non_empty(source.get(section, key));

    if platform.uses_bearer_token() {
        return get("bearer_token").map(Credentials::bearer_token);
    }

    if let (Some(access_key), Some(secret_key)) = (get("access_key"), get("secret_key")) {
        return Some(Credentials::api_keys(access_key, secret_key));
    }

    if let (Some(username), Some(password)) = (get("username"), get("password")) {
        return Some(Credentials::login(username, password));
    }

    None
}

fn connection(config: &ClientConfig, host: String, proxy: Option<String>, verify: bool) -> ConnectionConfig {
    ConnectionConfig {
        host,
        proxy,
        verify,
        scheme: config.scheme,
        timeout: config.timeout,
        user_agent: config.user_agent.clone(),
    }
}

fn default_host(platform: Platform) -> Option<String> {
    platform.default_host().map(String::from)
}

fn missing_host(platform: Platform) -> Error {
    Error::Config(format!(
        "{} requires a host, either explicitly or in the [{}] section",
        platform,
        platform.section()
    ))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_empty_ref(value: &Option<String>) -> Option<String> {
    non_empty(value.clone())
}

fn non_empty_secret(value: &Option<SecretString>) -> Option<SecretString> {
    value
        .as_ref()
        .filter(|v| !v.expose_secret().trim().is_empty())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ConfigStore;

    /// Fails the test if anything reads from it.
    struct UntouchableSource;

    impl ConfigSource for UntouchableSource {
        fn get(&self, section: &str, key: &str) -> Option<String> {
            panic!("config source consulted for [{}] {}", section, key);
        }
    }

    fn untouchable() -> ClientConfig {
        ClientConfig::new().with_config(UntouchableSource)
    }

    #[test]
    fn test_explicit_bearer_skips_store() {
        let resolved = resolve(Platform::Downloads, &untouchable().with_bearer_token("abc")).unwrap();
        assert!(matches!(resolved.credentials, Credentials::BearerToken(_)));
        assert_eq!(resolved.connection.host, "www.tenable.com");
    }

    #[test]
    fn test_explicit_key_pair_skips_store() {
        let config = untouchable()
            .with_api_keys("k", "s")
            .with_proxy("http://proxy:3128")
            .with_verify(false);
        let resolved = resolve(Platform::TenableIo, &config).unwrap();

        match resolved.credentials {
            Credentials::ApiKeys { access_key, .. } => assert_eq!(access_key, "k"),
            other => panic!("expected key pair, got {:?}", other),
        }
        assert_eq!(resolved.connection.host, "cloud.tenable.com");
        assert_eq!(resolved.connection.proxy.as_deref(), Some("http://proxy:3128"));
        assert!(!resolved.connection.verify);
    }

    #[test]
    fn test_explicit_login_skips_store() {
        let config = untouchable().with_login("admin", "pw").with_host("sc.example.com");
        let resolved = resolve(Platform::TenableSc, &config).unwrap();
        assert!(resolved.credentials.requires_login());
        assert_eq!(resolved.connection.host, "sc.example.com");
    }

    #[test]
    fn test_key_pair_preferred_over_login() {
        let config = ClientConfig::new().with_login("admin", "pw").with_api_keys("k", "s");
        let resolved = resolve(Platform::TenableIo, &config).unwrap();
        assert!(matches!(resolved.credentials, Credentials::ApiKeys { .. }));
    }

    #[test]
    fn test_incomplete_pair_falls_back_to_store() {
        let store = ConfigStore::new()
            .with_value("tenable_io", "access_key", "stored-k")
            .with_value("tenable_io", "secret_key", "stored-s")
            .with_value("tenable_io", "verify", "off");
        let mut config = ClientConfig::new()
            .with_config(store)
            .with_proxy("http://ignored:1")
            .with_login("admin", "");
        config.access_key = Some("only-access".to_string());

        let resolved = resolve(Platform::TenableIo, &config).unwrap();
        match resolved.credentials {
            Credentials::ApiKeys { access_key, .. } => assert_eq!(access_key, "stored-k"),
            other => panic!("expected stored key pair, got {:?}", other),
        }
        assert_eq!(resolved.connection.proxy, None);
        assert!(!resolved.connection.verify);
    }

    #[test]
    fn test_store_section_for_sc() {
        let store = ConfigStore::new()
            .with_value("tenable_sc", "host", "sc.internal")
            .with_value("tenable_sc", "username", "admin")
            .with_value("tenable_sc", "password", "pw")
            .with_value("tenable_sc", "proxy", "http://proxy:8080");
        let resolved = resolve(Platform::TenableSc, &ClientConfig::new().with_config(store)).unwrap();

        assert!(resolved.credentials.requires_login());
        assert_eq!(resolved.connection.host, "sc.internal");
        assert_eq!(resolved.connection.proxy.as_deref(), Some("http://proxy:8080"));
        assert!(resolved.connection.verify);
    }

    #[test]
    fn test_sc_host_from_store_with_explicit_credentials() {
        let store = ConfigStore::new().with_value("tenable_sc", "host", "sc.internal");
        let config = ClientConfig::new().with_api_keys("k", "s").with_config(store);
        let resolved = resolve(Platform::TenableSc, &config).unwrap();
        assert_eq!(resolved.connection.host, "sc.internal");
    }

    #[test]
    fn test_sc_without_host_fails() {
        let err = resolve(Platform::TenableSc, &ClientConfig::new().with_api_keys("k", "s")).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("host")));

        let store = ConfigStore::new()
            .with_value("tenable_sc", "access_key", "k")
            .with_value("tenable_sc", "secret_key", "s");
        let err = resolve(Platform::TenableSc, &ClientConfig::new().with_config(store)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_nothing_resolves() {
        for platform in [Platform::Downloads, Platform::TenableIo, Platform::TenableSc] {
            let err = resolve(platform, &ClientConfig::new()).unwrap_err();
            assert!(matches!(err, Error::Config(_)), "{platform}");

            let err = resolve(platform, &ClientConfig::new().with_config(ConfigStore::new())).unwrap_err();
            assert!(matches!(err, Error::Config(_)), "{platform}");
        }
    }

    #[test]
    fn test_downloads_ignores_key_pairs() {
        let err = resolve(Platform::Downloads, &ClientConfig::new().with_api_keys("k", "s")).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("bearer token")));
    }

    #[test]
    fn test_bad_verify_in_store() {
        let store = ConfigStore::new()
            .with_value("downloads", "bearer_token", "abc")
            .with_value("downloads", "verify", "perhaps");
        let err = resolve(Platform::Downloads, &ClientConfig::new().with_config(store)).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("verify")));
    }

    #[test]
    fn test_empty_values_are_missing() {
        let store = ConfigStore::new().with_value("downloads", "bearer_token", "");
        let config = ClientConfig::new().with_bearer_token("  ").with_config(store);
        assert!(resolve(Platform::Downloads, &config).is_err());
    }
}
