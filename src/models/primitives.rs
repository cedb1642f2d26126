//! Primitive types shared by all platform clients.

use std::fmt;

/// One of the three Tenable APIs this crate talks to.
///
/// Determines the configuration section, default host and API base path.
///
/// # Example
///
/// ```
/// use tenable_rs::Platform;
///
/// let platform = Platform::Downloads;
/// assert_eq!(platform.base_path(), "/downloads/api/v2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Tenable Downloads portal (`www.tenable.com`), bearer-token auth.
    Downloads,
    /// Tenable.io / Tenable Vulnerability Management cloud.
    TenableIo,
    /// Tenable.sc (SecurityCenter), on-premises with a configured host.
    TenableSc,
}

impl Platform {
    /// Name of this platform's section in the persisted configuration.
    pub fn section(&self) -> &'static str {
        match self {
            Platform::Downloads => "downloads",
            Platform::TenableIo => "tenable_io",
            Platform::TenableSc => "tenable_sc",
        }
    }

    /// Fixed host used when the caller does not override it.
    ///
    /// Tenable.sc is always self-hosted, so it has none.
    pub fn default_host(&self) -> Option<&'static str> {
        match self {
            Platform::Downloads => Some("www.tenable.com"),
            Platform::TenableIo => Some("cloud.tenable.com"),
            Platform::TenableSc => None,
        }
    }

    /// Path prefix prepended to every endpoint.
    pub fn base_path(&self) -> &'static str {
        match self {
            Platform::Downloads => "/downloads/api/v2",
            Platform::TenableIo => "",
            Platform::TenableSc => "/rest",
        }
    }

    /// Returns `true` if the platform authenticates with a bearer token
    /// rather than API keys or a username/password login.
    pub fn uses_bearer_token(&self) -> bool {
        matches!(self, Platform::Downloads)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Downloads => write!(f, "Downloads"),
            Platform::TenableIo => write!(f, "Tenable.io"),
            Platform::TenableSc => write!(f, "Tenable.sc"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_sections() {
        assert_eq!(Platform::Downloads.section(), "downloads");
        assert_eq!(Platform::TenableIo.section(), "tenable_io");
        assert_eq!(Platform::TenableSc.section(), "tenable_sc");
    }

    #[test]
    fn test_platform_hosts() {
        assert_eq!(Platform::Downloads.default_host(), Some("www.tenable.com"));
        assert_eq!(Platform::TenableIo.default_host(), Some("cloud.tenable.com"));
        assert_eq!(Platform::TenableSc.default_host(), None);
    }

    #[test]
    fn test_platform_base_paths() {
        assert_eq!(Platform::TenableIo.base_path(), "");
        assert_eq!(Platform::TenableSc.base_path(), "/rest");
        assert!(Platform::Downloads.uses_bearer_token());
        assert!(!Platform::TenableSc.uses_bearer_token());
    }
}
