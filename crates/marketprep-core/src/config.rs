use std::fmt::{Display, Formatter};
use std::time::Duration;

/// The three URL surfaces the vendor exposes.
///
/// Newer endpoints land on `Stable`, most of the documented catalogue lives
/// on `V3`, and a handful of supplemental datasets (insider trading, peers,
/// employee counts) are `V4`-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    V3,
    V4,
    Stable,
}

impl ApiVersion {
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::V3 => "https://financialmodelingprep.com/api/v3",
            Self::V4 => "https://financialmodelingprep.com/api/v4",
            Self::Stable => "https://financialmodelingprep.com/stable",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V3 => "v3",
            Self::V4 => "v4",
            Self::Stable => "stable",
        }
    }
}

impl Display for ApiVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Environment variable consulted when no key is passed to the builder.
pub const API_KEY_ENV: &str = "FMP_API_KEY";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Overrides every [`ApiVersion`] base URL when set; used by tests to
    /// point the client at a local mock server.
    pub base_override: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("marketprep/{}", env!("CARGO_PKG_VERSION")),
            base_override: None,
        }
    }

    /// Reads the key from [`API_KEY_ENV`].
    pub fn from_env() -> Option<Self> {
        std::env::var(API_KEY_ENV).ok().map(Self::new)
    }

    pub fn base_for(&self, version: ApiVersion) -> String {
        match &self.base_override {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), version.as_str()),
            None => version.base_url().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_urls_cover_all_three_surfaces() {
        assert_eq!(
            ApiVersion::V3.base_url(),
            "https://financialmodelingprep.com/api/v3"
        );
        assert_eq!(
            ApiVersion::V4.base_url(),
            "https://financialmodelingprep.com/api/v4"
        );
        assert_eq!(
            ApiVersion::Stable.base_url(),
            "https://financialmodelingprep.com/stable"
        );
    }

    #[test]
    fn override_replaces_base_and_keeps_surface_segment() {
        let mut config = ClientConfig::new("demo");
        config.base_override = Some("http://127.0.0.1:9999/".to_owned());
        assert_eq!(config.base_for(ApiVersion::V4), "http://127.0.0.1:9999/v4");
        assert_eq!(
            config.base_for(ApiVersion::Stable),
            "http://127.0.0.1:9999/stable"
        );
    }
}
