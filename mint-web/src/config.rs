//! # Record Store Configuration
//!
//! The page is a static bundle, so the store endpoint and public (anon) key are
//! baked in at build time:
//!
//! ```text
//! SUPABASE_URL=https://xyzcompany.supabase.co \
//! SUPABASE_ANON_KEY=eyJhbGciOi... \
//! trunk build --release
//! ```
//!
//! Use [`store_config()`] to read the resolved configuration. A missing value is
//! not fatal: the page still renders and every store call reports
//! [`ConfigError`] through [`crate::error::StoreError::NotConfigured`].

use std::sync::OnceLock;

use crate::error::ConfigError;
use crate::utils::constants::ENTRIES_TABLE;

/// Connection settings for the hosted record store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Project base URL, without a trailing slash
    pub url: String,

    /// Public anon key sent as both `apikey` and bearer token
    pub anon_key: String,

    /// Table holding registration entries
    pub table: String,
}

impl StoreConfig {
    /// Resolve from the build environment.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    /// Validate raw values.
    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::Missing("SUPABASE_URL"))?;

        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                name: "SUPABASE_URL",
                reason: format!("expected an http(s) URL, got '{}'", url),
            });
        }

        let anon_key = anon_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            table: ENTRIES_TABLE.to_string(),
        })
    }

    /// REST endpoint for the entries table.
    pub fn table_endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.url, self.table)
    }
}

/// Process-wide store configuration, resolved on first access.
pub fn store_config() -> &'static Result<StoreConfig, ConfigError> {
    static CONFIG: OnceLock<Result<StoreConfig, ConfigError>> = OnceLock::new();
    CONFIG.get_or_init(|| {
        let config = StoreConfig::from_build_env();
        if let Err(e) = &config {
            log::error!("Record store disabled: {}", e);
        }
        config
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config =
            StoreConfig::from_values(Some("https://abc.supabase.co/"), Some(" anon-key ")).unwrap();
        assert_eq!(config.url, "https://abc.supabase.co");
        assert_eq!(config.anon_key, "anon-key");
        assert_eq!(
            config.table_endpoint(),
            "https://abc.supabase.co/rest/v1/nft_entries"
        );
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(
            StoreConfig::from_values(None, Some("key")),
            Err(ConfigError::Missing("SUPABASE_URL"))
        );
        assert_eq!(
            StoreConfig::from_values(Some("https://abc.supabase.co"), Some("   ")),
            Err(ConfigError::Missing("SUPABASE_ANON_KEY"))
        );
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = StoreConfig::from_values(Some("abc.supabase.co"), Some("key")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "SUPABASE_URL", .. }));
    }
}
