//! Service configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::search::{DEFAULT_MATCH_ALL_PLACEHOLDERS, QueryBuilder};

/// Configuration values for the search and account services.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PODCAST")]
pub struct CoreSettings {
    /// Redis connection URL. The in-memory cache is used when unset.
    pub redis_url: Option<String>,
    /// Seconds a cached response stays valid.
    #[ortho_config(default = 600)]
    pub cache_ttl_secs: u64,
    /// Upper bound of the random seconds added to each TTL.
    #[ortho_config(default = 60)]
    pub cache_ttl_jitter_secs: u64,
    /// bcrypt work factor.
    #[ortho_config(default = 10)]
    pub bcrypt_cost: u32,
    /// Comma-separated quick-search texts meaning "match everything".
    pub match_all_placeholders: Option<String>,
}

impl CoreSettings {
    /// Placeholder texts, falling back to the built-in list.
    pub fn match_all_placeholders(&self) -> Vec<String> {
        match self.match_all_placeholders.as_deref() {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|placeholder| !placeholder.is_empty())
                .map(str::to_owned)
                .collect(),
            None => DEFAULT_MATCH_ALL_PLACEHOLDERS
                .iter()
                .map(|placeholder| (*placeholder).to_owned())
                .collect(),
        }
    }

    /// Query builder honouring the configured placeholders.
    pub fn query_builder(&self) -> QueryBuilder {
        QueryBuilder::new(self.match_all_placeholders())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for service configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "PODCAST_REDIS_URL",
        "PODCAST_CACHE_TTL_SECS",
        "PODCAST_CACHE_TTL_JITTER_SECS",
        "PODCAST_BCRYPT_COST",
        "PODCAST_MATCH_ALL_PLACEHOLDERS",
    ];

    fn load_from_empty_args() -> CoreSettings {
        CoreSettings::load_from_iter([OsString::from("backend")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert!(settings.redis_url.is_none());
        assert_eq!(settings.cache_ttl_secs, 600);
        assert_eq!(settings.cache_ttl_jitter_secs, 60);
        assert_eq!(settings.bcrypt_cost, 10);
        assert_eq!(
            settings.match_all_placeholders(),
            DEFAULT_MATCH_ALL_PLACEHOLDERS.map(str::to_owned).to_vec()
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("PODCAST_REDIS_URL", Some("redis://cache:6379".to_owned())),
            ("PODCAST_CACHE_TTL_SECS", Some("30".to_owned())),
            ("PODCAST_CACHE_TTL_JITTER_SECS", Some("0".to_owned())),
            ("PODCAST_BCRYPT_COST", Some("4".to_owned())),
            (
                "PODCAST_MATCH_ALL_PLACEHOLDERS",
                Some("Find a podcast, ,Cauta...".to_owned()),
            ),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.redis_url.as_deref(), Some("redis://cache:6379"));
        assert_eq!(settings.cache_ttl_secs, 30);
        assert_eq!(settings.cache_ttl_jitter_secs, 0);
        assert_eq!(settings.bcrypt_cost, 4);
        assert_eq!(
            settings.match_all_placeholders(),
            vec!["Find a podcast".to_owned(), "Cauta...".to_owned()]
        );
    }
}
