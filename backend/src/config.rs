//! Search engine settings, read from the environment on first use.
//!
//! | Variable | Default |
//! |---|---|
//! | `SEARCH_ENGINE` | `yacy` (or `searxng`) |
//! | `YACY_URL` | `http://localhost:8090` |
//! | `SEARXNG_URL` | `http://localhost:8888` |
//! | `SEARCH_TIMEOUT_SECS` | `15` |
//! | `SEARCH_USER_AGENT` | `public-search/<version>` |

use std::{sync::OnceLock, time::Duration};

use common::search_const::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_SEARXNG_URL, DEFAULT_YACY_URL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineKind {
    #[default]
    Yacy,
    Searxng,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchBackendConfig {
    pub engine: EngineKind,
    pub yacy_url: String,
    pub searxng_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for SearchBackendConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            yacy_url: DEFAULT_YACY_URL.to_string(),
            searxng_url: DEFAULT_SEARXNG_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: format!("public-search/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl SearchBackendConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable source; unset or unparsable values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(engine) = lookup("SEARCH_ENGINE") {
            config.engine = match engine.trim().to_ascii_lowercase().as_str() {
                "searxng" => EngineKind::Searxng,
                "yacy" | "" => EngineKind::Yacy,
                other => {
                    tracing::warn!("unknown SEARCH_ENGINE {other:?}, using yacy");
                    EngineKind::Yacy
                }
            };
        }
        if let Some(url) = lookup("YACY_URL").filter(|u| !u.trim().is_empty()) {
            config.yacy_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(url) = lookup("SEARXNG_URL").filter(|u| !u.trim().is_empty()) {
            config.searxng_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(secs) = lookup("SEARCH_TIMEOUT_SECS") {
            match secs.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!("ignoring invalid SEARCH_TIMEOUT_SECS {secs:?}"),
            }
        }
        if let Some(agent) = lookup("SEARCH_USER_AGENT").filter(|a| !a.trim().is_empty()) {
            config.user_agent = agent;
        }
        config
    }
}

pub fn get_config() -> &'static SearchBackendConfig {
    static CONFIG: OnceLock<SearchBackendConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        let config = SearchBackendConfig::from_env();
        tracing::info!(
            "search backend: {:?} (yacy {}, searxng {}, timeout {:?})",
            config.engine, config.yacy_url, config.searxng_url, config.timeout
        );
        config
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_local_yacy() {
        let config = SearchBackendConfig::from_lookup(lookup(&[]));
        assert_eq!(config.engine, EngineKind::Yacy);
        assert_eq!(config.yacy_url, "http://localhost:8090");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn reads_overrides() {
        let config = SearchBackendConfig::from_lookup(lookup(&[
            ("SEARCH_ENGINE", "SearXNG"),
            ("SEARXNG_URL", "http://searx.lan:8080/"),
            ("SEARCH_TIMEOUT_SECS", "3"),
        ]));
        assert_eq!(config.engine, EngineKind::Searxng);
        assert_eq!(config.searxng_url, "http://searx.lan:8080");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = SearchBackendConfig::from_lookup(lookup(&[
            ("SEARCH_ENGINE", "google"),
            ("SEARCH_TIMEOUT_SECS", "soon"),
            ("YACY_URL", "  "),
        ]));
        assert_eq!(config, SearchBackendConfig::default());
    }
}
