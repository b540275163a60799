use gloo_net::http::Request;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::guard::RejectPolicy;
use crate::text::DEFAULT_WORD_LIMIT;

/// Served next to index.html; relative so the page works under any base path.
pub const CONFIG_PATH: &str = "./humanizer-config.json";

pub const DEFAULT_ENDPOINT: &str = "/humanize";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub endpoint: String,
    pub word_limit: usize,
    pub on_markup: RejectPolicy,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            word_limit: DEFAULT_WORD_LIMIT,
            on_markup: RejectPolicy::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut cfg: PageConfig = serde_json::from_str(raw).map_err(|source| ConfigError::Parse {
            path: CONFIG_PATH,
            source,
        })?;
        if cfg.word_limit == 0 {
            cfg.word_limit = DEFAULT_WORD_LIMIT;
        }
        if cfg.endpoint.trim().is_empty() {
            cfg.endpoint = DEFAULT_ENDPOINT.to_string();
        }
        Ok(cfg)
    }
}

/// Fetches the optional page config.
pub async fn fetch_config() -> Result<PageConfig, ConfigError> {
    let resp = Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|source| ConfigError::Fetch {
            path: CONFIG_PATH,
            source,
        })?;
    if !resp.ok() {
        return Err(ConfigError::Status {
            path: CONFIG_PATH,
            status: resp.status(),
        });
    }
    let raw = resp.text().await.map_err(|source| ConfigError::Fetch {
        path: CONFIG_PATH,
        source,
    })?;
    PageConfig::from_json(&raw)
}

/// Config fetch that never fails: problems are logged and defaults are used.
pub async fn load_or_default() -> PageConfig {
    match fetch_config().await {
        Ok(cfg) => {
            log::info!(
                "page config loaded: endpoint={} word_limit={} on_markup={:?}",
                cfg.endpoint,
                cfg.word_limit,
                cfg.on_markup
            );
            cfg
        }
        Err(e) => {
            log::warn!("{e}; using default page config");
            PageConfig::default()
        }
    }
}
