//! Upstream search engines and the HTTP client they share.

pub mod http_client;
pub mod searxng_utils;
pub mod yacy_utils;

use common::{search_request::SearchRequest, search_response::SearchResponse};

use crate::config::{EngineKind, SearchBackendConfig};

/// One upstream engine. Every engine answers in the YaCy channel shape so the
/// client only ever normalizes one format.
#[async_trait::async_trait]
pub trait SearchEngine: Send + Sync {
    fn name(&self) -> &'static str;

    async fn search(&self, request: &SearchRequest) -> anyhow::Result<SearchResponse>;
}

pub fn engine_for(config: &SearchBackendConfig, client: reqwest::Client) -> Box<dyn SearchEngine> {
    match config.engine {
        EngineKind::Yacy => Box::new(yacy_utils::YacyEngine::new(client, &config.yacy_url)),
        EngineKind::Searxng => Box::new(searxng_utils::SearxngEngine::new(client, &config.searxng_url)),
    }
}
