//! Search endpoint for result lists.

use common::{search_request::SearchRequest, search_response::SearchResponse};

use crate::{
    config::{SearchBackendConfig, get_config},
    engine_utils::{engine_for, http_client::{build_http_client, get_http_client}},
};

pub async fn search_for_results(request: SearchRequest) -> anyhow::Result<SearchResponse> {
    let engine = engine_for(get_config(), get_http_client()?);
    run_search(engine.as_ref(), &request).await
}

/// Same as [`search_for_results`] against an explicit config, with a fresh client.
pub async fn search_for_results_with_config(
    config: &SearchBackendConfig,
    request: SearchRequest,
) -> anyhow::Result<SearchResponse> {
    let engine = engine_for(config, build_http_client(config)?);
    run_search(engine.as_ref(), &request).await
}

async fn run_search(
    engine: &dyn crate::engine_utils::SearchEngine,
    request: &SearchRequest,
) -> anyhow::Result<SearchResponse> {
    if request.query.text.trim().is_empty() {
        return Ok(SearchResponse::default());
    }
    let t0 = std::time::Instant::now();
    let result = engine.search(request).await;
    match &result {
        Ok(response) => tracing::info!(
            "{} search {:?} done in {:?}: {:?} total",
            engine.name(),
            request.query.text,
            t0.elapsed(),
            response.reported_total()
        ),
        Err(e) => tracing::warn!("{} search {:?} failed after {:?}: {e:#}", engine.name(), request.query.text, t0.elapsed()),
    }
    result
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineKind;
    use common::search_query::{ResultType, SearchQuery};
    use std::time::Duration;

    fn request(text: &str) -> SearchRequest {
        SearchRequest::new(SearchQuery::new(text, ResultType::Web), false)
    }

    #[tokio::test]
    async fn dispatches_to_searxng_when_configured() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"number_of_results": 7, "results": [{"title": "A", "url": "https://a.example/"}]}"#)
            .create_async()
            .await;

        let config = SearchBackendConfig {
            engine: EngineKind::Searxng,
            searxng_url: server.url(),
            ..SearchBackendConfig::default()
        };
        let response = search_for_results_with_config(&config, request("a")).await.unwrap();
        mock.assert_async().await;
        assert_eq!(response.reported_total(), Some(7));
    }

    #[tokio::test]
    async fn blank_query_does_not_reach_the_engine() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/yacysearch.json")
            .match_query(mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let config = SearchBackendConfig { yacy_url: server.url(), ..SearchBackendConfig::default() };
        let response = search_for_results_with_config(&config, request("   ")).await.unwrap();
        mock.assert_async().await;
        assert_eq!(response, SearchResponse::default());
    }

    #[tokio::test]
    async fn unresponsive_engine_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hold = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let config = SearchBackendConfig {
            yacy_url: format!("http://{addr}"),
            timeout: Duration::from_millis(200),
            ..SearchBackendConfig::default()
        };
        let err = search_for_results_with_config(&config, request("slow")).await.unwrap_err();
        assert!(err.to_string().contains("timed out"), "{err}");
        hold.abort();
    }
}
