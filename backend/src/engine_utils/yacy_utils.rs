//! YaCy peer, queried through `yacysearch.json`.

use common::{search_fetch::parse_search_response, search_request::SearchRequest, search_response::SearchResponse};

use super::{SearchEngine, http_client::fetch_text};

pub struct YacyEngine {
    client: reqwest::Client,
    endpoint: String,
}

impl YacyEngine {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        let endpoint = format!("{}/yacysearch.json", base_url.trim_end_matches('/'));
        Self { client, endpoint }
    }
}

#[async_trait::async_trait]
impl SearchEngine for YacyEngine {
    fn name(&self) -> &'static str {
        "yacy"
    }

    async fn search(&self, request: &SearchRequest) -> anyhow::Result<SearchResponse> {
        let params = request.yacy_params();
        tracing::info!("yacy search {:?} page {}", request.query.text, request.query.page);
        let body = fetch_text(self.client.get(&self.endpoint).query(&params), self.name()).await?;
        let response = parse_search_response(&body)?;
        tracing::debug!(
            "yacy returned {} items (reported total {:?})",
            response.first_channel().map(|c| c.items.len()).unwrap_or(0),
            response.reported_total()
        );
        Ok(response)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::search_query::{FilterSet, ResultType, SearchQuery, SortOrder};
    use mockito::Matcher;

    fn engine(server: &mockito::Server) -> YacyEngine {
        YacyEngine::new(reqwest::Client::new(), &server.url())
    }

    #[tokio::test]
    async fn forwards_query_parameters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/yacysearch.json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".into(), "rust lang".into()),
                Matcher::UrlEncoded("startRecord".into(), "11".into()),
                Matcher::UrlEncoded("maximumRecords".into(), "10".into()),
                Matcher::UrlEncoded("resource".into(), "global".into()),
                Matcher::UrlEncoded("verify".into(), "true".into()),
                Matcher::UrlEncoded("contentdom".into(), "app".into()),
                Matcher::UrlEncoded("sort".into(), "size".into()),
                Matcher::UrlEncoded("site".into(), "example.org".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"channels":[{"totalResults":"42","items":[{"title":"Manual","link":"https://example.org/manual.pdf"}]}]}"#)
            .create_async()
            .await;

        let filters = FilterSet { domain: "example.org".to_string(), ..FilterSet::default() };
        let query = SearchQuery::new("rust lang", ResultType::File)
            .with_sort(SortOrder::Size)
            .with_filters(filters)
            .with_page(2);
        let response = engine(&server).search(&SearchRequest::new(query, true)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.reported_total(), Some(42));
        assert_eq!(response.first_channel().unwrap().items.len(), 1);
    }

    #[tokio::test]
    async fn server_error_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/yacysearch.json")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("index unavailable")
            .create_async()
            .await;

        let request = SearchRequest::new(SearchQuery::new("rust", ResultType::Web), false);
        let err = engine(&server).search(&request).await.unwrap_err();
        assert!(err.to_string().contains("500"), "{err}");
    }

    #[tokio::test]
    async fn malformed_json_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/yacysearch.json")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("{\"channels\": [")
            .create_async()
            .await;

        let request = SearchRequest::new(SearchQuery::new("rust", ResultType::Web), false);
        assert!(engine(&server).search(&request).await.is_err());
    }

    #[tokio::test]
    async fn empty_body_is_an_empty_page() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/yacysearch.json")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("")
            .create_async()
            .await;

        let request = SearchRequest::new(SearchQuery::new("rust", ResultType::Web), false);
        let response = engine(&server).search(&request).await.unwrap();
        assert_eq!(response.into_page(), (vec![], 0));
    }
}
