//! SearXNG instance, queried through `/search?format=json` and converted to
//! the YaCy channel shape.

use common::{
    search_query::{DateRange, Language, ResultType},
    search_request::SearchRequest,
    search_response::{LenientNumber, RawResultItem, SearchChannel, SearchResponse, lenient_list},
};
use serde::Deserialize;

use super::{SearchEngine, http_client::fetch_text};

pub struct SearxngEngine {
    client: reqwest::Client,
    endpoint: String,
}

impl SearxngEngine {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        let endpoint = format!("{}/search", base_url.trim_end_matches('/'));
        Self { client, endpoint }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SearxngResponse {
    number_of_results: Option<LenientNumber>,
    #[serde(deserialize_with = "lenient_list")]
    results: Vec<SearxngResult>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SearxngResult {
    title: Option<String>,
    url: Option<String>,
    content: Option<String>,
    #[serde(rename = "publishedDate")]
    published_date: Option<String>,
    img_src: Option<String>,
    thumbnail: Option<String>,
    thumbnail_src: Option<String>,
    resolution: Option<String>,
    img_format: Option<String>,
    filesize: Option<LenientNumber>,
    mimetype: Option<String>,
}

/// `/search` parameters for a request. SearXNG pages by its own page size, so
/// only the page number carries over.
pub fn searxng_params(request: &SearchRequest) -> Vec<(&'static str, String)> {
    let query = &request.query;
    let filters = &query.filters;
    let text = match filters.domain_filter() {
        Some(domain) => format!("{} site:{}", query.text, domain),
        None => query.text.clone(),
    };
    let mut params = vec![
        ("q", text),
        ("format", "json".to_string()),
        ("pageno", query.page.max(1).to_string()),
        ("categories", category(query.result_type).to_string()),
    ];
    if filters.date_range != DateRange::Any {
        params.push(("time_range", filters.date_range.as_str().to_string()));
    }
    if filters.language != Language::Any {
        params.push(("language", filters.language.as_str().to_string()));
    }
    params
}

fn category(result_type: ResultType) -> &'static str {
    match result_type {
        ResultType::Web => "general",
        ResultType::Image => "images",
        ResultType::Video => "videos",
        ResultType::File => "files",
        ResultType::News => "news",
        ResultType::Map => "map",
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Splits `"1920x1080"` (or `"1920 x 1080"`) into width and height.
fn parse_resolution(resolution: &str) -> Option<(u64, u64)> {
    let (w, h) = resolution.split_once(['x', '×'])?;
    Some((w.trim().parse().ok()?, h.trim().parse().ok()?))
}

fn convert_result(result: SearxngResult) -> RawResultItem {
    let dimensions = result
        .resolution
        .as_deref()
        .or(result.img_format.as_deref())
        .and_then(parse_resolution);
    RawResultItem {
        guid: non_empty(result.url.clone()),
        title: result.title,
        link: result.url,
        description: result.content,
        image: non_empty(result.img_src)
            .or(non_empty(result.thumbnail))
            .or(non_empty(result.thumbnail_src)),
        width: dimensions.map(|(w, _)| LenientNumber::from(w)),
        height: dimensions.map(|(_, h)| LenientNumber::from(h)),
        size: result.filesize,
        sizename: None,
        pub_date: result.published_date,
        mimetype: result.mimetype,
        host: None,
    }
}

fn convert_response(response: SearxngResponse) -> SearchResponse {
    let items: Vec<RawResultItem> = response.results.into_iter().map(convert_result).collect();
    // SearXNG reports 0 when its engines give no estimate.
    let total_results = response
        .number_of_results
        .filter(|n| n.as_u64().is_some_and(|n| n > 0));
    SearchResponse {
        channels: vec![SearchChannel { total_results, items }],
    }
}

#[async_trait::async_trait]
impl SearchEngine for SearxngEngine {
    fn name(&self) -> &'static str {
        "searxng"
    }

    async fn search(&self, request: &SearchRequest) -> anyhow::Result<SearchResponse> {
        let params = searxng_params(request);
        tracing::info!("searxng search {:?} page {}", request.query.text, request.query.page);
        let body = fetch_text(self.client.get(&self.endpoint).query(&params), self.name()).await?;
        if body.trim().is_empty() {
            return Ok(SearchResponse::default());
        }
        let value: serde_json::Value = serde_json::from_str(&body)?;
        if !value.is_object() {
            return Ok(SearchResponse::default());
        }
        let response: SearxngResponse = serde_json::from_value(value)?;
        Ok(convert_response(response))
    }
}
