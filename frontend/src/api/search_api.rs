//! Client API calls for search endpoints.

use common::{search_request::SearchRequest, search_response::SearchResponse};
use dioxus::prelude::*;


#[server]
pub async fn search_for_results(request: SearchRequest) -> Result<SearchResponse, ServerFnError> {
    let x = backend::api::search::search_for_results(request).await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{e:#}"), code: 502, details: None })
}
