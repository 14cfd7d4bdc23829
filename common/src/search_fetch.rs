//! Failure of one fetch, as seen by the view-model.

use crate::{search_const::FETCH_ERROR_MESSAGE, search_response::SearchResponse};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchFetchError {
    #[error("search request failed: {0}")]
    Network(String),
    #[error("search request timed out")]
    Timeout,
    #[error("could not parse search response: {0}")]
    Parse(String),
}

impl SearchFetchError {
    /// What the user gets to see; the detail only goes to the log.
    pub fn user_message(&self) -> &'static str {
        FETCH_ERROR_MESSAGE
    }
}

/// Parses a response body; an empty or shape-less body is zero results, broken JSON is an error.
pub fn parse_search_response(body: &str) -> Result<SearchResponse, SearchFetchError> {
    if body.trim().is_empty() {
        return Ok(SearchResponse::default());
    }
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| SearchFetchError::Parse(e.to_string()))?;
    if !value.is_object() {
        return Ok(SearchResponse::default());
    }
    serde_json::from_value(value).map_err(|e| SearchFetchError::Parse(e.to_string()))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_json_is_an_error_with_generic_message() {
        let err = parse_search_response("{\"channels\": [").unwrap_err();
        assert!(matches!(err, SearchFetchError::Parse(_)));
        assert_eq!(err.user_message(), "Failed to fetch search results");
    }

    #[test]
    fn shapeless_bodies_are_empty() {
        assert_eq!(parse_search_response("").unwrap(), SearchResponse::default());
        assert_eq!(parse_search_response("[1,2]").unwrap(), SearchResponse::default());
        assert_eq!(parse_search_response("{\"foo\":1}").unwrap(), SearchResponse::default());
    }
}
