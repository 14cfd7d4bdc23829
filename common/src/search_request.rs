//! The request sent to the search engine and its YaCy parameter mapping.

use serde::{Deserialize, Serialize};

use crate::search_query::{DateRange, FileTypeFilter, Language, ResultType, SearchQuery, SortOrder};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchRequest {
    pub query: SearchQuery,
    /// Search the whole peer network instead of the local node only.
    pub allow_external_search: bool,
}

impl SearchRequest {
    pub fn new(query: SearchQuery, allow_external_search: bool) -> Self {
        Self { query, allow_external_search }
    }

    /// Query string parameters for `yacysearch.json`.
    pub fn yacy_params(&self) -> Vec<(&'static str, String)> {
        let query = &self.query;
        let mut params = vec![
            ("query", query.text.clone()),
            ("startRecord", query.start_record().to_string()),
            ("maximumRecords", query.page_size.max(1).to_string()),
            ("resource", if self.allow_external_search { "global" } else { "local" }.to_string()),
            ("verify", self.allow_external_search.to_string()),
            ("contentdom", content_domain(query.result_type).to_string()),
        ];
        if query.result_type == ResultType::News {
            params.push(("constraint", "/date/".to_string()));
        }
        if let Some(sort) = sort_key(query.sort) {
            params.push(("sort", sort.to_string()));
        }

        let filters = &query.filters;
        if filters.date_range != DateRange::Any {
            params.push(("daterange", filters.date_range.as_str().to_string()));
        }
        if filters.file_type != FileTypeFilter::Any {
            params.push(("filetype", filters.file_type.as_str().to_string()));
        }
        if let Some(domain) = filters.domain_filter() {
            params.push(("site", domain.to_string()));
        }
        if filters.language != Language::Any {
            params.push(("language", filters.language.as_str().to_string()));
        }
        params
    }
}

/// YaCy `contentdom` for a result type.
pub fn content_domain(result_type: ResultType) -> &'static str {
    match result_type {
        ResultType::Web | ResultType::News => "text",
        ResultType::Image => "image",
        ResultType::Video => "video",
        ResultType::File => "app",
        ResultType::Map => "location",
    }
}

/// YaCy sort key; relevance is the engine default and is not sent.
pub fn sort_key(sort: SortOrder) -> Option<&'static str> {
    match sort {
        SortOrder::Relevance => None,
        SortOrder::Date => Some("last_modified"),
        SortOrder::Size => Some("size"),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_query::FilterSet;

    fn param<'a>(params: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        params.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }

    #[test]
    fn default_web_query_maps_to_local_text_search() {
        let req = SearchRequest::new(SearchQuery::new("privacy", ResultType::Web), false);
        let params = req.yacy_params();
        assert_eq!(param(&params, "query"), Some("privacy"));
        assert_eq!(param(&params, "startRecord"), Some("1"));
        assert_eq!(param(&params, "maximumRecords"), Some("10"));
        assert_eq!(param(&params, "resource"), Some("local"));
        assert_eq!(param(&params, "verify"), Some("false"));
        assert_eq!(param(&params, "contentdom"), Some("text"));
        for absent in ["sort", "daterange", "filetype", "site", "language", "constraint"] {
            assert_eq!(param(&params, absent), None, "{absent} should not be sent");
        }
    }

    #[test]
    fn external_search_switches_scope_and_verify() {
        let req = SearchRequest::new(SearchQuery::new("x", ResultType::Web), true);
        let params = req.yacy_params();
        assert_eq!(param(&params, "resource"), Some("global"));
        assert_eq!(param(&params, "verify"), Some("true"));
    }

    #[test]
    fn result_types_map_to_content_domains() {
        assert_eq!(content_domain(ResultType::Image), "image");
        assert_eq!(content_domain(ResultType::Video), "video");
        assert_eq!(content_domain(ResultType::File), "app");
        assert_eq!(content_domain(ResultType::Map), "location");
        let news = SearchRequest::new(SearchQuery::new("x", ResultType::News), false).yacy_params();
        assert_eq!(param(&news, "contentdom"), Some("text"));
        assert_eq!(param(&news, "constraint"), Some("/date/"));
    }

    #[test]
    fn sort_filters_and_page_are_forwarded() {
        let filters = FilterSet {
            date_range: DateRange::Month,
            file_type: FileTypeFilter::Pdf,
            domain: "example.org".to_string(),
            language: Language::Fr,
        };
        let query = SearchQuery::new("x", ResultType::Web)
            .with_sort(SortOrder::Date)
            .with_filters(filters)
            .with_page(3);
        let params = SearchRequest::new(query, false).yacy_params();
        assert_eq!(param(&params, "sort"), Some("last_modified"));
        assert_eq!(param(&params, "daterange"), Some("month"));
        assert_eq!(param(&params, "filetype"), Some("pdf"));
        assert_eq!(param(&params, "site"), Some("example.org"));
        assert_eq!(param(&params, "language"), Some("fr"));
        assert_eq!(param(&params, "startRecord"), Some("21"));
        assert_eq!(sort_key(SortOrder::Size), Some("size"));
    }
}
