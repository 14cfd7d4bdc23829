//! State behind the search results page.
//!
//! The view-model does no I/O. Every operation that needs data hands back a
//! [`FetchTicket`]; the caller performs the request and feeds the outcome to
//! [`SearchResultsViewModel::complete_fetch`]. Tickets carry a sequence number
//! and only the most recently issued one may touch visible state, so a slow
//! response can never overwrite a newer one.
//!
//! Sorting, filtering and paging are done by the engine: each change issues a
//! new request and the held page is never re-sorted or sliced locally.

use crate::{
    annotations::AnnotationStore,
    key_value_store::KeyValueStore,
    normalize::normalize_response,
    search_const::PAGE_SIZE,
    search_fetch::SearchFetchError,
    search_query::{FilterSet, ResultType, SearchQuery, SortOrder},
    search_request::SearchRequest,
    search_response::SearchResponse,
    search_result::{ResultSet, SearchResult},
};


/// One issued request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub seq: u64,
    pub request: SearchRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer request was issued after this one.
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    /// No query yet.
    Idle,
    Loading,
    Error,
    NoResults,
    Results,
}

pub struct SearchResultsViewModel<S> {
    annotations: AnnotationStore<S>,
    query: Option<SearchQuery>,
    allow_external_search: bool,
    page_size: u64,
    result_set: ResultSet,
    loading: bool,
    error: Option<String>,
    latest_seq: u64,
}

impl<S: KeyValueStore> SearchResultsViewModel<S> {
    pub fn new(annotations: AnnotationStore<S>) -> Self {
        Self {
            annotations,
            query: None,
            allow_external_search: false,
            page_size: PAGE_SIZE,
            result_set: ResultSet::default(),
            loading: false,
            error: None,
            latest_seq: 0,
        }
    }

    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_external_search(mut self, allow: bool) -> Self {
        self.allow_external_search = allow;
        self
    }

    /// Starts a new search. Blank text is ignored and returns `None`.
    pub fn submit_query(&mut self, text: &str, result_type: ResultType) -> Option<FetchTicket> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let query = SearchQuery::new(text, result_type).with_page_size(self.page_size);
        Some(self.issue(query))
    }

    /// Shows `query` as given, e.g. restored from the address bar. Returns
    /// `None` when it is blank or already the current query.
    pub fn open_query(&mut self, query: SearchQuery) -> Option<FetchTicket> {
        let text = query.text.trim().to_string();
        if text.is_empty() {
            return None;
        }
        let query = SearchQuery { text, page: query.page.max(1), page_size: self.page_size, ..query };
        if self.query.as_ref() == Some(&query) {
            return None;
        }
        Some(self.issue(query))
    }

    pub fn change_sort(&mut self, sort: SortOrder) -> Option<FetchTicket> {
        let query = self.query.as_ref()?.with_sort(sort);
        Some(self.issue(query))
    }

    pub fn change_filters(&mut self, filters: FilterSet) -> Option<FetchTicket> {
        let query = self.query.as_ref()?.with_filters(filters);
        Some(self.issue(query))
    }

    pub fn change_result_type(&mut self, result_type: ResultType) -> Option<FetchTicket> {
        let query = self.query.as_ref()?.with_result_type(result_type);
        Some(self.issue(query))
    }

    /// Moves to `page`, clamped to the pages the server reported.
    pub fn change_page(&mut self, page: u64) -> Option<FetchTicket> {
        let page = page.clamp(1, self.total_pages());
        let query = self.query.as_ref()?.with_page(page);
        Some(self.issue(query))
    }

    /// Switches between local and peer-network search; a held query is re-run from page 1.
    pub fn set_allow_external_search(&mut self, allow: bool) -> Option<FetchTicket> {
        if self.allow_external_search == allow {
            return None;
        }
        self.allow_external_search = allow;
        let query = self.query.as_ref()?.with_page(1);
        Some(self.issue(query))
    }

    /// Re-issues the current query unchanged.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        let query = self.query.clone()?;
        Some(self.issue(query))
    }

    fn issue(&mut self, query: SearchQuery) -> FetchTicket {
        self.latest_seq += 1;
        self.loading = true;
        self.error = None;
        self.query = Some(query.clone());
        tracing::debug!(seq = self.latest_seq, text = %query.text, page = query.page, "issuing search request");
        FetchTicket {
            seq: self.latest_seq,
            request: SearchRequest::new(query, self.allow_external_search),
        }
    }

    /// Applies the outcome of `ticket`, unless a newer ticket has been issued since.
    pub fn complete_fetch(&mut self, ticket: &FetchTicket, outcome: Result<SearchResponse, SearchFetchError>) -> FetchOutcome {
        if ticket.seq != self.latest_seq {
            tracing::debug!(seq = ticket.seq, latest = self.latest_seq, "discarding stale search response");
            return FetchOutcome::Discarded;
        }
        self.loading = false;
        match outcome {
            Ok(response) => {
                let annotations = &self.annotations;
                self.result_set = normalize_response(response, ticket.request.query.result_type, |id| annotations.get(id));
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("search request failed: {e}");
                self.error = Some(e.user_message().to_string());
                self.result_set = ResultSet::default();
            }
        }
        FetchOutcome::Applied
    }

    /// Flips the bookmark of `id` in the store and in the held results. Returns the new flag.
    pub fn toggle_bookmark(&mut self, id: &str) -> bool {
        let now = self.annotations.toggle_bookmark(id);
        if let Some(item) = self.result_set.get_mut(id) {
            item.annotation.bookmarked = now;
        }
        now
    }

    /// Flips the blacklist flag of `id` in the store and in the held results. Returns the new flag.
    pub fn toggle_blacklist(&mut self, id: &str) -> bool {
        let now = self.annotations.toggle_blacklist(id);
        if let Some(item) = self.result_set.get_mut(id) {
            item.annotation.blacklisted = now;
        }
        now
    }

    /// Hides `id` until the next fetch. Nothing is persisted or sent to the server.
    pub fn remove_from_view(&mut self, id: &str) -> bool {
        self.result_set.remove(id)
    }

    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.result_set.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn allow_external_search(&self) -> bool {
        self.allow_external_search
    }

    pub fn annotations(&self) -> &AnnotationStore<S> {
        &self.annotations
    }

    pub fn total_results(&self) -> u64 {
        self.result_set.total_results_reported_by_server
    }

    pub fn current_page(&self) -> u64 {
        self.query.as_ref().map_or(1, |q| q.page)
    }

    pub fn total_pages(&self) -> u64 {
        self.result_set.total_pages(self.page_size)
    }

    /// 1-based positions of the first and last held result within the whole result list.
    pub fn showing_range(&self) -> Option<(u64, u64)> {
        let query = self.query.as_ref()?;
        if self.result_set.is_empty() {
            return None;
        }
        let first = query.start_record();
        Some((first, first + self.result_set.items.len() as u64 - 1))
    }

    pub fn status(&self) -> ViewStatus {
        if self.query.is_none() {
            ViewStatus::Idle
        } else if self.loading {
            ViewStatus::Loading
        } else if self.error.is_some() {
            ViewStatus::Error
        } else if self.result_set.is_empty() {
            ViewStatus::NoResults
        } else {
            ViewStatus::Results
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{key_value_store::MemoryStore, search_const::FETCH_ERROR_MESSAGE, search_query::Language};

    fn view_model() -> SearchResultsViewModel<MemoryStore> {
        SearchResultsViewModel::new(AnnotationStore::load(MemoryStore::new()))
    }

    fn response(json: serde_json::Value) -> Result<SearchResponse, SearchFetchError> {
        Ok(serde_json::from_value(json).unwrap())
    }

    fn items(links: &[&str], total: u64) -> Result<SearchResponse, SearchFetchError> {
        let items: Vec<_> = links.iter().map(|l| serde_json::json!({ "title": l, "link": l })).collect();
        response(serde_json::json!({ "channels": [{ "totalResults": total.to_string(), "items": items }] }))
    }

    fn param(ticket: &FetchTicket, name: &str) -> Option<String> {
        ticket.request.yacy_params().into_iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    #[test]
    fn empty_query_is_a_no_op() {
        let mut vm = view_model();
        assert_eq!(vm.submit_query("   ", ResultType::Web), None);
        assert_eq!(vm.status(), ViewStatus::Idle);
        assert!(!vm.loading());
        assert_eq!(vm.change_sort(SortOrder::Date), None);
        assert_eq!(vm.change_page(2), None);
    }

    #[test]
    fn submit_resets_page_and_issues_one_request() {
        let mut vm = view_model();
        let first = vm.submit_query("rust", ResultType::Web).unwrap();
        vm.complete_fetch(&first, items(&["http://a"], 100));
        let paged = vm.change_page(4).unwrap();
        assert_eq!(paged.request.query.page, 4);
        vm.complete_fetch(&paged, items(&["http://b"], 100));
        vm.change_sort(SortOrder::Size);

        let ticket = vm.submit_query("privacy", ResultType::Image).unwrap();
        assert_eq!(ticket.request.query.page, 1);
        assert_eq!(ticket.request.query.sort, SortOrder::Relevance);
        assert_eq!(ticket.request.query.filters, FilterSet::default());
        assert_eq!(param(&ticket, "query").as_deref(), Some("privacy"));
        assert_eq!(param(&ticket, "startRecord").as_deref(), Some("1"));
        assert_eq!(param(&ticket, "maximumRecords").as_deref(), Some("10"));
        assert_eq!(param(&ticket, "contentdom").as_deref(), Some("image"));
        assert_eq!(param(&ticket, "resource").as_deref(), Some("local"));
        assert_eq!(param(&ticket, "sort"), None);
        assert!(vm.loading());
        assert_eq!(vm.status(), ViewStatus::Loading);
    }

    #[test]
    fn privacy_scenario() {
        let mut vm = view_model();
        let ticket = vm.submit_query("privacy", ResultType::Web).unwrap();
        let outcome = vm.complete_fetch(
            &ticket,
            response(serde_json::json!({
                "channels": [{ "totalResults": "42", "items": [{ "title": "A", "link": "http://a.com/1", "description": "d" }] }]
            })),
        );
        assert_eq!(outcome, FetchOutcome::Applied);
        assert_eq!(vm.results().len(), 1);
        assert_eq!(vm.results()[0].id, "http://a.com/1");
        assert_eq!(vm.results()[0].host, "a.com");
        assert_eq!(vm.results()[0].description(), Some("d"));
        assert_eq!(vm.total_results(), 42);
        assert_eq!(vm.total_pages(), 5);
        assert_eq!(vm.showing_range(), Some((1, 1)));
        assert_eq!(vm.status(), ViewStatus::Results);
        assert!(!vm.loading());
    }

    #[test]
    fn empty_channels_is_no_results_not_error() {
        let mut vm = view_model();
        let ticket = vm.submit_query("nothing", ResultType::Web).unwrap();
        vm.complete_fetch(&ticket, response(serde_json::json!({ "channels": [] })));
        assert!(vm.results().is_empty());
        assert_eq!(vm.error(), None);
        assert_eq!(vm.status(), ViewStatus::NoResults);
        assert_eq!(vm.showing_range(), None);
    }

    #[test]
    fn failure_sets_generic_error_and_clears_results() {
        let mut vm = view_model();
        let ticket = vm.submit_query("privacy", ResultType::Web).unwrap();
        vm.complete_fetch(&ticket, items(&["http://a", "http://b"], 2));
        assert_eq!(vm.results().len(), 2);

        let ticket = vm.change_sort(SortOrder::Date).unwrap();
        vm.complete_fetch(&ticket, Err(SearchFetchError::Network("connection refused".to_string())));
        assert_eq!(vm.error(), Some(FETCH_ERROR_MESSAGE));
        assert!(!vm.loading());
        assert!(vm.results().is_empty());
        assert_eq!(vm.total_results(), 0);
        assert_eq!(vm.status(), ViewStatus::Error);

        let again = vm.retry().unwrap();
        assert_eq!(vm.error(), None);
        assert_eq!(again.request.query.sort, SortOrder::Date);
    }

    #[test]
    fn only_the_latest_request_is_applied() {
        let mut vm = view_model();
        let t1 = vm.submit_query("q", ResultType::Web).unwrap();
        let t2 = vm.change_sort(SortOrder::Date).unwrap();
        let t3 = vm.change_sort(SortOrder::Size).unwrap();
        let t4 = vm.change_sort(SortOrder::Relevance).unwrap();
        assert!(t1.seq < t2.seq && t2.seq < t3.seq && t3.seq < t4.seq);

        // stale responses arriving first leave the view loading and empty
        assert_eq!(vm.complete_fetch(&t2, items(&["http://two"], 1)), FetchOutcome::Discarded);
        assert!(vm.loading());
        assert!(vm.results().is_empty());

        assert_eq!(vm.complete_fetch(&t4, items(&["http://four"], 1)), FetchOutcome::Applied);
        // and late ones after the latest are ignored too
        assert_eq!(vm.complete_fetch(&t3, items(&["http://three"], 1)), FetchOutcome::Discarded);
        assert_eq!(vm.complete_fetch(&t1, Err(SearchFetchError::Timeout)), FetchOutcome::Discarded);

        assert_eq!(vm.results().len(), 1);
        assert_eq!(vm.results()[0].id, "http://four");
        assert_eq!(vm.error(), None);
        assert_eq!(vm.query().unwrap().sort, SortOrder::Relevance);
    }

    #[test]
    fn change_page_clamps() {
        let mut vm = view_model();
        let ticket = vm.submit_query("q", ResultType::Web).unwrap();
        vm.complete_fetch(&ticket, items(&["http://a"], 42));

        let ticket = vm.change_page(99).unwrap();
        assert_eq!(ticket.request.query.page, 5);
        assert_eq!(ticket.request.query.start_record(), 41);
        vm.complete_fetch(&ticket, items(&["http://z"], 42));
        assert_eq!(vm.showing_range(), Some((41, 41)));

        let ticket = vm.change_page(0).unwrap();
        assert_eq!(ticket.request.query.page, 1);
    }

    #[test]
    fn change_page_keeps_sort_and_filters() {
        let mut vm = view_model();
        let t = vm.submit_query("q", ResultType::File).unwrap();
        vm.complete_fetch(&t, items(&["http://a"], 30));
        let filters = FilterSet { language: Language::De, ..Default::default() };
        let t = vm.change_filters(filters.clone()).unwrap();
        vm.complete_fetch(&t, items(&["http://a"], 30));
        let t = vm.change_sort(SortOrder::Size).unwrap();
        vm.complete_fetch(&t, items(&["http://a"], 30));

        let t = vm.change_page(2).unwrap();
        assert_eq!(t.request.query.filters, filters);
        assert_eq!(t.request.query.sort, SortOrder::Size);
        assert_eq!(t.request.query.result_type, ResultType::File);

        let t = vm.change_result_type(ResultType::Image).unwrap();
        assert_eq!(t.request.query.page, 1);
    }

    #[test]
    fn toggle_bookmark_twice_restores_state() {
        let store = MemoryStore::new();
        let mut vm = SearchResultsViewModel::new(AnnotationStore::load(store.clone()));
        let t = vm.submit_query("q", ResultType::Web).unwrap();
        vm.complete_fetch(&t, items(&["http://a"], 1));

        let before = store.get(crate::search_const::BOOKMARKS_STORAGE_KEY);
        assert!(vm.toggle_bookmark("http://a"));
        assert!(vm.results()[0].is_bookmarked());
        assert!(!vm.toggle_bookmark("http://a"));
        assert!(!vm.results()[0].is_bookmarked());
        assert!(!vm.annotations().get("http://a").bookmarked);
        let after = store.get(crate::search_const::BOOKMARKS_STORAGE_KEY);
        assert_eq!(after.as_deref().unwrap_or("[]"), before.as_deref().unwrap_or("[]"));
    }

    #[test]
    fn blacklist_persists_across_queries() {
        let mut vm = view_model();
        let t = vm.submit_query("first", ResultType::Web).unwrap();
        vm.complete_fetch(&t, response(serde_json::json!({ "channels": [{ "items": [{ "guid": "x", "link": "http://x" }] }] })));
        assert!(vm.toggle_blacklist("x"));

        let t = vm.submit_query("second", ResultType::Web).unwrap();
        vm.complete_fetch(
            &t,
            response(serde_json::json!({ "channels": [{ "items": [{ "guid": "x", "link": "http://elsewhere" }, { "link": "http://y" }] }] })),
        );
        assert!(vm.results()[0].is_blacklisted());
        assert!(!vm.results()[0].is_bookmarked());
        assert!(!vm.results()[1].is_blacklisted());
    }

    #[test]
    fn toggles_on_ids_not_on_screen_still_persist() {
        let mut vm = view_model();
        assert!(vm.toggle_bookmark("offscreen"));
        assert!(vm.annotations().get("offscreen").bookmarked);
    }

    #[test]
    fn items_without_guid_or_link_get_ids() {
        let mut vm = view_model();
        let t = vm.submit_query("q", ResultType::Web).unwrap();
        vm.complete_fetch(&t, response(serde_json::json!({ "channels": [{ "items": [{ "title": "a" }, { "title": "b" }] }] })));
        let ids: Vec<_> = vm.results().iter().map(|r| r.id.clone()).collect();
        assert!(ids.iter().all(|id| !id.is_empty()));
        assert_ne!(ids[0], ids[1]);
        assert!(vm.toggle_bookmark(&ids[1]));
        assert!(vm.results()[1].is_bookmarked());
        assert!(!vm.results()[0].is_bookmarked());
    }

    #[test]
    fn remove_from_view_is_temporary() {
        let mut vm = view_model();
        let t = vm.submit_query("q", ResultType::Web).unwrap();
        vm.complete_fetch(&t, items(&["http://a", "http://b"], 2));
        assert!(vm.remove_from_view("http://a"));
        assert_eq!(vm.results().len(), 1);
        assert_eq!(vm.annotations().get("http://a"), Default::default());

        let t = vm.retry().unwrap();
        vm.complete_fetch(&t, items(&["http://a", "http://b"], 2));
        assert_eq!(vm.results().len(), 2);
    }

    #[test]
    fn external_search_toggle_reruns_query() {
        let mut vm = view_model();
        assert_eq!(vm.set_allow_external_search(true), None);
        let t = vm.submit_query("q", ResultType::Web).unwrap();
        assert_eq!(param(&t, "resource").as_deref(), Some("global"));
        assert_eq!(vm.set_allow_external_search(true), None);
        let t = vm.set_allow_external_search(false).unwrap();
        assert_eq!(param(&t, "resource").as_deref(), Some("local"));
        assert_eq!(param(&t, "verify").as_deref(), Some("false"));
    }

    #[test]
    fn open_query_only_fetches_when_the_query_changes() {
        let mut vm = view_model();
        let linked = SearchQuery::new("  rust  ", ResultType::Image).with_sort(SortOrder::Date).with_page(3);
        let t = vm.open_query(linked.clone()).unwrap();
        assert_eq!(t.request.query.text, "rust");
        assert_eq!(t.request.query.page, 3);
        assert_eq!(param(&t, "startRecord").as_deref(), Some("21"));
        assert_eq!(vm.open_query(linked), None);
        assert_eq!(vm.open_query(SearchQuery::new(" ", ResultType::Web)), None);
        assert!(vm.open_query(SearchQuery::new("rust", ResultType::Web)).is_some());
    }
}
