//! App-wide search state: the results view-model plus the snackbar.
//!
//! Every view-model operation that yields a [`FetchTicket`] goes through
//! [`SearchState::dispatch`], which points the address bar at the new query
//! and runs the request as a detached task. The view-model drops whatever
//! arrives for a superseded ticket.

use common::{
    annotations::AnnotationStore,
    preferences::Preferences,
    search_fetch::SearchFetchError,
    search_query::{FilterSet, ResultType, SearchQuery, SortOrder},
    view_model::{FetchOutcome, FetchTicket, SearchResultsViewModel},
};
use dioxus::{core::spawn_forever, logger::tracing, prelude::*};

use crate::{api::search_api::search_for_results, data_definitions::browser_store::BrowserStore, routes::Route};

pub type ResultsViewModel = SearchResultsViewModel<BrowserStore>;

#[derive(Debug, Clone, PartialEq)]
pub struct SnackbarMessage {
    pub id: u64,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct SearchState {
    pub vm: Signal<ResultsViewModel>,
    pub snackbar: Signal<Option<SnackbarMessage>>,
}

impl SearchState {
    pub fn new() -> Self {
        let vm = SearchResultsViewModel::new(AnnotationStore::load(BrowserStore::default()));
        Self { vm: Signal::new(vm), snackbar: Signal::new(None) }
    }

    /// Applies stored preferences once running in the browser.
    pub fn restore_preferences(mut self) {
        let allow = Preferences::new(BrowserStore::default()).allow_external_search();
        let ticket = self.vm.write().set_allow_external_search(allow);
        if let Some(ticket) = ticket {
            self.fetch(ticket);
        }
    }

    /// Moves the address bar to the ticket's query and fetches it.
    pub fn dispatch(self, ticket: Option<FetchTicket>) {
        let Some(ticket) = ticket else { return };
        navigator().push(Route::search_page_from_query(ticket.request.query.clone()));
        self.fetch(ticket);
    }

    pub fn fetch(self, ticket: FetchTicket) {
        let mut vm = self.vm;
        spawn_forever(async move {
            let outcome = search_for_results(ticket.request.clone()).await.map_err(fetch_error);
            if vm.write().complete_fetch(&ticket, outcome) == FetchOutcome::Discarded {
                tracing::debug!("search response #{} arrived after a newer request", ticket.seq);
            }
        });
    }

    pub fn submit(mut self, text: &str, result_type: ResultType) {
        let ticket = self.vm.write().submit_query(text, result_type);
        self.dispatch(ticket);
    }

    /// Shows a query taken from the address bar, without touching the history.
    pub fn open_query(mut self, query: SearchQuery) {
        let ticket = self.vm.write().open_query(query);
        if let Some(ticket) = ticket {
            self.fetch(ticket);
        }
    }

    pub fn change_sort(mut self, sort: SortOrder) {
        let ticket = self.vm.write().change_sort(sort);
        self.dispatch(ticket);
    }

    pub fn change_filters(mut self, filters: FilterSet) {
        let ticket = self.vm.write().change_filters(filters);
        self.dispatch(ticket);
    }

    pub fn change_result_type(mut self, result_type: ResultType) {
        let ticket = self.vm.write().change_result_type(result_type);
        self.dispatch(ticket);
    }

    pub fn change_page(mut self, page: u64) {
        let ticket = self.vm.write().change_page(page);
        self.dispatch(ticket);
    }

    pub fn retry(mut self) {
        let ticket = self.vm.write().retry();
        if let Some(ticket) = ticket {
            self.fetch(ticket);
        }
    }

    /// Persists the scope and re-runs a held query. The address bar only
    /// follows when `route` is already showing results.
    pub fn set_allow_external_search(mut self, allow: bool, route: &Route) {
        if let Err(e) = Preferences::new(BrowserStore::default()).set_allow_external_search(allow) {
            tracing::warn!("{e}");
        }
        let ticket = self.vm.write().set_allow_external_search(allow);
        if route.is_search_page() {
            self.dispatch(ticket);
        } else if let Some(ticket) = ticket {
            self.fetch(ticket);
        }
    }

    pub fn toggle_bookmark(mut self, id: &str) {
        let now = self.vm.write().toggle_bookmark(id);
        self.notify(if now { "Bookmark added" } else { "Bookmark removed" });
    }

    pub fn toggle_blacklist(mut self, id: &str) {
        let now = self.vm.write().toggle_blacklist(id);
        self.notify(if now { "Added to blacklist" } else { "Removed from blacklist" });
    }

    pub fn remove_from_view(mut self, id: &str) {
        if self.vm.write().remove_from_view(id) {
            self.notify("Removed from results");
        }
    }

    pub fn notify(mut self, text: &str) {
        let id = self.snackbar.peek().as_ref().map_or(1, |m| m.id + 1);
        self.snackbar.set(Some(SnackbarMessage { id, text: text.to_string() }));
        self.dismiss_later(id);
    }

    pub fn dismiss(mut self) {
        self.snackbar.set(None);
    }

    #[cfg(target_arch = "wasm32")]
    fn dismiss_later(self, id: u64) {
        const SNACKBAR_MILLIS: u32 = 3000;
        let mut snackbar = self.snackbar;
        spawn_forever(async move {
            gloo_timers::future::TimeoutFuture::new(SNACKBAR_MILLIS).await;
            if snackbar.peek().as_ref().is_some_and(|m| m.id == id) {
                snackbar.set(None);
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn dismiss_later(self, _id: u64) {}
}

fn fetch_error(e: ServerFnError) -> SearchFetchError {
    let message = e.to_string();
    if message.contains("timed out") {
        SearchFetchError::Timeout
    } else {
        SearchFetchError::Network(message)
    }
}
