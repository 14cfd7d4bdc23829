use dioxus::prelude::*;

use common::search_query::SearchQuery;
use crate::{
    components::search_components::{
        search_filter_panel::SearchFilterPanel,
        search_input_top_bar::{ResultTypeTabs, SearchInputTopBar},
        search_result_list_controls::{PaginationControls, SearchResultListControls},
        search_results_view::SearchResultsView,
    },
    data_definitions::{search_state::SearchState, theme_state::ThemeState, url_param::UrlParam},
};


fn title_ellipsis(title: &str) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title.to_string()
    }
}

/// Search results page; the query lives in the url.
#[component]
pub fn SearchPage(query: UrlParam<SearchQuery>) -> Element {
    rsx! {
        Title { "Public: {title_ellipsis(&query.0.text)}" }
        SearchPageRootComponent { query: query.0.clone() }
    }
}

#[component]
fn SearchPageRootComponent(query: ReadSignal<SearchQuery>) -> Element {
    let search_state = use_context::<SearchState>();
    let palette = use_context::<ThemeState>().palette();
    let filters_open = use_signal(|| false);

    // back/forward and deep links: fetch whatever the url says, unless it is already shown
    use_effect(move || {
        search_state.open_query(query.read().clone());
    });

    let text = use_memo(move || query.read().text.clone());
    let result_type = use_memo(move || query.read().result_type);
    let filters = use_memo(move || query.read().filters.clone());

    rsx! {
        div {
            id: "x-search-page-root-component",
            style: "
                width: 100%;
                display: flex;
                flex-direction: column;
            ",
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid {palette.border};
                    background-color: {palette.surface};
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    min-height: 76px;
                    padding: 0 24px;
                    width: 100%;
                ",
                SearchInputTopBar { original_text: text(), original_result_type: result_type(), large: false }
            }

            div {
                id: "x-search-results-column",
                style: "
                    width: 100%;
                    max-width: 860px;
                    margin: 0 auto;
                    padding: 16px 24px 48px 24px;
                ",
                h2 {
                    style: "font-size: 22px; font-weight: 400; margin: 8px 0;",
                    "Results for \"{text}\""
                }
                ResultTypeTabs { current: result_type() }
                SearchResultListControls { filters_open }
                if filters_open() {
                    SearchFilterPanel {
                        original_filters: filters(),
                        onclose: move |_| {
                            let mut filters_open = filters_open;
                            filters_open.set(false);
                        },
                    }
                }
                SearchResultsView {}
                PaginationControls {}
            }
        }
    }
}
