//! The result list in each of its states.

use common::{search_query::ResultType, view_model::ViewStatus};
use dioxus::prelude::*;

use crate::{
    components::{
        error_boundary::{ComponentErrorBoundary, ErrorAlert},
        loading_indicator::LoadingIndicator,
        search_components::search_result_item_card::{ImageResultTile, SearchResultItemCard},
    },
    data_definitions::search_state::SearchState,
};

#[component]
pub fn SearchResultsView() -> Element {
    let search_state = use_context::<SearchState>();
    let status = use_memo(move || search_state.vm.read().status());
    let query_text = use_memo(move || search_state.vm.read().query().map(|q| q.text.clone()).unwrap_or_default());

    match status() {
        ViewStatus::Idle => rsx! {
            p { style: "margin: 32px 0; text-align: center;", "Please enter a search query" }
        },
        ViewStatus::Loading => rsx! { LoadingIndicator {} },
        ViewStatus::Error => {
            let message = search_state.vm.read().error().unwrap_or_default().to_string();
            rsx! {
                ErrorAlert {
                    message,
                    button {
                        style: "font-size: 14px; padding: 5px 14px; border-radius: 24px; border: 1px solid currentColor; background: none; color: inherit; cursor: pointer;",
                        onclick: move |_| search_state.retry(),
                        "Retry"
                    }
                }
            }
        }
        ViewStatus::NoResults => rsx! {
            p { style: "margin: 32px 0;", "No results found for \"{query_text}\"" }
        },
        ViewStatus::Results => rsx! {
            ComponentErrorBoundary {
                ResultList {}
            }
        },
    }
}

#[component]
fn ResultList() -> Element {
    let search_state = use_context::<SearchState>();
    let vm = search_state.vm.read();
    let results = vm.results().to_vec();
    let first_index = vm.showing_range().map_or(1, |(first, _)| first);
    let is_image_grid = vm.query().is_some_and(|q| q.result_type == ResultType::Image);
    drop(vm);

    if is_image_grid {
        return rsx! {
            ul {
                id: "x-search-image-grid",
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
                    gap: 16px;
                    width: 100%;
                ",
                for result in results {
                    li {
                        key: "{result.id}",
                        ImageResultTile { result: result.clone() }
                    }
                }
            }
        };
    }
    rsx! {
        ul {
            id: "x-search-results-list",
            style: "width: 100%;",
            for (i, result) in results.into_iter().enumerate() {
                li {
                    key: "{result.id}",
                    SearchResultItemCard { result: result.clone(), item_index: first_index + i as u64 }
                }
            }
        }
    }
}
