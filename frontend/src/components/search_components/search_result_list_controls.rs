//! Controls above and below the result list: range label, sort menu, filter toggle, pagination.

use common::search_query::SortOrder;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape, icons::{md_content_icons::{MdFilterList, MdSort}, md_navigation_icons::{MdArrowBack, MdArrowForward}}};

use crate::data_definitions::{search_state::SearchState, theme_state::ThemeState};

/// "Showing a-b of N results" with the sort and filter buttons.
#[component]
pub fn SearchResultListControls(filters_open: Signal<bool>) -> Element {
    let mut filters_open = filters_open;
    let search_state = use_context::<SearchState>();
    let palette = use_context::<ThemeState>().palette();
    let range_txt = use_memo(move || {
        let vm = search_state.vm.read();
        vm.showing_range().map(|(first, last)| format!("Showing {first}-{last} of {} results", with_thousands(vm.total_results())))
    });
    let has_query = use_memo(move || search_state.vm.read().query().is_some());
    if !has_query() {
        return rsx! {};
    }
    rsx! {
        div {
            id: "x-search-results-controls-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                margin-bottom: 8px;
                width: 100%;
            ",
            if let Some(range_txt) = range_txt() {
                span {
                    style: "font-size: 14px; color: {palette.muted};",
                    "{range_txt}"
                }
            }
            // empty space
            div { style: "flex-grow: 1;" }
            SortMenu {}
            PillButton {
                icon: MdFilterList,
                label: "Filter",
                onclick: move |_| filters_open.toggle(),
            }
        }
    }
}

fn with_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[component]
fn SortMenu() -> Element {
    let search_state = use_context::<SearchState>();
    let palette = use_context::<ThemeState>().palette();
    let mut is_expanded = use_signal(|| false);
    let current_sort = use_memo(move || search_state.vm.read().query().map(|q| q.sort).unwrap_or_default());
    rsx! {
        div {
            style: "position: relative;",
            PillButton {
                icon: MdSort,
                label: "Sort",
                onclick: move |_| is_expanded.toggle(),
            }
            if is_expanded() {
                ul {
                    role: "menu",
                    style: "
                        position: absolute;
                        right: 0;
                        top: 38px;
                        min-width: 160px;
                        background: {palette.surface};
                        border: 1px solid {palette.border};
                        border-radius: 8px;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                        padding: 4px 0;
                        z-index: 5;
                    ",
                    for sort in SortOrder::ALL.iter().copied() {
                        SortMenuItem {
                            key: "{sort}",
                            sort,
                            selected: sort == current_sort(),
                            onselect: move |sort: SortOrder| {
                                is_expanded.set(false);
                                if sort != current_sort() {
                                    search_state.change_sort(sort);
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SortMenuItem(sort: SortOrder, selected: bool, onselect: Callback<SortOrder>) -> Element {
    let palette = use_context::<ThemeState>().palette();
    let (weight, color) = if selected { (600, palette.accent) } else { (400, palette.text) };
    rsx! {
        li {
            role: "menuitemradio",
            aria_checked: "{selected}",
            style: "
                padding: 8px 16px;
                cursor: pointer;
                font-weight: {weight};
                color: {color};
            ",
            onclick: move |_| onselect(sort),
            "{sort.label()}"
        }
    }
}

#[component]
fn PillButton<I: IconShape + Clone + PartialEq + 'static>(icon: I, label: String, onclick: Callback<()>) -> Element {
    let palette = use_context::<ThemeState>().palette();
    rsx! {
        button {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 5px 14px;
                border-radius: 24px;
                border: 1px solid {palette.border};
                background: none;
                color: {palette.accent};
                font-size: 14px;
                cursor: pointer;
            ",
            onclick: move |_| onclick(()),
            Icon { icon, style: "width: 18px; height: 18px;" }
            "{label}"
        }
    }
}


#[component]
pub fn PaginationControls() -> Element {
    let search_state = use_context::<SearchState>();
    let palette = use_context::<ThemeState>().palette();
    let current_page = use_memo(move || search_state.vm.read().current_page());
    let max_pages = use_memo(move || search_state.vm.read().total_pages());
    let can_go_to_previous_page = use_memo(move || current_page() > 1);
    let can_go_to_next_page = use_memo(move || current_page() < max_pages());

    if max_pages() <= 1 {
        return rsx! {};
    }
    rsx! {
        nav {
            aria_label: "Pagination",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
                margin: 24px 0;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| search_state.change_page(current_page() - 1),
            }
            div {
                style: "font-size: 16px; color: {palette.text};",
                "{current_page()}"
                span {
                    style: "color: {palette.muted};",
                    " / {max_pages()}"
                }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !can_go_to_next_page(),
                onclick: move |_| search_state.change_page(current_page() + 1),
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let palette = use_context::<ThemeState>().palette();
    let btn_color = if *disabled.read() { palette.border } else { palette.text };
    let btn_cursor = if *disabled.read() { "not-allowed" } else { "pointer" };
    rsx! {
        button {
            title: "{label}",
            aria_label: "{label}",
            disabled: *disabled.read(),
            style: "
                width: 36px;
                height: 36px;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {palette.surface};
                border: 1px solid {palette.border};
                border-radius: 8px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon, style: "width: 24px; height: 24px; color: {btn_color};" }
        }
    }
}
