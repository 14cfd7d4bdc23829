//! Filter panel: date, file type, domain and language.

use std::{fmt::Display, str::FromStr};

use common::search_query::{DateRange, FileTypeFilter, FilterSet, Language};
use dioxus::prelude::*;

use crate::data_definitions::{search_state::SearchState, theme_state::ThemeState};

/// Edits a copy of the current filters; nothing is fetched until "Apply Filters".
#[component]
pub fn SearchFilterPanel(original_filters: ReadSignal<FilterSet>, onclose: Callback<()>) -> Element {
    let search_state = use_context::<SearchState>();
    let palette = use_context::<ThemeState>().palette();
    let mut filters = use_signal(|| original_filters.read().clone());
    use_effect(move || {
        filters.set(original_filters.read().clone());
    });
    let has_changed = use_memo(move || *filters.read() != *original_filters.read());

    rsx! {
        div {
            id: "x-search-filter-panel",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: flex-end;
                gap: 16px;
                padding: 12px 16px;
                margin-bottom: 12px;
                background: {palette.surface};
                border: 1px solid {palette.border};
                border-radius: 8px;
            ",
            FilterSelect::<DateRange> {
                label: "Date",
                options: DateRange::ALL.iter().map(|o| (o.as_str(), o.label())).collect::<Vec<_>>(),
                value: filters.read().date_range,
                onchange: move |v: DateRange| filters.write().date_range = v,
            }
            FilterSelect::<FileTypeFilter> {
                label: "File Type",
                options: FileTypeFilter::ALL.iter().map(|o| (o.as_str(), o.label())).collect::<Vec<_>>(),
                value: filters.read().file_type,
                onchange: move |v: FileTypeFilter| filters.write().file_type = v,
            }
            FilterSelect::<Language> {
                label: "Language",
                options: Language::ALL.iter().map(|o| (o.as_str(), o.label())).collect::<Vec<_>>(),
                value: filters.read().language,
                onchange: move |v: Language| filters.write().language = v,
            }
            label {
                style: "display: flex; flex-direction: column; gap: 4px; font-size: 13px; color: {palette.muted};",
                "Domain"
                input {
                    r#type: "text",
                    placeholder: "example.org",
                    value: "{filters.read().domain}",
                    style: "padding: 5px 8px; border-radius: 6px; border: 1px solid {palette.border}; background: {palette.background}; color: {palette.text};",
                    oninput: move |e: Event<FormData>| filters.write().domain = e.value(),
                }
            }
            div {
                style: "display: flex; flex-direction: row; gap: 8px; margin-left: auto;",
                button {
                    style: "padding: 6px 14px; border-radius: 24px; border: 1px solid {palette.border}; background: none; color: {palette.text}; cursor: pointer;",
                    onclick: move |_| filters.set(FilterSet::default()),
                    "Reset"
                }
                button {
                    style: "padding: 6px 14px; border-radius: 24px; border: none; background: {palette.accent}; color: {palette.surface}; cursor: pointer;",
                    onclick: move |_| {
                        if has_changed() {
                            search_state.change_filters(filters.read().clone());
                        }
                        onclose(());
                    },
                    "Apply Filters"
                }
            }
        }
    }
}

#[component]
fn FilterSelect<T: FromStr + Display + Copy + PartialEq + 'static>(
    label: String,
    options: Vec<(&'static str, &'static str)>,
    value: T,
    onchange: Callback<T>,
) -> Element {
    let palette = use_context::<ThemeState>().palette();
    let current = value.to_string();
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 4px; font-size: 13px; color: {palette.muted};",
            "{label}"
            select {
                style: "padding: 5px 8px; border-radius: 6px; border: 1px solid {palette.border}; background: {palette.background}; color: {palette.text};",
                onchange: move |e: Event<FormData>| {
                    if let Ok(v) = e.value().parse::<T>() {
                        onchange(v);
                    }
                },
                for (key, text) in options {
                    option {
                        key: "{key}",
                        value: key,
                        selected: key == current,
                        "{text}"
                    }
                }
            }
        }
    }
}
