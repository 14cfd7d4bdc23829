use common::search_query::ResultType;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_editor_icons::MdInsertDriveFile, md_image_icons::MdImage, md_social_icons::MdPublic}};

use crate::data_definitions::{search_state::SearchState, theme_state::ThemeState};

/// Result types offered next to the search box.
pub const SEARCH_BOX_RESULT_TYPES: [ResultType; 3] = [ResultType::Web, ResultType::Image, ResultType::File];

/// Search box. Enter or the search button submits a fresh query.
#[component]
pub fn SearchInputTopBar(original_text: ReadSignal<String>, original_result_type: ReadSignal<ResultType>, large: bool) -> Element {
    let search_state = use_context::<SearchState>();
    let palette = use_context::<ThemeState>().palette();
    let mut text = use_signal(|| original_text.read().clone());
    let mut result_type = use_signal(|| *original_result_type.read());
    // navigation does not reset our signals, the props do
    use_effect(move || {
        text.set(original_text.read().clone());
        result_type.set(*original_result_type.read());
    });
    let can_submit = use_memo(move || !text.read().trim().is_empty());
    let search_button_color = if can_submit() { palette.accent } else { palette.muted };
    let trigger_search = move |_: ()| {
        if can_submit() {
            search_state.submit(&text.read(), *result_type.read());
        }
    };
    let (height, font_size, width) = if large { (54, 20, "min(640px, 100%)") } else { (44, 17, "min(560px, 100%)") };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px; width: {width};",
            div {
                id: "x-search-input-search-box",
                style: "
                    display: flex;
                    align-items: center;
                    gap: 12px;
                    background-color: {palette.surface};
                    border-radius: 9999px;
                    padding: 0 14px;
                    height: {height}px;
                    color: {palette.text};
                    border: 1px solid {palette.border};
                    box-shadow: 0 1px 4px rgba(0, 0, 0, 0.08);
                    width: 100%;
                ",
                button {
                    title: "Search",
                    style: "border: none; background: none; cursor: pointer; display: flex;",
                    onclick: move |_| trigger_search(()),
                    Icon { icon: MdSearch, style: "width: 22px; height: 22px; color:{search_button_color};" }
                }
                input {
                    r#type: "search",
                    placeholder: "Search the free web",
                    aria_label: "Search query",
                    style: "
                        flex: 1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: {palette.text};
                        font-size: {font_size}px;
                    ",
                    value: "{text}",
                    oninput: move |event: Event<FormData>| text.set(event.value()),
                    onkeydown: move |event: Event<KeyboardData>| {
                        if event.key() == Key::Enter {
                            trigger_search(());
                        }
                    },
                }
            }
            if large {
                div {
                    style: "display: flex; flex-direction: row; justify-content: center; gap: 8px;",
                    for option in SEARCH_BOX_RESULT_TYPES {
                        ResultTypeChip {
                            key: "{option}",
                            result_type: option,
                            selected: *result_type.read() == option,
                            onclick: move |t: ResultType| result_type.set(t),
                        }
                    }
                }
            }
        }
    }
}

/// Tabs above the result list; switching keeps the text and restarts at page 1.
#[component]
pub fn ResultTypeTabs(current: ReadSignal<ResultType>) -> Element {
    let search_state = use_context::<SearchState>();
    rsx! {
        div {
            role: "tablist",
            style: "display: flex; flex-direction: row; gap: 8px; margin: 12px 0;",
            for option in SEARCH_BOX_RESULT_TYPES {
                ResultTypeChip {
                    key: "{option}",
                    result_type: option,
                    selected: *current.read() == option,
                    onclick: move |t: ResultType| {
                        if t != *current.peek() {
                            search_state.change_result_type(t);
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn ResultTypeChip(result_type: ResultType, selected: bool, onclick: Callback<ResultType>) -> Element {
    let palette = use_context::<ThemeState>().palette();
    let (background, color) = if selected { (palette.accent, palette.surface) } else { ("transparent", palette.text) };
    let icon_style = "width: 18px; height: 18px;";
    rsx! {
        button {
            role: "tab",
            aria_selected: "{selected}",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 5px 14px;
                border-radius: 24px;
                border: 1px solid {palette.border};
                background: {background};
                color: {color};
                font-size: 14px;
                cursor: pointer;
            ",
            onclick: move |_| onclick(result_type),
            {match result_type {
                ResultType::Image => rsx! { Icon { icon: MdImage, style: icon_style } },
                ResultType::File => rsx! { Icon { icon: MdInsertDriveFile, style: icon_style } },
                _ => rsx! { Icon { icon: MdPublic, style: icon_style } },
            }}
            "{result_type.label()}"
        }
    }
}
