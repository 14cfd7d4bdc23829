//! Search result card action buttons component.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape, icons::{md_action_icons::{MdBookmark, MdBookmarkBorder, MdDelete, MdOpenInNew}, md_content_icons::MdBlock}};

use crate::data_definitions::{search_state::SearchState, theme_state::ThemeState};

/// Bookmark, blacklist, remove and open buttons of one result.
#[component]
pub fn CardActionButtons(result_id: String, link: String, bookmarked: bool, blacklisted: bool) -> Element {
    let search_state = use_context::<SearchState>();
    let bookmark_id = result_id.clone();
    let blacklist_id = result_id.clone();
    let remove_id = result_id;
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                flex-shrink: 0;
            ",
            if bookmarked {
                CardActionButton {
                    icon: MdBookmark,
                    label: "Remove bookmark",
                    active: true,
                    onclick: move |_| search_state.toggle_bookmark(&bookmark_id),
                }
            } else {
                CardActionButton {
                    icon: MdBookmarkBorder,
                    label: "Bookmark",
                    active: false,
                    onclick: move |_| search_state.toggle_bookmark(&bookmark_id),
                }
            }
            CardActionButton {
                icon: MdBlock,
                label: if blacklisted { "Remove from blacklist".to_string() } else { "Blacklist".to_string() },
                active: blacklisted,
                onclick: move |_| search_state.toggle_blacklist(&blacklist_id),
            }
            CardActionButton {
                icon: MdDelete,
                label: "Remove from results",
                active: false,
                onclick: move |_| search_state.remove_from_view(&remove_id),
            }
            CardActionLinkOpenNewTab { link }
        }
    }
}

#[component]
fn CardActionButton<I: IconShape + Clone + PartialEq + 'static>(icon: I, label: String, active: bool, onclick: Callback<()>) -> Element {
    let palette = use_context::<ThemeState>().palette();
    let color = if active { palette.accent } else { palette.muted };
    rsx! {
        button {
            title: "{label}",
            aria_label: "{label}",
            aria_pressed: "{active}",
            style: "
                width: 34px;
                height: 34px;
                display: flex;
                align-items: center;
                justify-content: center;
                background: none;
                border: 1px solid {palette.border};
                border-radius: 8px;
                color: {color};
                cursor: pointer;
            ",
            onclick: move |e: Event<MouseData>| {
                e.stop_propagation();
                onclick(());
            },
            Icon { icon, style: "width: 20px; height: 20px;" }
        }
    }
}

#[component]
fn CardActionLinkOpenNewTab(link: String) -> Element {
    let palette = use_context::<ThemeState>().palette();
    rsx! {
        a {
            title: "Open in new tab",
            href: "{link}",
            target: "_blank",
            rel: "noopener noreferrer",
            style: "
                width: 34px;
                height: 34px;
                display: flex;
                align-items: center;
                justify-content: center;
                border: 1px solid {palette.border};
                border-radius: 8px;
                color: {palette.muted};
            ",
            Icon { icon: MdOpenInNew, style: "width: 20px; height: 20px;" }
        }
    }
}
