//! Search result item card component.

use common::search_result::{ResultKind, SearchResult};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdLanguage, md_editor_icons::MdInsertDriveFile}};

use crate::{components::search_components::card_action_buttons::CardActionButtons, data_definitions::theme_state::ThemeState};

/// Web or file result, one per row.
#[component]
pub fn SearchResultItemCard(result: ReadSignal<SearchResult>, item_index: u64) -> Element {
    let palette = use_context::<ThemeState>().palette();
    let SearchResult { id, title, link, host, pub_date, annotation, kind } = result.read().clone();
    let opacity = if annotation.blacklisted { "0.5" } else { "1" };
    let date_txt = pub_date.map(|d| d.format("%b %-d, %Y").to_string());
    let is_file = matches!(kind, ResultKind::File { .. });

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                background: {palette.surface};
                border: 1px solid {palette.border};
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 0;
                width: 100%;
                opacity: {opacity};
            ",
            // Row 1: INDEX - ICON - HOST - DATE
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                    font-size: 13px;
                    color: {palette.muted};
                    min-width: 0;
                ",
                span { "{item_index}." }
                if is_file {
                    Icon { icon: MdInsertDriveFile, style: "width: 16px; height: 16px; flex-shrink: 0;" }
                } else {
                    Icon { icon: MdLanguage, style: "width: 16px; height: 16px; flex-shrink: 0;" }
                }
                span {
                    style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{host}"
                }
                if let Some(date_txt) = date_txt {
                    span { "· {date_txt}" }
                }
                if annotation.blacklisted {
                    span { style: "font-style: italic;", "· blacklisted" }
                }
            }
            // Row 2: TITLE - BUTTONS
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: flex-start;
                    justify-content: space-between;
                    gap: 12px;
                ",
                a {
                    href: "{link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    style: "
                        font-size: 19px;
                        line-height: 26px;
                        color: {palette.accent};
                        text-decoration: none;
                        overflow-wrap: anywhere;
                        min-width: 0;
                    ",
                    "{title}"
                }
                CardActionButtons { result_id: id, link: link.clone(), bookmarked: annotation.bookmarked, blacklisted: annotation.blacklisted }
            }
            // Row 3: SNIPPET / FILE DETAILS
            {match kind {
                ResultKind::Web { description } => rsx! { CardSnippet { description } },
                ResultKind::File { description, file_type, file_size_label, last_modified } => {
                    let modified_txt = last_modified.map(|d| d.format("%Y-%m-%d").to_string());
                    rsx! {
                        CardSnippet { description }
                        div {
                            style: "display: flex; flex-direction: row; gap: 16px; font-size: 13px; color: {palette.muted};",
                            span { "{file_type}" }
                            if let Some(size) = file_size_label {
                                span { "{size}" }
                            }
                            if let Some(modified_txt) = modified_txt {
                                span { "Modified {modified_txt}" }
                            }
                        }
                    }
                }
                ResultKind::Image { .. } => rsx! {},
            }}
        }
    }
}

#[component]
fn CardSnippet(description: String) -> Element {
    if description.trim().is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            style: "
                font-size: 15px;
                line-height: 22px;
                overflow: hidden;
                display: -webkit-box;
                -webkit-line-clamp: 3;
                -webkit-box-orient: vertical;
            ",
            "{description}"
        }
    }
}

/// Image result as a grid tile.
#[component]
pub fn ImageResultTile(result: ReadSignal<SearchResult>) -> Element {
    let palette = use_context::<ThemeState>().palette();
    let SearchResult { id, title, link, host, annotation, kind, .. } = result.read().clone();
    let ResultKind::Image { image_url, width, height, size_label } = kind else {
        return rsx! {};
    };
    let dimensions = match (width, height) {
        (Some(w), Some(h)) => Some(format!("{w} × {h}")),
        _ => None,
    };
    let opacity = if annotation.blacklisted { "0.5" } else { "1" };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                background: {palette.surface};
                border: 1px solid {palette.border};
                border-radius: 8px;
                overflow: hidden;
                opacity: {opacity};
            ",
            a {
                href: "{link}",
                target: "_blank",
                rel: "noopener noreferrer",
                img {
                    src: "{image_url}",
                    alt: "{title}",
                    style: "width: 100%; height: 160px; object-fit: cover; display: block;",
                }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 4px; padding: 8px 10px;",
                a {
                    href: "{link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    style: "
                        font-size: 14px;
                        color: {palette.accent};
                        text-decoration: none;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    "{title}"
                }
                span {
                    style: "font-size: 12px; color: {palette.muted}; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{host}"
                    if let Some(dimensions) = dimensions {
                        " · {dimensions}"
                    }
                    if let Some(size_label) = size_label {
                        " · {size_label}"
                    }
                }
                CardActionButtons { result_id: id, link: link.clone(), bookmarked: annotation.bookmarked, blacklisted: annotation.blacklisted }
            }
        }
    }
}
