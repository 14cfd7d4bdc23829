//! Top navigation bar and page layout.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdInfo};
use dioxus_free_icons::icons::md_social_icons::MdPublic;
use dioxus_free_icons::{Icon, IconShape};

use crate::components::snackbar::Snackbar;
use crate::components::theme_toggle::ThemeToggle;
use crate::data_definitions::{search_state::SearchState, theme_state::ThemeState};
use crate::routes::Route;


/// Shared layout: header bar, routed page, snackbar.
#[component]
pub fn Navbar() -> Element {
    let palette = use_context::<ThemeState>().palette();
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
                background-color: {palette.background};
                color: {palette.text};
            ",

            header {
                id: "x-nav-header",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 16px;
                    height: 60px;
                    padding: 0 20px;
                    flex-shrink: 0;
                    background-color: {palette.surface};
                    border-bottom: 1px solid {palette.border};
                ",
                Link {
                    to: Route::HomePage {},
                    style: "text-decoration: none; font-size: 22px; font-weight: 500; color: {palette.accent};",
                    "YaCy Search"
                }
                NavbarLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
                NavbarLink { to: Route::AboutPage {}, icon: MdInfo, label: "About" }

                // empty space
                div { style: "flex-grow: 1;" }

                ExternalSearchToggle {}
                ThemeToggle {}
            }

            main {
                style: "flex-grow: 1; width: 100%;",
                Outlet::<Route> {}
            }

            Snackbar {}
        }
    }
}

#[component]
fn NavbarLink<I: IconShape + Clone + PartialEq + 'static>(to: Route, icon: I, label: String) -> Element {
    let palette = use_context::<ThemeState>().palette();
    rsx! {
        Link {
            to,
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 4px;
                text-decoration: none;
                color: {palette.muted};
                font-size: 15px;
            ",
            Icon { icon, style: "width: 20px; height: 20px;" }
            "{label}"
        }
    }
}

/// Switches between the local index and the whole peer network.
#[component]
fn ExternalSearchToggle() -> Element {
    let search_state = use_context::<SearchState>();
    let palette = use_context::<ThemeState>().palette();
    let route = use_route::<Route>();
    let allowed = use_memo(move || search_state.vm.read().allow_external_search());
    let (label, color) = if allowed() { ("Peer network", palette.accent) } else { ("Local index", palette.muted) };
    rsx! {
        button {
            title: "Include results from other peers",
            aria_pressed: "{allowed()}",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                background: none;
                border: 1px solid {palette.border};
                border-radius: 24px;
                padding: 4px 12px;
                color: {color};
                cursor: pointer;
            ",
            onclick: move |_| search_state.set_allow_external_search(!allowed(), &route),
            Icon { icon: MdPublic, style: "width: 20px; height: 20px;" }
            "{label}"
        }
    }
}
