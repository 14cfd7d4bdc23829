//! Short confirmation after bookmark and blacklist toggles.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;

use crate::data_definitions::search_state::SearchState;

#[component]
pub fn Snackbar() -> Element {
    let search_state = use_context::<SearchState>();
    let Some(message) = search_state.snackbar.read().clone() else {
        return rsx! {};
    };
    rsx! {
        div {
            key: "{message.id}",
            role: "status",
            style: "
                position: fixed;
                bottom: 24px;
                left: 50%;
                transform: translateX(-50%);
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                background-color: #323232;
                color: white;
                border-radius: 4px;
                padding: 10px 12px 10px 18px;
                box-shadow: 0 3px 6px rgba(0, 0, 0, 0.3);
                font-size: 15px;
                z-index: 10;
            ",
            "{message.text}"
            button {
                title: "Dismiss",
                style: "background: none; border: none; color: white; cursor: pointer; display: flex;",
                onclick: move |_| search_state.dismiss(),
                Icon { icon: MdClose, style: "width: 18px; height: 18px;" }
            }
        }
    }
}
