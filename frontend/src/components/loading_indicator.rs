use dioxus::prelude::*;

use crate::data_definitions::theme_state::ThemeState;

#[component]
pub fn LoadingIndicator() -> Element {
    let palette = use_context::<ThemeState>().palette();
    rsx! {
        div {
            style: "
                width: 100%;
                display: flex;
                align-items: center;
                justify-content: center;
                margin: 32px 0;
            ",
            div {
                aria_busy: "true",
                style: "color:{palette.muted}; font-size: 20px; border: 1px solid {palette.border}; padding: 10px 24px; border-radius: 24px;",
                "Loading..."
            }
        }
    }
}
