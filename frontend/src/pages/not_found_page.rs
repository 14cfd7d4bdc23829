use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Title { "Page not found" }
        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 16px; padding: 64px 24px; font-family: Roboto, sans-serif;",
            h1 { style: "font-size: 36px; margin: 0;", "Page not found" }
            p { style: "color: rgba(0, 0, 0, 0.6);", "Nothing lives at /{path}" }
            Link { to: Route::HomePage {}, "Return to Home Page" }
        }
    }
}
