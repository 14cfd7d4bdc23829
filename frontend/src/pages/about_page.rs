use dioxus::prelude::*;

use crate::data_definitions::theme_state::ThemeState;
use crate::routes::Route;

#[component]
pub fn AboutPage() -> Element {
    let palette = use_context::<ThemeState>().palette();
    let section_style = format!(
        "background: {}; border: 1px solid {}; border-radius: 8px; padding: 24px 28px; margin-bottom: 24px;",
        palette.surface, palette.border
    );
    rsx! {
        Title { "About Public" }
        div {
            style: "max-width: 860px; margin: 0 auto; padding: 48px 24px; line-height: 1.6;",
            h1 { style: "font-size: 40px; margin: 0 0 8px 0;", "About Public" }
            p {
                style: "font-size: 19px; color: {palette.muted}; margin: 0 0 32px 0;",
                "A private, decentralized search engine for the free web"
            }
            section {
                style: "{section_style}",
                h2 { "Our Mission" }
                p {
                    "Public aims to give relevant results without collecting data about the people searching. "
                    "Searches are answered by YaCy peers that crawl and index the web together, "
                    "so no single party controls the index."
                }
            }
            section {
                style: "{section_style}",
                h2 { "How Public Works" }
                ul {
                    style: "list-style: disc; padding-left: 24px;",
                    li { "Your query goes to a YaCy node, either its local index only or the whole peer network." }
                    li { "Bookmarks and the blacklist are stored in this browser and never sent anywhere." }
                    li { "Theme and search scope preferences are remembered locally as well." }
                }
            }
            section {
                style: "{section_style}",
                h2 { "Create Your Own Node" }
                p {
                    "Running a YaCy node adds to the shared index and makes the network more resilient. "
                    "Point this site at it with the YACY_URL setting."
                }
            }
            Link {
                to: Route::HomePage {},
                style: "color: {palette.accent};",
                "Start searching"
            }
        }
    }
}
