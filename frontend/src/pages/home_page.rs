use common::search_query::ResultType;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdCode, MdLock};
use dioxus_free_icons::icons::md_social_icons::MdPublic;
use dioxus_free_icons::{Icon, IconShape};

use crate::components::search_components::search_input_top_bar::SearchInputTopBar;
use crate::data_definitions::theme_state::ThemeState;


/// Home page
#[component]
pub fn HomePage() -> Element {
    let palette = use_context::<ThemeState>().palette();
    rsx! {
        Title { "Public - Private Search" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 20px;
                width: 100%;
                padding: 64px 24px;
                text-align: center;
            ",
            h1 {
                style: "font-size: 56px; font-weight: 700; margin: 0; letter-spacing: -0.02em;",
                "Public"
            }
            h2 {
                style: "font-size: 20px; font-weight: 400; margin: 0 0 16px 0; color: {palette.muted};",
                "A Private Search Engine for the Free Web"
            }
            SearchInputTopBar { original_text: String::new(), original_result_type: ResultType::Web, large: true }

            div {
                style: "margin-top: 56px; max-width: 800px;",
                h3 { style: "font-size: 24px; font-weight: 500;", "What is Public?" }
                p {
                    style: "font-size: 16px; line-height: 24px;",
                    "Public is a decentralized search engine that respects your privacy. "
                    "It does not track your searches or build a profile about you."
                }
            }

            // Feature Row
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 32px;
                    margin-top: 16px;
                ",
                FeatureBlurb {
                    icon: MdLock,
                    title: "Privacy-Focused",
                    text: "No tracking, no ads, no profiling. Just private search results.",
                }
                FeatureBlurb {
                    icon: MdPublic,
                    title: "Decentralized",
                    text: "Built on a network of independent peers, which makes censorship hard.",
                }
                FeatureBlurb {
                    icon: MdCode,
                    title: "Open Source",
                    text: "Transparent code that anyone can inspect, modify and contribute to.",
                }
            }
        }
    }
}

#[component]
fn FeatureBlurb<I: IconShape + Clone + PartialEq + 'static>(icon: I, title: String, text: String) -> Element {
    let palette = use_context::<ThemeState>().palette();
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 8px; max-width: 250px;",
            Icon { icon, style: "width: 36px; height: 36px; color: {palette.accent};" }
            h4 { style: "font-size: 18px; font-weight: 500; margin: 0;", "{title}" }
            p { style: "font-size: 14px; line-height: 20px; margin: 0; color: {palette.muted};", "{text}" }
        }
    }
}
