//! Error boundary components for rendering failures.

use dioxus::prelude::*;

use crate::data_definitions::theme_state::ThemeState;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    h1 {
                        style: "color:#B42318; font-size: 44px; border: 1px solid #B42318; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Something went wrong",
                    }
                    p {
                        style: "color:#7A271A; font-size: 20px; padding: 10px; margin: 15px;",
                        "Boundary: {boundary_name}"
                    }
                    a {
                        href: "/",
                        style: "color:#367ED8; font-size: 20px; border: 1px solid #367ED8; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Return to Home Page"
                    }
                    pre {
                        style: "border: 1px solid #B42318; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{err:#?}"
                    }
                }
            },
            children
        }
    }
}

/// Catches render failures of one part of a page and offers to re-render it.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ErrorAlert {
                        message: error_txt,
                        button {
                            style: "font-size: 15px; padding: 6px 14px; border-radius: 24px; border: 1px solid currentColor; background: none; color: inherit; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

/// Inline error box, with optional actions as children.
#[component]
pub fn ErrorAlert(message: ReadSignal<String>, children: Element) -> Element {
    let palette = use_context::<ThemeState>().palette();
    rsx! {
        div {
            role: "alert",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 16px;
                color: {palette.error};
                border: 1px solid {palette.error};
                border-radius: 8px;
                padding: 12px 16px;
                margin: 16px 0;
            ",
            span {
                style: "flex-grow: 1; white-space: pre-wrap;",
                "{message}"
            }
            {children}
        }
    }
}
