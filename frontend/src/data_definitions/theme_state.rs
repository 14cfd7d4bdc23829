//! Colour theme, persisted under the `theme` key.

use common::preferences::{Preferences, ThemeType};
use dioxus::{logger::tracing, prelude::*};

use crate::data_definitions::browser_store::BrowserStore;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
    pub error: &'static str,
}

pub fn palette(theme: ThemeType) -> ThemePalette {
    match theme {
        ThemeType::Light => ThemePalette {
            background: "#F8FCFF",
            surface: "white",
            text: "#111827",
            muted: "rgba(0, 0, 0, 0.55)",
            accent: "#367ED8",
            border: "rgba(0, 0, 0, 0.12)",
            error: "#B42318",
        },
        ThemeType::Dark => ThemePalette {
            background: "#1C212D",
            surface: "#262C3A",
            text: "#E5E7EB",
            muted: "rgba(255, 255, 255, 0.6)",
            accent: "#7AB4FF",
            border: "rgba(255, 255, 255, 0.14)",
            error: "#FF8A80",
        },
        ThemeType::Sepia => ThemePalette {
            background: "#F4ECD8",
            surface: "#FBF5E6",
            text: "#433422",
            muted: "rgba(67, 52, 34, 0.6)",
            accent: "#8B5A2B",
            border: "rgba(67, 52, 34, 0.18)",
            error: "#9B2C2C",
        },
    }
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: Signal<ThemeType>,
}

impl ThemeState {
    /// Starts out light; the stored theme is applied once the app is mounted in the browser.
    pub fn new() -> Self {
        Self { theme: Signal::new(ThemeType::default()) }
    }

    pub fn palette(&self) -> ThemePalette {
        palette(*self.theme.read())
    }

    pub fn restore(mut self) {
        let stored = Preferences::new(BrowserStore::default()).theme();
        if *self.theme.peek() != stored {
            self.theme.set(stored);
        }
    }

    pub fn set_theme(mut self, theme: ThemeType) {
        self.theme.set(theme);
        if let Err(e) = Preferences::new(BrowserStore::default()).set_theme(theme) {
            tracing::warn!("{e}");
        }
    }

    /// Light, dark, sepia, light, ...
    pub fn cycle(self) {
        let current = *self.theme.peek();
        let idx = ThemeType::ALL.iter().position(|t| *t == current).unwrap_or(0);
        self.set_theme(ThemeType::ALL[(idx + 1) % ThemeType::ALL.len()]);
    }
}
