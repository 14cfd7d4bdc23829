use common::preferences::ThemeType;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_image_icons::{MdBrightness2, MdPalette, MdWbSunny};

use crate::data_definitions::theme_state::ThemeState;

#[component]
pub fn ThemeToggle() -> Element {
    let theme_state = use_context::<ThemeState>();
    let palette = theme_state.palette();
    let theme = *theme_state.theme.read();
    let icon_style = "width: 22px; height: 22px;";
    rsx! {
        button {
            title: "Theme: {theme.label()}",
            style: "
                width: 36px;
                height: 36px;
                display: flex;
                align-items: center;
                justify-content: center;
                background: none;
                border: 1px solid {palette.border};
                border-radius: 50%;
                color: {palette.text};
                cursor: pointer;
            ",
            onclick: move |_| theme_state.cycle(),
            {match theme {
                ThemeType::Light => rsx! { Icon { icon: MdWbSunny, style: icon_style } },
                ThemeType::Dark => rsx! { Icon { icon: MdBrightness2, style: icon_style } },
                ThemeType::Sepia => rsx! { Icon { icon: MdPalette, style: icon_style } },
            }}
        }
    }
}
