pub mod error_boundary;
pub mod loading_indicator;
pub mod navbar;
pub mod search_components;
pub mod snackbar;
pub mod theme_toggle;
