pub mod browser_store;
pub mod search_state;
pub mod theme_state;
pub mod url_param;
