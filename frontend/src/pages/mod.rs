pub mod about_page;
pub mod home_page;
pub mod not_found_page;
pub mod search_page;
