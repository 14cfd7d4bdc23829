//! Constants shared by the search client crates.

/// Results requested per page when the user has not picked a page size.
pub const PAGE_SIZE: u64 = 10;

/// The only error text ever shown for a failed fetch.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch search results";

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

pub const DEFAULT_YACY_URL: &str = "http://localhost:8090";
pub const DEFAULT_SEARXNG_URL: &str = "http://localhost:8888";

pub const THEME_STORAGE_KEY: &str = "theme";
pub const EXTERNAL_SEARCH_STORAGE_KEY: &str = "allowExternalSearch";
pub const BOOKMARKS_STORAGE_KEY: &str = "bookmarkedItems";
pub const BLACKLIST_STORAGE_KEY: &str = "blacklistedItems";
