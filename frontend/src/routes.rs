use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use common::search_query::SearchQuery;

use crate::data_definitions::url_param::UrlParam;
use crate::pages::about_page::AboutPage;
use crate::pages::home_page::HomePage;
use crate::pages::not_found_page::NotFoundPage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/search/:query")]
    SearchPage { query: UrlParam<SearchQuery> },


    #[route("/about")]
    AboutPage {},

    #[end_layout]

    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },
}

impl Route {
    pub fn search_page_from_query(q: SearchQuery) -> Self {
        Self::SearchPage { query: UrlParam::from(q) }
    }

    pub fn is_search_page(&self) -> bool {
        matches!(self, Route::SearchPage { .. })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::search_query::ResultType;

    #[test]
    fn only_the_results_route_is_a_search_page() {
        assert!(Route::search_page_from_query(SearchQuery::new("rust", ResultType::Web)).is_search_page());
        assert!(!Route::HomePage {}.is_search_page());
        assert!(!Route::AboutPage {}.is_search_page());
        assert!(!Route::NotFoundPage { segments: vec!["nope".to_string()] }.is_search_page());
    }
}
