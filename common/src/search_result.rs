use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};


/// User-local flags attached to a result id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Annotation {
    pub bookmarked: bool,
    pub blacklisted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Stable key, joins the result with its persisted annotation.
    pub id: String,
    pub title: String,
    pub link: String,
    pub host: String,
    pub pub_date: Option<DateTime<Utc>>,
    pub annotation: Annotation,
    #[serde(flatten)]
    pub kind: ResultKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResultKind {
    Web {
        description: String,
    },
    Image {
        image_url: String,
        width: Option<u32>,
        height: Option<u32>,
        size_label: Option<String>,
    },
    File {
        description: String,
        file_type: String,
        file_size_label: Option<String>,
        last_modified: Option<DateTime<Utc>>,
    },
}

impl SearchResult {
    pub fn is_bookmarked(&self) -> bool {
        self.annotation.bookmarked
    }

    pub fn is_blacklisted(&self) -> bool {
        self.annotation.blacklisted
    }

    pub fn description(&self) -> Option<&str> {
        match &self.kind {
            ResultKind::Web { description } | ResultKind::File { description, .. } => Some(description),
            ResultKind::Image { .. } => None,
        }
    }
}


/// The page of results currently on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ResultSet {
    pub items: Vec<SearchResult>,
    pub total_results_reported_by_server: u64,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SearchResult> {
        self.items.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut SearchResult> {
        self.items.iter_mut().find(|r| r.id == id)
    }

    /// Drops the item with `id`, returning whether one was there.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id != id);
        self.items.len() != before
    }

    /// Pages the server has for this query; never less than one.
    pub fn total_pages(&self, page_size: u64) -> u64 {
        self.total_results_reported_by_server.div_ceil(page_size.max(1)).max(1)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn web(id: &str) -> SearchResult {
        SearchResult {
            id: id.to_string(),
            title: id.to_string(),
            link: format!("http://example.org/{id}"),
            host: "example.org".to_string(),
            pub_date: None,
            annotation: Annotation::default(),
            kind: ResultKind::Web { description: String::new() },
        }
    }

    #[test]
    fn total_pages_rounds_up_and_never_hits_zero() {
        let mut set = ResultSet::default();
        assert_eq!(set.total_pages(10), 1);
        set.total_results_reported_by_server = 42;
        assert_eq!(set.total_pages(10), 5);
        set.total_results_reported_by_server = 40;
        assert_eq!(set.total_pages(10), 4);
    }

    #[test]
    fn remove_only_touches_matching_item() {
        let mut set = ResultSet { items: vec![web("a"), web("b")], total_results_reported_by_server: 2 };
        assert!(set.remove("a"));
        assert!(!set.remove("a"));
        assert_eq!(set.items.len(), 1);
        assert_eq!(set.items[0].id, "b");
    }

    #[test]
    fn kind_is_tagged_in_json() {
        let json = serde_json::to_value(web("a")).unwrap();
        assert_eq!(json["kind"], "web");
        let back: SearchResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, web("a"));
    }
}
