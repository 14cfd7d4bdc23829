//! Shared search query models and helpers.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::search_const::PAGE_SIZE;


#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

// Lower-case wire names, shared by serde, the route segments and the request parameters.
macro_rules! keyword_enum {
    ($name:ident, $kind:literal, { $($variant:ident => ($key:literal, $label:literal)),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            /// Human readable name for menus.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    _ => Err(UnknownVariant { kind: $kind, value: s.to_string() }),
                }
            }
        }
    };
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    #[default]
    Web,
    Image,
    Video,
    File,
    News,
    Map,
}

keyword_enum!(ResultType, "result type", {
    Web => ("web", "Web"),
    Image => ("image", "Images"),
    Video => ("video", "Videos"),
    File => ("file", "Files"),
    News => ("news", "News"),
    Map => ("map", "Maps"),
});


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Relevance,
    Date,
    Size,
}

keyword_enum!(SortOrder, "sort order", {
    Relevance => ("relevance", "Relevance"),
    Date => ("date", "Date"),
    Size => ("size", "Size"),
});


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    Any,
    Day,
    Week,
    Month,
    Year,
}

keyword_enum!(DateRange, "date range", {
    Any => ("any", "Any time"),
    Day => ("day", "Past 24 hours"),
    Week => ("week", "Past week"),
    Month => ("month", "Past month"),
    Year => ("year", "Past year"),
});


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileTypeFilter {
    #[default]
    Any,
    Pdf,
    Doc,
    Ppt,
    Xls,
    Txt,
}

keyword_enum!(FileTypeFilter, "file type", {
    Any => ("any", "Any format"),
    Pdf => ("pdf", "PDF"),
    Doc => ("doc", "Word"),
    Ppt => ("ppt", "PowerPoint"),
    Xls => ("xls", "Excel"),
    Txt => ("txt", "Text"),
});


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Any,
    En,
    De,
    Fr,
    Es,
    It,
}

keyword_enum!(Language, "language", {
    Any => ("any", "Any language"),
    En => ("en", "English"),
    De => ("de", "German"),
    Fr => ("fr", "French"),
    Es => ("es", "Spanish"),
    It => ("it", "Italian"),
});


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterSet {
    pub date_range: DateRange,
    pub file_type: FileTypeFilter,
    /// Site restriction; empty or `any` means no restriction.
    pub domain: String,
    pub language: Language,
}

impl FilterSet {
    pub fn domain_filter(&self) -> Option<&str> {
        let domain = self.domain.trim();
        if domain.is_empty() || domain.eq_ignore_ascii_case("any") {
            None
        } else {
            Some(domain)
        }
    }

    pub fn is_any(&self) -> bool {
        self.date_range == DateRange::Any
            && self.file_type == FileTypeFilter::Any
            && self.domain_filter().is_none()
            && self.language == Language::Any
    }
}


/// Everything the engine needs to produce one page of results.
///
/// Treated as a value: the `with_*` helpers return a new query. Any change other
/// than the page itself starts over at page 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub text: String,
    pub result_type: ResultType,
    pub sort: SortOrder,
    pub filters: FilterSet,
    pub page: u64,
    pub page_size: u64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            result_type: ResultType::default(),
            sort: SortOrder::default(),
            filters: FilterSet::default(),
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, result_type: ResultType) -> Self {
        Self { text: text.into(), result_type, ..Default::default() }
    }

    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self { text: text.into(), page: 1, ..self.clone() }
    }

    pub fn with_result_type(&self, result_type: ResultType) -> Self {
        Self { result_type, page: 1, ..self.clone() }
    }

    pub fn with_sort(&self, sort: SortOrder) -> Self {
        Self { sort, page: 1, ..self.clone() }
    }

    pub fn with_filters(&self, filters: FilterSet) -> Self {
        Self { filters, page: 1, ..self.clone() }
    }

    pub fn with_page(&self, page: u64) -> Self {
        Self { page: page.max(1), ..self.clone() }
    }

    pub fn with_page_size(&self, page_size: u64) -> Self {
        Self { page_size: page_size.max(1), page: 1, ..self.clone() }
    }

    /// 1-based index of the first record of the current page.
    pub fn start_record(&self) -> u64 {
        (self.page.max(1) - 1) * self.page_size.max(1) + 1
    }
}
