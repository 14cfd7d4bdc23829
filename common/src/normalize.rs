//! Turns raw engine items into typed [`SearchResult`]s.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use url::Url;

use crate::{
    search_query::ResultType,
    search_response::{LenientNumber, RawResultItem, SearchResponse},
    search_result::{Annotation, ResultKind, ResultSet, SearchResult},
};

const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";


/// Normalizes the first channel of `response` into a result set.
///
/// Ids are unique within the set: a repeated id gets a `#n` suffix in order of
/// appearance, so the same response always produces the same ids.
pub fn normalize_response(
    response: SearchResponse,
    result_type: ResultType,
    annotation_for: impl Fn(&str) -> Annotation,
) -> ResultSet {
    let (raw_items, total) = response.into_page();
    let mut used_ids = HashSet::with_capacity(raw_items.len());
    let items = raw_items
        .into_iter()
        .map(|raw| {
            let mut result = normalize_item(raw, result_type);
            let base_id = result.id.clone();
            let mut n = 1;
            while !used_ids.insert(result.id.clone()) {
                n += 1;
                result.id = format!("{base_id}#{n}");
            }
            result.annotation = annotation_for(&result.id);
            result
        })
        .collect();
    ResultSet { items, total_results_reported_by_server: total }
}

/// Normalizes one item without annotations.
pub fn normalize_item(raw: RawResultItem, result_type: ResultType) -> SearchResult {
    let id = stable_id(&raw);
    let link = non_empty(raw.link.as_deref()).unwrap_or_default().to_string();
    let host = host_of(&link)
        .or_else(|| non_empty(raw.host.as_deref()).map(str::to_string))
        .unwrap_or_default();
    let title = non_empty(raw.title.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| if link.is_empty() { "Untitled".to_string() } else { link.clone() });
    let pub_date = raw.pub_date.as_deref().and_then(parse_pub_date);
    let description = raw.description.clone().unwrap_or_default();

    let kind = match result_type {
        ResultType::Image => ResultKind::Image {
            image_url: non_empty(raw.image.as_deref()).map(str::to_string).unwrap_or_else(|| link.clone()),
            width: dimension(raw.width.as_ref()),
            height: dimension(raw.height.as_ref()),
            size_label: size_label(&raw),
        },
        ResultType::File => ResultKind::File {
            description,
            file_type: non_empty(raw.mimetype.as_deref()).unwrap_or(UNKNOWN_MIME_TYPE).to_string(),
            file_size_label: size_label(&raw),
            last_modified: pub_date,
        },
        ResultType::Web | ResultType::Video | ResultType::News | ResultType::Map => ResultKind::Web { description },
    };

    SearchResult { id, title, link, host, pub_date, annotation: Annotation::default(), kind }
}

/// Server guid, else the link, else a random token.
fn stable_id(raw: &RawResultItem) -> String {
    non_empty(raw.guid.as_deref())
        .or_else(|| non_empty(raw.link.as_deref()))
        .map(str::to_string)
        .unwrap_or_else(|| format!("generated-{}", uuid::Uuid::new_v4().simple()))
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

pub fn host_of(link: &str) -> Option<String> {
    let parsed = Url::parse(link).or_else(|_| {
        if link.contains("://") {
            Err(url::ParseError::RelativeUrlWithoutBase)
        } else {
            Url::parse(&format!("http://{link}"))
        }
    });
    parsed.ok().and_then(|u| u.host_str().map(str::to_string))
}

/// Accepts RFC 2822 (YaCy), RFC 3339 and the bare ISO forms SearXNG engines send.
pub fn parse_pub_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(d) = DateTime::parse_from_rfc2822(s) {
        return Some(d.with_timezone(&Utc));
    }
    if let Ok(d) = DateTime::parse_from_rfc3339(s) {
        return Some(d.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(d) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(d.and_utc());
        }
    }
    for fmt in ["%Y-%m-%d", "%Y%m%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|d| d.and_utc());
        }
    }
    None
}

fn dimension(n: Option<&LenientNumber>) -> Option<u32> {
    n.and_then(LenientNumber::as_u64).and_then(|v| u32::try_from(v).ok()).filter(|v| *v > 0)
}

fn size_label(raw: &RawResultItem) -> Option<String> {
    if let Some(name) = non_empty(raw.sizename.as_deref()) {
        return Some(name.to_string());
    }
    let size = raw.size.as_ref()?;
    if let Some(bytes) = size.as_u64() {
        return Some(format_size_label(bytes));
    }
    match size {
        LenientNumber::Text(text) => non_empty(Some(text.as_str())).map(str::to_string),
        _ => None,
    }
}

/// `512 B`, `1.5 KB`, `3.2 MB` ...
pub fn format_size_label(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
