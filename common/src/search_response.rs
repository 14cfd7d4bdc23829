//! Raw response shape of `yacysearch.json`.
//!
//! Parsing is lenient: missing channels, missing items and items that do not
//! look like results all collapse to "fewer results" rather than an error.

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "lenient_channels")]
    pub channels: Vec<SearchChannel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchChannel {
    #[serde(rename = "totalResults", default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<LenientNumber>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub items: Vec<RawResultItem>,
}

/// One item as the engine sends it. Which fields are filled depends on the content domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RawResultItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<LenientNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<LenientNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<LenientNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizename: Option<String>,
    #[serde(rename = "pubDate", skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

/// A count the engine may send as a JSON number, a numeric string, or garbage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LenientNumber {
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl LenientNumber {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            LenientNumber::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
            LenientNumber::Text(s) => {
                let digits: String = s.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
                digits.parse::<u64>().ok()
            }
            LenientNumber::Other(_) => None,
        }
    }
}

impl From<u64> for LenientNumber {
    fn from(value: u64) -> Self {
        LenientNumber::Number(value.into())
    }
}

impl SearchChannel {
    pub fn reported_total(&self) -> Option<u64> {
        self.total_results.as_ref().and_then(LenientNumber::as_u64)
    }
}

impl SearchResponse {
    pub fn first_channel(&self) -> Option<&SearchChannel> {
        self.channels.first()
    }

    pub fn reported_total(&self) -> Option<u64> {
        self.first_channel().and_then(SearchChannel::reported_total)
    }

    /// Items of the first channel and the total the server reports for the query.
    ///
    /// The total falls back to the number of returned items when the server omits it.
    pub fn into_page(self) -> (Vec<RawResultItem>, u64) {
        let Some(channel) = self.channels.into_iter().next() else {
            return (Vec::new(), 0);
        };
        let total = channel.reported_total().unwrap_or(channel.items.len() as u64);
        (channel.items, total)
    }
}

/// Deserializes a JSON array entry by entry, skipping entries that do not fit `T`.
/// Anything other than an array is an empty list.
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(serde_json::Value::Array(values)) = value else {
        return Ok(Vec::new());
    };
    let list = values
        .into_iter()
        .filter_map(|v| match serde_json::from_value::<T>(v) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::debug!("skipping malformed entry in search response: {e}");
                None
            }
        })
        .collect();
    Ok(list)
}

/// Like [`lenient_list`], but a malformed channel stays in place as an empty
/// one, so the first channel is always the first one the engine sent.
fn lenient_channels<'de, D>(deserializer: D) -> Result<Vec<SearchChannel>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(serde_json::Value::Array(values)) = value else {
        return Ok(Vec::new());
    };
    let channels = values
        .into_iter()
        .map(|v| {
            serde_json::from_value::<SearchChannel>(v).unwrap_or_else(|e| {
                tracing::debug!("malformed channel in search response: {e}");
                SearchChannel::default()
            })
        })
        .collect();
    Ok(channels)
}
