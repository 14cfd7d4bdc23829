//! Route segments carrying a whole serde value.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};


/// A value encoded into one path segment as URL-safe base64 of its CBOR form.
/// The router only needs `Display`, `FromStr` and `Default`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(&self.0, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE_NO_PAD.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum UrlParamError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl Display for UrlParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "invalid base64 in url: {}", err),
            Self::Cbor(err) => write!(f, "invalid url state: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = UrlParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = URL_SAFE_NO_PAD
            .decode(s.trim_end_matches('=').as_bytes())
            .map_err(UrlParamError::Base64)?;
        let value = ciborium::from_reader(std::io::Cursor::new(bytes)).map_err(UrlParamError::Cbor)?;
        Ok(UrlParam(value))
    }
}
