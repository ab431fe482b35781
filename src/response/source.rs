//! The framework-side response a conversion reads from

use bytes::Bytes;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A header value as exposed by the framework: one string or a list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderValue {
    Single(String),
    Multi(Vec<String>),
}

impl HeaderValue {
    /// The scalar value, or the first element of a list
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value.as_str()),
            Self::Multi(values) => values.first().map(String::as_str),
        }
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for HeaderValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multi(values)
    }
}

impl From<Vec<&str>> for HeaderValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Multi(values.into_iter().map(str::to_string).collect())
    }
}

/// Response headers keyed by name, in the order the framework produced them
///
/// Names are kept as given; look them up with [`header_value`] to match
/// case-insensitively.
pub type ResponseHeaders = IndexMap<String, HeaderValue>;

/// The value of the header called `name`, compared case-insensitively
pub fn header_value<'a>(headers: &'a ResponseHeaders, name: &str) -> Option<&'a HeaderValue> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}

/// Accessors a response must expose to be converted
///
/// A status of `0` means the framework never set one.
pub trait ResponseSource {
    fn status_code(&self) -> u16;

    fn headers(&self) -> ResponseHeaders;

    fn body(&self) -> Bytes;
}

impl ResponseSource for http::Response<Bytes> {
    fn status_code(&self) -> u16 {
        self.status().as_u16()
    }

    /// Names repeated in the header map become lists, the rest stay scalar.
    /// Values that are not valid UTF-8 are decoded lossily.
    fn headers(&self) -> ResponseHeaders {
        let map = http::Response::headers(self);
        let mut headers = ResponseHeaders::with_capacity(map.keys_len());

        for name in map.keys() {
            let values: Vec<String> = map
                .get_all(name)
                .iter()
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
                .collect();

            let value = match <[String; 1]>::try_from(values) {
                Ok([single]) => HeaderValue::Single(single),
                Err(values) => HeaderValue::Multi(values),
            };
            headers.insert(name.as_str().to_string(), value);
        }

        headers
    }

    fn body(&self) -> Bytes {
        http::Response::body(self).clone()
    }
}
