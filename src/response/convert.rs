//! Conversion from a framework response to the function-as-a-service reply

use crate::constants::{headers::CONTENT_TYPE_KEY, DEFAULT_STATUS_CODE};
use crate::error::{Error, Result};
use crate::log_messages::response as log;
use crate::response::binary::BinaryClassifier;
use crate::response::source::{header_value, ResponseHeaders, ResponseSource};
use base64::Engine;
use nutype::nutype;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Status code of a converted reply, never zero
///
/// A framework status of `0` means none was set and becomes 200.
#[nutype(
    sanitize(with = |code: u16| if code == 0 { DEFAULT_STATUS_CODE } else { code }),
    derive(
        Clone,
        Copy,
        Debug,
        Display,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        From
    )
)]
pub struct StatusCode(u16);

impl StatusCode {
    pub fn ok() -> Self {
        Self::new(DEFAULT_STATUS_CODE)
    }
}

/// How a body buffer is turned into the reply string
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyEncoding {
    Base64,
    Utf8,
}

impl BodyEncoding {
    pub fn for_binary(is_binary: bool) -> Self {
        if is_binary {
            Self::Base64
        } else {
            Self::Utf8
        }
    }

    /// Invalid UTF-8 sequences are replaced with U+FFFD
    pub fn encode(self, body: &[u8]) -> String {
        match self {
            Self::Base64 => base64::engine::general_purpose::STANDARD.encode(body),
            Self::Utf8 => String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// Like [`BodyEncoding::encode`] but refuses text bodies that are not UTF-8
    pub fn encode_strict(self, body: &[u8]) -> Result<String> {
        match self {
            Self::Base64 => Ok(base64::engine::general_purpose::STANDARD.encode(body)),
            Self::Utf8 => String::from_utf8(body.to_vec()).map_err(Error::from),
        }
    }
}

/// Reply shape expected by the hosting platform
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedResponse {
    pub status_code: StatusCode,
    pub headers: ResponseHeaders,
    pub body: String,
    pub is_base64_encoded: bool,
}

fn first_content_type(headers: &ResponseHeaders) -> Option<&str> {
    header_value(headers, CONTENT_TYPE_KEY).and_then(|value| value.first())
}

fn prepare<R, C>(response: &R, classifier: &C) -> (StatusCode, ResponseHeaders, BodyEncoding)
where
    R: ResponseSource + ?Sized,
    C: BinaryClassifier + ?Sized,
{
    let status_code = StatusCode::new(response.status_code());
    let headers = response.headers();
    let content_type = first_content_type(&headers);
    let is_binary = classifier.is_binary(content_type);

    debug!(
        status_code = status_code.into_inner(),
        content_type,
        is_binary,
        "{}",
        log::CONVERTING
    );

    (status_code, headers, BodyEncoding::for_binary(is_binary))
}

/// Convert a framework response into the platform reply
///
/// The first `content-type` value (name matched in any case) decides the encoding: bodies the
/// classifier calls binary are base64-encoded, everything else is text.
pub fn convert_res<R, C>(response: &R, classifier: &C) -> ConvertedResponse
where
    R: ResponseSource + ?Sized,
    C: BinaryClassifier + ?Sized,
{
    let (status_code, headers, encoding) = prepare(response, classifier);
    let body = encoding.encode(&response.body());

    ConvertedResponse {
        status_code,
        headers,
        body,
        is_base64_encoded: encoding == BodyEncoding::Base64,
    }
}

/// [`convert_res`] that fails on text bodies which are not valid UTF-8
pub fn convert_res_strict<R, C>(response: &R, classifier: &C) -> Result<ConvertedResponse>
where
    R: ResponseSource + ?Sized,
    C: BinaryClassifier + ?Sized,
{
    let (status_code, headers, encoding) = prepare(response, classifier);
    let body = encoding.encode_strict(&response.body())?;

    Ok(ConvertedResponse {
        status_code,
        headers,
        body,
        is_base64_encoded: encoding == BodyEncoding::Base64,
    })
}
