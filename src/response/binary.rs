//! Binary-vs-text decision for response bodies

use crate::constants::content_types::COMMON_BINARY;
use std::collections::HashSet;

/// Decides whether a body with the given content type travels as base64
pub trait BinaryClassifier {
    fn is_binary(&self, content_type: Option<&str>) -> bool;
}

impl<F> BinaryClassifier for F
where
    F: Fn(Option<&str>) -> bool,
{
    fn is_binary(&self, content_type: Option<&str>) -> bool {
        self(content_type)
    }
}

/// Classifier backed by a set of media types
///
/// Parameters such as `; charset=utf-8` are ignored and the comparison is
/// case-insensitive. A missing content type is text.
#[derive(Clone, Debug)]
pub struct BinaryContentTypes {
    media_types: HashSet<String>,
}

impl BinaryContentTypes {
    /// A classifier that knows only the given media types
    pub fn from_types<I, S>(media_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            media_types: media_types
                .into_iter()
                .map(|t| t.as_ref().trim().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Add more media types on top of the current set
    pub fn with_extra<I, S>(mut self, media_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.media_types.extend(
            media_types
                .into_iter()
                .map(|t| t.as_ref().trim().to_ascii_lowercase()),
        );
        self
    }

    pub fn len(&self) -> usize {
        self.media_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.media_types.is_empty()
    }
}

impl Default for BinaryContentTypes {
    fn default() -> Self {
        Self::from_types(COMMON_BINARY)
    }
}

impl BinaryClassifier for BinaryContentTypes {
    fn is_binary(&self, content_type: Option<&str>) -> bool {
        let Some(content_type) = content_type.filter(|c| !c.is_empty()) else {
            return false;
        };

        let media_type = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        self.media_types.contains(&media_type)
    }
}
