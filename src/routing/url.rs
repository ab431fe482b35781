//! URL classification and decomposition for redirect handling

use crate::error::{Error, Result};
use crate::log_messages::routing as log;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

/// Matches an `http://` or `https://` scheme at the start of a URL
pub static SCHEME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("scheme pattern should compile"));

/// Escape sequence substituted for every literal `?`
pub const ESCAPED_QUESTION_MARK: &str = "%3F";

/// Structural parts of a URL
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlParts {
    pub hostname: String,
    pub pathname: String,
    /// Scheme including the trailing colon, e.g. `https:`
    pub protocol: String,
}

/// Decide whether `url` points away from `host`
///
/// The same-host check is a substring test on the whole URL, not a
/// comparison of the parsed authority. A URL whose path or query contains
/// the host text counts as internal.
pub fn is_external(url: Option<&str>, host: Option<&str>) -> bool {
    let Some(url) = url.filter(|u| !u.is_empty()) else {
        return false;
    };

    let has_scheme = SCHEME_PATTERN.is_match(url);
    let external = match host.filter(|h| !h.is_empty()) {
        Some(host) => has_scheme && !url.contains(host),
        None => has_scheme,
    };

    debug!(url, host, external, "{}", log::CLASSIFIED_URL);
    external
}

/// Replace every `?` with `%3F`
///
/// Matcher compilation downstream rejects raw `?`, and full percent-encoding
/// would also mangle the interception segments of client-side routes such
/// as `(.)photo`. An input that already holds a literal `%3F` cannot be told
/// apart from an escaped `?` afterwards.
pub fn escape_question_marks(url: &str) -> String {
    url.replace('?', ESCAPED_QUESTION_MARK)
}

/// Split a URL into hostname, pathname and protocol
///
/// Internal URLs are returned verbatim as the pathname after escaping.
/// External URLs must parse as absolute URLs.
pub fn get_url_parts(url: &str, is_external: bool) -> Result<UrlParts> {
    let escaped = escape_question_marks(url);

    if !is_external {
        return Ok(UrlParts {
            hostname: String::new(),
            pathname: escaped,
            protocol: String::new(),
        });
    }

    let parsed =
        ::url::Url::parse(&escaped).map_err(|e| Error::invalid_url(escaped.clone(), e))?;

    Ok(UrlParts {
        hostname: parsed.host_str().unwrap_or_default().to_string(),
        pathname: parsed.path().to_string(),
        protocol: format!("{}:", parsed.scheme()),
    })
}
