//! Request-side routing helpers
//!
//! Redirect targets are classified and decomposed by [`url`]; parsed query
//! objects are flattened by [`query`] before being attached to a request
//! context.

pub mod query;
pub mod url;

pub use self::query::{convert_query, FlatQuery, Query, QueryValue};
pub use self::url::{get_url_parts, is_external, UrlParts, SCHEME_PATTERN};
