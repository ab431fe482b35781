//! Query parameter flattening

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Separator placed between the elements of a multi-valued parameter
pub const QUERY_VALUE_SEPARATOR: &str = ",";

/// A parsed query parameter value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Single(String),
    Multi(Vec<String>),
}

impl QueryValue {
    /// Collapse to a single string, joining lists with `,`
    ///
    /// `["a"]` and `"a"` flatten to the same value; an empty list flattens
    /// to the empty string.
    pub fn flatten(&self) -> String {
        match self {
            Self::Single(value) => value.clone(),
            Self::Multi(values) => values.join(QUERY_VALUE_SEPARATOR),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multi(values)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Multi(values.into_iter().map(str::to_string).collect())
    }
}

/// Query parameters as parsed by the framework
pub type Query = IndexMap<String, QueryValue>;

/// Query parameters with every value flattened to one string
pub type FlatQuery = IndexMap<String, String>;

/// Flatten every parameter of `query`, keeping key order
pub fn convert_query(query: &Query) -> FlatQuery {
    query
        .iter()
        .map(|(key, value)| (key.clone(), value.flatten()))
        .collect()
}
