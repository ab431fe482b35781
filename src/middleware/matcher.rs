//! Compilation of middleware matchers into path patterns

use crate::error::{Error, Result};
use crate::log_messages::manifest as log;
use crate::middleware::manifest::{MatcherEntry, MiddlewareManifest};
use fancy_regex::Regex;
use std::fmt;
use tracing::{info, warn};

/// A matcher ready to test request paths
#[derive(Clone, Debug)]
pub struct CompiledMatcher {
    pattern: Regex,
    original_source: Option<String>,
}

impl CompiledMatcher {
    pub fn compile(entry: &MatcherEntry) -> Result<Self> {
        let pattern =
            Regex::new(&entry.regexp).map_err(|e| Error::invalid_matcher(&entry.regexp, e))?;
        Ok(Self {
            pattern,
            original_source: entry.original_source.clone(),
        })
    }

    /// Whether `path` matches
    ///
    /// A pattern that exceeds the backtracking limit on `path` does not match.
    pub fn is_match(&self, path: &str) -> bool {
        self.pattern.is_match(path).unwrap_or_else(|err| {
            warn!(pattern = self.as_str(), path, error = %err, "{}", log::MATCH_FAILED);
            false
        })
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// The route expression the pattern was generated from, e.g. `/api/:path*`
    pub fn original_source(&self) -> Option<&str> {
        self.original_source.as_deref()
    }
}

impl PartialEq for CompiledMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str() && self.original_source == other.original_source
    }
}

impl fmt::Display for CompiledMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiled root middleware matchers, in manifest order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MiddlewareMatch(Vec<CompiledMatcher>);

impl MiddlewareMatch {
    /// Whether middleware should run for `path`
    ///
    /// An empty set never runs.
    pub fn should_run(&self, path: &str) -> bool {
        self.0.iter().any(|matcher| matcher.is_match(path))
    }

    pub fn matchers(&self) -> &[CompiledMatcher] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompiledMatcher> {
        self.0.iter()
    }
}

impl IntoIterator for MiddlewareMatch {
    type Item = CompiledMatcher;
    type IntoIter = std::vec::IntoIter<CompiledMatcher>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MiddlewareMatch {
    type Item = &'a CompiledMatcher;
    type IntoIter = std::slice::Iter<'a, CompiledMatcher>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Compile the matchers of the root middleware entry
///
/// A manifest without a `/` entry, or whose entry has no `matchers`, yields
/// an empty set. Any pattern that fails to compile fails the whole call.
pub fn get_middleware_match(manifest: &MiddlewareManifest) -> Result<MiddlewareMatch> {
    let Some(matchers) = manifest
        .root_middleware()
        .and_then(|entry| entry.matchers.as_ref())
    else {
        info!("{}", log::NO_ROOT_MIDDLEWARE);
        return Ok(MiddlewareMatch::default());
    };

    let compiled = matchers
        .iter()
        .map(CompiledMatcher::compile)
        .collect::<Result<Vec<_>>>()?;

    info!(count = compiled.len(), "{}", log::COMPILED_MATCHERS);
    Ok(MiddlewareMatch(compiled))
}
