//! Middleware manifest produced by the framework build

use crate::constants::paths::{MIDDLEWARE_MANIFEST, ROOT_MIDDLEWARE, SERVER_DIR};
use crate::error::{Error, Result};
use crate::log_messages::manifest as log;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// One matcher declared for a middleware entry
///
/// Conditions such as `has`, `missing` and `locale` are not consulted and
/// are dropped on load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatcherEntry {
    pub regexp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_source: Option<String>,
}

/// A registered middleware
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiddlewareEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matchers: Option<Vec<MatcherEntry>>,
}

/// Parsed `middleware-manifest.json`
///
/// Only `middleware` is required. The manifest is read once and then shared
/// read-only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiddlewareManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default)]
    pub sorted_middleware: Vec<String>,
    pub middleware: BTreeMap<String, MiddlewareEntry>,
    #[serde(default)]
    pub functions: BTreeMap<String, serde_json::Value>,
}

impl MiddlewareManifest {
    /// The middleware registered at `/`, if any
    pub fn root_middleware(&self) -> Option<&MiddlewareEntry> {
        self.middleware.get(ROOT_MIDDLEWARE)
    }

    pub fn from_json(json: &str, path: impl Into<PathBuf>) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::manifest_parse(path, e))
    }
}

/// Location of the manifest inside a build directory
pub fn manifest_path(build_dir: impl AsRef<Path>) -> PathBuf {
    build_dir
        .as_ref()
        .join(SERVER_DIR)
        .join(MIDDLEWARE_MANIFEST)
}

/// Read and parse `<build_dir>/server/middleware-manifest.json`
#[instrument(skip_all, fields(build_dir = %build_dir.as_ref().display()))]
pub fn load_middleware_manifest(build_dir: impl AsRef<Path>) -> Result<MiddlewareManifest> {
    let path = manifest_path(build_dir);
    let json = fs::read_to_string(&path).map_err(|e| Error::manifest_read(&path, e))?;
    let manifest = MiddlewareManifest::from_json(&json, &path)?;

    info!(
        path = %path.display(),
        entries = manifest.middleware.len(),
        "{}",
        log::LOADED
    );
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_path_layout() {
        assert_eq!(
            manifest_path("/app/.next"),
            PathBuf::from("/app/.next/server/middleware-manifest.json")
        );
    }

    #[test]
    fn test_parses_full_manifest() {
        let json = r#"{
            "version": 3,
            "sortedMiddleware": ["/"],
            "middleware": {
                "/": {
                    "files": ["server/edge-runtime-webpack.js", "server/middleware.js"],
                    "name": "middleware",
                    "page": "/",
                    "matchers": [
                        {"regexp": "^/api(?:/(.*))?$", "originalSource": "/api/:path*"},
                        {"regexp": "^/about$", "has": [{"type": "header", "key": "x-test"}]}
                    ]
                }
            },
            "functions": {}
        }"#;

        let manifest = MiddlewareManifest::from_json(json, "manifest.json").unwrap();
        assert_eq!(manifest.version, Some(3));
        assert_eq!(manifest.sorted_middleware, vec!["/"]);

        let root = manifest.root_middleware().unwrap();
        assert_eq!(root.name.as_deref(), Some("middleware"));
        let matchers = root.matchers.as_ref().unwrap();
        assert_eq!(matchers.len(), 2);
        assert_eq!(matchers[0].original_source.as_deref(), Some("/api/:path*"));
        assert_eq!(matchers[1].regexp, "^/about$");
    }

    #[test]
    fn test_parses_minimal_manifest() {
        let manifest = MiddlewareManifest::from_json(r#"{"middleware": {}}"#, "m.json").unwrap();
        assert!(manifest.root_middleware().is_none());
    }

    #[test]
    fn test_rejects_manifest_without_middleware_key() {
        let result = MiddlewareManifest::from_json(r#"{"version": 3}"#, "m.json");
        assert!(matches!(result, Err(Error::ManifestParse { .. })));
    }

    #[test]
    fn test_load_missing_manifest_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_middleware_manifest(dir.path());
        assert!(matches!(result, Err(Error::ManifestRead { .. })));
    }
}
