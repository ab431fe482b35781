//! Middleware manifest loading and matcher compilation
//!
//! # Data Flow
//! ```text
//! <build_dir>/server/middleware-manifest.json
//!     → manifest.rs (read once at cold start, typed parse)
//!     → matcher.rs (root "/" entry → compiled patterns)
//!     → routing layer asks MiddlewareMatch::should_run(path)
//! ```

pub mod manifest;
pub mod matcher;

pub use manifest::{
    load_middleware_manifest, manifest_path, MatcherEntry, MiddlewareEntry, MiddlewareManifest,
};
pub use matcher::{get_middleware_match, CompiledMatcher, MiddlewareMatch};
