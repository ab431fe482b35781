//! Serverless Routing - helpers between a web framework and a FaaS runtime
//!
//! Classifies and decomposes redirect URLs, flattens query parameters,
//! converts framework responses into the platform reply shape, and loads
//! the middleware manifest that decides which paths run middleware.

pub mod application;
pub mod config;
pub mod constants;
pub mod error;
pub mod log_messages;
pub mod middleware;
pub mod response;
pub mod routing;

pub use application::Application;
pub use error::{Error, Result};
pub use middleware::{get_middleware_match, load_middleware_manifest, MiddlewareMatch};
pub use response::{convert_res, ConvertedResponse};
pub use routing::{convert_query, get_url_parts, is_external, UrlParts};
