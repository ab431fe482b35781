//! Log message constants
//!
//! Centralizes the messages emitted by the routing helpers so they stay
//! consistent across modules and the binary.

/// Application startup messages
pub mod application {
    pub const STARTING: &str = "Starting serverless routing manifest check";
    pub const SETTINGS_LOADED: &str = "Settings loaded";
    pub const MATCHER: &str = "Root middleware matcher";
    pub const FINISHED: &str = "Manifest check finished";
}

/// URL handling messages
pub mod routing {
    pub const CLASSIFIED_URL: &str = "Classified redirect URL";
}

/// Response conversion messages
pub mod response {
    pub const CONVERTING: &str = "Converting response for platform reply";
}

/// Manifest loading and matcher compilation messages
pub mod manifest {
    pub const LOADED: &str = "Middleware manifest loaded";
    pub const NO_ROOT_MIDDLEWARE: &str = "No root middleware matchers in manifest";
    pub const COMPILED_MATCHERS: &str = "Compiled root middleware matchers";
    pub const MATCH_FAILED: &str = "Middleware matcher could not be evaluated";
}
