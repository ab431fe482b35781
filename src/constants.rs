//! Constants shared by the routing helpers
//!
//! Header names, content types and build-output paths live here so the
//! converters and loaders agree on them.

/// Header names consulted during response conversion
pub mod headers {
    pub use ::http::header::CONTENT_TYPE;

    /// Header key used when reading converted header maps
    pub const CONTENT_TYPE_KEY: &str = "content-type";
}

/// Content type constants
pub mod content_types {
    pub const APPLICATION_JSON: &str = "application/json";
    pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";
    pub const TEXT_HTML: &str = "text/html";

    /// Media types whose bodies are sent base64-encoded by default
    pub const COMMON_BINARY: &[&str] = &[
        APPLICATION_OCTET_STREAM,
        // Documents
        "application/epub+zip",
        "application/msword",
        "application/pdf",
        "application/rtf",
        "application/vnd.amazon.ebook",
        "application/vnd.ms-excel",
        "application/vnd.ms-powerpoint",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        // Fonts
        "font/otf",
        "font/woff",
        "font/woff2",
        // Images
        "image/bmp",
        "image/gif",
        "image/jpeg",
        "image/png",
        "image/tiff",
        "image/vnd.microsoft.icon",
        "image/webp",
        // Audio
        "audio/3gpp",
        "audio/aac",
        "audio/basic",
        "audio/mpeg",
        "audio/ogg",
        "audio/wav",
        "audio/webm",
        "audio/x-aiff",
        "audio/x-midi",
        "audio/x-wav",
        // Video
        "video/3gpp",
        "video/mp2t",
        "video/mpeg",
        "video/ogg",
        "video/quicktime",
        "video/webm",
        "video/x-msvideo",
        // Archives
        "application/java-archive",
        "application/vnd.apple.installer+xml",
        "application/x-7z-compressed",
        "application/x-apple-diskimage",
        "application/x-bzip",
        "application/x-bzip2",
        "application/x-gzip",
        "application/x-java-archive",
        "application/x-rar-compressed",
        "application/x-tar",
        "application/x-zip",
        "application/zip",
    ];
}

/// Build output layout
pub mod paths {
    /// Directory under the build directory holding server artifacts
    pub const SERVER_DIR: &str = "server";

    /// File name of the middleware manifest
    pub const MIDDLEWARE_MANIFEST: &str = "middleware-manifest.json";

    /// Middleware entry consulted for request routing
    pub const ROOT_MIDDLEWARE: &str = "/";

    /// Build directory used when none is configured
    pub const DEFAULT_BUILD_DIR: &str = ".next";
}

/// Status code used when the source response carries none
pub const DEFAULT_STATUS_CODE: u16 = 200;
