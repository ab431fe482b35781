//! Response-side translation
//!
//! # Data Flow
//! ```text
//! framework response (ResponseSource)
//!     → content-type lookup (first value when listed)
//!     → BinaryClassifier (base64 or text)
//!     → ConvertedResponse (statusCode, headers, body, isBase64Encoded)
//! ```

pub mod binary;
pub mod convert;
pub mod source;

pub use binary::{BinaryClassifier, BinaryContentTypes};
pub use convert::{convert_res, convert_res_strict, BodyEncoding, ConvertedResponse, StatusCode};
pub use source::{header_value, HeaderValue, ResponseHeaders, ResponseSource};
