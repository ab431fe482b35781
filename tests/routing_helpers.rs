//! End-to-end checks of the per-request helpers through the public API
//!
//! A redirect is classified then decomposed, a framework response is
//! converted for the platform, and a parsed query is flattened.

use bytes::Bytes;
use serverless_routing::response::{BinaryContentTypes, HeaderValue};
use serverless_routing::routing::{Query, QueryValue};
use serverless_routing::{convert_query, convert_res, get_url_parts, is_external};

#[test]
fn test_external_redirect_is_decomposed() {
    let location = "https://docs.example/guide?section=2";
    let external = is_external(Some(location), Some("app.example"));
    assert!(external);

    let parts = get_url_parts(location, external).unwrap();
    assert_eq!(parts.protocol, "https:");
    assert_eq!(parts.hostname, "docs.example");
    assert_eq!(parts.pathname, "/guide%3Fsection=2");
}

#[test]
fn test_same_host_redirect_stays_a_path() {
    let location = "https://app.example/login?next=/account";
    let external = is_external(Some(location), Some("app.example"));
    assert!(!external);

    let parts = get_url_parts(location, external).unwrap();
    assert!(parts.hostname.is_empty());
    assert!(parts.protocol.is_empty());
    assert_eq!(parts.pathname, "https://app.example/login%3Fnext=/account");
}

#[test]
fn test_http_response_becomes_platform_reply() {
    let response = http::Response::builder()
        .status(200)
        .header("content-type", "image/png")
        .header("cache-control", "public, max-age=31536000")
        .body(Bytes::from_static(&[0x89, 0x50, 0x4e, 0x47]))
        .unwrap();

    let reply = convert_res(&response, &BinaryContentTypes::default());
    let json = serde_json::to_value(&reply).unwrap();

    assert_eq!(json["statusCode"], 200);
    assert_eq!(json["isBase64Encoded"], true);
    assert_eq!(json["body"], "iVBORw==");
    assert_eq!(json["headers"]["cache-control"], "public, max-age=31536000");
}

#[test]
fn test_text_reply_with_repeated_headers() {
    let response = http::Response::builder()
        .header("content-type", "text/html; charset=utf-8")
        .header("set-cookie", "a=1")
        .header("set-cookie", "b=2")
        .body(Bytes::from_static(b"<p>hi</p>"))
        .unwrap();

    let reply = convert_res(&response, &BinaryContentTypes::default());

    assert!(!reply.is_base64_encoded);
    assert_eq!(reply.body, "<p>hi</p>");
    assert_eq!(
        reply.headers.get("set-cookie"),
        Some(&HeaderValue::from(vec!["a=1", "b=2"]))
    );
}

#[test]
fn test_parsed_query_is_flattened_in_order() {
    let query: Query = serde_json::from_str(r#"{"tag":["a","b"],"page":"2","empty":[]}"#).unwrap();
    let flat = convert_query(&query);

    assert_eq!(
        flat.iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect::<Vec<_>>(),
        vec![("tag", "a,b"), ("page", "2"), ("empty", "")]
    );
    assert_eq!(query.get("page"), Some(&QueryValue::from("2")));
}
