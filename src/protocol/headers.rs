//! Header formatting for channels API requests.
//!
//! | Header | Value |
//! |--------|-------|
//! | Content-Type | `application/json; charset=utf-8` |
//! | Accept | `application/json; charset=utf-8` |
//! | Authorization | `Basic base64(user:pass)` or `Bearer {token}` |
//!
//! # Examples
//!
//! ```
//! use spv_channels::protocol::{basic_auth_value, bearer_auth_value};
//!
//! assert_eq!(basic_auth_value("dev", "dev"), "Basic ZGV2OmRldg==");
//! assert_eq!(bearer_auth_value("tok"), "Bearer tok");
//! ```

use super::constants::{auth, JSON_CONTENT_TYPE};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};

/// `Authorization` value for HTTP Basic credentials (RFC 7617).
///
/// Empty username and password are still encoded, yielding `Basic Og==`.
pub fn basic_auth_value(username: &str, password: &str) -> String {
    let encoded = STANDARD.encode(format!("{}:{}", username, password));
    format!("{} {}", auth::BASIC, encoded)
}

/// `Authorization` value for a bearer token.
pub fn bearer_auth_value(token: &str) -> String {
    format!("{} {}", auth::BEARER, token)
}

/// `Content-Type` and `Accept` headers, both JSON/UTF-8.
pub fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(2);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers
}
