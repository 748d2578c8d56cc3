//! Wire-level constants and helpers for the channels API.
//!
//! # Endpoint layout
//!
//! ```text
//! {scheme}://{base_url}/api/{version}/account/{account_id}/channel/{channel_id}
//! ```
//!
//! Identifiers are inserted as given; callers must supply path-safe values.

mod headers;

pub use headers::{basic_auth_value, bearer_auth_value, json_headers};

/// Protocol constants.
pub mod constants {
    /// Media type sent in both `Content-Type` and `Accept`.
    pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

    /// Scheme used when the configuration does not override it.
    pub const DEFAULT_SCHEME: &str = "https";

    /// Authorization scheme prefixes.
    pub mod auth {
        /// HTTP Basic.
        pub const BASIC: &str = "Basic";
        /// Bearer token.
        pub const BEARER: &str = "Bearer";
    }
}

/// Path of a single channel resource, relative to the host.
///
/// # Examples
///
/// ```
/// use spv_channels::protocol::channel_path;
///
/// assert_eq!(channel_path("v1", "1", "abc"), "/api/v1/account/1/channel/abc");
/// ```
pub fn channel_path(version: &str, account_id: &str, channel_id: &str) -> String {
    format!("/api/{}/account/{}/channel/{}", version, account_id, channel_id)
}

/// Absolute URL of a single channel resource.
///
/// # Examples
///
/// ```
/// use spv_channels::protocol::channel_url;
///
/// assert_eq!(
///     channel_url("https", "localhost:5010", "v1", "1", "abc"),
///     "https://localhost:5010/api/v1/account/1/channel/abc"
/// );
/// ```
pub fn channel_url(
    scheme: &str,
    base_url: &str,
    version: &str,
    account_id: &str,
    channel_id: &str,
) -> String {
    format!(
        "{}://{}{}",
        scheme,
        base_url,
        channel_path(version, account_id, channel_id)
    )
}
