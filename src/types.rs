//! Request, reply and envelope types for the channels API.
//!
//! Field names on the wire are snake_case and match the Rust field names.
//! Decoding is lenient: only the first JSON value is read, absent fields
//! take their default value, `null` collections decode as empty and unknown
//! fields are ignored.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Parameters for [`ChannelsClient::get_channel`](crate::ChannelsClient::get_channel).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetChannelRequest {
    /// HTTP method to use. Empty means `GET`.
    pub method: String,
    /// Account that owns the channel.
    #[serde(rename = "accountid")]
    pub account_id: String,
    /// Channel identifier.
    #[serde(rename = "channelid")]
    pub channel_id: String,
}

impl GetChannelRequest {
    /// A `GET` request for the given account and channel.
    pub fn new(account_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            method: "GET".to_string(),
            account_id: account_id.into(),
            channel_id: channel_id.into(),
        }
    }

    /// Override the HTTP method.
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }
}

/// Channel metadata as returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetChannelReply {
    /// Channel identifier.
    pub id: String,
    /// Absolute URL of the channel resource.
    pub href: String,
    /// Readable without a channel token.
    pub public_read: bool,
    /// Writable without a channel token.
    pub public_write: bool,
    /// Messages carry sequence numbers.
    pub sequenced: bool,
    /// Writes are rejected while set.
    pub locked: bool,
    /// Sequence number of the most recent message.
    pub head: i64,
    /// Retention policy.
    #[serde(deserialize_with = "null_as_default")]
    pub retention: Retention,
    /// Tokens in the order the server listed them.
    #[serde(deserialize_with = "null_as_default")]
    pub access_tokens: Vec<AccessToken>,
}

/// Server-side retention policy for a channel's messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Retention {
    /// Messages younger than this are never pruned.
    pub min_age_days: i64,
    /// Messages older than this are eligible for pruning.
    pub max_age_days: i64,
    /// Server prunes automatically.
    pub auto_prune: bool,
}

/// A credential scoped to one channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessToken {
    /// Token identifier.
    pub id: String,
    /// Secret presented as a bearer token.
    pub token: String,
    /// Free-form label.
    pub description: String,
    /// Grants read access.
    pub can_read: bool,
    /// Grants write access.
    pub can_write: bool,
}

/// Body the server sends alongside a failure status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    /// Server-side error code, usually the HTTP status.
    pub code: i64,
    /// Human-readable message.
    pub message: String,
}

/// A decoded success payload paired with the local HTTP status.
///
/// The payload is decoded straight from the response body; the server does
/// not nest it under a `data` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessResponse<T> {
    /// HTTP status of the response.
    pub code: u16,
    /// Decoded body.
    pub data: T,
}

/// Outcome of classifying and decoding one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope<T> {
    /// Status in `[200, 400)` with a body that decoded as `T`.
    Success(SuccessResponse<T>),
    /// Any other status. `error` is `None` when the body was not an error envelope.
    Failure {
        /// HTTP status of the response.
        status: u16,
        /// Decoded error envelope, if the body was one.
        error: Option<ErrorResponse>,
    },
}

impl<T: DeserializeOwned + Default> Envelope<T> {
    /// Classify `status` and decode `body` accordingly.
    ///
    /// Only the first JSON value in the body is read; anything after it is
    /// ignored. A `null` body decodes as the default value.
    ///
    /// Only a success status with an undecodable body is an error here; a
    /// failure status always yields [`Envelope::Failure`].
    pub fn decode(status: u16, body: &[u8]) -> Result<Self> {
        if !crate::client::is_success_status(status) {
            let error = decode_first::<ErrorResponse>(body).ok();
            return Ok(Envelope::Failure { status, error });
        }

        let data = decode_first(body)?;
        Ok(Envelope::Success(SuccessResponse { code: status, data }))
    }
}

/// Decode the leading JSON value of `body`, treating `null` as `T::default()`.
fn decode_first<T: DeserializeOwned + Default>(body: &[u8]) -> serde_json::Result<T> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<T>>()
        .next()
    {
        Some(value) => Ok(value?.unwrap_or_default()),
        // empty or whitespace-only body: surface serde_json's EOF error
        None => serde_json::from_slice(body),
    }
}

impl<T> Envelope<T> {
    /// Collapse into the payload or the matching [`Error`].
    pub fn into_result(self) -> Result<T> {
        match self {
            Envelope::Success(success) => Ok(success.data),
            Envelope::Failure {
                status,
                error: Some(error),
            } => Err(Error::Server {
                status,
                code: error.code,
                message: error.message,
            }),
            Envelope::Failure { status, error: None } => Err(Error::UnknownStatus(status)),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"{
        "id": "abc",
        "href": "https://localhost:5010/api/v1/channel/abc",
        "public_read": true,
        "public_write": false,
        "sequenced": true,
        "locked": false,
        "head": 42,
        "retention": {"min_age_days": 1, "max_age_days": 30, "auto_prune": true},
        "access_tokens": [
            {"id": "t1", "token": "secret", "description": "owner", "can_read": true, "can_write": false}
        ]
    }"#;

    #[test]
    fn test_decode_reply() {
        let reply: GetChannelReply = serde_json::from_str(REPLY).unwrap();
        assert_eq!(reply.id, "abc");
        assert_eq!(reply.head, 42);
        assert!(reply.public_read);
        assert!(!reply.public_write);
        assert_eq!(reply.retention.max_age_days, 30);
        assert!(reply.retention.auto_prune);
        assert_eq!(reply.access_tokens.len(), 1);
        assert_eq!(reply.access_tokens[0].id, "t1");
        assert!(reply.access_tokens[0].can_read);
        assert!(!reply.access_tokens[0].can_write);
    }

    #[test]
    fn test_decode_reply_lenient() {
        let reply: GetChannelReply =
            serde_json::from_str(r#"{"id": "x", "retention": null, "access_tokens": null, "extra": 1}"#)
                .unwrap();
        assert_eq!(reply.id, "x");
        assert_eq!(reply.retention, Retention::default());
        assert!(reply.access_tokens.is_empty());
    }

    #[test]
    fn test_request_wire_names() {
        let req = GetChannelRequest::new("1", "ch");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["method"], "GET");
        assert_eq!(json["accountid"], "1");
        assert_eq!(json["channelid"], "ch");
    }

    #[test]
    fn test_envelope_success_is_flat() {
        let env = Envelope::<GetChannelReply>::decode(200, REPLY.as_bytes()).unwrap();
        match env {
            Envelope::Success(s) => {
                assert_eq!(s.code, 200);
                assert_eq!(s.data.id, "abc");
            }
            other => panic!("unexpected envelope: {:?}", other),
        }
    }

    #[test]
    fn test_envelope_failure_with_message() {
        let env = Envelope::<GetChannelReply>::decode(
            401,
            br#"{"code":401,"message":"unauthorized"}"#,
        )
        .unwrap();
        let err = env.into_result().unwrap_err();
        assert_eq!(err.to_string(), "unauthorized");
    }

    #[test]
    fn test_envelope_failure_without_envelope() {
        let env = Envelope::<GetChannelReply>::decode(500, b"<html>oops</html>").unwrap();
        assert_eq!(
            env,
            Envelope::Failure {
                status: 500,
                error: None
            }
        );
        assert!(env.into_result().unwrap_err().to_string().contains("500"));
    }

    #[test]
    fn test_envelope_success_malformed() {
        let result = Envelope::<GetChannelReply>::decode(200, b"{not json");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_envelope_ignores_trailing_values() {
        let env = Envelope::<GetChannelReply>::decode(200, br#"{"id":"abc"}{"x":1}"#).unwrap();
        assert_eq!(env.into_result().unwrap().id, "abc");
    }

    #[test]
    fn test_envelope_null_success_is_default() {
        let env = Envelope::<GetChannelReply>::decode(200, b"null").unwrap();
        assert_eq!(env.into_result().unwrap(), GetChannelReply::default());
    }

    #[test]
    fn test_envelope_null_failure_has_empty_message() {
        let env = Envelope::<GetChannelReply>::decode(404, b"null").unwrap();
        let err = env.into_result().unwrap_err();
        assert!(matches!(err, Error::Server { status: 404, .. }));
        assert_eq!(err.to_string(), "");
    }

    #[test]
    fn test_envelope_empty_body() {
        let result = Envelope::<GetChannelReply>::decode(200, b"  ");
        assert!(matches!(result, Err(Error::Decode(_))));

        let env = Envelope::<GetChannelReply>::decode(500, b"").unwrap();
        assert!(matches!(env.into_result(), Err(Error::UnknownStatus(500))));
    }

    #[test]
    fn test_envelope_redirect_range_is_success() {
        let env = Envelope::<ErrorResponse>::decode(302, br#"{"code":1,"message":"m"}"#).unwrap();
        assert!(matches!(env, Envelope::Success(_)));
    }
}
