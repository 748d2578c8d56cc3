//! Pluggable HTTP transport.
//!
//! [`ChannelsClient`](crate::ChannelsClient) hands fully built requests to a
//! [`Transport`]. The default is a pooled `reqwest::Client`; tests and host
//! applications can supply their own.

use crate::error::Result;
use async_trait::async_trait;

/// Executes one HTTP request.
///
/// Implementations must be safe to share across tasks. The timeout is the
/// transport's responsibility; the reqwest transport built by
/// [`ChannelsClient::new`](crate::ChannelsClient::new) applies
/// [`REQUEST_TIMEOUT`](crate::client::REQUEST_TIMEOUT).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and return the response with its body still unread.
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        Ok(reqwest::Client::execute(self, request).await?)
    }
}
