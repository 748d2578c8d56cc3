//! Main SPV Channels client implementation.
//!
//! Provides [`ChannelsClient`], which builds authenticated requests, sends
//! them through a [`Transport`] and decodes the JSON envelope.
//!
//! # Examples
//!
//! ## Fetching channel metadata
//!
//! ```ignore
//! use spv_channels::{ChannelsClient, ClientConfig, GetChannelRequest};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("localhost:5010", "v1").with_basic_auth("dev", "dev");
//!     let client = ChannelsClient::new(config)?;
//!
//!     let request = GetChannelRequest::new("1", "my-channel");
//!     let reply = client.get_channel(&CancellationToken::new(), &request).await?;
//!     println!("head: {}", reply.head);
//!     Ok(())
//! }
//! ```
//!
//! ## Cancelling an in-flight call
//!
//! ```ignore
//! let cancel = CancellationToken::new();
//! let guard = cancel.clone();
//! tokio::spawn(async move {
//!     tokio::time::sleep(std::time::Duration::from_secs(1)).await;
//!     guard.cancel();
//! });
//!
//! match client.get_channel(&cancel, &request).await {
//!     Err(e) if e.is_cancelled() => println!("gave up"),
//!     other => println!("{:?}", other),
//! }
//! ```

use crate::client::config::ClientConfig;
use crate::client::is_success_status;
use crate::client::transport::Transport;
use crate::error::{Error, Result};
use crate::protocol;
use crate::types::{Envelope, GetChannelReply, GetChannelRequest};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Timeout applied to every request sent by the default transport.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the SPV Channels API.
///
/// Cheap to clone; clones share the configuration and the transport's
/// connection pool, and may issue calls concurrently.
#[derive(Clone)]
pub struct ChannelsClient {
    transport: Arc<dyn Transport>,
    config: Arc<ClientConfig>,
}

impl ChannelsClient {
    /// Create a client backed by a pooled `reqwest::Client`.
    ///
    /// Performs no network I/O. When
    /// [`insecure_skip_verify`](ClientConfig::insecure_skip_verify) is set the
    /// transport accepts any server certificate; do not use that in production.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(config.insecure_skip_verify)
            .build()?;

        Ok(Self::with_transport(config, client))
    }

    /// Create a client that sends requests through `transport`.
    pub fn with_transport<T>(config: ClientConfig, transport: T) -> Self
    where
        T: Transport + 'static,
    {
        ChannelsClient {
            transport: Arc::new(transport),
            config: Arc::new(config),
        }
    }

    /// Fetch metadata for one channel.
    ///
    /// The request's method is used as given, so other verbs can be issued
    /// against the same resource. If `cancel` fires first, the in-flight
    /// exchange is dropped and [`Error::Cancelled`] is returned.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRequest`] if the method or URL is malformed; nothing is sent
    /// - [`Error::Transport`] on connect, TLS or timeout failure
    /// - [`Error::Server`] / [`Error::UnknownStatus`] for failure statuses
    /// - [`Error::Decode`] if a success body is not a channel
    pub async fn get_channel(
        &self,
        cancel: &CancellationToken,
        request: &GetChannelRequest,
    ) -> Result<GetChannelReply> {
        let http_request = self.build_request(request)?;

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Error::Cancelled),
            result = self.send_request(http_request) => result,
        }
    }

    /// Build the bare request for a channel, without headers.
    fn build_request(&self, request: &GetChannelRequest) -> Result<reqwest::Request> {
        let method = parse_method(&request.method)?;

        if self.config.base_url.is_empty() {
            return Err(Error::InvalidRequest("base url is empty".to_string()));
        }

        let raw = protocol::channel_url(
            &self.config.scheme,
            &self.config.base_url,
            &self.config.version,
            &request.account_id,
            &request.channel_id,
        );
        let url = Url::parse(&raw)
            .map_err(|e| Error::InvalidRequest(format!("invalid url {:?}: {}", raw, e)))?;

        Ok(reqwest::Request::new(method, url))
    }

    /// Attach JSON and auth headers, send, and decode the body into `T`.
    ///
    /// The body is read in full before it is decoded, so the connection
    /// goes back to the pool on every path. A failure status whose body
    /// cannot be read is reported as [`Error::UnknownStatus`].
    async fn send_request<T>(&self, mut request: reqwest::Request) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let mut auth = HeaderValue::from_str(&self.config.credentials().header_value())
            .map_err(|e| Error::InvalidRequest(format!("invalid authorization header: {}", e)))?;
        auth.set_sensitive(true);

        let headers = request.headers_mut();
        for (name, value) in protocol::json_headers().iter() {
            headers.insert(name.clone(), value.clone());
        }
        headers.insert(AUTHORIZATION, auth);

        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            "sending channels request"
        );

        let response = self.transport.execute(request).await?;
        let status = response.status().as_u16();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(_) if !is_success_status(status) => return Err(Error::UnknownStatus(status)),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(status, len = body.len(), "received channels response");

        Envelope::decode(status, &body)?.into_result()
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Parse a caller-supplied method token. Empty means `GET`.
fn parse_method(method: &str) -> Result<Method> {
    if method.is_empty() {
        return Ok(Method::GET);
    }
    Method::from_bytes(method.as_bytes())
        .map_err(|_| Error::InvalidRequest(format!("invalid method {:?}", method)))
}
