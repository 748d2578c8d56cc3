#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # SPV Channels client
//!
//! An async client for the SPV Channels HTTP API. It builds an authenticated
//! request, sends it, and decodes the JSON envelope into a typed reply.
//!
//! ## Overview
//!
//! Every call follows the same path:
//!
//! 1. **Build** `{scheme}://{base_url}/api/{version}/account/{account}/channel/{channel}`
//! 2. **Authenticate** with `Bearer {token}`, or HTTP Basic when no token is set
//! 3. **Send** over the client's transport, racing the caller's cancellation token
//! 4. **Classify** the status: `[200, 400)` is success, anything else failure
//! 5. **Decode** the body as the reply, or as `{"code", "message"}` on failure
//!
//! Nothing is retried. Every failure is returned to the caller as an [`Error`].
//!
//! ## Usage
//!
//! ```ignore
//! use spv_channels::{ChannelsClient, ClientConfig, GetChannelRequest};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("localhost:5010", "v1")
//!         .with_basic_auth("dev", "dev")
//!         .with_insecure_skip_verify(true);
//!     let client = ChannelsClient::new(config)?;
//!
//!     let request = GetChannelRequest::new("1", "2vkapEui-Cfb3tY7l9FF");
//!     match client.get_channel(&CancellationToken::new(), &request).await {
//!         Ok(reply) => println!("{} head={}", reply.id, reply.head),
//!         Err(e) if e.is_access_denied() => eprintln!("bad credentials: {}", e),
//!         Err(e) => eprintln!("error: {}", e),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - **[types]** - Request, reply and envelope types
//! - **[error]** - Error types and result handling
//! - **[client]** - Client, configuration and transport
//! - **[protocol]** - URL layout and header formatting

pub mod client;
pub mod error;
pub mod protocol;
pub mod types;

pub use client::{ChannelsClient, ClientConfig, Credentials, Transport};
pub use error::{Error, Result};
pub use types::{
    AccessToken, Envelope, ErrorResponse, GetChannelReply, GetChannelRequest, Retention,
    SuccessResponse,
};
