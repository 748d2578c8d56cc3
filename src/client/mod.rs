//! SPV Channels HTTP client.
//!
//! This module provides the client that talks to a channels server:
//!
//! - **Configure** the server address, API version and credentials
//! - **Authenticate** every request with Basic or Bearer auth
//! - **Fetch** channel metadata and decode the JSON envelope
//! - **Cancel** in-flight calls through a `CancellationToken`
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── fetch     - ChannelsClient and request execution
//! ├── config    - Client configuration and credential selection
//! ├── transport - Pluggable HTTP transport
//! └── utils     - Status classification
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ChannelsClient`] | Main client |
//! | [`ClientConfig`] | Server address, version, credentials, TLS toggle |
//! | [`Credentials`] | Auth scheme selected from a config |
//! | [`Transport`] | Sends one built request |
//!
//! # Examples
//!
//! ## Creating a Client
//!
//! ```
//! use spv_channels::client::{ChannelsClient, ClientConfig};
//!
//! // Basic auth against a local dev server with a self-signed certificate
//! let config = ClientConfig::new("localhost:5010", "v1")
//!     .with_basic_auth("dev", "dev")
//!     .with_insecure_skip_verify(true);
//! let client = ChannelsClient::new(config).unwrap();
//!
//! // Bearer token
//! let config = ClientConfig::new("channels.example.com", "v1")
//!     .with_bearer_token("my-token");
//! let client = ChannelsClient::new(config).unwrap();
//! ```
//!
//! ## Status Classification
//!
//! ```
//! use spv_channels::client::is_success_status;
//!
//! assert!(is_success_status(200));
//! assert!(is_success_status(304));
//! assert!(!is_success_status(401));
//! ```

mod config;
mod fetch;
mod transport;
mod utils;

pub use config::{ClientConfig, Credentials};
pub use fetch::{ChannelsClient, REQUEST_TIMEOUT};
pub use transport::Transport;
pub use utils::*;
