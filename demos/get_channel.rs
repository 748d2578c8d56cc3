//! Fetch one channel from a local SPV Channels server
//!
//! Expects a dev server on https://localhost:5010 with a self-signed
//! certificate and the `dev`/`dev` account.
//!
//! Run with: cargo run --example get_channel
//! Set RUST_LOG=spv_channels=debug to see the request being sent.

use spv_channels::{ChannelsClient, ClientConfig, GetChannelRequest};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

const CHANNEL_ID: &str =
    "2vkapEui-Cfb3tY7l9FFviRjpsNGa0Iv4kFEHYoMWJdl4f9PSlvurjOCnTBzH1r_C8VUuvQsn-0NsO0Q2bKGUA";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("SPV Channels GetChannel Example");
    println!("===============================\n");

    let config = ClientConfig::new("localhost:5010", "v1")
        .with_basic_auth("dev", "dev")
        .with_insecure_skip_verify(true);
    let client = ChannelsClient::new(config)?;

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let request = GetChannelRequest::new("1", CHANNEL_ID);
    let reply = client.get_channel(&cancel, &request).await?;

    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}
