//! Chat proxy server
//!
//! Serves `POST /api/chat` for the portfolio's chat widget: each message is
//! sent upstream behind the assistant's fixed context, and only the reply
//! text (or a generic error) comes back.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use log::info;

use wavefolio::chat::{router, ChatService, HttpCompletionClient};
use wavefolio::cli::ProxyArgs;
use wavefolio::params::{API_KEY_ENV, DEFAULT_SYSTEM_CONTEXT};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = ProxyArgs::parse();
    let upstream = args.upstream_config();

    let api_key = match args.api_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => bail!("{} is not set; refusing to start without a credential", API_KEY_ENV),
    };

    let system_context = match &args.context_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading context file {}", path.display()))?,
        None => DEFAULT_SYSTEM_CONTEXT.to_string(),
    };

    let client = HttpCompletionClient::new(
        upstream.endpoint.clone(),
        api_key,
        Duration::from_secs(upstream.timeout_secs),
    )?;
    info!("Upstream: {} (model {})", client.endpoint(), upstream.model);

    let service = ChatService::new(Arc::new(client), system_context, upstream);
    let app = router(Arc::new(service));

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("Chat proxy listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
