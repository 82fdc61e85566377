//! News Bot
//!
//! Discord bot that publishes a news message through slash commands and keeps
//! a health endpoint open for hosting platforms.
//!
//! # Usage
//!
//! ```bash
//! # Token from the environment (or a .env file), health server on $PORT
//! DISCORD_TOKEN=... news-bot
//!
//! # Custom news file and extra admins
//! news-bot --news-file /data/update.txt --admin-ids 1313333441525448704,42
//!
//! # Chat client only
//! news-bot --no-health
//! ```

use anyhow::Context as _;
use clap::Parser;
use news_bot::{
    BotError,
    auth::AdminPolicy,
    config::Args,
    handler::Handler,
    health,
    heartbeat::{self, Heartbeat},
};
use news_store::NewsStore;
use serenity::{Client, all::GatewayIntents};
use tokio::signal::unix::{SignalKind, signal};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Binds the health server and spawns it together with the heartbeat.
async fn start_health(args: &Args) -> Result<(), BotError> {
    let addr = args.health_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| BotError::Bind { addr, source })?;

    tokio::spawn(async move {
        if let Err(e) = health::serve(listener).await {
            error!(error = %e, "health server stopped");
        }
    });
    info!(%addr, "health server started");

    let heartbeat = Heartbeat::new(
        heartbeat::healthz_url(addr),
        args.heartbeat_interval(),
        args.heartbeat_timeout(),
    )?;
    info!(
        url = heartbeat.url(),
        interval_secs = args.heartbeat_interval,
        "heartbeat started"
    );
    tokio::spawn(heartbeat.run());

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the real environment may carry everything.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    args.validate()?;

    if !args.no_health {
        start_health(&args).await?;
    }

    let store = NewsStore::new(&args.news_file);
    let policy = AdminPolicy::new(args.admin_ids.iter().copied());
    info!(
        news_file = %store.path().display(),
        admins = args.admin_ids.len(),
        "news store ready"
    );

    let handler = Handler::new(store, policy, args.news_command.clone());
    let mut client = Client::builder(&args.token, GatewayIntents::non_privileged())
        .event_handler(handler)
        .await
        .context("failed to build Discord client")?;

    let shard_manager = client.shard_manager.clone();

    // Set up SIGTERM handler for graceful shutdown
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = client.start() => {
            result.context("Discord client stopped")?;
        }
        _ = sigterm.recv() => {
            info!("SIGTERM received, shutting down");
            shard_manager.shutdown_all().await;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("interrupt received, shutting down");
            shard_manager.shutdown_all().await;
        }
    }

    Ok(())
}
