//! Command line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::BotError;
use crate::commands::DEFAULT_NEWS_COMMAND;

/// User ids allowed to run `/set-news` without the administrator permission.
pub const DEFAULT_ADMIN_IDS: &str = "1313333441525448704";

/// Discord bot that serves a stored news message.
#[derive(Parser, Clone)]
#[command(name = "news-bot")]
#[command(about = "Discord bot serving a news message via slash commands")]
pub struct Args {
    /// Discord bot token.
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    pub token: String,

    /// File holding the raw news text.
    #[arg(long, env = "NEWS_FILE", default_value = "update.txt")]
    pub news_file: PathBuf,

    /// Comma-separated user ids allowed to update the news.
    #[arg(
        long,
        env = "NEWS_ADMIN_IDS",
        value_delimiter = ',',
        default_value = DEFAULT_ADMIN_IDS
    )]
    pub admin_ids: Vec<u64>,

    /// Name of the query slash command.
    #[arg(long, env = "NEWS_COMMAND_NAME", default_value = DEFAULT_NEWS_COMMAND)]
    pub news_command: String,

    /// Port for the health server.
    #[arg(short, long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Host for the health server to bind to. The heartbeat pings this host,
    /// or loopback when it is unspecified.
    #[arg(long, env = "HEALTH_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Seconds between heartbeat pings.
    #[arg(
        long,
        env = "HEARTBEAT_INTERVAL_SECS",
        default_value = "300",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub heartbeat_interval: u64,

    /// Heartbeat request timeout in seconds.
    #[arg(
        long,
        env = "HEARTBEAT_TIMEOUT_SECS",
        default_value = "5",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub heartbeat_timeout: u64,

    /// Run the chat client only, without health server or heartbeat.
    #[arg(
        long,
        env = "NEWS_BOT_NO_HEALTH",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_health: bool,
}

impl Args {
    /// Rejects configurations clap cannot catch on its own.
    pub fn validate(&self) -> Result<(), BotError> {
        if self.token.trim().is_empty() {
            return Err(BotError::MissingToken);
        }
        self.health_addr()?;
        Ok(())
    }

    pub fn health_addr(&self) -> Result<SocketAddr, BotError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| BotError::InvalidAddr(addr))
    }

    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.heartbeat_interval)
    }

    pub fn heartbeat_timeout(&self) -> Duration {
        Duration::from_secs(self.heartbeat_timeout)
    }
}
