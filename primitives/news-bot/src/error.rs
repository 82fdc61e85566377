use std::net::SocketAddr;

/// Startup and configuration failures.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("Discord token is empty; set DISCORD_TOKEN or pass --token")]
    MissingToken,

    #[error("invalid health server address {0}")]
    InvalidAddr(String),

    #[error("failed to bind health server on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("heartbeat interval must be greater than zero")]
    ZeroInterval,

    #[error("failed to build heartbeat HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
