//! Periodic self-ping of the health endpoint.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use crate::{BotError, health::HEALTHZ_PATH};

/// URL of the health endpoint served on `addr`.
///
/// An unspecified bind address (`0.0.0.0`, `::`) is reached over loopback.
pub fn healthz_url(addr: SocketAddr) -> String {
    let ip = match addr.ip() {
        IpAddr::V4(ip) if ip.is_unspecified() => IpAddr::V4(Ipv4Addr::LOCALHOST),
        IpAddr::V6(ip) if ip.is_unspecified() => IpAddr::V6(Ipv6Addr::LOCALHOST),
        ip => ip,
    };
    format!("http://{}{HEALTHZ_PATH}", SocketAddr::new(ip, addr.port()))
}

/// Pings a URL on a fixed interval, forever.
#[derive(Debug, Clone)]
pub struct Heartbeat {
    client: Client,
    url: String,
    interval: Duration,
}

impl Heartbeat {
    pub fn new(url: String, interval: Duration, timeout: Duration) -> Result<Self, BotError> {
        if interval.is_zero() {
            return Err(BotError::ZeroInterval);
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url,
            interval,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issues a single GET and returns the response status.
    pub async fn ping(&self) -> Result<StatusCode, reqwest::Error> {
        let response = self.client.get(&self.url).send().await?;
        Ok(response.status())
    }

    /// Pings immediately, then once per interval. Failures are logged and
    /// the loop carries on.
    pub async fn run(self) {
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            info!(url = %self.url, "heartbeat ping");

            match self.ping().await {
                Ok(status) if status.is_success() => {}
                Ok(status) => {
                    warn!(url = %self.url, %status, "heartbeat got unexpected status");
                }
                Err(e) => {
                    error!(
                        url = %self.url,
                        error = %e,
                        "heartbeat failed to reach health endpoint"
                    );
                }
            }
        }
    }
}
