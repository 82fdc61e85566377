//! The reply surface of a slash-command interaction.

use std::future::Future;

/// Failure to answer an interaction.
#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    /// The platform no longer knows the interaction, usually because its
    /// response window has passed.
    #[error("interaction expired or unknown")]
    Expired,

    #[error(transparent)]
    Platform(Box<dyn std::error::Error + Send + Sync>),
}

/// Ways a command handler can answer the caller.
///
/// An interaction must be acknowledged exactly once, either by
/// [`defer`](Self::defer) or [`respond`](Self::respond); everything after
/// that goes through [`followup`](Self::followup).
pub trait InteractionReply {
    /// Acknowledges the interaction without content.
    fn defer(&mut self) -> impl Future<Output = Result<(), ReplyError>> + Send;

    /// Sends the initial response.
    fn respond(
        &mut self,
        content: &str,
        ephemeral: bool,
    ) -> impl Future<Output = Result<(), ReplyError>> + Send;

    /// Sends a message after the interaction has been acknowledged.
    fn followup(
        &mut self,
        content: &str,
        ephemeral: bool,
    ) -> impl Future<Output = Result<(), ReplyError>> + Send;

    /// Whether `defer` or `respond` has already succeeded.
    fn is_acknowledged(&self) -> bool;
}
