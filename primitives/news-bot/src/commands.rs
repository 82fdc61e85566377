//! Slash-command flows, independent of the chat client.

use news_store::{NewsError, NewsStore};
use tracing::{error, info, warn};

use crate::auth::{AdminPolicy, Caller};
use crate::reply::{InteractionReply, ReplyError};

pub const DEFAULT_NEWS_COMMAND: &str = "minimal-tennis-news";
pub const NEWS_DESCRIPTION: &str = "Shows the latest development progress for Minimal Tennis 🎾";

pub const SET_NEWS_COMMAND: &str = "set-news";
pub const SET_NEWS_DESCRIPTION: &str = "Update the current game progress message (admin only).";
pub const TEXT_OPTION: &str = "text";
pub const TEXT_OPTION_DESCRIPTION: &str =
    "The new progress text. You can use [b], [i], [br], [ul], [li] for formatting.";

pub const FETCH_FAILED: &str = "❌ Error fetching news. Try again later.";
pub const PERMISSION_DENIED: &str = "❌ You don’t have permission to use this command.";
pub const UPDATED: &str = "✅ News updated successfully!";
pub const UPDATE_FAILED: &str = "❌ Failed to update news. Try again later.";

#[derive(Debug, thiserror::Error)]
enum QueryError {
    #[error(transparent)]
    Reply(#[from] ReplyError),

    #[error(transparent)]
    News(#[from] NewsError),
}

/// Result of an update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Saved,
    Denied,
    Failed,
}

/// Answers the query command with the rendered news.
///
/// The interaction is deferred first so a slow read cannot outlive the
/// platform's response window. Failures are logged and the caller gets one
/// ephemeral error message on a best-effort basis.
pub async fn query_news<R: InteractionReply>(store: &NewsStore, reply: &mut R) {
    let Err(err) = send_news(store, reply).await else {
        return;
    };

    if let QueryError::Reply(ReplyError::Expired) = err {
        warn!("interaction expired before the news could be sent");
        return;
    }

    error!(error = %err, "failed to answer news query");

    let fallback = if reply.is_acknowledged() {
        reply.followup(FETCH_FAILED, true).await
    } else {
        reply.respond(FETCH_FAILED, true).await
    };

    if let Err(e) = fallback {
        error!(error = %e, "failed to send news query error message");
    }
}

async fn send_news<R: InteractionReply>(
    store: &NewsStore,
    reply: &mut R,
) -> Result<(), QueryError> {
    reply.defer().await?;
    let news = store.load().await?;
    reply.followup(&news, false).await?;
    Ok(())
}

/// Handles the update command: checks the caller, then stores `text`
/// verbatim.
pub async fn update_news<R: InteractionReply>(
    store: &NewsStore,
    policy: &AdminPolicy,
    caller: &Caller,
    text: &str,
    reply: &mut R,
) -> UpdateOutcome {
    if !policy.permits(caller) {
        info!(caller = caller.id, "refused news update");
        respond_ephemeral(reply, PERMISSION_DENIED).await;
        return UpdateOutcome::Denied;
    }

    match store.save(text).await {
        Ok(()) => {
            info!(caller = caller.id, "news updated");
            respond_ephemeral(reply, UPDATED).await;
            UpdateOutcome::Saved
        }
        Err(e) => {
            error!(caller = caller.id, error = %e, "failed to save news");
            respond_ephemeral(reply, UPDATE_FAILED).await;
            UpdateOutcome::Failed
        }
    }
}

async fn respond_ephemeral<R: InteractionReply>(reply: &mut R, content: &str) {
    if let Err(e) = reply.respond(content, true).await {
        error!(error = %e, "failed to respond to interaction");
    }
}
