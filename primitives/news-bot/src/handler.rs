//! Discord glue: command registration, dispatch and the reply adapter.

use news_store::NewsStore;
use serenity::all::{
    Command, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, EventHandler, Interaction, Permissions, Ready,
};
use serenity::async_trait;
use tracing::{debug, error, info, warn};

use crate::auth::{AdminPolicy, Caller};
use crate::commands::{self, SET_NEWS_COMMAND, TEXT_OPTION};
use crate::reply::{InteractionReply, ReplyError};

/// Answers a [`CommandInteraction`] over the Discord HTTP API.
pub struct DiscordReply<'a> {
    ctx: &'a Context,
    command: &'a CommandInteraction,
    acknowledged: bool,
}

impl<'a> DiscordReply<'a> {
    pub fn new(ctx: &'a Context, command: &'a CommandInteraction) -> Self {
        Self {
            ctx,
            command,
            acknowledged: false,
        }
    }
}

/// Unknown interactions come back as 404.
fn reply_error(e: serenity::Error) -> ReplyError {
    match &e {
        serenity::Error::Http(http) if http.status_code().map(|s| s.as_u16()) == Some(404) => {
            ReplyError::Expired
        }
        _ => ReplyError::Platform(Box::new(e)),
    }
}

impl InteractionReply for DiscordReply<'_> {
    async fn defer(&mut self) -> Result<(), ReplyError> {
        self.command.defer(&self.ctx.http).await.map_err(reply_error)?;
        self.acknowledged = true;
        Ok(())
    }

    async fn respond(&mut self, content: &str, ephemeral: bool) -> Result<(), ReplyError> {
        let message = CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(ephemeral);
        self.command
            .create_response(&self.ctx.http, CreateInteractionResponse::Message(message))
            .await
            .map_err(reply_error)?;
        self.acknowledged = true;
        Ok(())
    }

    async fn followup(&mut self, content: &str, ephemeral: bool) -> Result<(), ReplyError> {
        let message = CreateInteractionResponseFollowup::new()
            .content(content)
            .ephemeral(ephemeral);
        self.command
            .create_followup(&self.ctx.http, message)
            .await
            .map_err(reply_error)?;
        Ok(())
    }

    fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }
}

/// Builds the two slash commands, naming the query command `news_command`.
pub fn command_definitions(news_command: &str) -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(news_command).description(commands::NEWS_DESCRIPTION),
        CreateCommand::new(SET_NEWS_COMMAND)
            .description(commands::SET_NEWS_DESCRIPTION)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    TEXT_OPTION,
                    commands::TEXT_OPTION_DESCRIPTION,
                )
                .required(true),
            ),
    ]
}

fn caller(command: &CommandInteraction) -> Caller {
    let is_administrator = command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|perms| perms.contains(Permissions::ADMINISTRATOR));

    Caller {
        id: command.user.id.get(),
        is_administrator,
    }
}

fn text_option(command: &CommandInteraction) -> Option<&str> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == TEXT_OPTION)
        .and_then(|option| option.value.as_str())
}

/// Gateway event handler for the news commands.
pub struct Handler {
    store: NewsStore,
    policy: AdminPolicy,
    news_command: String,
}

impl Handler {
    pub fn new(store: NewsStore, policy: AdminPolicy, news_command: impl Into<String>) -> Self {
        Self {
            store,
            policy,
            news_command: news_command.into(),
        }
    }

    async fn set_news(&self, ctx: &Context, command: &CommandInteraction) {
        let mut reply = DiscordReply::new(ctx, command);

        let Some(text) = text_option(command) else {
            warn!("set-news invoked without a text option");
            if let Err(e) = reply.respond(commands::UPDATE_FAILED, true).await {
                error!(error = %e, "failed to respond to interaction");
            }
            return;
        };

        commands::update_news(&self.store, &self.policy, &caller(command), text, &mut reply).await;
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        let definitions = command_definitions(&self.news_command);
        match Command::set_global_commands(&ctx.http, definitions).await {
            Ok(registered) => info!(count = registered.len(), "slash commands synced"),
            Err(e) => error!(error = %e, "failed to sync slash commands"),
        }

        info!(user = %ready.user.name, id = %ready.user.id, "logged in");
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let name = command.data.name.as_str();
        debug!(command = name, user = %command.user.id, "slash command");

        if name == self.news_command {
            let mut reply = DiscordReply::new(&ctx, &command);
            commands::query_news(&self.store, &mut reply).await;
        } else if name == SET_NEWS_COMMAND {
            self.set_news(&ctx, &command).await;
        } else {
            debug!(command = name, "ignoring unknown command");
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    const USER_ID: u64 = 4_242_424_242;

    /// A `/set-news` interaction as the gateway delivers it, merged with
    /// `extra` at the top level.
    fn set_news_interaction(options: Value, extra: Value) -> CommandInteraction {
        let mut payload = json!({
            "id": "1001",
            "application_id": "1002",
            "channel_id": "1003",
            "token": "interaction-token",
            "version": 1,
            "locale": "en-US",
            "entitlements": [],
            "attachment_size_limit": 26_214_400,
            "data": {
                "id": "1004",
                "name": SET_NEWS_COMMAND,
                "type": 1,
                "options": options,
            },
        });
        if let (Some(payload), Value::Object(extra)) = (payload.as_object_mut(), extra) {
            payload.extend(extra);
        }
        serde_json::from_value(payload).unwrap()
    }

    fn text(value: &str) -> Value {
        json!([{ "name": TEXT_OPTION, "type": 3, "value": value }])
    }

    fn user() -> Value {
        json!({ "id": USER_ID.to_string(), "username": "ballkid" })
    }

    /// Invoked in a guild by a member holding `permissions`.
    fn in_guild(permissions: &str) -> Value {
        json!({
            "guild_id": "1005",
            "member": {
                "user": user(),
                "roles": [],
                "deaf": false,
                "mute": false,
                "flags": 0,
                "permissions": permissions,
            },
        })
    }

    /// Invoked in a direct message, where there is no member.
    fn in_dm() -> Value {
        json!({ "user": user() })
    }

    #[test]
    fn guild_administrator_is_flagged() {
        // ADMINISTRATOR | SEND_MESSAGES
        let command = set_news_interaction(text("[b]hi[/b]"), in_guild("2056"));

        assert_eq!(
            caller(&command),
            Caller {
                id: USER_ID,
                is_administrator: true,
            }
        );
        assert_eq!(text_option(&command), Some("[b]hi[/b]"));
    }

    #[test]
    fn guild_member_without_administrator_is_not_flagged() {
        // SEND_MESSAGES | MANAGE_MESSAGES
        let command = set_news_interaction(text("hello"), in_guild("10240"));

        assert_eq!(
            caller(&command),
            Caller {
                id: USER_ID,
                is_administrator: false,
            }
        );
        assert_eq!(text_option(&command), Some("hello"));
    }

    #[test]
    fn direct_message_caller_is_never_administrator() {
        let command = set_news_interaction(text("from a dm"), in_dm());

        assert_eq!(
            caller(&command),
            Caller {
                id: USER_ID,
                is_administrator: false,
            }
        );
        assert_eq!(text_option(&command), Some("from a dm"));
    }

    #[test]
    fn missing_text_option_is_none() {
        let command = set_news_interaction(json!([]), in_dm());

        assert_eq!(text_option(&command), None);
    }

    #[test]
    fn direct_message_caller_passes_gate_only_when_listed() {
        let command = set_news_interaction(text("x"), in_dm());

        assert!(AdminPolicy::new([USER_ID]).permits(&caller(&command)));
        assert!(!AdminPolicy::new([1]).permits(&caller(&command)));
    }

    #[test]
    fn defines_query_and_update_commands() {
        let json = serde_json::to_value(command_definitions("tennis-news")).unwrap();

        assert_eq!(json[0]["name"], "tennis-news");
        assert_eq!(json[0]["description"], commands::NEWS_DESCRIPTION);

        assert_eq!(json[1]["name"], SET_NEWS_COMMAND);
        assert_eq!(json[1]["options"][0]["name"], TEXT_OPTION);
        assert_eq!(json[1]["options"][0]["required"], true);
    }
}
