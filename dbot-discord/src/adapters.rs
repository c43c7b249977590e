//! Adapters between serenity (Discord) types and dbot_core types.
//! Depends only on serenity and dbot_core type definitions.

use chrono::{DateTime, Utc};
use dbot_core::{Channel, CommandInvocation, CommandSpec, Message, OptionKind, OptionValue, User};
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandDataOptionValue, CommandInteraction, CommandOptionType};

/// Maps a core option type tag to Discord's option type.
pub fn option_type(kind: OptionKind) -> CommandOptionType {
    match kind {
        OptionKind::String => CommandOptionType::String,
        OptionKind::Integer => CommandOptionType::Integer,
        OptionKind::Number => CommandOptionType::Number,
        OptionKind::Boolean => CommandOptionType::Boolean,
        OptionKind::User => CommandOptionType::User,
        OptionKind::Channel => CommandOptionType::Channel,
    }
}

/// Builds the registration payload for one command; options keep their order.
pub fn to_create_command(spec: &CommandSpec) -> CreateCommand {
    spec.options.iter().fold(
        CreateCommand::new(spec.name.as_str()).description(spec.description.as_str()),
        |command, option| {
            command.add_option(
                CreateCommandOption::new(
                    option_type(option.kind),
                    option.name.as_str(),
                    option.description.as_str(),
                )
                .required(option.required),
            )
        },
    )
}

/// Converts a serenity user to core [`User`].
pub fn user_from_discord(user: &serenity::model::user::User) -> User {
    User {
        id: user.id.get(),
        username: user.name.clone(),
        is_bot: user.bot,
    }
}

/// Converts a serenity message to core [`Message`]. Webhook posts count as automated.
pub fn message_from_discord(message: &serenity::model::channel::Message) -> Message {
    let mut author = user_from_discord(&message.author);
    author.is_bot |= message.webhook_id.is_some();
    Message {
        id: message.id.get(),
        author,
        channel: Channel {
            id: message.channel_id.get(),
        },
        content: message.content.clone(),
        created_at: DateTime::from_timestamp(message.timestamp.unix_timestamp(), 0)
            .unwrap_or_else(Utc::now),
    }
}

/// Converts a slash-command interaction to core [`CommandInvocation`]. Option kinds without a core
/// equivalent (attachments, sub-commands, ...) are dropped.
pub fn invocation_from_interaction(command: &CommandInteraction) -> CommandInvocation {
    CommandInvocation {
        interaction_id: command.id.get(),
        token: command.token.clone(),
        name: command.data.name.clone(),
        options: command
            .data
            .options
            .iter()
            .filter_map(|option| option_value(&option.value).map(|v| (option.name.clone(), v)))
            .collect(),
        user: user_from_discord(&command.user),
        channel: Channel {
            id: command.channel_id.get(),
        },
    }
}

fn option_value(value: &CommandDataOptionValue) -> Option<OptionValue> {
    match value {
        CommandDataOptionValue::String(s) => Some(OptionValue::String(s.clone())),
        CommandDataOptionValue::Integer(i) => Some(OptionValue::Integer(*i)),
        CommandDataOptionValue::Number(n) => Some(OptionValue::Number(*n)),
        CommandDataOptionValue::Boolean(b) => Some(OptionValue::Boolean(*b)),
        CommandDataOptionValue::User(id) => Some(OptionValue::User(id.get())),
        CommandDataOptionValue::Channel(id) => Some(OptionValue::Channel(id.get())),
        _ => None,
    }
}
