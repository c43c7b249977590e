//! Unit test module
//!
//! Handler unit tests live here, separate from source files.
//! Tests interact with handlers via public and pub(crate) APIs.

mod bet_handler_test;

use std::collections::HashMap;

use chrono::Utc;
use dbot_core::{Channel, CommandInvocation, Event, Message, OptionValue, User};

pub(crate) fn sample_user(username: &str, is_bot: bool) -> User {
    User {
        id: 1001,
        username: username.to_string(),
        is_bot,
    }
}

pub(crate) fn sample_message(content: &str, is_bot: bool) -> Event {
    Event::Message(Message {
        id: 1,
        author: sample_user("bob", is_bot),
        channel: Channel { id: 123 },
        content: content.to_string(),
        created_at: Utc::now(),
    })
}

pub(crate) fn sample_command(name: &str, username: &str, options: &[(&str, &str)]) -> Event {
    Event::Command(CommandInvocation {
        interaction_id: 99,
        token: "token".to_string(),
        name: name.to_string(),
        options: options
            .iter()
            .map(|(k, v)| (k.to_string(), OptionValue::String(v.to_string())))
            .collect::<HashMap<_, _>>(),
        user: sample_user(username, false),
        channel: Channel { id: 123 },
    })
}
