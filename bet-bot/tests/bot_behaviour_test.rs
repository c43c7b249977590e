//! End-to-end tests for the bot's reply behaviour: the production handler chain driven through the
//! dispatcher with a recording transport in place of Discord.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bet_bot::build_handler_chain;
use chrono::Utc;
use dbot_core::{
    Bot, Channel, CommandInvocation, CommandSpec, Event, Message, OptionValue, RegisteredCommand,
    Result, User,
};
use handler_chain::Dispatcher;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Sent {
    Message { channel_id: u64, text: String },
    Response { interaction_id: u64, text: String },
}

#[derive(Default)]
struct RecordingBot {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingBot {
    fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn register_command(&self, spec: &CommandSpec) -> Result<RegisteredCommand> {
        Ok(RegisteredCommand {
            id: 1,
            name: spec.name.clone(),
        })
    }

    async fn delete_command(&self, _command: &RegisteredCommand) -> Result<()> {
        Ok(())
    }

    async fn send_message(&self, channel: &Channel, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Message {
            channel_id: channel.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn respond(&self, invocation: &CommandInvocation, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Response {
            interaction_id: invocation.interaction_id,
            text: text.to_string(),
        });
        Ok(())
    }
}

fn setup() -> (Arc<RecordingBot>, Dispatcher) {
    let bot = Arc::new(RecordingBot::default());
    let dispatcher = Dispatcher::new(build_handler_chain(), bot.clone());
    (bot, dispatcher)
}

fn message(text: &str, is_bot: bool) -> Event {
    Event::Message(Message {
        id: 1,
        author: User {
            id: 2,
            username: "bob".to_string(),
            is_bot,
        },
        channel: Channel { id: 3 },
        content: text.to_string(),
        created_at: Utc::now(),
    })
}

fn command(name: &str, username: &str, options: &[(&str, &str)]) -> Event {
    Event::Command(CommandInvocation {
        interaction_id: 11,
        token: "token".to_string(),
        name: name.to_string(),
        options: options
            .iter()
            .map(|(k, v)| (k.to_string(), OptionValue::String(v.to_string())))
            .collect::<HashMap<_, _>>(),
        user: User {
            id: 5,
            username: username.to_string(),
            is_bot: false,
        },
        channel: Channel { id: 3 },
    })
}

#[tokio::test]
async fn test_command_test_replies_shut_up() {
    let (bot, dispatcher) = setup();
    dispatcher.handle_event(command("test", "alice", &[])).await;
    assert_eq!(
        bot.sent(),
        vec![Sent::Response {
            interaction_id: 11,
            text: "Shut Up".to_string()
        }]
    );
}

#[tokio::test]
async fn test_command_newbet_announces_bet() {
    let (bot, dispatcher) = setup();
    dispatcher
        .handle_event(command(
            "newbet",
            "alice",
            &[("title", "Pizza"), ("outcome-1", "Yes"), ("outcome-2", "No")],
        ))
        .await;
    assert_eq!(
        bot.sent(),
        vec![Sent::Response {
            interaction_id: 11,
            text: "alice started a bet!\n> Pizza\n > Yes OR No".to_string()
        }]
    );
}

#[tokio::test]
async fn test_unknown_command_is_ignored() {
    let (bot, dispatcher) = setup();
    dispatcher.handle_event(command("settle", "alice", &[])).await;
    assert!(bot.sent().is_empty());
}

#[tokio::test]
async fn test_message_triggers() {
    let (bot, dispatcher) = setup();
    dispatcher.handle_event(message("ping", false)).await;
    dispatcher.handle_event(message("hello", false)).await;
    assert_eq!(
        bot.sent(),
        vec![
            Sent::Message {
                channel_id: 3,
                text: "Pong 🏓".to_string()
            },
            Sent::Message {
                channel_id: 3,
                text: "Choo choo! 🚅".to_string()
            },
        ]
    );
}

#[tokio::test]
async fn test_other_text_gets_no_reply() {
    let (bot, dispatcher) = setup();
    for text in ["PING", "hello!", "test", "newbet", ""] {
        dispatcher.handle_event(message(text, false)).await;
    }
    assert!(bot.sent().is_empty());
}

#[tokio::test]
async fn test_bot_authors_never_get_a_reply() {
    let (bot, dispatcher) = setup();
    for text in ["ping", "hello", "anything"] {
        dispatcher.handle_event(message(text, true)).await;
    }
    assert!(bot.sent().is_empty());
}

/// **Test: events can be dispatched concurrently from many tasks.**
#[tokio::test]
async fn test_concurrent_dispatch() {
    let (bot, dispatcher) = setup();
    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let dispatcher = dispatcher.clone();
            tokio::spawn(async move {
                let text = if i % 2 == 0 { "ping" } else { "hello" };
                dispatcher.handle_event(message(text, false)).await;
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }
    assert_eq!(bot.sent().len(), 16);
}
