//! Unit tests for NewBetHandler.

use dbot_core::{Handler, HandlerResponse};

use super::{sample_command, sample_message};
use crate::NewBetHandler;

#[tokio::test]
async fn test_newbet_formats_announcement() {
    let event = sample_command(
        "newbet",
        "alice",
        &[("title", "Pizza"), ("outcome-1", "Yes"), ("outcome-2", "No")],
    );
    let response = NewBetHandler.handle(&event).await.unwrap();
    assert_eq!(
        response,
        HandlerResponse::Reply("alice started a bet!\n> Pizza\n > Yes OR No".to_string())
    );
}

#[tokio::test]
async fn test_newbet_option_order_does_not_matter() {
    let event = sample_command(
        "newbet",
        "carol",
        &[("outcome-2", "Rain"), ("title", "Weather"), ("outcome-1", "Sun")],
    );
    let response = NewBetHandler.handle(&event).await.unwrap();
    assert_eq!(
        response,
        HandlerResponse::Reply("carol started a bet!\n> Weather\n > Sun OR Rain".to_string())
    );
}

#[tokio::test]
async fn test_newbet_missing_option_sends_header_only() {
    let event = sample_command("newbet", "alice", &[("title", "Pizza"), ("outcome-1", "Yes")]);
    let response = NewBetHandler.handle(&event).await.unwrap();
    assert_eq!(
        response,
        HandlerResponse::Reply("alice started a bet!\n".to_string())
    );
}

#[tokio::test]
async fn test_newbet_ignores_other_events() {
    let other = NewBetHandler
        .handle(&sample_command("test", "alice", &[]))
        .await
        .unwrap();
    assert_eq!(other, HandlerResponse::Ignore);

    let message = NewBetHandler.handle(&sample_message("newbet", false)).await.unwrap();
    assert_eq!(message, HandlerResponse::Ignore);
}
