//! Component factory: the handler chain that maps events to replies.

use std::sync::Arc;

use handler_chain::HandlerChain;
use handlers::{
    IgnoreBotsHandler, LoggingHandler, NewBetHandler, StaticCommandHandler, StaticMessageHandler,
    TEST_COMMAND,
};

/// Bot filter first so automated authors never reach a reply handler.
pub fn build_handler_chain() -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(IgnoreBotsHandler))
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StaticCommandHandler::new(TEST_COMMAND, "Shut Up")))
        .add_handler(Arc::new(NewBetHandler))
        .add_handler(Arc::new(StaticMessageHandler::with_defaults()))
}
