//! # Handler chain
//!
//! Runs a sequence of handlers for each event. Each handler has optional before/handle/after: all
//! before run in order (any false stops the chain); then handle runs until Stop or Reply; then all
//! after run in reverse. [`Dispatcher`] wraps a chain and sends the resulting reply through a [`dbot_core::Bot`].

mod dispatcher;

pub use dispatcher::Dispatcher;

use dbot_core::{Event, Handler, HandlerResponse, Result};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Chain of handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs all before → handle until Stop/Reply → all after in reverse. Returns the first Stop or
    /// Reply, or Ignore when no handler claimed the event.
    #[instrument(skip(self, event), fields(kind = event.kind(), user_id = event.user().id))]
    pub async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        let mut final_response = HandlerResponse::Ignore;

        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            if !h.before(event).await? {
                debug!(handler = %name, "step: before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            let response = h.handle(event).await?;
            debug!(handler = %name, response = ?response, "step: handler handle done");

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => {}
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(event, &final_response).await?;
        }

        Ok(final_response)
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs
