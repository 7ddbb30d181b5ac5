use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::VecDeque;

/// A one-shot message for the client-side binding of input `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMessage {
    pub id: String,
    pub message: serde_json::Value,
}

/// Server-side handle on one connected page.
pub trait Session {
    fn send_input_message(&self, id: &str, message: serde_json::Value);
}

/// In-memory session that queues outgoing messages until drained.
#[derive(Debug, Default)]
pub struct MessageBuffer {
    queue: RefCell<VecDeque<InputMessage>>,
}

impl MessageBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<InputMessage> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

impl Session for MessageBuffer {
    fn send_input_message(&self, id: &str, message: serde_json::Value) {
        tracing::debug!("Queueing input message for {}", id);
        self.queue.borrow_mut().push_back(InputMessage {
            id: id.to_string(),
            message,
        });
    }
}
