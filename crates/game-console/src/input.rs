//! Input queue between host callbacks and the console.
//!
//! Host input callbacks post [`ConsoleAction`]s through a [`ConsoleInput`]
//! handle instead of touching console state. The console drains the queue at
//! the start of each frame, in arrival order.

use crate::action::{ConsoleAction, ConsoleKey};
use std::sync::mpsc::{self, Receiver, Sender};

/// Cloneable handle for posting input to a console.
#[derive(Debug, Clone)]
pub struct ConsoleInput {
    action_tx: Sender<ConsoleAction>,
}

impl ConsoleInput {
    /// Queue an action for the next frame
    pub fn post(&self, action: ConsoleAction) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("ConsoleInput: console dropped, discarding {:?}", e.0);
        }
    }

    pub fn character_typed(&self, character: char) {
        self.post(ConsoleAction::CharacterTyped(character));
    }

    pub fn key_pressed(&self, key: ConsoleKey) {
        self.post(ConsoleAction::KeyPressed(key));
    }

    pub fn scrolled(&self, amount_y: f32) {
        self.post(ConsoleAction::Scrolled(amount_y));
    }
}

/// Create a connected input handle and receiving end.
pub(crate) fn channel() -> (ConsoleInput, Receiver<ConsoleAction>) {
    let (action_tx, action_rx) = mpsc::channel();
    (ConsoleInput { action_tx }, action_rx)
}
