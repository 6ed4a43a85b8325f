//! Dispatcher for middleware action dispatch
//!
//! Actions dispatched here re-enter the middleware chain from the beginning
//! once the store has finished with the current action.

use crate::actions::Action;
use std::sync::mpsc::Sender;

#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
