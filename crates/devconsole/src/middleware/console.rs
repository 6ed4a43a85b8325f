//! Console middleware
//!
//! Owns the console core. Input submission, history recall and clearing are
//! handled here; every change to the log buffer is published to the state as
//! a fresh snapshot.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use devconsole_core::{Console, ShellRequest};
use std::sync::Arc;

pub struct ConsoleMiddleware {
    console: Console,
}

impl ConsoleMiddleware {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    fn publish(&self, dispatcher: &Dispatcher) {
        let entries = self.console.buffer().iter().cloned().collect();
        dispatcher.dispatch(Action::EntriesUpdated(Arc::new(entries)));
    }

    fn submit(&mut self, line: &str, dispatcher: &Dispatcher) {
        let requests = self.console.submit_line(line);
        dispatcher.dispatch(Action::InputClear);
        for request in requests {
            match request {
                ShellRequest::Close => dispatcher.dispatch(Action::ConsoleClose),
            }
        }
        // Results of the command are queued; show them right away
        self.console.tick();
        self.publish(dispatcher);
    }
}

impl Middleware for ConsoleMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Tick => {
                if self.console.tick() > 0 {
                    self.publish(dispatcher);
                }
                true
            }
            Action::InputSubmit => {
                self.submit(&state.console.input, dispatcher);
                false
            }
            Action::HistoryPrevious => {
                if let Some(text) = self
                    .console
                    .history_mut()
                    .recall_previous(&state.console.input)
                {
                    dispatcher.dispatch(Action::InputReplaced(text));
                }
                false
            }
            Action::HistoryNext => {
                if let Some(text) = self.console.history_mut().recall_next() {
                    dispatcher.dispatch(Action::InputReplaced(text));
                }
                false
            }
            Action::ClearLog => {
                self.console.clear();
                self.publish(dispatcher);
                false
            }
            Action::GameStateChanged(game_state) => {
                self.console.on_state_change(*game_state);
                true
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimHost;
    use devconsole_core::ConsoleOptions;
    use std::sync::mpsc::{self, Receiver};

    fn middleware() -> (ConsoleMiddleware, Dispatcher, Receiver<Action>) {
        let console = Console::new(SimHost::new().services(), ConsoleOptions::default()).unwrap();
        let (tx, rx) = mpsc::channel();
        (ConsoleMiddleware::new(console), Dispatcher::new(tx), rx)
    }

    fn with_input(text: &str) -> AppState {
        let mut state = AppState::default();
        state.console.visible = true;
        state.console.input = text.to_string();
        state
    }

    #[test]
    fn test_submit_clears_input_and_publishes() {
        let (mut mw, dispatcher, rx) = middleware();

        let passed = mw.handle(&Action::InputSubmit, &with_input("help"), &dispatcher);

        assert!(!passed);
        let actions: Vec<Action> = rx.try_iter().collect();
        assert!(matches!(actions[0], Action::InputClear));
        let Action::EntriesUpdated(entries) = &actions[1] else {
            panic!("expected entries, got {:?}", actions[1]);
        };
        assert_eq!(entries[0].message, "Command sent: help");
        assert!(entries[1].message.starts_with("Command Reference:"));
    }

    #[test]
    fn test_exit_closes_console() {
        let (mut mw, dispatcher, rx) = middleware();

        mw.handle(&Action::InputSubmit, &with_input("exit"), &dispatcher);

        let actions: Vec<Action> = rx.try_iter().collect();
        assert!(actions.iter().any(|a| matches!(a, Action::ConsoleClose)));
    }

    #[test]
    fn test_history_recall_restores_draft() {
        let (mut mw, dispatcher, rx) = middleware();
        mw.handle(&Action::InputSubmit, &with_input("help"), &dispatcher);
        rx.try_iter().for_each(drop);

        mw.handle(&Action::HistoryPrevious, &with_input("dra"), &dispatcher);
        mw.handle(&Action::HistoryNext, &with_input("help"), &dispatcher);

        let replaced: Vec<String> = rx
            .try_iter()
            .filter_map(|a| match a {
                Action::InputReplaced(text) => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(replaced, vec!["help".to_string(), "dra".to_string()]);
    }

    #[test]
    fn test_clear_publishes_empty_snapshot() {
        let (mut mw, dispatcher, rx) = middleware();
        mw.handle(&Action::InputSubmit, &with_input("help"), &dispatcher);
        rx.try_iter().for_each(drop);

        mw.handle(&Action::ClearLog, &AppState::default(), &dispatcher);

        let actions: Vec<Action> = rx.try_iter().collect();
        assert!(matches!(&actions[..], [Action::EntriesUpdated(e)] if e.is_empty()));
    }
}
