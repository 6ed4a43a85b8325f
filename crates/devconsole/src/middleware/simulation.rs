//! Drives the simulated host: timer progression, lifecycle signals and the
//! player's hold/focus inputs

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::sim::SimHost;
use crate::state::AppState;
use devconsole_core::GameState;
use std::time::Instant;

pub struct SimulationMiddleware {
    host: SimHost,
    last_tick: Instant,
}

impl SimulationMiddleware {
    pub fn new(host: SimHost) -> Self {
        Self {
            host,
            last_tick: Instant::now(),
        }
    }
}

impl Middleware for SimulationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Tick => {
                let now = Instant::now();
                self.host
                    .advance(now.duration_since(self.last_tick).as_secs_f64());
                self.last_tick = now;
                let summary = self.host.summary();
                if summary != state.world {
                    dispatcher.dispatch(Action::WorldUpdated(summary));
                }
                true
            }
            Action::StartGame => {
                if state.world.in_game {
                    log::warn!("A game is already running");
                } else {
                    self.host.spawn_bomb();
                    dispatcher.dispatch(Action::GameStateChanged(GameState::Gameplay));
                }
                false
            }
            Action::EndGame => {
                self.host.reset();
                dispatcher.dispatch(Action::GameStateChanged(GameState::PostGame));
                false
            }
            Action::ToggleHold => {
                self.host.toggle_hold();
                false
            }
            Action::CycleFocus => {
                self.host.cycle_focus();
                false
            }
            _ => true,
        }
    }
}
