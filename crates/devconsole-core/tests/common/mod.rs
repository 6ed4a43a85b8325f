//! In-memory host used by the integration tests

#![allow(dead_code)]

use devconsole_core::{
    BombAccessor, BombId, ChatBridge, Console, ConsoleOptions, GameState, HostError, HostServices,
    LeaderboardControl, ModuleForceSolve, ModuleId, ModuleInfo, ModuleKind, TaskHandle,
    TaskRunner,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone)]
pub struct FakeBomb {
    pub time: f64,
    pub strikes: u32,
    pub strike_limit: u32,
    pub running: bool,
    pub detonated: Option<String>,
    pub strike_reasons: Vec<String>,
}

impl Default for FakeBomb {
    fn default() -> Self {
        Self {
            time: 45.0,
            strikes: 0,
            strike_limit: 3,
            running: true,
            detonated: None,
            strike_reasons: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct FakeState {
    pub bombs: Vec<FakeBomb>,
    pub modules: Vec<ModuleInfo>,
    pub solved: Vec<ModuleId>,
    pub refuse_solve: Vec<ModuleId>,
    pub held: Option<BombId>,
    pub focused: Option<ModuleId>,
    pub leaderboard_calls: Vec<bool>,
    pub chat: Vec<(String, String)>,
    pub turns: Vec<Arc<AtomicBool>>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeHost {
    state: Arc<Mutex<FakeState>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// One bomb with a regular, a needy, an empty and a timer slot
    pub fn with_standard_bomb() -> Self {
        let host = Self::new();
        {
            let mut state = host.state();
            state.bombs.push(FakeBomb::default());
            let bomb = BombId(0);
            for (id, (name, kind)) in [
                ("Wires", ModuleKind::Regular),
                ("Venting Gas", ModuleKind::Needy),
                ("Empty", ModuleKind::Empty),
                ("Timer", ModuleKind::Timer),
                ("Keypad", ModuleKind::Regular),
            ]
            .into_iter()
            .enumerate()
            {
                state.modules.push(ModuleInfo {
                    id: ModuleId(id),
                    bomb,
                    name: name.to_string(),
                    kind,
                    solvable: kind == ModuleKind::Regular,
                });
            }
            state.held = Some(bomb);
        }
        host
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn services(&self) -> HostServices {
        HostServices::new(Box::new(self.clone()), Box::new(self.clone()))
            .with_force_solve(Box::new(self.clone()))
            .with_chat(Box::new(self.clone()))
            .with_tasks(Box::new(self.clone()))
    }

    fn with_bomb<T>(&self, bomb: BombId, f: impl FnOnce(&mut FakeBomb) -> T) -> Result<T, HostError> {
        let mut state = self.state();
        state
            .bombs
            .get_mut(bomb.0)
            .map(f)
            .ok_or_else(|| HostError::Rejected(format!("no bomb {}", bomb)))
    }
}

impl BombAccessor for FakeHost {
    fn bombs(&self) -> Vec<BombId> {
        (0..self.state().bombs.len()).map(BombId).collect()
    }

    fn modules(&self) -> Vec<ModuleInfo> {
        self.state().modules.clone()
    }

    fn held_bomb(&self) -> Option<BombId> {
        self.state().held
    }

    fn focused_module(&self) -> Option<ModuleId> {
        self.state().focused
    }

    fn time_remaining(&self, bomb: BombId) -> Result<f64, HostError> {
        self.with_bomb(bomb, |b| b.time)
    }

    fn set_time_remaining(&mut self, bomb: BombId, seconds: f64) -> Result<(), HostError> {
        self.with_bomb(bomb, |b| b.time = seconds)
    }

    fn strike_count(&self, bomb: BombId) -> Result<u32, HostError> {
        self.with_bomb(bomb, |b| b.strikes)
    }

    fn set_strike_count(&mut self, bomb: BombId, strikes: u32) -> Result<(), HostError> {
        self.with_bomb(bomb, |b| b.strikes = strikes)
    }

    fn strike_limit(&self, bomb: BombId) -> Result<u32, HostError> {
        self.with_bomb(bomb, |b| b.strike_limit)
    }

    fn set_strike_limit(&mut self, bomb: BombId, limit: u32) -> Result<(), HostError> {
        self.with_bomb(bomb, |b| b.strike_limit = limit)
    }

    fn detonate(&mut self, bomb: BombId, reason: &str) -> Result<(), HostError> {
        self.with_bomb(bomb, |b| b.detonated = Some(reason.to_string()))
    }

    fn cause_strike(&mut self, bomb: BombId, reason: &str) -> Result<(), HostError> {
        self.with_bomb(bomb, |b| {
            b.strikes += 1;
            b.strike_reasons.push(reason.to_string());
        })
    }

    fn is_timer_running(&self, bomb: BombId) -> Result<bool, HostError> {
        self.with_bomb(bomb, |b| b.running)
    }

    fn pause_timer(&mut self, bomb: BombId) -> Result<(), HostError> {
        self.with_bomb(bomb, |b| b.running = false)
    }

    fn unpause_timer(&mut self, bomb: BombId) -> Result<(), HostError> {
        self.with_bomb(bomb, |b| b.running = true)
    }

    fn is_solved(&self, module: ModuleId) -> Result<bool, HostError> {
        Ok(self.state().solved.contains(&module))
    }
}

impl ModuleForceSolve for FakeHost {
    fn force_solve(&mut self, module: ModuleId) -> Result<(), HostError> {
        let mut state = self.state();
        if state.refuse_solve.contains(&module) {
            return Err(HostError::Rejected("module refused".to_string()));
        }
        state.solved.push(module);
        Ok(())
    }
}

impl LeaderboardControl for FakeHost {
    fn set_disabled(&mut self, disabled: bool) {
        self.state().leaderboard_calls.push(disabled);
    }
}

impl ChatBridge for FakeHost {
    fn relay(
        &mut self,
        handle: &str,
        _sender_tag: Option<&str>,
        message: &str,
    ) -> Result<(), HostError> {
        self.state().chat.push((handle.to_string(), message.to_string()));
        Ok(())
    }
}

#[derive(Debug)]
pub struct FakeTask {
    cancelled: Arc<AtomicBool>,
}

impl TaskHandle for FakeTask {
    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    fn is_finished(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl TaskRunner for FakeHost {
    fn start_turn(&mut self, _bomb: BombId) -> Result<Box<dyn TaskHandle>, HostError> {
        let cancelled = Arc::new(AtomicBool::new(false));
        self.state().turns.push(Arc::clone(&cancelled));
        Ok(Box::new(FakeTask { cancelled }))
    }
}

/// Console over `host`, already in an active session
pub fn active_console(host: &FakeHost, privileged: bool) -> Console {
    let options = ConsoleOptions {
        privileged,
        ..ConsoleOptions::default()
    };
    let mut console = Console::new(host.services(), options).unwrap();
    console.on_state_change(GameState::Gameplay);
    console.tick();
    assert!(console.session().is_active());
    console
}

/// Messages currently in the buffer, oldest first
pub fn messages(console: &Console) -> Vec<String> {
    console.buffer().iter().map(|e| e.message.clone()).collect()
}

/// Submit a line and drain the resulting log entries into the buffer
pub fn run(console: &mut Console, line: &str) -> Vec<devconsole_core::ShellRequest> {
    let requests = console.submit_line(line);
    console.tick();
    requests
}
