//! Simulated host
//!
//! A tiny bomb-defusal world standing in for the game the console would be
//! embedded in. It implements every host capability trait, so the console
//! core drives it exactly the way it would drive a real host.

use devconsole_core::{
    BombAccessor, BombId, ChatBridge, HostError, HostServices, LeaderboardControl,
    ModuleForceSolve, ModuleId, ModuleInfo, ModuleKind, TaskHandle, TaskRunner,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

const START_TIME: f64 = 300.0;
const STRIKE_LIMIT: u32 = 3;
const TURN_STEPS: u32 = 12;
const TURN_STEP: Duration = Duration::from_millis(40);

const MODULES: [(&str, ModuleKind); 7] = [
    ("Wires", ModuleKind::Regular),
    ("The Button", ModuleKind::Regular),
    ("Keypad", ModuleKind::Regular),
    ("Simon Says", ModuleKind::Regular),
    ("Venting Gas", ModuleKind::Needy),
    ("Empty", ModuleKind::Empty),
    ("Timer", ModuleKind::Timer),
];

#[derive(Debug, Clone)]
struct SimBomb {
    id: BombId,
    time_remaining: f64,
    strikes: u32,
    strike_limit: u32,
    running: bool,
    exploded: Option<String>,
    face_up: bool,
}

impl SimBomb {
    fn new(id: BombId) -> Self {
        Self {
            id,
            time_remaining: START_TIME,
            strikes: 0,
            strike_limit: STRIKE_LIMIT,
            running: true,
            exploded: None,
            face_up: true,
        }
    }

    fn explode(&mut self, reason: &str) {
        if self.exploded.is_none() {
            log::warn!("Bomb {} exploded: {}", self.id, reason);
            self.exploded = Some(reason.to_string());
            self.running = false;
        }
    }
}

#[derive(Debug, Default)]
struct SimWorld {
    bombs: Vec<SimBomb>,
    modules: Vec<(ModuleInfo, bool)>,
    held: Option<BombId>,
    focused: Option<ModuleId>,
    leaderboard_disabled: bool,
}

impl SimWorld {
    fn bomb(&mut self, id: BombId) -> Result<&mut SimBomb, HostError> {
        let bomb = self
            .bombs
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| HostError::Rejected(format!("bomb {} does not exist", id)))?;
        if bomb.exploded.is_some() {
            return Err(HostError::Rejected(format!("bomb {} has exploded", id)));
        }
        Ok(bomb)
    }

    fn bomb_ref(&self, id: BombId) -> Result<&SimBomb, HostError> {
        self.bombs
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| HostError::Rejected(format!("bomb {} does not exist", id)))
    }
}

/// Read-only view of the world for the status bar
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldSummary {
    pub in_game: bool,
    pub bombs: Vec<BombSummary>,
    pub held: Option<BombId>,
    pub focused: Option<String>,
    pub leaderboard_disabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BombSummary {
    pub id: BombId,
    pub time_remaining: f64,
    pub strikes: u32,
    pub strike_limit: u32,
    pub running: bool,
    pub exploded: bool,
    pub face_up: bool,
    pub solved: usize,
    pub solvable: usize,
}

/// Shared handle to the simulated world
#[derive(Debug, Clone, Default)]
pub struct SimHost {
    world: Arc<Mutex<SimWorld>>,
    runtime: Option<Handle>,
}

impl SimHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runtime used for multi-frame effects such as turning a bomb
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    fn world(&self) -> MutexGuard<'_, SimWorld> {
        self.world.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Capabilities handed to the console core
    pub fn services(&self) -> HostServices {
        HostServices::new(Box::new(self.clone()), Box::new(self.clone()))
            .with_force_solve(Box::new(self.clone()))
            .with_chat(Box::new(self.clone()))
            .with_tasks(Box::new(self.clone()))
    }

    /// Spawn a fresh bomb with the standard module set
    pub fn spawn_bomb(&self) -> BombId {
        let mut world = self.world();
        let id = BombId(world.bombs.len());
        world.bombs.push(SimBomb::new(id));
        let first = world.modules.len();
        for (offset, (name, kind)) in MODULES.iter().enumerate() {
            let info = ModuleInfo {
                id: ModuleId(first + offset),
                bomb: id,
                name: name.to_string(),
                kind: *kind,
                solvable: *kind == ModuleKind::Regular,
            };
            world.modules.push((info, false));
        }
        log::info!("Spawned bomb {} with {} modules", id, MODULES.len());
        id
    }

    /// Remove every bomb
    pub fn reset(&self) {
        let mut world = self.world();
        world.bombs.clear();
        world.modules.clear();
        world.held = None;
        world.focused = None;
        log::info!("World reset");
    }

    /// Pick up the first bomb, or put down the held one
    pub fn toggle_hold(&self) {
        let mut world = self.world();
        world.held = match world.held {
            Some(_) => None,
            None => world.bombs.first().map(|b| b.id),
        };
        world.focused = None;
    }

    /// Move focus to the next module on the held bomb
    pub fn cycle_focus(&self) {
        let mut world = self.world();
        let Some(held) = world.held else {
            return;
        };
        let on_bomb: Vec<ModuleId> = world
            .modules
            .iter()
            .filter(|(m, _)| m.bomb == held)
            .map(|(m, _)| m.id)
            .collect();
        world.focused = match world.focused.and_then(|f| on_bomb.iter().position(|id| *id == f)) {
            Some(index) if index + 1 < on_bomb.len() => Some(on_bomb[index + 1]),
            Some(_) => None,
            None => on_bomb.first().copied(),
        };
    }

    /// Advance every running timer by `seconds`
    pub fn advance(&self, seconds: f64) {
        let mut world = self.world();
        for bomb in world.bombs.iter_mut() {
            if !bomb.running || bomb.exploded.is_some() {
                continue;
            }
            bomb.time_remaining = (bomb.time_remaining - seconds).max(0.0);
            if bomb.time_remaining <= 0.0 {
                bomb.explode("Time ran out");
            }
        }
    }

    pub fn summary(&self) -> WorldSummary {
        let world = self.world();
        let bombs = world
            .bombs
            .iter()
            .map(|bomb| {
                let on_bomb = world
                    .modules
                    .iter()
                    .filter(|(m, _)| m.bomb == bomb.id && m.solvable);
                BombSummary {
                    id: bomb.id,
                    time_remaining: bomb.time_remaining,
                    strikes: bomb.strikes,
                    strike_limit: bomb.strike_limit,
                    running: bomb.running,
                    exploded: bomb.exploded.is_some(),
                    face_up: bomb.face_up,
                    solved: on_bomb.clone().filter(|(_, solved)| *solved).count(),
                    solvable: on_bomb.count(),
                }
            })
            .collect();
        WorldSummary {
            in_game: !world.bombs.is_empty(),
            bombs,
            held: world.held,
            focused: world.focused.and_then(|id| {
                world
                    .modules
                    .iter()
                    .find(|(m, _)| m.id == id)
                    .map(|(m, _)| m.name.clone())
            }),
            leaderboard_disabled: world.leaderboard_disabled,
        }
    }
}

impl BombAccessor for SimHost {
    fn bombs(&self) -> Vec<BombId> {
        self.world().bombs.iter().map(|b| b.id).collect()
    }

    fn modules(&self) -> Vec<ModuleInfo> {
        self.world().modules.iter().map(|(m, _)| m.clone()).collect()
    }

    fn held_bomb(&self) -> Option<BombId> {
        self.world().held
    }

    fn focused_module(&self) -> Option<ModuleId> {
        self.world().focused
    }

    fn time_remaining(&self, bomb: BombId) -> Result<f64, HostError> {
        Ok(self.world().bomb_ref(bomb)?.time_remaining)
    }

    fn set_time_remaining(&mut self, bomb: BombId, seconds: f64) -> Result<(), HostError> {
        self.world().bomb(bomb)?.time_remaining = seconds;
        Ok(())
    }

    fn strike_count(&self, bomb: BombId) -> Result<u32, HostError> {
        Ok(self.world().bomb_ref(bomb)?.strikes)
    }

    fn set_strike_count(&mut self, bomb: BombId, strikes: u32) -> Result<(), HostError> {
        let mut world = self.world();
        let bomb = world.bomb(bomb)?;
        bomb.strikes = strikes;
        if bomb.strikes >= bomb.strike_limit {
            bomb.explode("Strike limit reached");
        }
        Ok(())
    }

    fn strike_limit(&self, bomb: BombId) -> Result<u32, HostError> {
        Ok(self.world().bomb_ref(bomb)?.strike_limit)
    }

    fn set_strike_limit(&mut self, bomb: BombId, limit: u32) -> Result<(), HostError> {
        let mut world = self.world();
        let bomb = world.bomb(bomb)?;
        bomb.strike_limit = limit;
        if bomb.strikes >= bomb.strike_limit {
            bomb.explode("Strike limit reached");
        }
        Ok(())
    }

    fn detonate(&mut self, bomb: BombId, reason: &str) -> Result<(), HostError> {
        self.world().bomb(bomb)?.explode(reason);
        Ok(())
    }

    fn cause_strike(&mut self, bomb: BombId, reason: &str) -> Result<(), HostError> {
        let mut world = self.world();
        let bomb = world.bomb(bomb)?;
        bomb.strikes += 1;
        log::info!("Strike on bomb {}: {}", bomb.id, reason);
        if bomb.strikes >= bomb.strike_limit {
            bomb.explode(reason);
        }
        Ok(())
    }

    fn is_timer_running(&self, bomb: BombId) -> Result<bool, HostError> {
        Ok(self.world().bomb_ref(bomb)?.running)
    }

    fn pause_timer(&mut self, bomb: BombId) -> Result<(), HostError> {
        self.world().bomb(bomb)?.running = false;
        Ok(())
    }

    fn unpause_timer(&mut self, bomb: BombId) -> Result<(), HostError> {
        self.world().bomb(bomb)?.running = true;
        Ok(())
    }

    fn is_solved(&self, module: ModuleId) -> Result<bool, HostError> {
        self.world()
            .modules
            .iter()
            .find(|(m, _)| m.id == module)
            .map(|(_, solved)| *solved)
            .ok_or_else(|| HostError::Rejected(format!("module {} does not exist", module.0)))
    }
}

impl ModuleForceSolve for SimHost {
    fn force_solve(&mut self, module: ModuleId) -> Result<(), HostError> {
        let mut world = self.world();
        let (info, solved) = world
            .modules
            .iter_mut()
            .find(|(m, _)| m.id == module)
            .ok_or_else(|| HostError::Rejected(format!("module {} does not exist", module.0)))?;
        if !info.solvable {
            return Err(HostError::Rejected(format!("{} cannot be solved", info.name)));
        }
        *solved = true;
        log::debug!("Force solved {}", info.name);
        Ok(())
    }
}

impl LeaderboardControl for SimHost {
    fn set_disabled(&mut self, disabled: bool) {
        self.world().leaderboard_disabled = disabled;
    }
}

impl ChatBridge for SimHost {
    fn relay(
        &mut self,
        handle: &str,
        sender_tag: Option<&str>,
        message: &str,
    ) -> Result<(), HostError> {
        log::info!(
            "Chat relay from {}{}: {}",
            handle,
            sender_tag.map(|tag| format!(" ({})", tag)).unwrap_or_default(),
            message
        );
        Ok(())
    }
}

/// A running turn animation
#[derive(Debug)]
pub struct TurnTask {
    handle: JoinHandle<()>,
}

impl TaskHandle for TurnTask {
    fn cancel(&self) {
        self.handle.abort();
    }

    fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl TaskRunner for SimHost {
    fn start_turn(&mut self, bomb: BombId) -> Result<Box<dyn TaskHandle>, HostError> {
        let runtime = self.runtime.as_ref().ok_or(HostError::Unavailable)?;
        self.world().bomb(bomb)?;

        let world = Arc::clone(&self.world);
        let handle = runtime.spawn(async move {
            for _ in 0..TURN_STEPS {
                tokio::time::sleep(TURN_STEP).await;
            }
            let mut world = world.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(target) = world.bombs.iter_mut().find(|b| b.id == bomb) {
                target.face_up = !target.face_up;
                log::debug!("Bomb {} turned over", bomb);
            }
        });
        Ok(Box::new(TurnTask { handle }))
    }
}
