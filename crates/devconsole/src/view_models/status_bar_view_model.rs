//! Status Bar View Model

use crate::sim::WorldSummary;
use devconsole_core::arguments::format_time;

pub struct StatusBarViewModel<'a> {
    world: &'a WorldSummary,
}

impl<'a> StatusBarViewModel<'a> {
    pub fn new(world: &'a WorldSummary) -> Self {
        Self { world }
    }

    /// One line per bomb
    pub fn bomb_lines(&self) -> Vec<String> {
        self.world
            .bombs
            .iter()
            .map(|bomb| {
                let status = if bomb.exploded {
                    "EXPLODED"
                } else if bomb.solved == bomb.solvable {
                    "defused"
                } else if bomb.running {
                    "ticking"
                } else {
                    "paused"
                };
                format!(
                    "Bomb {} [{}] {} | strikes {}/{} | solved {}/{} | {} face{}",
                    bomb.id,
                    status,
                    format_time(bomb.time_remaining),
                    bomb.strikes,
                    bomb.strike_limit,
                    bomb.solved,
                    bomb.solvable,
                    if bomb.face_up { "front" } else { "back" },
                    if self.world.held == Some(bomb.id) { " | held" } else { "" },
                )
            })
            .collect()
    }

    pub fn focus_line(&self) -> String {
        match &self.world.focused {
            Some(name) => format!("Focused module: {}", name),
            None => "Focused module: none".to_string(),
        }
    }

    pub fn leaderboard_line(&self) -> &'static str {
        if self.world.leaderboard_disabled {
            "Leaderboard: disabled"
        } else {
            "Leaderboard: enabled"
        }
    }

    pub fn idle(&self) -> bool {
        !self.world.in_game
    }
}
