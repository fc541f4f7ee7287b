//! Game state and phases
//!
//! The whole game is one owned value, mutated only by `tick` and read by the
//! renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::round::{RoundController, TargetCount};
use crate::consts::*;
use crate::polar_to_cartesian;

/// Current screen / phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Title,
    /// Indicator orbiting the launch point, waiting for fire
    Aiming,
    /// Laser in flight
    Flying,
    /// Run ended, showing the final score
    GameOver,
}

/// Notable things that happened during a tick, for logs and presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Fired { degrees: f32 },
    Bounced { reflections: u32 },
    TargetHit { index: usize, reflections: u32 },
    RoundWon { gained: u64, round: u32 },
    GameOver { score: u64 },
    Restarted,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub round: RoundController,
    /// Aiming indicator angle in degrees, [0, 360)
    pub aim_angle: f32,
    /// Tick counter, runs in every phase
    pub frame: u64,
    /// Events raised by the last tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game on the title screen
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, TargetCount::default(), INITIAL_ROTATION_SPEED)
    }

    pub fn with_config(seed: u64, target_count: TargetCount, rotation_speed: f32) -> Self {
        Self {
            seed,
            phase: GamePhase::Title,
            round: RoundController::new(seed, target_count, rotation_speed),
            aim_angle: 0.0,
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Fresh game (score, rounds, speed, targets) straight into aiming
    pub fn restart(&mut self) {
        self.round.reset();
        self.aim_angle = 0.0;
        self.phase = GamePhase::Aiming;
    }

    pub fn score(&self) -> u64 {
        self.round.score
    }

    /// Whether the launch point and indicator are shown
    pub fn indicator_visible(&self) -> bool {
        self.phase == GamePhase::Aiming
    }

    /// Current position of the aiming indicator
    pub fn indicator_pos(&self) -> Vec2 {
        polar_to_cartesian(LAUNCH_POINT, AIM_RADIUS, self.aim_angle)
    }
}
