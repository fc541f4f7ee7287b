//! Game settings
//!
//! Optional JSON file; anything missing or unreadable falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::TargetCount;

/// Run-time tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for target placement; `None` picks one from the clock
    pub seed: Option<u64>,
    /// Fewest targets spawned per round
    pub targets_min: u32,
    /// Most targets spawned per round
    pub targets_max: u32,
    /// Aiming indicator speed at game start (degrees per frame)
    pub initial_rotation_speed: f32,
    /// Frames the headless demo runs for
    pub demo_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            targets_min: NUM_TARGETS_MIN,
            targets_max: NUM_TARGETS_MAX,
            initial_rotation_speed: INITIAL_ROTATION_SPEED,
            // One minute at the fixed frame rate
            demo_frames: 60 * FPS as u64,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from a file, falling back to defaults if it is missing
    /// or malformed
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Could not read {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values into a playable range
    pub fn sanitized(mut self) -> Self {
        self.targets_min = self.targets_min.max(1);
        self.targets_max = self.targets_max.max(self.targets_min);
        if !self.initial_rotation_speed.is_finite() {
            self.initial_rotation_speed = INITIAL_ROTATION_SPEED;
        }
        self
    }

    pub fn target_count(&self) -> TargetCount {
        TargetCount::new(self.targets_min, self.targets_max)
    }

    /// Configured seed, or one derived from the system clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        })
    }
}
