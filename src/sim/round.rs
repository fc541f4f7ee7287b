//! Round control: laser ownership, hit detection, scoring and difficulty
//!
//! A round is one fire-to-resolution cycle against the current target batch.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::laser::{Bounce, Bounds, Laser};
use super::target::Target;
use crate::consts::*;
use crate::polar_to_cartesian;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Every target was hit; `gained` points were added to the score
    Won { gained: u64 },
    /// The laser ran out of reflections with a target still armed
    Lost,
}

/// What happened during one round tick
#[derive(Debug, Clone, Default)]
pub struct RoundTick {
    pub bounce: Bounce,
    /// Laser reflection count after this tick's move
    pub reflections: u32,
    /// Targets that registered a hit this tick, as (index, reflections)
    pub hits: Vec<(usize, u32)>,
    pub outcome: Option<RoundOutcome>,
}

/// Inclusive range of targets spawned per round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetCount {
    pub min: u32,
    pub max: u32,
}

impl TargetCount {
    /// Range with at least one target and `max >= min`
    pub fn new(min: u32, max: u32) -> Self {
        let min = min.max(1);
        Self {
            min,
            max: max.max(min),
        }
    }

    /// Same range, clamped into a valid one
    pub fn clamped(self) -> Self {
        Self::new(self.min, self.max)
    }
}

impl Default for TargetCount {
    fn default() -> Self {
        Self {
            min: NUM_TARGETS_MIN,
            max: NUM_TARGETS_MAX,
        }
    }
}

/// Owns the laser and the target batch for the current game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundController {
    pub bounds: Bounds,
    pub laser: Option<Laser>,
    pub targets: Vec<Target>,
    pub score: u64,
    pub round_count: u32,
    /// Aiming indicator speed (degrees per tick)
    pub rotation_speed: f32,
    initial_rotation_speed: f32,
    target_count: TargetCount,
    rng: Pcg32,
}

impl RoundController {
    pub fn new(seed: u64, target_count: TargetCount, initial_rotation_speed: f32) -> Self {
        let mut round = Self {
            bounds: Bounds::default(),
            laser: None,
            targets: Vec::new(),
            score: 0,
            round_count: 0,
            rotation_speed: initial_rotation_speed,
            initial_rotation_speed,
            target_count: target_count.clamped(),
            rng: Pcg32::seed_from_u64(seed),
        };
        round.spawn_targets();
        round
    }

    /// Start a new game: score, rounds and speed back to their initial values
    pub fn reset(&mut self) {
        self.score = 0;
        self.round_count = 0;
        self.rotation_speed = self.initial_rotation_speed;
        self.laser = None;
        self.spawn_targets();
    }

    /// Replace the target batch with fresh armed targets
    pub fn spawn_targets(&mut self) {
        let count = self.rng.random_range(self.target_count.min..=self.target_count.max);
        let margin = Vec2::splat(TARGET_RADIUS);
        let lo = (self.bounds.min + margin).as_ivec2();
        let hi = (self.bounds.max - margin).as_ivec2();

        self.targets = (0..count)
            .map(|_| {
                let x = self.rng.random_range(lo.x..=hi.x);
                let y = self.rng.random_range(lo.y..=hi.y);
                Target::new(Vec2::new(x as f32, y as f32))
            })
            .collect();

        for target in &self.targets {
            log::debug!("Spawned target at ({}, {})", target.pos.x, target.pos.y);
        }
    }

    /// Replace the target batch with explicit targets
    pub fn set_targets(&mut self, targets: Vec<Target>) {
        self.targets = targets;
    }

    pub fn has_laser(&self) -> bool {
        self.laser.is_some()
    }

    /// Fire from the aiming indicator at `degrees`
    ///
    /// Ignored while a laser is in flight. Returns whether a laser was created.
    pub fn fire(&mut self, degrees: f32) -> bool {
        if self.laser.is_some() {
            return false;
        }

        let start = polar_to_cartesian(LAUNCH_POINT, AIM_RADIUS, degrees);
        log::debug!(
            "Laser fired at {:.0} degrees from ({:.1}, {:.1})",
            degrees,
            start.x,
            start.y
        );
        self.laser = Some(Laser::fired(start, degrees));
        true
    }

    /// Advance the laser, check every target against it and resolve the round
    /// on the tick the laser dies
    pub fn tick(&mut self) -> RoundTick {
        let mut report = RoundTick::default();
        let Some(laser) = self.laser.as_mut() else {
            return report;
        };

        report.bounce = laser.advance(&self.bounds);
        report.reflections = laser.reflections;

        for (index, target) in self.targets.iter_mut().enumerate() {
            if target.check_hit(laser) {
                log::debug!(
                    "Target {} hit after {} reflections",
                    index,
                    laser.reflections
                );
                report.hits.push((index, laser.reflections));
            }
        }

        if !laser.active {
            report.outcome = Some(self.resolve());
        }

        report
    }

    /// Score a dead laser's round and clear it
    fn resolve(&mut self) -> RoundOutcome {
        self.laser = None;

        if !self.targets.iter().all(Target::is_hit) {
            log::info!("Round lost with score {}", self.score);
            return RoundOutcome::Lost;
        }

        let gained: u64 = self
            .targets
            .iter()
            .filter_map(Target::hit_reflections)
            .map(|r| r as u64 + 1)
            .sum();
        self.score += gained;
        self.round_count += 1;

        if self.round_count.is_multiple_of(SPEEDUP_EVERY_ROUNDS) {
            self.rotation_speed += ROTATION_SPEED_STEP;
            log::info!("Aiming speed increased to {}", self.rotation_speed);
        }

        log::info!(
            "Round {} won: +{} (score {})",
            self.round_count,
            gained,
            self.score
        );

        self.spawn_targets();
        RoundOutcome::Won { gained }
    }
}
