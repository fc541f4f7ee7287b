//! Stationary targets

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::laser::Laser;
use crate::consts::TARGET_RADIUS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HitState {
    #[default]
    Armed,
    Hit,
}

/// A target waiting to be struck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    hit_state: HitState,
    /// Laser reflection count at the moment of the first hit
    hit_reflections: Option<u32>,
}

impl Target {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            hit_state: HitState::Armed,
            hit_reflections: None,
        }
    }

    pub fn hit_state(&self) -> HitState {
        self.hit_state
    }

    pub fn is_hit(&self) -> bool {
        self.hit_state == HitState::Hit
    }

    pub fn hit_reflections(&self) -> Option<u32> {
        self.hit_reflections
    }

    /// Square hit zone test against a point (inclusive on both axes)
    pub fn covers(&self, p: Vec2) -> bool {
        let reach = TARGET_RADIUS + 1.0;
        (p - self.pos).abs().cmple(Vec2::splat(reach)).all()
    }

    /// Latch a hit if the laser head is inside the hit zone
    ///
    /// The first hit records the laser's reflection count and kills the laser.
    /// Once hit, the target ignores further checks. Returns true on the tick
    /// the hit registers.
    pub fn check_hit(&mut self, laser: &mut Laser) -> bool {
        if self.is_hit() || !self.covers(laser.pos()) {
            return false;
        }

        self.hit_state = HitState::Hit;
        self.hit_reflections = Some(laser.reflections);
        laser.active = false;
        true
    }
}
