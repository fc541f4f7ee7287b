//! Laser motion and wall reflection
//!
//! One discrete step per tick, no sweep: the laser jumps `velocity` each tick
//! and is clamped back inside the arena when it crosses a wall.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::direction_from_degrees;

/// Axis-aligned arena bounds (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: Vec2::new(BOUNDARY_X_MIN, BOUNDARY_Y_MIN),
            max: Vec2::new(BOUNDARY_X_MAX, BOUNDARY_Y_MAX),
        }
    }
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Result of advancing the laser by one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounce {
    /// Reflected off a vertical wall (x_min or x_max)
    pub x: bool,
    /// Reflected off a horizontal wall (y_min or y_max)
    pub y: bool,
}

impl Bounce {
    /// Number of reflections this tick (0, 1 or 2)
    pub fn count(&self) -> u32 {
        self.x as u32 + self.y as u32
    }
}

/// A fired laser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Laser {
    /// Every position since launch, oldest first
    pub trail: Vec<Vec2>,
    pub velocity: Vec2,
    pub reflections: u32,
    pub active: bool,
}

impl Laser {
    pub fn new(start: Vec2, velocity: Vec2) -> Self {
        Self {
            trail: vec![start],
            velocity,
            reflections: 0,
            active: true,
        }
    }

    /// Laser leaving `start` at `degrees` with the standard speed
    pub fn fired(start: Vec2, degrees: f32) -> Self {
        Self::new(start, direction_from_degrees(degrees) * LASER_SPEED)
    }

    /// Current head position
    pub fn pos(&self) -> Vec2 {
        // The trail is created non-empty and only ever grows.
        self.trail.last().copied().unwrap_or_default()
    }

    /// Most recent positions for afterimage rendering, oldest first
    pub fn afterimage(&self) -> &[Vec2] {
        let start = self.trail.len().saturating_sub(AFTERIMAGE_LENGTH);
        &self.trail[start..]
    }

    /// Advance one tick, reflecting off the bounds
    ///
    /// Both axes are tested against the same tentative position, so a corner
    /// crossing counts twice. Does nothing once the laser is inactive.
    pub fn advance(&mut self, bounds: &Bounds) -> Bounce {
        if !self.active {
            return Bounce::default();
        }

        let tentative = self.pos() + self.velocity;
        let crossed_min = tentative.cmple(bounds.min);
        let crossed_max = tentative.cmpge(bounds.max);
        let bounce = Bounce {
            x: crossed_min.x || crossed_max.x,
            y: crossed_min.y || crossed_max.y,
        };

        if bounce.x {
            self.velocity.x = -self.velocity.x;
        }
        if bounce.y {
            self.velocity.y = -self.velocity.y;
        }
        self.reflections += bounce.count();

        let next = bounds.clamp(tentative);
        self.trail.push(next);

        if self.reflections > MAX_REFLECTIONS {
            self.active = false;
        }

        if bounce.count() > 0 {
            log::trace!(
                "Laser bounced at ({:.1}, {:.1}), reflections={}",
                next.x,
                next.y,
                self.reflections
            );
        }

        bounce
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_flight_no_reflection() {
        let bounds = Bounds::default();
        let mut laser = Laser::new(Vec2::new(60.0, 60.0), Vec2::new(7.0, 0.0));
        let bounce = laser.advance(&bounds);
        assert_eq!(bounce.count(), 0);
        assert_eq!(laser.pos(), Vec2::new(67.0, 60.0));
        assert_eq!(laser.reflections, 0);
        assert_eq!(laser.trail.len(), 2);
    }

    #[test]
    fn test_reflects_off_right_wall() {
        let bounds = Bounds::default();
        let mut laser = Laser::fired(Vec2::new(65.0, 80.0), 0.0);
        // 65 + 7*6 = 107, seventh step lands on 114 -> clamped to 110
        for _ in 0..6 {
            laser.advance(&bounds);
        }
        assert_eq!(laser.reflections, 0);
        let bounce = laser.advance(&bounds);
        assert!(bounce.x && !bounce.y);
        assert_eq!(laser.reflections, 1);
        assert_eq!(laser.pos().x, BOUNDARY_X_MAX);
        assert!(laser.velocity.x < 0.0);
    }

    #[test]
    fn test_touching_wall_counts_as_crossing() {
        let bounds = Bounds::default();
        let mut laser = Laser::new(Vec2::new(103.0, 50.0), Vec2::new(7.0, 0.0));
        let bounce = laser.advance(&bounds);
        assert!(bounce.x);
        assert_eq!(laser.pos().x, 110.0);
    }

    #[test]
    fn test_corner_counts_twice() {
        let bounds = Bounds::default();
        let mut laser = Laser::new(Vec2::new(105.0, 105.0), Vec2::new(5.0, 5.0));
        let bounce = laser.advance(&bounds);
        assert_eq!(bounce.count(), 2);
        assert_eq!(laser.reflections, 2);
        assert_eq!(laser.pos(), Vec2::new(110.0, 110.0));
        assert_eq!(laser.velocity, Vec2::new(-5.0, -5.0));
    }

    #[test]
    fn test_deactivates_past_max_reflections() {
        let bounds = Bounds::default();
        let mut laser = Laser::new(Vec2::new(60.0, 60.0), Vec2::new(7.0, 0.0));
        laser.reflections = MAX_REFLECTIONS;
        // Bounce on wall until count passes the limit
        while laser.active {
            laser.advance(&bounds);
        }
        assert_eq!(laser.reflections, MAX_REFLECTIONS + 1);

        let len = laser.trail.len();
        let bounce = laser.advance(&bounds);
        assert_eq!(bounce.count(), 0);
        assert_eq!(laser.trail.len(), len);
    }

    #[test]
    fn test_afterimage_is_last_ten() {
        let bounds = Bounds::default();
        let mut laser = Laser::new(Vec2::new(60.0, 60.0), Vec2::new(1.0, 0.0));
        for _ in 0..3 {
            laser.advance(&bounds);
        }
        assert_eq!(laser.afterimage().len(), 4);
        for _ in 0..20 {
            laser.advance(&bounds);
        }
        assert_eq!(laser.afterimage().len(), AFTERIMAGE_LENGTH);
        assert_eq!(*laser.afterimage().last().unwrap(), laser.pos());
    }

    #[test]
    fn test_bounds_contains_inclusive() {
        let bounds = Bounds::default();
        assert!(bounds.contains(Vec2::new(10.0, 110.0)));
        assert!(!bounds.contains(Vec2::new(9.9, 50.0)));
        assert_eq!(bounds.size(), Vec2::splat(100.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn head_stays_in_bounds_and_count_matches_bounces(
                x in 10.0f32..=110.0,
                y in 10.0f32..=110.0,
                degrees in 0.0f32..360.0,
                ticks in 1usize..200,
            ) {
                let bounds = Bounds::default();
                let mut laser = Laser::fired(Vec2::new(x, y), degrees);
                for _ in 0..ticks {
                    if !laser.active {
                        break;
                    }
                    let before = laser.reflections;
                    let bounce = laser.advance(&bounds);
                    prop_assert!(bounds.contains(laser.pos()));
                    prop_assert_eq!(laser.reflections - before, bounce.count());
                    prop_assert_eq!(laser.active, laser.reflections <= MAX_REFLECTIONS);
                }
            }

            #[test]
            fn speed_is_preserved(degrees in 0.0f32..360.0, ticks in 1usize..100) {
                let bounds = Bounds::default();
                let mut laser = Laser::fired(Vec2::new(60.0, 80.0), degrees);
                for _ in 0..ticks {
                    laser.advance(&bounds);
                }
                prop_assert!((laser.velocity.length() - LASER_SPEED).abs() < 1e-3);
            }
        }
    }
}
