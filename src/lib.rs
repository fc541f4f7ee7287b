//! Pittari Laser - a reflecting-laser arcade aiming game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (laser reflection, targets, rounds, game phases)
//! - `renderer`: Drawing seam and scene composition
//! - `platform`: Input seam (press-edge buttons)
//! - `app`: Frame loop driver owning the application state
//! - `settings`: Run-time tuning loaded from JSON

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed frame rate of the update/draw loop
    pub const FPS: u32 = 30;

    /// Logical screen size
    pub const SCREEN_WIDTH: f32 = 120.0;
    pub const SCREEN_HEIGHT: f32 = 160.0;

    /// Playable arena, inset from the screen edges
    pub const BOUNDARY_X_MIN: f32 = 10.0;
    pub const BOUNDARY_X_MAX: f32 = 110.0;
    pub const BOUNDARY_Y_MIN: f32 = 10.0;
    pub const BOUNDARY_Y_MAX: f32 = 110.0;

    /// Fixed launch point the aiming indicator orbits
    pub const LAUNCH_POINT: Vec2 = Vec2::new(60.0, 80.0);
    /// Orbit radius of the aiming indicator
    pub const AIM_RADIUS: f32 = 5.0;
    /// Aiming indicator speed at game start (degrees per tick)
    pub const INITIAL_ROTATION_SPEED: f32 = 5.0;
    /// Rotation speed gained every `SPEEDUP_EVERY_ROUNDS` successful rounds
    pub const ROTATION_SPEED_STEP: f32 = 1.0;
    pub const SPEEDUP_EVERY_ROUNDS: u32 = 3;

    /// Laser defaults
    pub const LASER_SPEED: f32 = 7.0;
    /// The laser dies on the tick its reflection count goes past this
    pub const MAX_REFLECTIONS: u32 = 9;
    /// Trail points drawn as the afterimage
    pub const AFTERIMAGE_LENGTH: usize = 10;

    /// Target defaults
    pub const TARGET_RADIUS: f32 = 4.0;
    pub const NUM_TARGETS_MIN: u32 = 1;
    pub const NUM_TARGETS_MAX: u32 = 1;

    /// Palette indices
    pub const COLOR_BACKGROUND: u8 = 0;
    pub const COLOR_LAUNCH_POINT: u8 = 3;
    pub const COLOR_HUD_BAR: u8 = 6;
    pub const COLOR_TEXT: u8 = 7;
    pub const COLOR_TARGET_NORMAL: u8 = 7;
    pub const COLOR_TARGET_HIT: u8 = 8;
    pub const COLOR_TITLE: u8 = 8;
    pub const COLOR_LASER: u8 = 10;
    pub const COLOR_ARENA: u8 = 13;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Unit direction for an angle in degrees (screen coordinates, y down)
#[inline]
pub fn direction_from_degrees(degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians())
}

/// Convert polar (r, degrees) around `origin` to cartesian
#[inline]
pub fn polar_to_cartesian(origin: Vec2, r: f32, degrees: f32) -> Vec2 {
    origin + direction_from_degrees(degrees) * r
}
