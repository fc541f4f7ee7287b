//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per frame
//! - Seeded RNG only
//! - Stable iteration order (targets in spawn order)
//! - No rendering or platform dependencies beyond the input seam

pub mod laser;
pub mod round;
pub mod state;
pub mod target;
pub mod tick;

pub use laser::{Bounce, Bounds, Laser};
pub use round::{RoundController, RoundOutcome, RoundTick, TargetCount};
pub use state::{GameEvent, GamePhase, GameState};
pub use target::{HitState, Target};
pub use tick::{TickInput, tick};
