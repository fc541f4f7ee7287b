//! Frame loop driver
//!
//! `App` is the one owned application value: the backend calls `update` then
//! `draw` once per frame at `FPS`.

use crate::consts::*;
use crate::normalize_degrees;
use crate::platform::{Button, Input};
use crate::renderer::{Canvas, draw_scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Application state owned by the frame loop
#[derive(Debug, Clone)]
pub struct App {
    pub state: GameState,
    pub settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let settings = settings.sanitized();
        let seed = settings.resolve_seed();
        log::info!("Pittari Laser initialized with seed: {}", seed);
        Self {
            state: GameState::with_config(
                seed,
                settings.target_count(),
                settings.initial_rotation_speed,
            ),
            settings,
        }
    }

    /// Per-frame simulation step
    pub fn update(&mut self, input: &impl Input) {
        tick(&mut self.state, &TickInput::from_input(input));
    }

    /// Per-frame draw, read-only over the state
    pub fn draw(&self, canvas: &mut impl Canvas) {
        draw_scene(&self.state, canvas);
    }

    /// Events raised by the last `update`
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }
}

/// Totals gathered over a headless run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub shots: u32,
    pub rounds_won: u32,
    pub games_over: u32,
    pub best_score: u64,
}

impl RunSummary {
    fn record(&mut self, events: &[GameEvent], score: u64) {
        for event in events {
            match event {
                GameEvent::Fired { .. } => self.shots += 1,
                GameEvent::RoundWon { .. } => self.rounds_won += 1,
                GameEvent::GameOver { .. } => self.games_over += 1,
                _ => {}
            }
        }
        self.best_score = self.best_score.max(score);
    }
}

/// Run `frames` fixed frames: pilot observes, app updates, app draws
pub fn run_frames(
    app: &mut App,
    pilot: &mut Autopilot,
    canvas: &mut impl Canvas,
    frames: u64,
) -> RunSummary {
    let mut summary = RunSummary::default();
    for _ in 0..frames {
        pilot.observe(&app.state);
        app.update(&*pilot);
        app.draw(canvas);
        summary.frames += 1;
        summary.record(app.events(), app.state.score());
    }
    summary
}

/// Scripted player for attract/demo mode
///
/// Starts games, waits a moment on the game-over screen, and fires when the
/// indicator is about to point at the first armed target.
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Max angular error (degrees) accepted when lining up a shot
    pub tolerance: f32,
    /// Frames to linger on the game-over screen
    pub restart_delay: u32,
    waited: u32,
    press: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            tolerance: 3.0,
            restart_delay: FPS,
            waited: 0,
            press: false,
        }
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide this frame's press from the state about to be ticked
    pub fn observe(&mut self, state: &GameState) {
        self.press = match state.phase {
            GamePhase::Title => true,
            GamePhase::GameOver => {
                self.waited += 1;
                if self.waited > self.restart_delay {
                    self.waited = 0;
                    true
                } else {
                    false
                }
            }
            GamePhase::Aiming => self.lined_up(state),
            GamePhase::Flying => false,
        };
    }

    fn lined_up(&self, state: &GameState) -> bool {
        let Some(target) = state.round.targets.iter().find(|t| !t.is_hit()) else {
            return false;
        };

        // Tick advances the indicator before firing
        let next_angle = normalize_degrees(state.aim_angle + state.round.rotation_speed);
        let to_target = target.pos - LAUNCH_POINT;
        let bearing = normalize_degrees(to_target.y.atan2(to_target.x).to_degrees());

        let diff = normalize_degrees(bearing - next_angle + 180.0) - 180.0;
        diff.abs() <= self.tolerance.max(state.round.rotation_speed / 2.0)
    }
}

impl Input for Autopilot {
    fn is_pressed(&self, button: Button) -> bool {
        self.press && button == Button::AltConfirm
    }
}
