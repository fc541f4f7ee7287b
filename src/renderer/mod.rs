//! Rendering module
//!
//! The game draws through the `Canvas` trait so any backend (GPU, terminal,
//! test recorder) can present it. `draw_scene` reads the game state only.

pub mod shapes;
pub mod vertex;
pub mod vertex_canvas;

pub use vertex::Vertex;
pub use vertex_canvas::{TextRun, VertexCanvas};

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GamePhase, GameState};

/// Drawing primitives a presentation backend provides
///
/// Colors are palette indices (0..16).
pub trait Canvas {
    fn clear(&mut self, color: u8);
    fn draw_pixel(&mut self, pos: Vec2, color: u8);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: u8);
    fn draw_circle_outline(&mut self, center: Vec2, radius: f32, color: u8);
    fn draw_filled_rect(&mut self, pos: Vec2, size: Vec2, color: u8);
    fn draw_rect_outline(&mut self, pos: Vec2, size: Vec2, color: u8);
    fn draw_text(&mut self, pos: Vec2, text: &str, color: u8);
}

/// Draw the current screen
pub fn draw_scene(state: &GameState, canvas: &mut impl Canvas) {
    canvas.clear(COLOR_BACKGROUND);

    match state.phase {
        GamePhase::Title => draw_title(state, canvas),
        GamePhase::GameOver => draw_game_over(state, canvas),
        GamePhase::Aiming | GamePhase::Flying => draw_play(state, canvas),
    }
}

/// Blinking prompt color, cycles the palette every 4 frames
pub fn blink_color(frame: u64) -> u8 {
    ((frame / 4) % 16) as u8
}

fn draw_title(state: &GameState, canvas: &mut impl Canvas) {
    canvas.draw_text(Vec2::new(35.0, 60.0), "PITTARI LASER", COLOR_TITLE);
    canvas.draw_text(
        Vec2::new(23.0, 100.0),
        "PRESS SPACE TO START",
        blink_color(state.frame),
    );
}

fn draw_game_over(state: &GameState, canvas: &mut impl Canvas) {
    canvas.draw_text(Vec2::new(40.0, 70.0), "GAME OVER", COLOR_TITLE);
    canvas.draw_text(Vec2::new(30.0, 90.0), "PRESS TO RESTART", COLOR_TEXT);
    canvas.draw_text(
        Vec2::new(40.0, 110.0),
        &format!("SCORE: {}", state.score()),
        COLOR_TEXT,
    );
}

fn draw_play(state: &GameState, canvas: &mut impl Canvas) {
    let bounds = &state.round.bounds;
    canvas.draw_rect_outline(bounds.min, bounds.size(), COLOR_ARENA);

    if state.indicator_visible() {
        canvas.draw_circle(LAUNCH_POINT, 3.0, COLOR_LAUNCH_POINT);
        canvas.draw_circle(state.indicator_pos(), 1.0, COLOR_LASER);
    }

    if let Some(laser) = &state.round.laser {
        for &pos in laser.afterimage() {
            canvas.draw_pixel(pos.floor(), COLOR_LASER);
        }
    }

    for target in &state.round.targets {
        let color = if target.is_hit() {
            COLOR_TARGET_HIT
        } else {
            COLOR_TARGET_NORMAL
        };
        canvas.draw_circle(target.pos, TARGET_RADIUS, color);
    }

    canvas.draw_text(
        Vec2::new(5.0, 3.0),
        &format!("SCORE: {}", state.score()),
        COLOR_TEXT,
    );

    // Bottom prompt bar
    canvas.draw_filled_rect(
        Vec2::new(0.0, SCREEN_HEIGHT - 20.0),
        Vec2::new(SCREEN_WIDTH, 20.0),
        COLOR_HUD_BAR,
    );
    canvas.draw_text(
        Vec2::new(SCREEN_WIDTH / 2.0 - 23.0, SCREEN_HEIGHT - 15.0),
        "PRESS SPACE",
        COLOR_TEXT,
    );
}
