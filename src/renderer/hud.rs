//! HUD text: score, lives and level in the top-right corner, plus the
//! centred phase message

use std::fmt::Write;

use glam::Vec2;

use crate::color::Color;
use crate::consts::*;
use crate::platform::Surface;
use crate::sim::{GamePhase, GameState};

pub const INIT_MESSAGE: &str = "Press Space to Start";
pub const GAME_OVER_MESSAGE: &str = "Game Over! Press Space to Restart.";
pub const TEXT_COLOR: Color = Color::WHITE;

/// Right edge of each stat, measured from the left of the screen
const SCORE_RIGHT: f32 = WIDTH - SCORE_PADDING;
const LEVEL_RIGHT: f32 = WIDTH - 160.0;
const LIVES_RIGHT: f32 = WIDTH - 265.0;

/// Reusable text buffer so per-frame formatting does not allocate
#[derive(Debug, Default)]
pub struct Hud {
    buf: String,
}

impl Hud {
    pub fn draw_stats<S: Surface + ?Sized>(&mut self, surface: &mut S, state: &GameState) {
        self.right_aligned(surface, "Score", state.score, SCORE_RIGHT);
        self.right_aligned(surface, "Lives", state.lives as u64, LIVES_RIGHT);
        self.right_aligned(surface, "Level", state.level as u64, LEVEL_RIGHT);
    }

    /// Centred prompt for the phases that wait on the player
    pub fn draw_message<S: Surface + ?Sized>(&mut self, surface: &mut S, phase: GamePhase) {
        let text = match phase {
            GamePhase::Init => INIT_MESSAGE,
            GamePhase::GameOver => GAME_OVER_MESSAGE,
            GamePhase::Running => return,
        };
        let width = surface.measure_text(text, FONT_SIZE);
        let pos = Vec2::new(WIDTH / 2.0 - width / 2.0, HEIGHT / 2.0);
        surface.draw_text(text, pos, FONT_SIZE, TEXT_COLOR);
    }

    fn right_aligned<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        label: &str,
        value: u64,
        right: f32,
    ) {
        self.buf.clear();
        // Writing into a String cannot fail
        let _ = write!(self.buf, "{label}: {value}");
        let width = surface.measure_text(&self.buf, FONT_SIZE);
        surface.draw_text(
            &self.buf,
            Vec2::new(right - width, SCORE_PADDING),
            FONT_SIZE,
            TEXT_COLOR,
        );
    }
}
