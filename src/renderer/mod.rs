//! Scene rendering against an abstract [`Surface`]
//!
//! Draw order per frame: background, HUD, bricks, ball, paddle, particles,
//! then the phase message on top.

pub mod hud;

use crate::color::Color;
use crate::platform::Surface;
use crate::sim::GameState;

pub use hud::Hud;

pub const BACKGROUND: Color = Color::BLACK;
pub const BALL_COLOR: Color = Color::RED;
pub const PADDLE_COLOR: Color = Color::BLUE;

/// Stateful renderer; only holds scratch space for HUD text
#[derive(Debug, Default)]
pub struct Renderer {
    hud: Hud,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw one complete frame
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S, state: &GameState) {
        surface.begin_frame();
        surface.clear(BACKGROUND);

        self.hud.draw_stats(surface, state);
        draw_bricks(surface, state);
        draw_ball(surface, state);
        surface.fill_rect(state.paddle.rect, PADDLE_COLOR);
        draw_particles(surface, state);
        self.hud.draw_message(surface, state.phase);

        surface.end_frame();
    }
}

fn draw_bricks<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    for (_, _, brick) in state.bricks.iter().filter(|(_, _, b)| b.active) {
        surface.fill_rect(brick.rect, brick.color.fade(brick.fade));
    }
}

fn draw_ball<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    if !state.ball.active {
        return;
    }
    surface.fill_circle(state.ball.pos, state.ball.radius, BALL_COLOR);
}

fn draw_particles<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    for particle in state.particles.iter_active() {
        surface.fill_circle(particle.pos, particle.radius, particle.color.fade(particle.fade));
    }
}
