//! Brickout - A single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Draw calls against an abstract drawing surface
//! - `platform`: Surface/input/audio collaborator traits plus headless implementations
//! - `game`: Frame orchestrator tying update, audio and rendering together
//! - `settings`: Runtime settings

pub mod audio;
pub mod color;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use color::Color;
pub use game::{Game, SessionSummary};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const WIDTH: f32 = 1024.0;
    pub const HEIGHT: f32 = 768.0;
    pub const WINDOW_TITLE: &str = "Arkanoid";
    pub const TARGET_FPS: u32 = 100;

    /// HUD text
    pub const FONT_SIZE: u32 = 20;
    pub const SCORE_PADDING: f32 = 35.0;

    /// Paddle ("bar") defaults
    pub const BAR_WIDTH: f32 = 150.0;
    pub const BAR_HEIGHT: f32 = 20.0;
    pub const BAR_SPEED: f32 = 10.0;
    pub const BAR_Y: f32 = HEIGHT - HEIGHT * 0.1;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Base rise speed per frame, before the per-level bonus
    pub const BALL_SPEED: f32 = 4.0;
    pub const BALL_START_X: f32 = WIDTH / 2.0;
    pub const BALL_START_Y: f32 = BAR_Y - BALL_RADIUS;
    /// Horizontal velocity per pixel of offset from paddle centre
    pub const PADDLE_DEFLECTION: f32 = 0.05;

    /// Constant per-frame acceleration shared by the ball and particles
    pub const GRAVITY: f32 = 0.02;
    /// Added to the ball's base speed on every level clear
    pub const SPEED_INCREMENT: f32 = 1.0;

    /// Brick grid
    pub const ROWS: usize = 5;
    pub const COLS: usize = 5;
    pub const BRICK_COUNT: usize = ROWS * COLS;
    pub const BRICK_WIDTH: f32 = 100.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 25.0;
    pub const BRICKS_TOP: f32 = 80.0;
    pub const BRICKS_LEFT: f32 = (WIDTH - (BRICK_WIDTH + BRICK_PADDING) * COLS as f32) / 2.0;
    pub const BRICK_FADE_STEP: f32 = 0.01;
    pub const BRICK_SCORE: u64 = 10;

    /// Particles
    pub const MAX_PARTICLES: usize = 200;
    pub const PARTICLES_PER_BRICK: usize = 20;
    pub const PARTICLE_LIFESPAN: f32 = 1.0;
    pub const PARTICLE_RADIUS: f32 = 3.0;
    /// Fade lost per frame (not time-scaled)
    pub const PARTICLE_FADE_STEP: f32 = 0.01;
    /// Particle motion is authored against a 60 Hz frame
    pub const PARTICLE_TIME_SCALE: f32 = 60.0;

    /// Session
    pub const STARTING_LIVES: u32 = 3;
}
