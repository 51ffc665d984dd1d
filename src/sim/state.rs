//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in one owned [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bricks::BrickField;
use super::particles::ParticlePool;
use super::phase::{Effect, Trigger, transition};
use super::rect::Rect;
use crate::audio::SoundEffect;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball and paddle placed, bricks fading in, waiting for confirm
    Init,
    /// Active gameplay
    Running,
    /// Last life lost
    GameOver,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Screen-space position (y down)
    pub pos: Vec2,
    /// Per-frame velocity. `x` is screen-space; `y` is rise, so positive
    /// values move the ball toward the top of the screen.
    pub vel: Vec2,
    pub radius: f32,
    pub active: bool,
}

impl Ball {
    pub fn new(speed_increment: f32) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            active: true,
        };
        ball.reset(speed_increment);
        ball
    }

    /// Back to the serve spot, rising straight up at base speed plus the level bonus
    pub fn reset(&mut self, speed_increment: f32) {
        self.pos = Vec2::new(BALL_START_X, BALL_START_Y);
        self.vel = Vec2::new(0.0, BALL_SPEED + speed_increment);
        self.active = true;
    }

    /// Move one frame and apply gravity to the rise component (no speed cap)
    pub fn integrate(&mut self) {
        self.pos.x += self.vel.x;
        self.pos.y -= self.vel.y;
        self.vel.y += GRAVITY;
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub rect: Rect,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            rect: Rect::new((WIDTH - BAR_WIDTH) / 2.0, BAR_Y, BAR_WIDTH, BAR_HEIGHT),
        }
    }
}

impl Paddle {
    /// Slide by one step per held direction, clamped to the screen
    pub fn steer(&mut self, left: bool, right: bool) {
        let max_x = WIDTH - self.rect.width;
        if left && self.rect.x > 0.0 {
            self.rect.x = (self.rect.x - BAR_SPEED).max(0.0);
        }
        if right && self.rect.x < max_x {
            self.rect.x = (self.rect.x + BAR_SPEED).min(max_x);
        }
    }
}

/// Something that happened during a tick, for the orchestrator to act on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Fire-and-forget sound trigger
    Sound(SoundEffect),
    BrickDestroyed { row: usize, col: usize },
    /// Ball fell out the bottom, whether or not a life was left to spend
    BallLost,
    /// All bricks cleared; `level` is the new level
    LevelCleared { level: u32 },
    LifeLost { lives_left: u32 },
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u64,
    /// 1-based level
    pub level: u32,
    pub lives: u32,
    /// Cumulative bonus on the ball's base speed
    pub speed_increment: f32,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickField,
    pub particles: ParticlePool,
    /// Particle RNG
    pub rng: Pcg32,
    /// Events raised since the buffer was last drained
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self {
            phase: GamePhase::Init,
            score: 0,
            level: 1,
            lives: STARTING_LIVES,
            speed_increment: 0.0,
            ball: Ball::new(0.0),
            paddle: Paddle::default(),
            bricks: BrickField::new(),
            particles: ParticlePool::new(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::with_capacity(32),
        }
    }

    /// Bricks still standing
    #[inline]
    pub fn bricks_left(&self) -> usize {
        self.bricks.remaining()
    }

    /// Queue an event; `tick` clears the queue at the start of every frame
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drive the state machine; returns false if the trigger is illegal in the current phase
    pub fn fire(&mut self, trigger: Trigger) -> bool {
        let Some(t) = transition(self.phase, trigger, self.lives) else {
            return false;
        };

        let from = self.phase;
        self.phase = t.next;
        for effect in t.effects {
            self.apply(*effect);
        }

        log::info!(
            "{:?} -> {:?} on {:?} (score {}, level {}, lives {})",
            from,
            t.next,
            trigger,
            self.score,
            self.level,
            self.lives
        );
        self.emit(GameEvent::PhaseChanged { from, to: t.next });
        true
    }

    /// Execute one transition side effect
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::RevealBricks => self.bricks.reveal(),
            Effect::ResetStats => {
                self.score = 0;
                self.level = 1;
                self.lives = STARTING_LIVES;
                self.speed_increment = 0.0;
            }
            Effect::AdvanceLevel => {
                self.level += 1;
                self.speed_increment += SPEED_INCREMENT;
                self.emit(GameEvent::LevelCleared { level: self.level });
            }
            Effect::LoseLife => {
                self.lives = self.lives.saturating_sub(1);
                self.emit(GameEvent::LifeLost {
                    lives_left: self.lives,
                });
            }
            Effect::ResetBoard => {
                self.particles.reset();
                self.ball.reset(self.speed_increment);
                self.bricks.reset();
                self.emit(GameEvent::Sound(SoundEffect::RoundReset));
            }
            Effect::DeactivateBall => self.ball.active = false,
        }
    }
}
