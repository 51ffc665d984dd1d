//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One frame per `tick`, no wall-clock reads (frame time is passed in)
//! - Seeded RNG only
//! - Stable row-major iteration over the brick grid
//! - No rendering or platform dependencies

pub mod bricks;
pub mod collision;
pub mod particles;
pub mod phase;
pub mod rect;
pub mod state;
pub mod tick;

pub use bricks::{Brick, BrickField};
pub use collision::{HitFace, circle_rect_overlap, hit_face, paddle_deflection};
pub use particles::{Particle, ParticlePool};
pub use phase::{Effect, Transition, Trigger, transition};
pub use rect::Rect;
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, resolve_borders, tick};
