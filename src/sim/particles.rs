//! Fixed-capacity pool of fading debris particles
//!
//! Particles are visual only and never feed back into gameplay. The pool is a
//! fixed array: spawning claims the lowest-index inactive slots and silently
//! drops whatever does not fit.

use glam::Vec2;
use rand::Rng;

use crate::color::Color;
use crate::consts::*;

/// A single debris particle
#[derive(Debug, Clone, Copy, Default)]
pub struct Particle {
    /// Screen-space position (y down)
    pub pos: Vec2,
    /// Screen-space velocity in pixels per 60 Hz frame
    pub vel: Vec2,
    pub color: Color,
    pub radius: f32,
    /// Seconds left before the particle is recycled
    pub lifespan: f32,
    /// Opacity; drops by a fixed amount every frame and may go below zero
    pub fade: f32,
    pub active: bool,
}

/// Pool of [`MAX_PARTICLES`] particle slots
#[derive(Debug, Clone)]
pub struct ParticlePool {
    slots: [Particle; MAX_PARTICLES],
}

impl Default for ParticlePool {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticlePool {
    pub fn new() -> Self {
        Self {
            slots: [Particle::default(); MAX_PARTICLES],
        }
    }

    /// Activate up to `count` particles at `pos`; returns how many were spawned
    pub fn spawn<R: Rng>(&mut self, pos: Vec2, count: usize, color: Color, rng: &mut R) -> usize {
        let mut spawned = 0;
        for slot in self.slots.iter_mut().filter(|p| !p.active).take(count) {
            // Tenths in [-5.0, 4.9]
            let vel = Vec2::new(
                rng.random_range(-50..50) as f32 / 10.0,
                rng.random_range(-50..50) as f32 / 10.0,
            );
            *slot = Particle {
                pos,
                vel,
                color,
                radius: PARTICLE_RADIUS,
                lifespan: PARTICLE_LIFESPAN,
                fade: 1.0,
                active: true,
            };
            spawned += 1;
        }
        spawned
    }

    /// Advance every active particle by `dt` seconds
    ///
    /// Motion and gravity are time-scaled; the fade step is per call.
    pub fn update(&mut self, dt: f32) {
        let scale = dt * PARTICLE_TIME_SCALE;
        for particle in self.slots.iter_mut().filter(|p| p.active) {
            particle.pos += particle.vel * scale;
            particle.vel.y += GRAVITY * scale;
            particle.lifespan -= dt;
            particle.fade -= PARTICLE_FADE_STEP;

            if particle.lifespan <= 0.0 {
                particle.active = false;
            }
        }
    }

    /// Deactivate every slot
    pub fn reset(&mut self) {
        for particle in &mut self.slots {
            particle.active = false;
        }
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.active).count()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter().filter(|p| p.active)
    }

    /// All slots, active or not, in index order
    pub fn slots(&self) -> &[Particle] {
        &self.slots
    }
}
