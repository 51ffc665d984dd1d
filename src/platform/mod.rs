//! Platform abstraction layer
//!
//! The game core talks to its host only through these traits:
//! - [`Surface`]: drawing primitives, frame boundaries, frame time, close request
//! - [`InputSource`]: held / just-pressed queries for the three game keys
//! - [`AudioSink`]: fire-and-forget sound triggers
//!
//! `headless` provides in-memory implementations for tests and the CLI.

pub mod headless;

use glam::Vec2;

use crate::audio::SoundEffect;
use crate::color::Color;
use crate::sim::Rect;

/// Logical keys the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    /// Space: start a round / restart after game over
    Confirm,
}

impl Key {
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Key::Left => 0,
            Key::Right => 1,
            Key::Confirm => 2,
        }
    }
}

/// A drawing target
pub trait Surface {
    fn begin_frame(&mut self);
    fn end_frame(&mut self);
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Width in pixels of `text` at `font_size`
    fn measure_text(&self, text: &str, font_size: u32) -> f32;
    /// Draw `text` with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, font_size: u32, color: Color);
    /// Seconds taken by the previous frame
    fn frame_time(&self) -> f32;
    /// Host asked to close (window closed, frame budget spent, ...)
    fn should_close(&self) -> bool;
}

/// Keyboard state
pub trait InputSource {
    /// Key is currently held
    fn is_down(&self, key: Key) -> bool;
    /// Key went down since the previous poll
    fn is_pressed(&self, key: Key) -> bool;
    /// Refresh state for the next frame
    fn poll(&mut self) {}
}

/// Sound output
pub trait AudioSink {
    /// Start playing `effect` at `volume` (0.0 - 1.0) without waiting for it
    fn play(&mut self, effect: SoundEffect, volume: f32);
}
