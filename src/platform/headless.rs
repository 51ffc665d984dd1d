//! In-memory platform: a surface that records draw calls, scripted and
//! autopilot input, and audio sinks that record or discard sounds.

use glam::Vec2;

use super::{AudioSink, InputSource, Key, Surface};
use crate::audio::SoundEffect;
use crate::color::Color;
use crate::consts::{BAR_SPEED, TARGET_FPS};
use crate::sim::{GamePhase, GameState, Rect};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect {
        rect: Rect,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        font_size: u32,
        color: Color,
    },
}

/// Surface that keeps the draw calls of the most recent frame
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    frame_dt: f32,
    max_frames: Option<u64>,
    frames: u64,
    commands: Vec<DrawCommand>,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(1.0 / TARGET_FPS as f32)
    }
}

impl HeadlessSurface {
    /// Surface reporting a constant `frame_dt` and never asking to close
    pub fn new(frame_dt: f32) -> Self {
        Self {
            frame_dt,
            max_frames: None,
            frames: 0,
            commands: Vec::with_capacity(64),
        }
    }

    /// Ask to close once `frames` frames have been presented
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw calls of the current (or last finished) frame
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text strings drawn this frame, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for HeadlessSurface {
    fn begin_frame(&mut self) {
        self.commands.clear();
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    /// Monospace approximation: each glyph is half the font size wide
    fn measure_text(&self, text: &str, font_size: u32) -> f32 {
        text.chars().count() as f32 * font_size as f32 * 0.5
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, font_size: u32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            pos,
            font_size,
            color,
        });
    }

    fn frame_time(&self) -> f32 {
        self.frame_dt
    }

    fn should_close(&self) -> bool {
        self.max_frames.is_some_and(|max| self.frames >= max)
    }
}

/// Input driven by code: held keys plus one-shot presses
///
/// Presses become visible after the next [`poll`](InputSource::poll), like a
/// real event pump. Frame numbers count polls, starting at 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    polls: u64,
    held: [bool; 3],
    pressed: [bool; 3],
    queued: [bool; 3],
    schedule: Vec<(u64, Key)>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press `key` on the poll numbered `frame`
    pub fn press_at(mut self, frame: u64, key: Key) -> Self {
        self.schedule.push((frame, key));
        self
    }

    /// Press `key` on the next poll
    pub fn press(&mut self, key: Key) {
        self.queued[key.index()] = true;
    }

    pub fn hold(&mut self, key: Key) {
        self.held[key.index()] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }
}

impl InputSource for ScriptedInput {
    fn is_down(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    fn is_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    fn poll(&mut self) {
        self.pressed = std::mem::take(&mut self.queued);
        for &(frame, key) in &self.schedule {
            if frame == self.polls {
                self.pressed[key.index()] = true;
            }
        }
        self.polls += 1;
    }
}

/// Demo player: chases the ball with the paddle and confirms whenever the game waits
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    held: [bool; 3],
    confirm: bool,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide this frame's keys from the current state
    pub fn observe(&mut self, state: &GameState) {
        let paddle_x = state.paddle.rect.center().x;
        let target_x = state.ball.pos.x;
        let dead_zone = BAR_SPEED;

        self.held = [false; 3];
        if state.phase == GamePhase::Running {
            if target_x < paddle_x - dead_zone {
                self.held[Key::Left.index()] = true;
            } else if target_x > paddle_x + dead_zone {
                self.held[Key::Right.index()] = true;
            }
        }
        self.confirm = state.phase != GamePhase::Running;
    }
}

impl InputSource for Autopilot {
    fn is_down(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    fn is_pressed(&self, key: Key) -> bool {
        key == Key::Confirm && self.confirm
    }
}

/// Audio sink that remembers every trigger
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    pub played: Vec<(SoundEffect, f32)>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        self.played.push((effect, volume));
    }
}

/// Audio sink that only logs
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::trace!("(silent) {} at {:.2}", effect.as_str(), volume);
    }
}
