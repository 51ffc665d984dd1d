//! Sound effect handles and the volume-aware sound board
//!
//! Decoding and playback belong to the host's [`AudioSink`]; the game only
//! decides which effect to trigger and how loud.

use crate::platform::AudioSink;
use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Brick destroyed
    BrickDestroy,
    /// Ball fell past the bottom edge
    BallLost,
    /// Board reset for a new round
    RoundReset,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 4] = [
        SoundEffect::PaddleHit,
        SoundEffect::BrickDestroy,
        SoundEffect::BallLost,
        SoundEffect::RoundReset,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::PaddleHit => "hit",
            SoundEffect::BrickDestroy => "destroy",
            SoundEffect::BallLost => "loose",
            SoundEffect::RoundReset => "reset",
        }
    }
}

/// Routes effects to a sink at the configured volume
#[derive(Debug, Clone)]
pub struct SoundBoard {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for SoundBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundBoard {
    pub fn new() -> Self {
        Self {
            master_volume: 1.0,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut board = Self::new();
        board.set_master_volume(settings.master_volume);
        board.set_sfx_volume(settings.sfx_volume);
        board.set_muted(settings.muted);
        board
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Trigger a sound; returns false if it was dropped because the board is silent
    pub fn play<A: AudioSink + ?Sized>(&self, sink: &mut A, effect: SoundEffect) -> bool {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return false;
        }

        log::debug!("Playing {} at {:.2}", effect.as_str(), vol);
        sink.play(effect, vol);
        true
    }
}
