//! Frame orchestrator
//!
//! One [`Game::frame`] = read input, advance the simulation one tick, route
//! the tick's events (sounds to the audio sink, the rest to logs and session
//! counters), then draw. Single-threaded and synchronous; the loop ends only
//! when the surface asks to close.

use serde::Serialize;

use crate::audio::SoundBoard;
use crate::platform::{AudioSink, InputSource, Key, Surface};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Running totals over a whole process lifetime (survive restarts)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionCounters {
    pub frames: u64,
    pub bricks_destroyed: u64,
    pub balls_lost: u64,
    pub levels_cleared: u64,
    pub games_over: u64,
}

/// Snapshot for reporting at the end of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub level: u32,
    pub lives: u32,
    pub bricks_left: usize,
    #[serde(flatten)]
    pub counters: SessionCounters,
}

/// The game: simulation state plus everything needed to present it
pub struct Game {
    seed: u64,
    state: GameState,
    sound: SoundBoard,
    renderer: Renderer,
    counters: SessionCounters,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.resolve_seed();
        log::info!("Game initialized with seed: {}", seed);
        Self {
            seed,
            state: GameState::new(seed),
            sound: SoundBoard::from_settings(settings),
            renderer: Renderer::new(),
            counters: SessionCounters::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn counters(&self) -> &SessionCounters {
        &self.counters
    }

    /// Run a single frame
    pub fn frame<S, I, A>(&mut self, surface: &mut S, input: &I, audio: &mut A)
    where
        S: Surface + ?Sized,
        I: InputSource + ?Sized,
        A: AudioSink + ?Sized,
    {
        let dt = surface.frame_time();
        let tick_input = TickInput {
            left: input.is_down(Key::Left),
            right: input.is_down(Key::Right),
            confirm: input.is_pressed(Key::Confirm),
        };

        tick(&mut self.state, &tick_input, dt);

        for event in self.state.events.drain(..) {
            dispatch(event, &self.sound, audio, &mut self.counters, self.state.score);
        }
        self.counters.frames += 1;

        self.renderer.draw(surface, &self.state);
    }

    /// Poll and run frames until the surface asks to close; returns frames run
    pub fn run<S, I, A>(&mut self, surface: &mut S, input: &mut I, audio: &mut A) -> u64
    where
        S: Surface + ?Sized,
        I: InputSource + ?Sized,
        A: AudioSink + ?Sized,
    {
        let start = self.counters.frames;
        while !surface.should_close() {
            input.poll();
            self.frame(surface, input, audio);
        }
        let ran = self.counters.frames - start;
        log::info!("Loop finished after {} frames", ran);
        ran
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.seed,
            phase: self.state.phase,
            score: self.state.score,
            level: self.state.level,
            lives: self.state.lives,
            bricks_left: self.state.bricks_left(),
            counters: self.counters,
        }
    }
}

fn dispatch<A: AudioSink + ?Sized>(
    event: GameEvent,
    sound: &SoundBoard,
    audio: &mut A,
    counters: &mut SessionCounters,
    score: u64,
) {
    match event {
        GameEvent::Sound(effect) => {
            sound.play(audio, effect);
        }
        GameEvent::BrickDestroyed { .. } => counters.bricks_destroyed += 1,
        GameEvent::BallLost => counters.balls_lost += 1,
        GameEvent::LevelCleared { level } => {
            counters.levels_cleared += 1;
            log::info!("Board cleared, advancing to level {}", level);
        }
        GameEvent::LifeLost { lives_left } => {
            log::info!("Ball lost, {} lives left", lives_left);
        }
        GameEvent::PhaseChanged { to, .. } => {
            if to == GamePhase::GameOver {
                counters.games_over += 1;
                log::info!("Game over with score {}", score);
            }
        }
    }
}
