//! Brickout entry point
//!
//! Runs the game on the headless platform: a fixed number of frames at the
//! target frame time, driven either by the autopilot or by a single serve.
//! Prints a JSON session summary when done.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use brickout::consts::{HEIGHT, WIDTH, WINDOW_TITLE};
use brickout::platform::headless::{Autopilot, HeadlessSurface, NullAudio, ScriptedInput};
use brickout::platform::{Key, Surface};
use brickout::{Game, Settings};

#[derive(Debug, Parser)]
#[command(name = "brickout", version, about = "Headless brick breaker session")]
struct Cli {
    /// Frames to simulate
    #[arg(long, default_value_t = 6000)]
    frames: u64,

    /// RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Let the autopilot play instead of serving once and idling
    #[arg(long)]
    demo: bool,

    /// Don't print the summary
    #[arg(long)]
    quiet: bool,
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.settings {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading settings from {}", path.display()))?;
            Settings::from_json(&json)
                .with_context(|| format!("parsing settings in {}", path.display()))?
        }
        None => Settings::default(),
    };
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let settings = load_settings(&cli)?;

    log::info!(
        "{} ({}x{}) starting headless, {} frames at {} fps",
        WINDOW_TITLE,
        WIDTH,
        HEIGHT,
        cli.frames,
        settings.target_fps
    );

    let mut game = Game::new(&settings);
    let mut surface = HeadlessSurface::new(settings.frame_dt()).with_frame_limit(cli.frames);
    let mut audio = NullAudio;

    if cli.demo {
        let mut pilot = Autopilot::new();
        while !surface.should_close() {
            pilot.observe(game.state());
            game.frame(&mut surface, &pilot, &mut audio);
        }
    } else {
        let mut input = ScriptedInput::new().press_at(0, Key::Confirm);
        game.run(&mut surface, &mut input, &mut audio);
    }

    if !cli.quiet {
        let summary = serde_json::to_string_pretty(&game.summary())
            .context("serializing session summary")?;
        println!("{summary}");
    }
    Ok(())
}
