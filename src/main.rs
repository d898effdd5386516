use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::audio::{AudioSink, Muted, TerminalBell};
use grid_snake::game::{GameConfig, SimulationState};
use grid_snake::input::TerminalInput;
use grid_snake::modes::GameLoop;
use grid_snake::render::TerminalRenderer;
use std::path::PathBuf;
use std::time::Instant;

mod logger;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Classic grid snake in the terminal")]
struct Cli {
    /// TOML file overriding grid size, speeds and frame rate
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Where to write the log (defaults to a file in the temp directory)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Disable sound cues
    #[arg(long)]
    mute: bool,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = logger::init(cli.log_file)?;
    log::info!("Logging to {}", log_file.display());

    let config = match &cli.config {
        Some(path) => GameConfig::load(path).context("Invalid game configuration")?,
        None => GameConfig::default(),
    };

    let state = match cli.seed {
        Some(seed) => SimulationState::with_seed(config, seed),
        None => SimulationState::new(config),
    };

    let audio: Box<dyn AudioSink> = if cli.mute || !state.config().sound {
        Box::new(Muted)
    } else {
        Box::new(TerminalBell::new())
    };

    let renderer = TerminalRenderer::enter(state.config())?;
    let mut game = GameLoop::new(state, TerminalInput::new(), renderer, audio, Instant::now());

    // Run game loop with cleanup
    let result = game.run().await;

    // Restore the terminal even if the loop failed
    game.renderer_mut().restore()?;

    result
}
