use std::{fs::File, path::PathBuf, sync::Mutex};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::GameConfig;
use grid_snake::modes::HumanMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Tick-driven Snake in the terminal")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// Grid width
    #[arg(long, default_value = "30")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "20")]
    height: usize,

    /// Snake length at the start of each run
    #[arg(long, default_value = "3")]
    initial_length: usize,

    /// Milliseconds between ticks
    #[arg(long, default_value = "150")]
    tick_ms: u64,

    /// Seed for food placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            initial_snake_length: self.initial_length,
            tick_interval_ms: self.tick_ms,
            ..GameConfig::new(self.width, self.height)
        }
    }
}

// The terminal belongs to the TUI, so logs only go to a file when asked.
fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = cli.game_config();

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config, cli.seed)?;
            human_mode.run().await?;
        }
    }

    Ok(())
}
