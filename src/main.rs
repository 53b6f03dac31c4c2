//! Explodiemoji desktop app.

use std::path::PathBuf;

use clap::Parser;
use explodiemoji::app::App;
use explodiemoji::{AppConfig, AppError, Simulator};

#[derive(Parser)]
#[command(name = "explodiemoji", version, about = "Emoji particle bursts with gravity")]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible bursts
    #[arg(long)]
    seed: Option<u64>,

    /// Start with gravity turned off
    #[arg(long)]
    no_gravity: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // RUST_LOG still wins when set
    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut config = match &cli.config {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            AppConfig::load(path)?
        }
        None => AppConfig::default(),
    };
    if cli.no_gravity {
        config.gravity_enabled = false;
    }

    let simulator = match cli.seed {
        Some(seed) => Simulator::seeded(seed),
        None => Simulator::new(),
    }
    .with_config(&config);

    App::new(config, simulator).run()
}
