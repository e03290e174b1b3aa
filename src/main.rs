use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use p2048::config::GameConfig;
use p2048::shell::Session;

#[derive(Debug, Parser)]
#[command(name = "p2048", version, about = "Play 2048 in the terminal")]
struct Args {
    /// TOML settings file; flags below override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Board width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Board height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Random tiles placed at the start of each game
    #[arg(long)]
    start_squares: Option<usize>,

    /// Seed for the first game (later games always get a fresh seed)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::from_toml(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(width) = args.width { config.width = width; }
    if let Some(height) = args.height { config.height = height; }
    if let Some(start_squares) = args.start_squares { config.start_squares = start_squares; }
    if args.seed.is_some() { config.seed = args.seed; }

    let mut session = Session::new(config)?;
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
