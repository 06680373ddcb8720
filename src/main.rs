//! Play Klondike in the terminal.
//!
//! ```text
//! klondike [basic|whitehead] [PILES] [DRAW] [--shuffle] [--seed N] [--config FILE]
//! ```
//!
//! Values from `--config` are defaults; anything given on the command line
//! wins. Logs go to stderr and are filtered with `RUST_LOG`.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use klondike_rules::{GameConfig, Outcome, TextController, Variant};

#[derive(Parser)]
#[command(name = "klondike")]
#[command(about = "Play Klondike solitaire (basic or Whitehead rules)")]
struct Cli {
    /// Rule variant: basic or whitehead
    variant: Option<Variant>,
    /// Number of cascade piles
    piles: Option<usize>,
    /// Number of visible draw cards
    draw: Option<usize>,
    /// Shuffle the deck before dealing
    #[arg(long)]
    shuffle: bool,
    /// Seed for the shuffle
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file with default settings
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let source = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                GameConfig::from_toml_str(&source)
                    .with_context(|| format!("loading {}", path.display()))?
            }
            None => GameConfig::default(),
        };

        if let Some(variant) = self.variant {
            config = config.with_variant(variant);
        }
        if let Some(piles) = self.piles {
            config = config.with_piles(piles);
        }
        if let Some(draw) = self.draw {
            config = config.with_draw(draw);
        }
        if self.shuffle {
            config = config.with_shuffle(true);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = cli.game_config()?;

    let mut game = config.create_game();
    info!(variant = %config.variant, seed = game.seed(), "starting session");
    let deck = game.create_deck();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller = TextController::new(stdin.lock(), stdout.lock());
    let outcome = controller
        .play_game(&mut game, &deck, config.shuffle, config.num_piles, config.num_draw)
        .context("game ended abnormally")?;

    match outcome {
        Outcome::Won => info!("won"),
        Outcome::Lost { score } | Outcome::Quit { score } => info!(score, ?outcome, "finished"),
    }
    Ok(())
}
