use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use quizdeck::config::{Config, ConfigStore};
use quizdeck::logging::init_tracing;
use quizdeck::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "quizdeck", about = "Terminal flashcard and self-quiz study tool")]
struct Cli {
    /// Deck file to study (overrides the configured default).
    deck: Option<PathBuf>,

    /// Alternate config file path.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not persist quiz progress for this run.
    #[arg(long)]
    no_persist: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path).context("failed to load configuration")?;
    let store = ConfigStore::new(config, config_path);

    let deck_path = cli
        .deck
        .or_else(|| store.get().deck.path)
        .context("no deck given: pass a deck file or set [deck] path in the config")?;

    runtime::run(store, deck_path, !cli.no_persist)
}
