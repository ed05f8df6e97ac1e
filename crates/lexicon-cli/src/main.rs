//! Main entry point for the Lexicon CLI.

use anyhow::{Context, Result};
use clap::Parser;
use lexicon_cli::{execute, Cli};
use lexicon_common::init_logging;
use lexicon_config::ConfigLoader;
use lexicon_i18n::Translator;
use tracing::{debug, error};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::new(&cli.config)
        .load()
        .with_context(|| format!("failed to load configuration {}", cli.config.display()))?;

    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    // Keep stdout free for command output
    config.logging.stderr = true;
    init_logging(&config.logging).context("failed to initialize logging")?;

    debug!("Configuration loaded from {:?}", cli.config);

    let mut translator = Translator::new();
    if let Err(e) = config.apply(&mut translator) {
        error!("Translator setup failed: {}", e);
        return Err(e).context("failed to load translation bundles");
    }

    let output = execute(&cli.command, &translator)?;
    println!("{output}");
    Ok(())
}
