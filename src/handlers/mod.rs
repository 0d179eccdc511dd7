pub mod info;
pub mod run;
pub mod shell;
pub mod tour;
pub mod welcome;

use anyhow::Result;
use crate::cli::Cli;
use folio::config::{FolioConfig, load_config};
use std::env;

/// Config from `folio.toml`, `.env` and the environment, with the global
/// flags applied last.
pub fn load(cli: &Cli) -> Result<FolioConfig> {
    let current_dir = env::current_dir()?;
    let mut config = load_config(&current_dir, cli.config.as_deref())?;
    config.apply_cli(cli.lang, cli.narrow);
    Ok(config)
}
