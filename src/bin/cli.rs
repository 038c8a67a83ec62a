// src/bin/cli.rs
use color_eyre::eyre::{Result, eyre};

use taskfeed::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let params = cli::parse_cli().map_err(|e| eyre!("{e}"))?;
    cli::run(params).map_err(|e| eyre!("{e}"))
}
