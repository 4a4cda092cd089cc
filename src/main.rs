mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn std::error::Error + Send + Sync>> {
    siteformats::observability::init();

    let cli = Cli::parse();
    commands::run(cli)
}
