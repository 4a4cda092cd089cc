use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;

use crate::cli::{Cli, Commands};
use siteformats::config::Config;
use siteformats::formats::OutputFormats;
use siteformats::media::MediaTypes;

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub fn run(cli: Cli) -> Result<ExitCode, AnyError> {
    let config = match cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let media_types = config.decode_media_types()?;
    let formats = config.decode_output_formats(&media_types)?;
    info!(
        formats = formats.len(),
        media_types = media_types.len(),
        "Output formats resolved"
    );

    let mut stdout = io::stdout().lock();
    execute(&cli.command, &media_types, &formats, &mut stdout)
}

/// Run one subcommand against resolved registries, writing JSON to `out`.
fn execute(
    command: &Commands,
    media_types: &MediaTypes,
    formats: &OutputFormats,
    out: &mut impl Write,
) -> Result<ExitCode, AnyError> {
    match command {
        Commands::List => write_json(out, formats)?,
        Commands::Get(args) => write_json(out, &formats.get_by_names(&args.names)?)?,
        Commands::Resolve(args) => match formats.from_filename(&args.filename) {
            Some(format) => write_json(out, format)?,
            None => {
                eprintln!("no output format matches {:?}", args.filename);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::MediaTypes => {
            let listing: BTreeMap<&str, &[String]> = media_types
                .iter()
                .map(|t| (t.type_str(), t.suffixes()))
                .collect();
            write_json(out, &listing)?
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<(), AnyError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
