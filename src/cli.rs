use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "siteformats")]
#[command(about = "Inspect a site's output formats", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to $SITEFORMATS_CONFIG or config/site.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every output format as JSON
    List,
    /// Print the named output formats as JSON, in the given order
    Get(GetArgs),
    /// Print the output format a template file name resolves to
    Resolve(ResolveArgs),
    /// Print the known media types and their suffixes
    MediaTypes,
}

#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Output format names (case-insensitive)
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// File name such as `single.amp.html` or `list.json`
    pub filename: String,
}
