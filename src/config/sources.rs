use super::models::Config;
use config::{ConfigError, Environment, File};
use std::env;
use std::path::PathBuf;

const CONFIG_ENV_VAR: &str = "SITEFORMATS_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/site.toml";
const ENV_PREFIX: &str = "SITEFORMATS";
const ENV_SEPARATOR: &str = "__";

/// Read the site's override tables.
///
/// `.env` is loaded first, so its `SITEFORMATS__*` entries count as
/// environment overrides. The file path comes from `SITEFORMATS_CONFIG`,
/// else `config/site.toml`.
pub fn load() -> Result<Config, ConfigError> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let config_path = env::var(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

    load_from_sources(config_path)
}

/// Read `[media_types]` and `[output_formats]` from `config_path`, then
/// layer the process environment on top.
pub fn load_from_sources(config_path: PathBuf) -> Result<Config, ConfigError> {
    load_with_environment(config_path, environment())
}

/// `SITEFORMATS__OUTPUT_FORMATS__HTML__BASE_NAME` becomes
/// `output_formats.html.base_name`. Keys arrive lowercased, which the
/// format and media type decoders accept.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

fn load_with_environment(
    config_path: PathBuf,
    env_source: Environment,
) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();

    if config_path.exists() {
        tracing::info!(path = %config_path.display(), "Loading site configuration");
        builder = builder.add_source(File::from(config_path).required(false));
    } else {
        tracing::warn!(
            path = %config_path.display(),
            "Site configuration not found, using built-in formats and environment overrides"
        );
    }

    builder.add_source(env_source).build()?.try_deserialize()
}
