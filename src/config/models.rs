use config::{Map, Value};
use serde::Deserialize;

/// Top-level configuration
///
/// Both tables hold loosely typed attribute maps; they are decoded against
/// the media type and output format registries rather than by serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Media type overrides keyed by type string (e.g. `text/enriched`)
    #[serde(default)]
    pub media_types: Map<String, Value>,
    /// Output format overrides keyed by format name
    #[serde(default)]
    pub output_formats: Map<String, Value>,
}
