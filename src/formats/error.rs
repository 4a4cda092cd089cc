use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("output format {0:?} not found")]
    NotFound(String),

    #[error("media type {0:?} not found")]
    MediaTypeNotFound(String),

    #[error("output format {name:?}: expected a table of attributes: {source}")]
    Malformed {
        name: String,
        #[source]
        source: config::ConfigError,
    },

    #[error("output format {name:?}: invalid value for {key:?}: {source}")]
    InvalidAttribute {
        name: String,
        key: String,
        #[source]
        source: config::ConfigError,
    },
}
