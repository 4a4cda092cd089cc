use mime::Mime;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaTypeError {
    #[error("invalid media type {media_type:?}: {source}")]
    InvalidType {
        media_type: String,
        #[source]
        source: mime::FromStrError,
    },

    #[error("media type {media_type:?}: {source}")]
    Malformed {
        media_type: String,
        #[source]
        source: config::ConfigError,
    },
}

/// A MIME type together with the file suffixes it is written with.
///
/// Suffixes are stored without the leading dot. The first one is the
/// suffix used when naming output files.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaType {
    mime: Mime,
    suffixes: Vec<String>,
}

impl MediaType {
    pub fn new<I, S>(mime: Mime, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mime,
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a type string such as `application/rss+xml`.
    ///
    /// Parameters (`; charset=...`) are accepted but dropped from the
    /// canonical form.
    pub fn parse<I, S>(media_type: &str, suffixes: I) -> Result<Self, MediaTypeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mime = Mime::from_str(media_type).map_err(|source| MediaTypeError::InvalidType {
            media_type: media_type.to_string(),
            source,
        })?;
        Ok(Self::new(mime, suffixes))
    }

    /// Canonical `main/sub[+suffix]` form, e.g. `text/html`.
    pub fn type_str(&self) -> &str {
        self.mime.essence_str()
    }

    pub fn main_type(&self) -> &str {
        self.mime.type_().as_str()
    }

    /// Sub type without the structured syntax suffix (`rss` for `application/rss+xml`).
    pub fn sub_type(&self) -> &str {
        self.mime.subtype().as_str()
    }

    pub fn mime_suffix(&self) -> Option<&str> {
        self.mime.suffix().map(|name| name.as_str())
    }

    pub fn mime(&self) -> &Mime {
        &self.mime
    }

    /// Primary file suffix, empty when the type has none.
    pub fn suffix(&self) -> &str {
        self.suffixes.first().map(String::as_str).unwrap_or_default()
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.suffixes.iter().any(|s| s.eq_ignore_ascii_case(suffix))
    }

    pub(crate) fn set_suffixes(&mut self, suffixes: Vec<String>) {
        self.suffixes = suffixes;
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_str())
    }
}

// Only the canonical string leaves the crate.
impl Serialize for MediaType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.type_str())
    }
}
