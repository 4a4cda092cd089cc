use serde::Serialize;
use std::sync::LazyLock;

use super::builtin;
use super::error::FormatError;
use super::types::OutputFormat;

static DEFAULT_FORMATS: LazyLock<OutputFormats> =
    LazyLock::new(|| OutputFormats::new(builtin::all()));

/// Output formats sorted by name.
///
/// The ordering is established on construction and every collection handed
/// out by this crate keeps it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OutputFormats {
    formats: Vec<OutputFormat>,
}

impl OutputFormats {
    pub fn new(mut formats: Vec<OutputFormat>) -> Self {
        formats.sort_by(|a, b| a.name.cmp(&b.name));
        Self { formats }
    }

    /// The built-in formats.
    pub fn defaults() -> &'static OutputFormats {
        &DEFAULT_FORMATS
    }

    /// Find the single format whose media type suffix is `suffix`.
    ///
    /// Returns `None` when several formats share the suffix.
    pub fn get_by_suffix(&self, suffix: &str) -> Option<&OutputFormat> {
        let matches: Vec<&OutputFormat> = self
            .formats
            .iter()
            .filter(|f| f.media_type.suffix().eq_ignore_ascii_case(suffix))
            .collect();

        match matches.as_slice() {
            [] => None,
            [format] => Some(*format),
            ambiguous => {
                let names: Vec<&str> = ambiguous.iter().map(|f| f.name.as_str()).collect();
                tracing::debug!(suffix, ?names, "Ambiguous output format suffix");
                None
            }
        }
    }

    pub fn get_by_name(&self, name: &str) -> Option<&OutputFormat> {
        self.formats.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Resolve every name, in order. Fails on the first unknown name.
    pub fn get_by_names<I, S>(&self, names: I) -> Result<Vec<&OutputFormat>, FormatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                self.get_by_name(name)
                    .ok_or_else(|| FormatError::NotFound(name.to_string()))
            })
            .collect()
    }

    /// Pick a format from a template-style file name.
    ///
    /// `list.amp.html` resolves by the format name `amp`, `list.html` by the
    /// suffix `html`. Anything past the third segment is ignored.
    pub fn from_filename(&self, filename: &str) -> Option<&OutputFormat> {
        let parts: Vec<&str> = filename.split('.').take(3).collect();

        let (name, ext) = match parts.as_slice() {
            [_, name, ext] => (*name, *ext),
            [_, ext] => ("", *ext),
            _ => return None,
        };

        if !name.is_empty() {
            return self.get_by_name(name);
        }
        if ext.is_empty() {
            return None;
        }
        self.get_by_suffix(ext)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutputFormat> {
        self.formats.iter()
    }

    pub fn as_slice(&self) -> &[OutputFormat] {
        &self.formats
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

impl Default for OutputFormats {
    fn default() -> Self {
        Self::defaults().clone()
    }
}

impl<'a> IntoIterator for &'a OutputFormats {
    type Item = &'a OutputFormat;
    type IntoIter = std::slice::Iter<'a, OutputFormat>;

    fn into_iter(self) -> Self::IntoIter {
        self.formats.iter()
    }
}

impl From<Vec<OutputFormat>> for OutputFormats {
    fn from(formats: Vec<OutputFormat>) -> Self {
        Self::new(formats)
    }
}
