use config::{Map, Value, ValueKind};

use super::error::FormatError;
use super::registry::OutputFormats;
use super::types::OutputFormat;
use crate::media::{MediaType, MediaTypes, builtin as media};

/// Output format overrides keyed by format name, as read from configuration.
pub type FormatOverrides = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attribute {
    Name,
    MediaType,
    Path,
    BaseName,
    Rel,
    Protocol,
    IsPlainText,
    IsHtml,
    NoUgly,
}

// Keys after dropping `_` and `-`, compared ignoring case.
const ATTRIBUTES: &[(&str, Attribute)] = &[
    ("name", Attribute::Name),
    ("mediatype", Attribute::MediaType),
    ("path", Attribute::Path),
    ("basename", Attribute::BaseName),
    ("rel", Attribute::Rel),
    ("protocol", Attribute::Protocol),
    ("isplaintext", Attribute::IsPlainText),
    ("ishtml", Attribute::IsHtml),
    ("nougly", Attribute::NoUgly),
];

impl Attribute {
    fn from_key(key: &str) -> Option<Self> {
        let normalized: String = key.chars().filter(|c| !matches!(c, '_' | '-')).collect();
        ATTRIBUTES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(&normalized))
            .map(|(_, attribute)| *attribute)
    }
}

/// The attributes one override sets, converted to their field types.
#[derive(Debug, Default)]
struct FormatPatch {
    media_type: Option<MediaType>,
    path: Option<Option<String>>,
    base_name: Option<String>,
    rel: Option<String>,
    protocol: Option<Option<String>>,
    is_plain_text: Option<bool>,
    is_html: Option<bool>,
    no_ugly: Option<bool>,
}

impl FormatPatch {
    fn decode(name: &str, value: &Value, media_types: &MediaTypes) -> Result<Self, FormatError> {
        let table = value
            .clone()
            .into_table()
            .map_err(|source| FormatError::Malformed {
                name: name.to_string(),
                source,
            })?;

        let mut patch = Self::default();

        for (key, value) in table {
            let Some(attribute) = Attribute::from_key(&key) else {
                tracing::warn!(format = %name, %key, "Ignoring unknown output format attribute");
                continue;
            };

            let invalid = |source: config::ConfigError| FormatError::InvalidAttribute {
                name: name.to_string(),
                key: key.clone(),
                source,
            };

            match attribute {
                // The table key names the format
                Attribute::Name => {}
                Attribute::MediaType => {
                    let media_type = value.into_string().map_err(invalid)?;
                    let resolved = media_types
                        .get_by_type(&media_type)
                        .ok_or(FormatError::MediaTypeNotFound(media_type.clone()))?;
                    patch.media_type = Some(resolved.clone());
                }
                Attribute::Path => {
                    patch.path = Some(non_empty(value.into_string().map_err(invalid)?));
                }
                Attribute::BaseName => {
                    patch.base_name = Some(value.into_string().map_err(invalid)?);
                }
                Attribute::Rel => {
                    patch.rel = Some(value.into_string().map_err(invalid)?);
                }
                Attribute::Protocol => {
                    patch.protocol = Some(non_empty(value.into_string().map_err(invalid)?));
                }
                Attribute::IsPlainText => {
                    patch.is_plain_text = Some(weak_bool(value).map_err(invalid)?);
                }
                Attribute::IsHtml => {
                    patch.is_html = Some(weak_bool(value).map_err(invalid)?);
                }
                Attribute::NoUgly => {
                    patch.no_ugly = Some(weak_bool(value).map_err(invalid)?);
                }
            }
        }

        Ok(patch)
    }

    fn apply(&self, format: &mut OutputFormat) {
        if let Some(media_type) = &self.media_type {
            format.media_type = media_type.clone();
        }
        if let Some(path) = &self.path {
            format.path = path.clone();
        }
        if let Some(base_name) = &self.base_name {
            format.base_name = base_name.clone();
        }
        if let Some(rel) = &self.rel {
            format.rel = rel.clone();
        }
        if let Some(protocol) = &self.protocol {
            format.protocol = protocol.clone();
        }
        if let Some(is_plain_text) = self.is_plain_text {
            format.is_plain_text = is_plain_text;
        }
        if let Some(is_html) = self.is_html {
            format.is_html = is_html;
        }
        if let Some(no_ugly) = self.no_ugly {
            format.no_ugly = no_ugly;
        }
    }

    fn into_format(self, name: &str) -> OutputFormat {
        let media_type = self.media_type.unwrap_or_else(|| {
            tracing::warn!(format = %name, "Output format has no media type, using application/octet-stream");
            media::octet_stream()
        });

        OutputFormat::builder()
            .name(name)
            .media_type(media_type)
            .maybe_path(self.path.flatten())
            .maybe_base_name(self.base_name.filter(|s| !s.is_empty()))
            .maybe_rel(self.rel.filter(|s| !s.is_empty()))
            .maybe_protocol(self.protocol.flatten())
            .maybe_is_plain_text(self.is_plain_text)
            .maybe_is_html(self.is_html)
            .maybe_no_ugly(self.no_ugly)
            .build()
    }
}

// `into_bool` plus the single-letter forms `t`/`f`.
fn weak_bool(value: Value) -> Result<bool, config::ConfigError> {
    if let ValueKind::String(s) = &value.kind {
        match s.as_str() {
            "t" | "T" => return Ok(true),
            "f" | "F" => return Ok(false),
            _ => {}
        }
    }
    value.into_bool()
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

impl OutputFormats {
    /// Build the site's formats from the built-ins and configured overrides.
    ///
    /// Override maps are applied in order. A key matching an existing format
    /// name (ignoring case) updates only the attributes it sets; any other
    /// key adds a new format. A new format that names no media type gets
    /// `application/octet-stream`, which has no suffix. Media type strings
    /// are resolved against `media_types`.
    ///
    /// # Errors
    ///
    /// Fails on the first override that references an unknown media type or
    /// cannot be decoded. The built-in formats are never modified.
    pub fn decode(
        media_types: &MediaTypes,
        overrides: &[FormatOverrides],
    ) -> Result<OutputFormats, FormatError> {
        let mut formats = Self::defaults().as_slice().to_vec();

        for map in overrides {
            for (name, value) in map {
                let patch = FormatPatch::decode(name, value, media_types)?;

                let mut matched = false;
                for format in formats
                    .iter_mut()
                    .filter(|f| f.name.eq_ignore_ascii_case(name))
                {
                    tracing::debug!(format = %format.name, "Updating output format");
                    patch.apply(format);
                    matched = true;
                }

                if !matched {
                    tracing::debug!(format = %name, "Adding output format");
                    formats.push(patch.into_format(name));
                }
            }
        }

        Ok(OutputFormats::new(formats))
    }
}
