use config::{Map, Value, ValueKind};
use std::sync::LazyLock;

use super::builtin;
use super::types::{MediaType, MediaTypeError};

/// Media type overrides keyed by type string, as read from configuration.
pub type MediaTypeOverrides = Map<String, Value>;

static DEFAULT_MEDIA_TYPES: LazyLock<MediaTypes> =
    LazyLock::new(|| MediaTypes::new(builtin::all()));

/// Ordered set of known media types, sorted by canonical type string.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaTypes {
    types: Vec<MediaType>,
}

impl MediaTypes {
    pub fn new(mut types: Vec<MediaType>) -> Self {
        types.sort_by(|a, b| a.type_str().cmp(b.type_str()));
        Self { types }
    }

    /// The built-in registry.
    pub fn defaults() -> &'static MediaTypes {
        &DEFAULT_MEDIA_TYPES
    }

    /// Look up a type by its canonical string, ignoring case.
    ///
    /// A query without a structured syntax suffix also matches on main and
    /// sub type alone, so `application/rss` finds `application/rss+xml`.
    pub fn get_by_type(&self, media_type: &str) -> Option<&MediaType> {
        if let Some(found) = self
            .types
            .iter()
            .find(|t| t.type_str().eq_ignore_ascii_case(media_type))
        {
            return Some(found);
        }

        if media_type.contains('+') {
            return None;
        }

        let (main, sub) = media_type.split_once('/')?;
        self.types.iter().find(|t| {
            t.main_type().eq_ignore_ascii_case(main) && t.sub_type().eq_ignore_ascii_case(sub)
        })
    }

    pub fn get_first_by_suffix(&self, suffix: &str) -> Option<&MediaType> {
        self.types.iter().find(|t| t.has_suffix(suffix))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MediaType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Build a registry from the built-ins plus configured overrides.
    ///
    /// Keys name a media type. A key matching a known type replaces its
    /// suffixes when `suffixes` is set; any other key adds a new type.
    pub fn decode(overrides: &[MediaTypeOverrides]) -> Result<MediaTypes, MediaTypeError> {
        let mut types = Self::defaults().types.clone();

        for map in overrides {
            for (key, value) in map {
                let suffixes = decode_suffixes(key, value)?;

                match types
                    .iter_mut()
                    .find(|t| t.type_str().eq_ignore_ascii_case(key))
                {
                    Some(existing) => {
                        if let Some(suffixes) = suffixes {
                            tracing::debug!(
                                media_type = %key,
                                ?suffixes,
                                "Replacing media type suffixes"
                            );
                            existing.set_suffixes(suffixes);
                        }
                    }
                    None => {
                        tracing::debug!(media_type = %key, "Adding media type");
                        types.push(MediaType::parse(key, suffixes.unwrap_or_default())?);
                    }
                }
            }
        }

        Ok(Self::new(types))
    }
}

impl Default for MediaTypes {
    fn default() -> Self {
        Self::defaults().clone()
    }
}

impl<'a> IntoIterator for &'a MediaTypes {
    type Item = &'a MediaType;
    type IntoIter = std::slice::Iter<'a, MediaType>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}

/// `suffixes` may be a list or a comma-separated string.
fn decode_suffixes(media_type: &str, value: &Value) -> Result<Option<Vec<String>>, MediaTypeError> {
    let malformed = |source: config::ConfigError| MediaTypeError::Malformed {
        media_type: media_type.to_string(),
        source,
    };

    let table = value.clone().into_table().map_err(malformed)?;
    let Some((_, raw)) = table
        .into_iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("suffixes"))
    else {
        return Ok(None);
    };

    let suffixes = match raw.kind {
        ValueKind::Array(_) => raw
            .into_array()
            .map_err(malformed)?
            .into_iter()
            .map(Value::into_string)
            .collect::<Result<Vec<_>, _>>()
            .map_err(malformed)?,
        _ => raw
            .into_string()
            .map_err(malformed)?
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    };

    Ok(Some(suffixes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(src: &str) -> MediaTypeOverrides {
        toml::from_str(src).unwrap()
    }

    #[test]
    fn test_defaults_sorted_by_type() {
        let types: Vec<&str> = MediaTypes::defaults().iter().map(|t| t.type_str()).collect();
        let mut sorted = types.clone();
        sorted.sort();
        assert_eq!(types, sorted);
    }

    #[test]
    fn test_get_by_type_ignores_case() {
        let types = MediaTypes::defaults();
        assert_eq!(types.get_by_type("TEXT/HTML").unwrap().suffix(), "html");
        assert!(types.get_by_type("text/nope").is_none());
    }

    #[test]
    fn test_get_by_type_without_mime_suffix() {
        let types = MediaTypes::defaults();
        let rss = types.get_by_type("application/rss").unwrap();
        assert_eq!(rss.type_str(), "application/rss+xml");

        // An explicit structured suffix must match exactly
        assert!(types.get_by_type("application/rss+json").is_none());
    }

    #[test]
    fn test_get_first_by_suffix() {
        let types = MediaTypes::defaults();
        assert_eq!(types.get_first_by_suffix("ICS").unwrap().type_str(), "text/calendar");
        assert!(types.get_first_by_suffix("zip").is_none());
    }

    #[test]
    fn test_decode_adds_new_type() {
        let types = MediaTypes::decode(&[overrides(
            r#"
["text/enriched"]
suffixes = ["enr", "rtx"]
            "#,
        )])
        .unwrap();

        assert_eq!(types.len(), MediaTypes::defaults().len() + 1);
        let enriched = types.get_by_type("text/enriched").unwrap();
        assert_eq!(enriched.suffixes(), ["enr", "rtx"]);
    }

    #[test]
    fn test_decode_replaces_suffixes() {
        let types = MediaTypes::decode(&[overrides(
            r#"
["text/html"]
suffixes = "htm, html"
            "#,
        )])
        .unwrap();

        assert_eq!(types.len(), MediaTypes::defaults().len());
        assert_eq!(types.get_by_type("text/html").unwrap().suffix(), "htm");
        // Built-ins are untouched
        assert_eq!(MediaTypes::defaults().get_by_type("text/html").unwrap().suffix(), "html");
    }

    #[test]
    fn test_decode_rejects_invalid_type() {
        let err = MediaTypes::decode(&[overrides(
            r#"
["bogus"]
suffixes = ["b"]
            "#,
        )])
        .unwrap_err();

        assert!(matches!(err, MediaTypeError::InvalidType { ref media_type, .. } if media_type == "bogus"));
    }

    #[test]
    fn test_decode_rejects_non_table() {
        let err = MediaTypes::decode(&[overrides(r#""text/html" = "html""#)]).unwrap_err();
        assert!(matches!(err, MediaTypeError::Malformed { .. }));
    }
}
