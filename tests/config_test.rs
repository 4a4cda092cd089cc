use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use siteformats::config::{Config, ConfigError, ValidationError};
use siteformats::formats::OutputFormats;

/// Writes `contents` to a config file inside a fresh temp dir
fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("site.toml");
    fs::write(&path, contents).expect("Failed to write test config");
    (temp_dir, path)
}

fn load_formats(contents: &str) -> Result<OutputFormats, ConfigError> {
    let (_temp_dir, path) = write_config(contents);
    let config = Config::load_from_path(path)?;
    let media_types = config.decode_media_types()?;
    config.decode_output_formats(&media_types)
}

#[test]
fn test_site_without_overrides() {
    let formats = load_formats("").unwrap();
    assert_eq!(&formats, OutputFormats::defaults());
}

#[test]
fn test_site_with_custom_format() {
    let formats = load_formats(
        r#"
[media_types."application/manifest+json"]
suffixes = ["webmanifest"]

[output_formats.webappmanifest]
media_type = "application/manifest+json"
base_name = "manifest"
rel = "manifest"
is_plain_text = "true"
no_ugly = true

[output_formats.amp]
path = "mobile"
        "#,
    )
    .unwrap();

    let manifest = formats.get_by_name("WebAppManifest").unwrap();
    assert_eq!(manifest.base_filename(), "manifest.webmanifest");
    assert_eq!(manifest.rel, "manifest");
    assert!(manifest.is_plain_text);
    assert!(manifest.no_ugly);
    assert!(!manifest.is_html);

    let amp = formats.from_filename("single.amp.html").unwrap();
    assert_eq!(amp.path.as_deref(), Some("mobile"));
    assert_eq!(amp.rel, "amphtml");

    assert_eq!(
        formats.from_filename("site.webmanifest").unwrap().name,
        manifest.name
    );
}

#[test]
fn test_site_with_missing_media_type() {
    let formats = load_formats(
        r#"
[output_formats.podcast]
base_name = "episodes"
        "#,
    )
    .unwrap();

    let podcast = formats.get_by_name("podcast").unwrap();
    assert_eq!(podcast.base_name, "episodes");
    assert_eq!(podcast.media_type.type_str(), "application/octet-stream");
    assert_eq!(podcast.base_filename(), "episodes.");
    assert_eq!(podcast.rel, "alternate");
}

#[test]
fn test_site_with_invalid_media_type_key() {
    let (_temp_dir, path) = write_config(
        r#"
[media_types.enriched]
suffixes = ["enr"]
        "#,
    );

    let config = Config::load_from_path(path).unwrap();
    assert!(matches!(
        config.decode_media_types(),
        Err(ConfigError::MediaType(_))
    ));
}

#[test]
fn test_site_with_dotted_name() {
    let (_temp_dir, path) = write_config(
        r#"
[output_formats."a.b"]
media_type = "text/html"
        "#,
    );

    assert!(matches!(
        Config::load_from_path(path),
        Err(ConfigError::ValidationError(ValidationError::DottedFormatName { .. }))
    ));
}
