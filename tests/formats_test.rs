use serde_json::json;
use siteformats::formats::{FormatError, FormatOverrides, OutputFormat, OutputFormats, builtin};
use siteformats::media::{MediaTypes, builtin as media};

/// Parses a TOML snippet into one override map, the way a config loader would hand it over
fn overrides(src: &str) -> FormatOverrides {
    toml::from_str(src).expect("Failed to parse test overrides")
}

fn names(formats: &OutputFormats) -> Vec<&str> {
    formats.iter().map(|f| f.name.as_str()).collect()
}

#[test]
fn test_defaults_are_sorted() {
    let formats = OutputFormats::defaults();
    let mut sorted = names(formats);
    sorted.sort();
    assert_eq!(names(formats), sorted);
    assert_eq!(formats.len(), 7);
}

#[test]
fn test_default_html() {
    let html = OutputFormats::defaults().get_by_name("html").unwrap();
    assert_eq!(html.name, "HTML");
    assert_eq!(html.media_type.type_str(), "text/html");
    assert_eq!(html.rel, "canonical");
    assert!(html.is_html);
    assert!(!html.is_plain_text);
    assert_eq!(html.base_filename(), format!("index.{}", html.media_type.suffix()));
}

#[test]
fn test_default_calendar_protocol() {
    let calendar = OutputFormats::defaults().get_by_name("calendar").unwrap();
    assert_eq!(calendar.protocol.as_deref(), Some("webcal://"));
    assert_eq!(calendar.base_filename(), "index.ics");
}

#[test]
fn test_suffix_collision_fails_closed() {
    let first = OutputFormat::builder()
        .name("Feed")
        .media_type(media::json())
        .build();
    let second = OutputFormat::builder()
        .name("Search")
        .media_type(media::json())
        .base_name("search")
        .build();

    let formats = OutputFormats::new(vec![first, second, builtin::css()]);
    assert!(formats.get_by_suffix("json").is_none());
    assert!(formats.from_filename("list.json").is_none());

    // Named lookups still work
    assert_eq!(formats.from_filename("list.search.json").unwrap().name, "Search");
    assert_eq!(formats.get_by_suffix("CSS").unwrap().name, "CSS");
}

#[test]
fn test_get_by_names() {
    let formats = OutputFormats::defaults();

    let found = formats.get_by_names(["HTML", "JSON"]).unwrap();
    let found: Vec<&str> = found.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(found, ["HTML", "JSON"]);

    match formats.get_by_names(["HTML", "bogus"]) {
        Err(FormatError::NotFound(name)) => assert_eq!(name, "bogus"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_merge_leaves_other_fields() {
    let formats = OutputFormats::decode(
        MediaTypes::defaults(),
        &[overrides(
            r#"
[html]
baseName = "home"
            "#,
        )],
    )
    .unwrap();

    let defaults = OutputFormats::defaults();
    for (merged, original) in formats.iter().zip(defaults) {
        if merged.name == "HTML" {
            assert_eq!(merged.base_name, "home");
            assert_eq!(merged.media_type, original.media_type);
            assert_eq!(merged.rel, original.rel);
            assert_eq!(merged.is_html, original.is_html);
        } else {
            assert_eq!(merged, original);
        }
    }
}

#[test]
fn test_merge_new_format_then_lookup() {
    let formats = OutputFormats::decode(
        MediaTypes::defaults(),
        &[overrides(
            r#"
[custom]
mediaType = "text/html"
isHTML = true
            "#,
        )],
    )
    .unwrap();

    let custom = formats.from_filename("single.custom.html").unwrap();
    assert_eq!(custom.name, "custom");
    assert_eq!(custom.base_name, "index");
    assert_eq!(custom.rel, "alternate");
    assert!(custom.is_html);

    let sorted = {
        let mut n = names(&formats);
        n.sort();
        n
    };
    assert_eq!(names(&formats), sorted);
}

#[test]
fn test_merge_failure_keeps_defaults() {
    let result = OutputFormats::decode(
        MediaTypes::defaults(),
        &[
            overrides(
                r#"
[html]
baseName = "home"
                "#,
            ),
            overrides(
                r#"
[custom]
mediaType = "text/unknown"
                "#,
            ),
        ],
    );

    assert!(matches!(result, Err(FormatError::MediaTypeNotFound(ref t)) if t == "text/unknown"));
    assert_eq!(
        OutputFormats::defaults().get_by_name("html").unwrap().base_name,
        "index"
    );
    assert!(OutputFormats::defaults().get_by_name("custom").is_none());
}

#[test]
fn test_serialized_form() {
    let formats = OutputFormats::defaults();
    let value = serde_json::to_value(formats).unwrap();
    let list = value.as_array().unwrap();
    assert_eq!(list.len(), formats.len());

    let amp = list.iter().find(|v| v["name"] == "AMP").unwrap();
    assert_eq!(
        amp,
        &json!({
            "name": "AMP",
            "mediaType": "text/html",
            "path": "amp",
            "baseName": "index",
            "rel": "amphtml",
            "protocol": null,
            "isPlainText": false,
            "isHTML": true,
            "noUgly": false,
        })
    );

    // No structured media type leaks through
    for entry in list {
        assert!(entry["mediaType"].is_string());
    }
}
