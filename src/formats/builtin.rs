//! Output formats available without any configuration.

use super::types::OutputFormat;
use crate::media::builtin as media;

pub fn amp() -> OutputFormat {
    OutputFormat::builder()
        .name("AMP")
        .media_type(media::html())
        .path("amp")
        .rel("amphtml")
        .is_html(true)
        .build()
}

pub fn calendar() -> OutputFormat {
    OutputFormat::builder()
        .name("Calendar")
        .media_type(media::calendar())
        .protocol("webcal://")
        .is_plain_text(true)
        .build()
}

pub fn css() -> OutputFormat {
    OutputFormat::builder()
        .name("CSS")
        .media_type(media::css())
        .base_name("styles")
        .rel("stylesheet")
        .is_plain_text(true)
        .build()
}

pub fn csv() -> OutputFormat {
    OutputFormat::builder()
        .name("CSV")
        .media_type(media::csv())
        .is_plain_text(true)
        .build()
}

pub fn html() -> OutputFormat {
    OutputFormat::builder()
        .name("HTML")
        .media_type(media::html())
        .rel("canonical")
        .is_html(true)
        .build()
}

pub fn json() -> OutputFormat {
    OutputFormat::builder()
        .name("JSON")
        .media_type(media::json())
        .is_plain_text(true)
        .build()
}

pub fn rss() -> OutputFormat {
    OutputFormat::builder()
        .name("RSS")
        .media_type(media::rss())
        .no_ugly(true)
        .build()
}

/// Every built-in, unsorted.
pub fn all() -> Vec<OutputFormat> {
    vec![
        amp(),
        calendar(),
        css(),
        csv(),
        html(),
        json(),
        rss(),
    ]
}
