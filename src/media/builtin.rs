//! Built-in media types referenced by the default output formats.

use mime::Mime;

use super::types::MediaType;

fn known(media_type: &str) -> Mime {
    media_type.parse().expect("built-in media type is valid")
}

pub fn calendar() -> MediaType {
    MediaType::new(known("text/calendar"), ["ics"])
}

pub fn css() -> MediaType {
    MediaType::new(mime::TEXT_CSS, ["css"])
}

pub fn csv() -> MediaType {
    MediaType::new(mime::TEXT_CSV, ["csv"])
}

pub fn html() -> MediaType {
    MediaType::new(mime::TEXT_HTML, ["html"])
}

pub fn javascript() -> MediaType {
    MediaType::new(mime::APPLICATION_JAVASCRIPT, ["js"])
}

pub fn json() -> MediaType {
    MediaType::new(mime::APPLICATION_JSON, ["json"])
}

pub fn rss() -> MediaType {
    MediaType::new(known("application/rss+xml"), ["xml"])
}

pub fn xml() -> MediaType {
    MediaType::new(known("application/xml"), ["xml"])
}

pub fn svg() -> MediaType {
    MediaType::new(mime::IMAGE_SVG, ["svg"])
}

pub fn text() -> MediaType {
    MediaType::new(mime::TEXT_PLAIN, ["txt"])
}

/// Stand-in for output formats configured without a media type. Has no
/// suffix and is not part of [`all`].
pub fn octet_stream() -> MediaType {
    MediaType::new(mime::APPLICATION_OCTET_STREAM, Vec::<String>::new())
}

/// Every built-in, in no particular order.
pub fn all() -> Vec<MediaType> {
    vec![
        calendar(),
        css(),
        csv(),
        html(),
        javascript(),
        json(),
        rss(),
        xml(),
        svg(),
        text(),
    ]
}
