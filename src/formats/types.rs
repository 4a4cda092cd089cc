use bon::Builder;
use serde::Serialize;

use crate::media::MediaType;

/// An output format a page can be rendered to.
///
/// Serializes with camelCase keys; the media type is emitted as its
/// canonical type string.
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct OutputFormat {
    /// Identifying name, unique within a collection ignoring case.
    #[builder(into)]
    pub name: String,

    pub media_type: MediaType,

    /// Extra path segment that keeps this format apart from others sharing
    /// a media type, e.g. `amp`.
    #[builder(into)]
    pub path: Option<String>,

    /// File name without suffix.
    #[builder(into, default = String::from("index"))]
    pub base_name: String,

    /// Link relation used when linking to this format.
    #[builder(into, default = String::from("alternate"))]
    pub rel: String,

    /// URI scheme prefix, e.g. `webcal://`.
    #[builder(into)]
    pub protocol: Option<String>,

    #[builder(default)]
    pub is_plain_text: bool,

    #[builder(default)]
    #[serde(rename = "isHTML")]
    pub is_html: bool,

    /// Never use "ugly" (`name.suffix`) URLs for this format.
    #[builder(default)]
    pub no_ugly: bool,
}

impl OutputFormat {
    /// File name for this format, e.g. `index.html`.
    pub fn base_filename(&self) -> String {
        format!("{}.{}", self.base_name, self.media_type.suffix())
    }
}
