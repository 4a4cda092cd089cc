//! Output formats
//!
//! An [`OutputFormat`] describes one kind of file a page can be written as:
//! its media type, base file name, link relation and a few rendering flags.
//! [`OutputFormats`] is the site's sorted collection of them.
//!
//! ## Key Components
//!
//! - [`OutputFormats::defaults`] - Built-in formats (HTML, AMP, RSS, JSON, ...)
//! - [`OutputFormats::decode`] - Merge configured overrides onto the built-ins
//! - [`OutputFormats::from_filename`] - Pick a format from a template name
//!
//! ## Example
//!
//! ```rust
//! use siteformats::formats::OutputFormats;
//!
//! let formats = OutputFormats::defaults();
//! let amp = formats.from_filename("single.amp.html").unwrap();
//! assert_eq!(amp.name, "AMP");
//! assert_eq!(amp.base_filename(), "index.html");
//! ```

pub mod builtin;
mod decode;
mod error;
mod registry;
mod types;

pub use decode::FormatOverrides;
pub use error::FormatError;
pub use registry::OutputFormats;
pub use types::OutputFormat;
