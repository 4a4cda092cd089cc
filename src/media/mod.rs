//! Media types known to the site
//!
//! Output formats refer to a [`MediaType`] for their MIME type and file
//! suffix. [`MediaTypes`] is the registry they are resolved against when
//! configuration names a media type by its type string.
//!
//! ## Example
//!
//! ```rust
//! use siteformats::media::MediaTypes;
//!
//! let types = MediaTypes::defaults();
//! let rss = types.get_by_type("application/rss+xml").unwrap();
//! assert_eq!(rss.suffix(), "xml");
//! ```

pub mod builtin;
mod registry;
mod types;

pub use registry::{MediaTypeOverrides, MediaTypes};
pub use types::{MediaType, MediaTypeError};
