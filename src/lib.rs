pub mod config;
pub mod formats;
pub mod media;
pub mod observability;
