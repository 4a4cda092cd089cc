use super::models::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Output format names must not be empty")]
    EmptyFormatName,

    #[error("Output format '{name}' contains '.' and can never be matched from a file name")]
    DottedFormatName { name: String },

    #[error("Media type keys must not be empty")]
    EmptyMediaTypeKey,
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_output_formats(config)?;
    validate_media_types(config)?;
    Ok(())
}

/// Format names are matched against the dot-separated segments of template
/// file names, so they cannot be empty or contain dots.
fn validate_output_formats(config: &Config) -> Result<(), ValidationError> {
    for name in config.output_formats.keys() {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyFormatName);
        }

        if name.contains('.') {
            return Err(ValidationError::DottedFormatName { name: name.clone() });
        }
    }

    Ok(())
}

fn validate_media_types(config: &Config) -> Result<(), ValidationError> {
    if config.media_types.keys().any(|key| key.trim().is_empty()) {
        return Err(ValidationError::EmptyMediaTypeKey);
    }

    Ok(())
}
