//! Error types for palette extraction and artifact generation

use thiserror::Error;

/// Result type alias for palette_extract operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Every failure the pipeline can surface, one variant per stage.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Image source could not be read or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid cluster count or degenerate input
    #[error("Processing error: {message}")]
    Processing { message: String },

    /// Malformed hex color string
    #[error("Invalid hex color {input:?}: {reason}")]
    Format { input: String, reason: String },

    /// Artifact could not be rendered, encoded or written
    #[error("Failed to render artifact: {message}")]
    Render {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration file could not be read, parsed or written
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PaletteError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a processing error
    pub fn processing(message: impl Into<String>) -> Self {
        Self::Processing {
            message: message.into(),
        }
    }

    /// Create a hex format error for `input`
    pub fn format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a render error with context
    pub fn render<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Render {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Name of the pipeline stage that failed
    pub fn stage(&self) -> &'static str {
        match self {
            PaletteError::ImageLoad { .. } => "load",
            PaletteError::Processing { .. } => "extract",
            PaletteError::Format { .. } => "decode",
            PaletteError::Render { .. } => "render",
            PaletteError::Config { .. } => "config",
        }
    }

    /// Get user-friendly error description for display by a front end
    pub fn user_message(&self) -> String {
        match self {
            PaletteError::ImageLoad { .. } => {
                "Could not read the image. Please upload a PNG, JPEG or GIF file.".to_string()
            }
            PaletteError::Processing { message } => {
                format!("Could not extract a palette from this image: {message}")
            }
            PaletteError::Format { input, .. } => {
                format!("\"{input}\" is not a valid hex color.")
            }
            PaletteError::Render { .. } => {
                "The palette was extracted but its files could not be saved.".to_string()
            }
            PaletteError::Config { .. } => "The configuration file is invalid.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(PaletteError::processing("k = 0").stage(), "extract");
        assert_eq!(PaletteError::format("#zz", "not hex").stage(), "decode");

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        assert_eq!(PaletteError::render("color_card.png", io).stage(), "render");
    }

    #[test]
    fn test_display_carries_detail() {
        let err = PaletteError::format("#12345", "length 5 is not a multiple of 3");
        let text = err.to_string();
        assert!(text.contains("#12345"));
        assert!(text.contains("multiple of 3"));
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.png");
        let err = PaletteError::image_load("cannot open missing.png", io);
        assert!(err.source().is_some());
        assert!(err.user_message().contains("image"));
    }
}
