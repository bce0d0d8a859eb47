//! Error types for playqr operations

use thiserror::Error;

/// Result type alias using playqr's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for playqr operations
#[derive(Error, Debug)]
pub enum Error {
    /// Size argument is not a positive integer
    #[error("Invalid size '{0}': expected a positive number of pixels")]
    InvalidSize(String),

    /// Positional arguments outside the accepted grammar
    #[error("Usage error: {0}")]
    Usage(String),

    /// QR code encoding failed (usually the payload is too long)
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// QR code decoding failed
    #[error("Failed to decode QR code: {0}")]
    QrDecode(String),

    /// No QR code found in image
    #[error("No QR code found in image")]
    NoQrCodeFound,

    /// Written image does not decode to the intended URL
    #[error("Verification failed: expected '{expected}', decoded '{actual}'")]
    VerificationMismatch {
        /// URL that was encoded
        expected: String,
        /// Payload read back from the written file
        actual: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => Error::Io(io),
            other => Error::Image(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_io_errors_surface_as_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = Error::from(image::ImageError::IoError(io));
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn invalid_size_message_names_the_value() {
        let err = Error::InvalidSize("big".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid size 'big': expected a positive number of pixels"
        );
    }
}
