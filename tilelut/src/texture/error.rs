//! Error types for lookup texture generation.

use std::fmt;

use crate::coord::CoordError;

/// Errors that can occur while generating or writing a lookup texture.
#[derive(Debug)]
pub enum TextureError {
    /// Requested raster dimensions are invalid.
    InvalidDimensions {
        width: u32,
        height: u32,
        reason: String,
    },
    /// Coordinate conversion failed for a reason other than the expected
    /// out-of-range latitude (which maps to a black pixel, not an error).
    Projection(CoordError),
    /// PNG encoding or decoding failed.
    Encoding(image::ImageError),
    /// Filesystem I/O failed.
    Io(std::io::Error),
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid dimensions {}×{}: {}", width, height, reason)
            }
            TextureError::Projection(e) => write!(f, "Projection failed: {}", e),
            TextureError::Encoding(e) => write!(f, "Image encoding failed: {}", e),
            TextureError::Io(e) => write!(f, "I/O failed: {}", e),
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextureError::InvalidDimensions { .. } => None,
            TextureError::Projection(e) => Some(e),
            TextureError::Encoding(e) => Some(e),
            TextureError::Io(e) => Some(e),
        }
    }
}

impl From<CoordError> for TextureError {
    fn from(err: CoordError) -> Self {
        TextureError::Projection(err)
    }
}

impl From<image::ImageError> for TextureError {
    fn from(err: image::ImageError) -> Self {
        TextureError::Encoding(err)
    }
}

impl From<std::io::Error> for TextureError {
    fn from(err: std::io::Error) -> Self {
        TextureError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_error_display_invalid_dimensions() {
        let err = TextureError::InvalidDimensions {
            width: 0,
            height: 1024,
            reason: "width must be non-zero".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions 0×1024: width must be non-zero"
        );
    }

    #[test]
    fn test_texture_error_display_projection() {
        let err = TextureError::Projection(CoordError::ZoomOutOfRange(19));
        assert!(err.to_string().contains("Projection failed"));
        assert!(err.to_string().contains("19"));
    }

    #[test]
    fn test_texture_error_from_coord_error() {
        let err: TextureError = CoordError::ZoomOutOfRange(19).into();
        assert!(matches!(err, TextureError::Projection(_)));
    }

    #[test]
    fn test_texture_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such dir");
        let err: TextureError = io_err.into();
        assert!(matches!(err, TextureError::Io(_)));
        assert!(err.to_string().contains("no such dir"));
    }
}
