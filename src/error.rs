use thiserror::Error;

/// Errors returned by the palette extraction functions.
#[derive(Debug, Error)]
pub enum Error {
    /// The pixel source could not be decoded or read.
    #[error("pixel source unavailable: {0}")]
    SourceUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A raw pixel buffer doesn't hold exactly `width * height` RGBA pixels.
    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Every pixel was filtered out, or the image had no pixels to begin with.
    #[error("no pixels left to build a palette from")]
    EmptyPalette,

    /// A caller-supplied parameter was out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl Error {
    /// Wrap whatever error a [`crate::PixelSource`] ran into while acquiring its pixels.
    pub fn unavailable<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::SourceUnavailable(error.into())
    }
}

impl From<image::ImageError> for Error {
    fn from(error: image::ImageError) -> Self {
        Error::unavailable(error)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_keeps_the_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::unavailable(cause);

        assert_eq!(err.to_string(), "pixel source unavailable: denied");
        assert_eq!(std::error::Error::source(&err).map(|e| e.to_string()), Some("denied".into()));
    }

    #[test]
    fn image_errors_convert() {
        let cause = image::ImageError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));

        assert!(matches!(Error::from(cause), Error::SourceUnavailable(_)));
    }
}
