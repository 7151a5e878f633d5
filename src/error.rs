use std::io;
use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("File is empty: {}", .0.display())]
    Empty(PathBuf),

    #[error("Decoder panicked: {0}")]
    Panicked(String),
}

impl ValidateError {
    /// True when the input simply holds no usable image, as opposed to the
    /// decode attempt itself failing.
    pub fn is_undecodable(&self) -> bool {
        match self {
            ValidateError::Io(e) => io_means_undecodable(e),
            ValidateError::Image(e) => match e {
                ImageError::Decoding(_) | ImageError::Unsupported(_) => true,
                ImageError::IoError(e) => io_means_undecodable(e),
                _ => false,
            },
            ValidateError::NotAFile(_) | ValidateError::Empty(_) => true,
            ValidateError::Panicked(_) => false,
        }
    }
}

fn io_means_undecodable(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound
            | io::ErrorKind::PermissionDenied
            | io::ErrorKind::UnexpectedEof
            | io::ErrorKind::InvalidData
            | io::ErrorKind::IsADirectory
    )
}

pub type Result<T> = std::result::Result<T, ValidateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use image::error::{
        DecodingError, ImageFormatHint, LimitError, LimitErrorKind, ParameterError,
        ParameterErrorKind, UnsupportedError, UnsupportedErrorKind,
    };

    #[test]
    fn test_missing_file_is_undecodable() {
        let err = ValidateError::from(io::Error::from(io::ErrorKind::NotFound));
        assert!(err.is_undecodable());
    }

    #[test]
    fn test_unreadable_file_is_undecodable() {
        let err = ValidateError::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(err.is_undecodable());
    }

    #[test]
    fn test_other_io_errors_are_faults() {
        let err = ValidateError::from(io::Error::from(io::ErrorKind::Interrupted));
        assert!(!err.is_undecodable());
    }

    #[test]
    fn test_truncated_image_is_undecodable() {
        let err = ValidateError::from(ImageError::IoError(io::Error::from(
            io::ErrorKind::UnexpectedEof,
        )));
        assert!(err.is_undecodable());
    }

    #[test]
    fn test_decoding_and_unsupported_are_undecodable() {
        let decoding = ImageError::Decoding(DecodingError::new(
            ImageFormatHint::Unknown,
            "bad marker",
        ));
        let unsupported = ImageError::Unsupported(UnsupportedError::from_format_and_kind(
            ImageFormatHint::Unknown,
            UnsupportedErrorKind::Format(ImageFormatHint::Unknown),
        ));

        assert!(ValidateError::from(decoding).is_undecodable());
        assert!(ValidateError::from(unsupported).is_undecodable());
    }

    #[test]
    fn test_limits_and_parameter_are_faults() {
        let limits = ImageError::Limits(LimitError::from_kind(LimitErrorKind::InsufficientMemory));
        let parameter = ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        ));

        assert!(!ValidateError::from(limits).is_undecodable());
        assert!(!ValidateError::from(parameter).is_undecodable());
    }

    #[test]
    fn test_panic_is_fault() {
        assert!(!ValidateError::Panicked("boom".into()).is_undecodable());
    }

    #[test]
    fn test_io_display_is_transparent() {
        let err = ValidateError::from(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "Permission denied",
        ));
        assert_eq!(err.to_string(), "Permission denied");
    }
}
