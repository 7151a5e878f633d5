use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageReader, Limits};

use crate::error::{Result, ValidateError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    pub max_alloc: Option<u64>,
}

impl ValidationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_dimensions(mut self, width: u32, height: u32) -> Self {
        self.max_width = Some(width);
        self.max_height = Some(height);
        self
    }

    pub fn with_max_alloc_mb(mut self, size_mb: u64) -> Self {
        self.max_alloc = Some(size_mb.saturating_mul(1024 * 1024));
        self
    }

    /// Decoder limits, starting from the `image` crate defaults.
    pub fn limits(&self) -> Limits {
        let mut limits = Limits::default();
        if let Some(width) = self.max_width {
            limits.max_image_width = Some(width);
        }
        if let Some(height) = self.max_height {
            limits.max_image_height = Some(height);
        }
        if let Some(alloc) = self.max_alloc {
            limits.max_alloc = Some(alloc);
        }
        limits
    }
}

/// Turns a file or a byte buffer into pixels.
pub trait ImageDecoder {
    fn decode_path(&self, path: &Path) -> Result<DynamicImage>;
    fn decode_bytes(&self, data: &[u8]) -> Result<DynamicImage>;
}

/// Sniffs the format from the content, falling back to the file extension.
#[derive(Debug, Clone, Default)]
pub struct GuessingDecoder {
    config: ValidationConfig,
}

impl GuessingDecoder {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }
}

impl ImageDecoder for GuessingDecoder {
    fn decode_path(&self, path: &Path) -> Result<DynamicImage> {
        let meta = fs::metadata(path)?;
        if !meta.is_file() {
            return Err(ValidateError::NotAFile(path.to_path_buf()));
        }
        if meta.len() == 0 {
            return Err(ValidateError::Empty(path.to_path_buf()));
        }

        let mut reader = ImageReader::open(path)?.with_guessed_format()?;
        reader.limits(self.config.limits());
        Ok(reader.decode()?)
    }

    fn decode_bytes(&self, data: &[u8]) -> Result<DynamicImage> {
        let mut reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
        reader.limits(self.config.limits());
        Ok(reader.decode()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_match_image_crate() {
        let config = ValidationConfig::default();
        assert_eq!(config.max_width, None);
        assert_eq!(config.max_alloc, None);
        assert_eq!(config.limits(), Limits::default());
    }

    #[test]
    fn test_config_builder() {
        let config = ValidationConfig::new()
            .with_max_dimensions(4000, 3000)
            .with_max_alloc_mb(64);

        let limits = config.limits();
        assert_eq!(limits.max_image_width, Some(4000));
        assert_eq!(limits.max_image_height, Some(3000));
        assert_eq!(limits.max_alloc, Some(64 * 1024 * 1024));
    }

    #[test]
    fn test_decode_bytes_rejects_garbage() {
        let decoder = GuessingDecoder::default();
        let err = decoder.decode_bytes(b"definitely not pixels").unwrap_err();
        assert!(err.is_undecodable());
    }

    #[test]
    fn test_decode_path_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        fs::write(&path, b"").unwrap();

        let err = GuessingDecoder::default().decode_path(&path).unwrap_err();
        assert!(matches!(err, ValidateError::Empty(_)));
    }

    #[test]
    fn test_decode_path_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = GuessingDecoder::default().decode_path(dir.path()).unwrap_err();
        assert!(matches!(err, ValidateError::NotAFile(_)));
    }
}
