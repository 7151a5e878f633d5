//! The accept/reject decision.
//!
//! Only decodability is checked. Content, dimensions and colours never
//! lead to a rejection, and a fault during the decode attempt is reported as
//! an accepted result carrying a warning.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use image::{DynamicImage, GenericImageView};
use serde::Serialize;
use tracing::{debug, warn};

use crate::decoder::{GuessingDecoder, ImageDecoder, ValidationConfig};
use crate::error::{Result, ValidateError};

pub const ACCEPTED_REASON: &str = "✅ Image accepted for analysis";
pub const REJECTED_REASON: &str = "Unable to read image file. Please upload a valid JPG or PNG.";
pub const SKIPPED_PREFIX: &str = "⚠️ Validation skipped: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub reason: String,
    #[serde(skip)]
    pub outcome: Outcome,
}

impl ValidationResult {
    pub fn accepted() -> Self {
        Self {
            is_valid: true,
            reason: ACCEPTED_REASON.to_string(),
            outcome: Outcome::Accepted,
        }
    }

    pub fn rejected() -> Self {
        Self {
            is_valid: false,
            reason: REJECTED_REASON.to_string(),
            outcome: Outcome::Rejected,
        }
    }

    pub fn skipped(fault: impl std::fmt::Display) -> Self {
        Self {
            is_valid: true,
            reason: format!("{SKIPPED_PREFIX}{fault}"),
            outcome: Outcome::Skipped,
        }
    }
}

pub struct ImageValidator<D = GuessingDecoder> {
    decoder: D,
}

impl ImageValidator<GuessingDecoder> {
    pub fn new(config: ValidationConfig) -> Self {
        Self::with_decoder(GuessingDecoder::new(config))
    }

    pub fn with_defaults() -> Self {
        Self::new(ValidationConfig::default())
    }
}

impl<D: ImageDecoder> ImageValidator<D> {
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    pub fn validate(&self, path: impl AsRef<Path>) -> ValidationResult {
        let path = path.as_ref();
        debug!(path = %path.display(), "attempting decode");
        let attempt = catch_decode(|| self.decoder.decode_path(path));
        judge(attempt)
    }

    pub fn validate_bytes(&self, data: &[u8]) -> ValidationResult {
        debug!(len = data.len(), "attempting in-memory decode");
        let attempt = catch_decode(|| self.decoder.decode_bytes(data));
        judge(attempt)
    }
}

/// Every way the decode can go wrong, unwinding included, comes back as a
/// `ValidateError`.
fn catch_decode<F>(decode: F) -> Result<DynamicImage>
where
    F: FnOnce() -> Result<DynamicImage>,
{
    panic::catch_unwind(AssertUnwindSafe(decode))
        .unwrap_or_else(|payload| Err(ValidateError::Panicked(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn judge(attempt: Result<DynamicImage>) -> ValidationResult {
    match attempt {
        Ok(img) => {
            let (width, height) = img.dimensions();
            debug!(width, height, "decoded");
            ValidationResult::accepted()
        }
        Err(e) if e.is_undecodable() => {
            debug!(error = %e, "no usable image");
            ValidationResult::rejected()
        }
        Err(e) => {
            warn!(error = %e, "decode fault, accepting without validation");
            ValidationResult::skipped(e)
        }
    }
}
