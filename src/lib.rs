pub mod cli;
pub mod decoder;
mod error;
pub mod logging;
pub mod report;
pub mod validator;

pub use decoder::{GuessingDecoder, ImageDecoder, ValidationConfig};
pub use error::{Result, ValidateError};
pub use validator::{ImageValidator, Outcome, ValidationResult};
