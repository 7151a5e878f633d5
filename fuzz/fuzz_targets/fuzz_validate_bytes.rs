#![no_main]

use imgcheck::{ImageValidator, ValidationConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let validator = ImageValidator::new(ValidationConfig::new().with_max_alloc_mb(64));
    let result = validator.validate_bytes(data);
    assert!(!result.reason.is_empty());
});
