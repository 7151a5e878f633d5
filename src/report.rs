//! One-line JSON bodies written to stdout.
//!
//! Objects use `", "` and `": "` separators, e.g.
//! `{"is_valid": true, "reason": "✅ Image accepted for analysis"}`.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

pub const MISSING_PATH_MESSAGE: &str = "No image path provided";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub error: String,
}

impl ErrorReport {
    pub fn missing_path() -> Self {
        Self {
            error: MISSING_PATH_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

/// Serializes `value` on a single line and terminates it with `\n`.
pub fn write_line<W: Write, T: Serialize>(writer: &mut W, value: &T) -> io::Result<()> {
    let mut ser = Serializer::with_formatter(&mut *writer, SpacedFormatter);
    value.serialize(&mut ser).map_err(io::Error::from)?;
    writer.write_all(b"\n")?;
    writer.flush()
}
