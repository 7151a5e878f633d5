use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::report::{self, ErrorReport};
use crate::validator::ImageValidator;

/// `imgcheck <IMAGE_PATH>`. Every argument is taken verbatim: empty strings,
/// leading hyphens and `--help` are all paths. Only the first one is used.
#[derive(Parser, Debug)]
#[command(name = "imgcheck")]
#[command(about = "Check whether a file can be decoded as an image", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Path of the image to check, followed by ignored arguments
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub args: Vec<OsString>,
}

impl Cli {
    pub fn image_path(&self) -> Option<&Path> {
        self.args.first().map(Path::new)
    }
}

pub const EXIT_OK: u8 = 0;
pub const EXIT_MISSING_PATH: u8 = 1;

/// Writes exactly one JSON line to `out` and returns the exit status. The
/// verdict never affects the status; only a missing path does.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<u8> {
    let Some(path) = cli.image_path() else {
        report::write_line(out, &ErrorReport::missing_path())
            .context("Failed to write error report")?;
        return Ok(EXIT_MISSING_PATH);
    };

    if cli.args.len() > 1 {
        info!(count = cli.args.len() - 1, "ignoring extra arguments");
    }

    let result = ImageValidator::with_defaults().validate(path);
    info!(path = %path.display(), valid = result.is_valid, "validated");

    report::write_line(out, &result).context("Failed to write validation result")?;
    Ok(EXIT_OK)
}
