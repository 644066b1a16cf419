//! Input file validation for adjusttxt.
//!
//! The input file must exist, be a regular file, and either be empty or end
//! with the platform line terminator. The terminator check is a read-only
//! tail read; the file is never modified.

use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::{Error, Result};

/// Line delimiter of both the input format and the produced output.
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
/// Line delimiter of both the input format and the produced output.
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

pub(crate) fn input_io_error(path: &Path, original: std::io::Error) -> Error {
    Error::io_error("input".to_string(), path.display().to_string(), original)
}

/// Validates that `path` names an existing regular file that is empty or
/// ends with [`LINE_TERMINATOR`].
///
/// # Errors
///
/// Returns [`Error::InvalidArguments`] if the file is missing, not a regular
/// file, or not terminator-terminated, and [`Error::Io`] if the tail read
/// itself fails.
pub fn validate_input_file(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|_| Error::InvalidArguments)?;

    if !metadata.is_file() {
        return Err(Error::InvalidArguments);
    }

    if ends_with_line_terminator(path, metadata.len())? {
        Ok(())
    } else {
        Err(Error::InvalidArguments)
    }
}

fn ends_with_line_terminator(path: &Path, length: u64) -> Result<bool> {
    let terminator = LINE_TERMINATOR.as_bytes();

    // An empty file has no lines to terminate.
    if length == 0 {
        return Ok(true);
    }

    if length < terminator.len() as u64 {
        return Ok(false);
    }

    let mut file = File::open(path).map_err(|e| input_io_error(path, e))?;
    file.seek(SeekFrom::End(-(terminator.len() as i64)))
        .map_err(|e| input_io_error(path, e))?;

    let mut tail = vec![0u8; terminator.len()];
    file.read_exact(&mut tail)
        .map_err(|e| input_io_error(path, e))?;

    Ok(tail == terminator)
}
