//! Option parsing for adjusttxt.
//!
//! The argument list is processed left to right. The final token is always
//! the input file path; every token before it must start one of the five
//! recognized options, each consuming a fixed number of parameter tokens.
//! Repeated options overwrite earlier occurrences, but the `-x`/`-w`
//! conflict is checked at each occurrence as it is seen: once one of the two
//! is active, setting the other fails, and nothing un-sets an option.

use std::path::PathBuf;

use log::debug;

use crate::error::{Error, Result};
use crate::file_handling;

/// Which 1-based line numbers to drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipParity {
    Even,
    Odd,
}

/// Whitespace removal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    Leading,
    Trailing,
    All,
}

/// Whole-line character reversal vs. word-order reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReverseMode {
    Words,
    Text,
}

/// Immutable configuration for one adjusttxt run, fully determined before
/// any line of the input is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub skip_parity: Option<SkipParity>,
    pub spacing: Option<Spacing>,
    pub remove_empty_lines: bool,
    pub reverse: Option<ReverseMode>,
    /// Never `Some("")`.
    pub prefix: Option<String>,
    pub file_path: PathBuf,
}

impl Options {
    /// Resolves an ordered argument list into a validated `Options`.
    ///
    /// The final token is taken as the input file path and validated through
    /// [`file_handling::validate_input_file`]. Every preceding token must be
    /// one of `-s`, `-w`, `-x`, `-r`, or `-p` with its parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] for any grammar or validation
    /// violation: an unknown option, an invalid option value, the `-x`/`-w`
    /// conflict, an empty `-p` value, a missing file token, or a file that
    /// is missing, not regular, or not terminator-terminated. I/O failures
    /// while checking the file tail surface as [`Error::Io`].
    pub fn parse(args: &[String]) -> Result<Self> {
        if args.is_empty() {
            return Err(Error::InvalidArguments);
        }

        let mut skip_parity = None;
        let mut spacing = None;
        let mut remove_empty_lines = false;
        let mut reverse = None;
        let mut prefix = None;
        let mut file_path = None;

        let last = args.len() - 1;
        let mut i = 0;

        while i < args.len() {
            // The last token is the file, even if it looks like an option.
            if i == last {
                let path = PathBuf::from(&args[i]);
                file_handling::validate_input_file(&path)?;
                file_path = Some(path);
                break;
            }

            // `i < last`, so every option parameter index below is in range.
            // An option whose parameter lands on the final slot consumes it,
            // leaving no file token, and the check below rejects the run.
            match args[i].as_str() {
                "-s" => {
                    skip_parity = Some(parse_skip_parity(&args[i + 1])?);
                    i += 2;
                }
                "-w" => {
                    if remove_empty_lines {
                        return Err(Error::InvalidArguments);
                    }
                    spacing = Some(parse_spacing(&args[i + 1])?);
                    i += 2;
                }
                "-x" => {
                    if spacing.is_some() {
                        return Err(Error::InvalidArguments);
                    }
                    remove_empty_lines = true;
                    i += 1;
                }
                "-r" => {
                    reverse = Some(parse_reverse_mode(&args[i + 1])?);
                    i += 2;
                }
                "-p" => {
                    // The parameter is taken verbatim, so `-p -x` sets the
                    // prefix to "-x".
                    let value = &args[i + 1];
                    if value.is_empty() {
                        return Err(Error::InvalidArguments);
                    }
                    prefix = Some(value.clone());
                    i += 2;
                }
                _ => return Err(Error::InvalidArguments),
            }
        }

        let options = Self {
            skip_parity,
            spacing,
            remove_empty_lines,
            reverse,
            prefix,
            file_path: file_path.ok_or(Error::InvalidArguments)?,
        };

        debug!("Parsed options: {options:?}");

        Ok(options)
    }
}

fn parse_skip_parity(value: &str) -> Result<SkipParity> {
    // 0 is even, 1 is odd; any other integer or non-integer token fails.
    match value.parse::<i64>() {
        Ok(0) => Ok(SkipParity::Even),
        Ok(1) => Ok(SkipParity::Odd),
        _ => Err(Error::InvalidArguments),
    }
}

fn parse_spacing(value: &str) -> Result<Spacing> {
    match value {
        "leading" => Ok(Spacing::Leading),
        "trailing" => Ok(Spacing::Trailing),
        "all" => Ok(Spacing::All),
        _ => Err(Error::InvalidArguments),
    }
}

fn parse_reverse_mode(value: &str) -> Result<ReverseMode> {
    match value {
        "words" => Ok(ReverseMode::Words),
        "text" => Ok(ReverseMode::Text),
        _ => Err(Error::InvalidArguments),
    }
}
