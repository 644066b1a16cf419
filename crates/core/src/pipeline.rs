//! The line-transformation pipeline.
//!
//! Each physical line of the input runs through skip, whitespace trimming,
//! reversal, and prefixing, in that fixed order. Retained lines are joined
//! by the platform line terminator into a single output blob.

use std::fs;

use itertools::Itertools;
use log::debug;

use crate::error::Result;
use crate::file_handling::{self, LINE_TERMINATOR};
use crate::options::{Options, ReverseMode, SkipParity, Spacing};

/// Reads the configured input file and produces the full transformed text.
///
/// The file precondition (existing regular file, empty or
/// terminator-terminated) is revalidated here so the pipeline is safe to
/// invoke standalone, without going through [`Options::parse`].
///
/// # Errors
///
/// Returns [`crate::error::Error::InvalidArguments`] if the file fails
/// validation, or [`crate::error::Error::Io`] if reading it fails.
pub fn adjust(options: &Options) -> Result<String> {
    file_handling::validate_input_file(&options.file_path)?;

    debug!("Adjusting `{}`", options.file_path.display());

    let contents = fs::read_to_string(&options.file_path)
        .map_err(|e| file_handling::input_io_error(&options.file_path, e))?;

    Ok(transform(options, &contents))
}

/// Transforms already-read input text.
///
/// `contents` must be empty or end with [`LINE_TERMINATOR`], as
/// [`file_handling::validate_input_file`] guarantees for input files. Each
/// retained line is appended to the output followed by one terminator, so
/// the result ends with a terminator iff it is nonempty.
pub fn transform(options: &Options, contents: &str) -> String {
    let prefix = options.prefix.as_deref().unwrap_or("");
    let mut output = String::with_capacity(contents.len());

    if contents.is_empty() {
        return output;
    }

    let body = contents.strip_suffix(LINE_TERMINATOR).unwrap_or(contents);

    for (index, line) in body.split(LINE_TERMINATOR).enumerate() {
        // Skipped lines still advance the 1-based line number.
        let number = index + 1;

        if should_skip(options, number, line) {
            continue;
        }

        let line = apply_spacing(options.spacing, line);
        let line = apply_reversal(options.reverse, &line);

        output.push_str(prefix);
        output.push_str(&line);
        output.push_str(LINE_TERMINATOR);
    }

    output
}

fn should_skip(options: &Options, number: usize, line: &str) -> bool {
    let parity_matches = match options.skip_parity {
        Some(SkipParity::Odd) => number % 2 == 1,
        Some(SkipParity::Even) => number % 2 == 0,
        None => false,
    };

    parity_matches || (options.remove_empty_lines && line.trim().is_empty())
}

fn apply_spacing(spacing: Option<Spacing>, line: &str) -> String {
    match spacing {
        None => line.to_string(),
        Some(Spacing::Leading) => line.trim_start().to_string(),
        Some(Spacing::Trailing) => line.trim_end().to_string(),
        Some(Spacing::All) => line.chars().filter(|c| !c.is_whitespace()).collect(),
    }
}

fn apply_reversal(reverse: Option<ReverseMode>, line: &str) -> String {
    match reverse {
        None => line.to_string(),
        Some(ReverseMode::Text) => line.chars().rev().collect(),
        Some(ReverseMode::Words) => reverse_words(line),
    }
}

/// Reverses the order of a line's maximal whitespace and non-whitespace
/// runs, keeping each run's content intact. The original inter-word
/// whitespace survives; only which position each run occupies changes.
fn reverse_words(line: &str) -> String {
    let runs = line.chars().chunk_by(|c| c.is_whitespace());

    let mut tokens: Vec<String> = Vec::new();
    for (_, run) in &runs {
        tokens.push(run.collect());
    }

    tokens.into_iter().rev().collect()
}
