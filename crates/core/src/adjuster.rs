//! Programmatic interface to the pipeline.
//!
//! [`Adjuster`] stages options through setters and validates the whole
//! configuration when [`Adjuster::adjust`] runs, unlike the CLI parser,
//! which rejects conflicts at the token where they appear. This is the
//! entry point for embedding adjusttxt without an argument list.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::options::{Options, ReverseMode, SkipParity, Spacing};
use crate::pipeline;

/// Staged, mutable adjusttxt configuration.
///
/// # Examples
///
/// ```no_run
/// use adjusttxt_core::adjuster::Adjuster;
/// use adjusttxt_core::options::Spacing;
///
/// let mut adjuster = Adjuster::new();
/// adjuster.set_file_path("input.txt");
/// adjuster.set_spacing(Spacing::All);
/// print!("{}", adjuster.adjust()?);
/// # Ok::<(), adjusttxt_core::error::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Adjuster {
    file_path: Option<PathBuf>,
    skip_parity: Option<SkipParity>,
    spacing: Option<Spacing>,
    remove_empty_lines: bool,
    reverse: Option<ReverseMode>,
    prefix: Option<String>,
}

impl Adjuster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the adjuster to its initial state, for reuse.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_file_path(&mut self, file_path: impl Into<PathBuf>) {
        self.file_path = Some(file_path.into());
    }

    pub fn set_skip_parity(&mut self, skip_parity: SkipParity) {
        self.skip_parity = Some(skip_parity);
    }

    pub fn set_spacing(&mut self, spacing: Spacing) {
        self.spacing = Some(spacing);
    }

    pub fn set_remove_empty_lines(&mut self, remove_empty_lines: bool) {
        self.remove_empty_lines = remove_empty_lines;
    }

    pub fn set_reverse(&mut self, reverse: ReverseMode) {
        self.reverse = Some(reverse);
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = Some(prefix.into());
    }

    /// Validates the staged configuration and runs the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] if no file path was staged, if
    /// empty-line removal and a spacing mode are both active, if the staged
    /// prefix is empty, or if the file fails validation; [`Error::Io`] if
    /// reading the file fails.
    pub fn adjust(&self) -> Result<String> {
        let file_path = self.file_path.clone().ok_or(Error::InvalidArguments)?;

        if self.remove_empty_lines && self.spacing.is_some() {
            return Err(Error::InvalidArguments);
        }

        if let Some(prefix) = &self.prefix {
            if prefix.is_empty() {
                return Err(Error::InvalidArguments);
            }
        }

        let options = Options {
            skip_parity: self.skip_parity,
            spacing: self.spacing,
            remove_empty_lines: self.remove_empty_lines,
            reverse: self.reverse,
            prefix: self.prefix.clone(),
            file_path,
        };

        pipeline::adjust(&options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_handling::LINE_TERMINATOR;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn input_file(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            write!(file, "{line}{LINE_TERMINATOR}").unwrap();
        }
        file
    }

    #[test]
    fn test_adjust_without_file_path() {
        let adjuster = Adjuster::new();
        assert!(matches!(adjuster.adjust(), Err(Error::InvalidArguments)));
    }

    #[test]
    fn test_adjust_plain_copy() {
        let file = input_file(&["one", "two"]);

        let mut adjuster = Adjuster::new();
        adjuster.set_file_path(file.path());

        let expected = format!("one{LINE_TERMINATOR}two{LINE_TERMINATOR}");
        assert_eq!(adjuster.adjust().unwrap(), expected);
    }

    #[test]
    fn test_conflict_detected_at_run_time() {
        // Staging both is allowed; the conflict only surfaces on adjust().
        let file = input_file(&["one"]);

        let mut adjuster = Adjuster::new();
        adjuster.set_file_path(file.path());
        adjuster.set_remove_empty_lines(true);
        adjuster.set_spacing(Spacing::All);

        assert!(matches!(adjuster.adjust(), Err(Error::InvalidArguments)));
    }

    #[test]
    fn test_empty_prefix_rejected_at_run_time() {
        let file = input_file(&["one"]);

        let mut adjuster = Adjuster::new();
        adjuster.set_file_path(file.path());
        adjuster.set_prefix("");

        assert!(matches!(adjuster.adjust(), Err(Error::InvalidArguments)));
    }

    #[test]
    fn test_reset_clears_staged_options() {
        let file = input_file(&["  one  "]);

        let mut adjuster = Adjuster::new();
        adjuster.set_file_path(file.path());
        adjuster.set_spacing(Spacing::All);
        adjuster.reset();
        adjuster.set_file_path(file.path());

        let expected = format!("  one  {LINE_TERMINATOR}");
        assert_eq!(adjuster.adjust().unwrap(), expected);
    }

    #[test]
    fn test_combined_options() {
        let file = input_file(&["skip me", "  keep me  "]);

        let mut adjuster = Adjuster::new();
        adjuster.set_file_path(file.path());
        adjuster.set_skip_parity(SkipParity::Odd);
        adjuster.set_spacing(Spacing::Leading);
        adjuster.set_reverse(ReverseMode::Words);
        adjuster.set_prefix("> ");

        let expected = format!(">   me keep{LINE_TERMINATOR}");
        assert_eq!(adjuster.adjust().unwrap(), expected);
    }
}
