//! Adjusttxt Core Library
//!
//! This crate provides the core functionality for adjusttxt, a tool that
//! reads a text file and prints a transformed copy to standard output
//! according to a small set of composable line-level edits.
//!
//! # Key Features
//!
//! - **Option Parsing**: Resolve a flat argument list into a validated,
//!   immutable [`options::Options`] value
//! - **Line Pipeline**: Apply skip, whitespace trimming, reversal, and
//!   prefixing to each line, in a fixed order
//! - **Input Validation**: Require an existing regular file that is empty or
//!   ends with the platform line terminator
//! - **Programmatic API**: Stage options on an [`adjuster::Adjuster`] and run
//!   them without going through the argument grammar
//! - **Error Handling**: A single uniform failure kind for invalid arguments,
//!   plus structured I/O errors
//!
//! # Examples
//!
//! Parsing arguments and producing the transformed text:
//!
//! ```no_run
//! use adjusttxt_core::options::Options;
//! use adjusttxt_core::pipeline;
//!
//! let args: Vec<String> = ["-w", "all", "input.txt"]
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! let options = Options::parse(&args)?;
//! print!("{}", pipeline::adjust(&options)?);
//! # Ok::<(), adjusttxt_core::error::Error>(())
//! ```

pub mod adjuster;
pub mod error;
pub mod file_handling;
pub mod options;
pub mod pipeline;
