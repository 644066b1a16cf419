//! adjusttxt command-line entry point.
//!
//! Thin glue over `adjusttxt-core`: collect the argument list, parse it into
//! an `Options`, run the pipeline, and print the transformed text to stdout.
//! Every failure, whatever its internal cause, collapses to the fixed usage
//! line on stderr and a failing exit code; nothing reaches stdout then.

use std::env;
use std::process::ExitCode;

use log::debug;

use adjusttxt_core::error::Result;
use adjusttxt_core::options::Options;
use adjusttxt_core::pipeline;

const USAGE: &str =
    "Usage: adjusttxt [ -s number | -w spacing | -x | -r target | -p prefix ] FILE";

fn execute() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = Options::parse(&args)?;

    let output = pipeline::adjust(&options)?;
    print!("{output}");

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Run failed: {e}");
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}
