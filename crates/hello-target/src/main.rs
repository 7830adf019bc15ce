//! Hello-world debug target
//!
//! Point the debugger at this program to try breakpoints, stepping, and
//! variable inspection. It prints its PID, its arguments, and a short loop,
//! mirrors all of it into `$E2E_TEST_OUTPUT_DIR/e2e-test-output.log`, and
//! appends a verification block to that log for automated checks.

use std::{env, io, process};

use code_dbg_core::fixture::{self, OUTPUT_DIR_ENV};
use code_dbg_utils::{debug, init_logging, LoggingGuard};

fn main()
{
    // Diagnostics go to stderr; stdout carries the report. A broken
    // diagnostic log must not stop the report from being produced.
    let _logging: Option<LoggingGuard> = match init_logging() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };

    let argv: Vec<String> = env::args_os().map(|arg| arg.to_string_lossy().into_owned()).collect();
    let output_dir = env::var_os(OUTPUT_DIR_ENV);

    match fixture::run(io::stdout().lock(), argv, output_dir.as_deref()) {
        Ok(summary) => {
            debug!(
                log = %summary.log_path.display(),
                log_written = summary.log_written,
                sum = summary.sum,
                "Fixture finished"
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
