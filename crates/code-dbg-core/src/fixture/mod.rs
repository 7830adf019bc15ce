//! # Debug Target Fixture
//!
//! The program an editor's debugger is pointed at during end-to-end tests.
//!
//! A run is strictly linear:
//!
//! 1. Resolve the log path from `E2E_TEST_OUTPUT_DIR`
//! 2. Open (truncate) the log file; if that fails, warn and carry on
//! 3. Print the report to the console, mirrored into the log
//! 4. Append the verification block to the log only
//! 5. Flush and close the log
//!
//! The log file, when it was opened, is always closed before [`run`] returns.

pub mod log_path;
pub mod report;
pub mod sink;
pub mod verification;

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

pub use log_path::{resolve_log_path, LOG_FILE_NAME, OUTPUT_DIR_ENV};
pub use report::Report;
pub use sink::Tee;
pub use verification::{Status, VerificationBlock};

use crate::error::CodeDbgResult;
use crate::types::ProcessId;

/// What a fixture run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary
{
    /// Where the log was (or would have been) written
    pub log_path: PathBuf,
    /// Whether the complete log, verification block included, reached the file
    pub log_written: bool,
    /// Final sum of the loop
    pub sum: i64,
}

/// Run the fixture for the current process
///
/// `argv` is the full argument vector (program name first) and `output_dir`
/// the value of `E2E_TEST_OUTPUT_DIR`, if any.
///
/// ## Errors
///
/// Returns [`crate::error::CodeDbgError::Io`] only when the console cannot be
/// written. Log file problems are reported on the console and in the logs,
/// never as errors.
pub fn run<C: Write>(console: C, argv: Vec<String>, output_dir: Option<&OsStr>) -> CodeDbgResult<RunSummary>
{
    run_as(ProcessId::current(), console, argv, output_dir)
}

/// [`run`] with an explicit process id
///
/// ## Errors
///
/// See [`run`].
pub fn run_as<C: Write>(
    pid: ProcessId,
    mut console: C,
    argv: Vec<String>,
    output_dir: Option<&OsStr>,
) -> CodeDbgResult<RunSummary>
{
    let log_path = resolve_log_path(output_dir);
    writeln!(console, "📝 Output Log File: {}", log_path.display())?;

    let file = match File::create(&log_path) {
        Ok(file) => {
            debug!(path = %log_path.display(), "Opened fixture log");
            Some(BufWriter::new(file))
        }
        Err(e) => {
            writeln!(console, "ERROR: Could not create log file at: {}", log_path.display())?;
            warn!(path = %log_path.display(), error = %e, "Continuing without file logging");
            None
        }
    };

    let report = Report::new(pid, argv);
    let mut tee = Tee::new(console, file);
    let sum = report.write_to(&mut tee)?;

    let mut trailer_failed = false;
    if let Some(file) = tee.file_mut() {
        if let Err(e) = report.verification(sum).write_to(file) {
            warn!(path = %log_path.display(), error = %e, "Failed to write verification block");
            trailer_failed = true;
        }
    }

    // Buffered write errors only surface here; a failed flush detaches the file
    tee.flush()?;
    let log_written = tee.has_file() && !trailer_failed;

    // Dropping the returned writers closes the log
    tee.finish()?;

    Ok(RunSummary { log_path, log_written, sum })
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_run_writes_report_and_trailer()
    {
        let dir = tempfile::tempdir().unwrap();
        let argv = vec!["app".to_string(), "one".to_string()];
        let mut console = Vec::new();

        let summary = run_as(ProcessId::from(99), &mut console, argv.clone(), Some(dir.path().as_os_str())).unwrap();

        assert_eq!(summary.sum, 30);
        assert!(summary.log_written);
        assert_eq!(summary.log_path, dir.path().join(LOG_FILE_NAME));

        let console = String::from_utf8(console).unwrap();
        let log = std::fs::read_to_string(&summary.log_path).unwrap();

        // The path banner is console-only, the trailer is log-only
        let banner = format!("📝 Output Log File: {}\n", summary.log_path.display());
        assert!(console.starts_with(&banner));
        assert!(!log.contains("Output Log File"));
        assert!(!console.contains(verification::HEADER));

        assert!(log.starts_with(&console[banner.len()..]));
        let block = VerificationBlock::parse(&log).unwrap();
        assert_eq!(block, VerificationBlock::success(argv, 30));
    }

    #[test]
    fn test_run_without_log_file()
    {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does").join("not").join("exist");
        let mut console = Vec::new();

        let summary =
            run_as(ProcessId::from(1), &mut console, vec!["app".to_string()], Some(missing.as_os_str())).unwrap();

        assert!(!summary.log_written);
        assert_eq!(summary.sum, 30);
        assert!(!summary.log_path.exists());

        let console = String::from_utf8(console).unwrap();
        assert!(console.contains(&format!("ERROR: Could not create log file at: {}", summary.log_path.display())));
        assert!(console.contains("Final Result: 30"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_run_with_full_disk()
    {
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink("/dev/full", dir.path().join(LOG_FILE_NAME)).unwrap();
        let argv = vec!["app".to_string(), "one".to_string()];
        let mut console = Vec::new();

        let summary = run_as(ProcessId::from(7), &mut console, argv.clone(), Some(dir.path().as_os_str())).unwrap();

        // The log opened fine, but nothing could be stored in it
        assert!(!summary.log_written);
        assert_eq!(summary.sum, 30);

        let mut expected = Vec::new();
        Report::new(ProcessId::from(7), argv).write_to(&mut expected).unwrap();
        let console = String::from_utf8(console).unwrap();
        let banner = format!("📝 Output Log File: {}\n", summary.log_path.display());
        assert_eq!(console, format!("{banner}{}", String::from_utf8(expected).unwrap()));
    }
}
