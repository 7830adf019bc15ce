//! Where the fixture writes its log.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Environment variable naming the directory for the log file
pub const OUTPUT_DIR_ENV: &str = "E2E_TEST_OUTPUT_DIR";

/// File name of the log, inside the output directory
pub const LOG_FILE_NAME: &str = "e2e-test-output.log";

/// Build the log file path from the (optional) output directory
///
/// An unset or empty directory means "the working directory", so the bare
/// file name is returned.
///
/// ```rust
/// use std::ffi::OsStr;
/// use std::path::PathBuf;
/// use code_dbg_core::fixture::log_path::resolve_log_path;
///
/// assert_eq!(resolve_log_path(None), PathBuf::from("e2e-test-output.log"));
/// assert_eq!(resolve_log_path(Some(OsStr::new(""))), PathBuf::from("e2e-test-output.log"));
/// assert_eq!(
///     resolve_log_path(Some(OsStr::new("out"))),
///     PathBuf::from("out").join("e2e-test-output.log")
/// );
/// ```
#[must_use]
pub fn resolve_log_path(output_dir: Option<&OsStr>) -> PathBuf
{
    match output_dir {
        Some(dir) if !dir.is_empty() => Path::new(dir).join(LOG_FILE_NAME),
        _ => PathBuf::from(LOG_FILE_NAME),
    }
}
