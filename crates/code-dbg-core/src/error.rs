//! # Error Types
//!
//! General error handling for code-dbg.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for code-dbg operations
///
/// ## Error Categories
///
/// 1. **Launch errors**: ExecutableNotFound, EditorNotFound, LaunchFailed
/// 2. **URL/payload errors**: InvalidUrl, PayloadEncoding, PayloadJson
/// 3. **Fixture errors**: Verification
/// 4. **I/O errors**: Io (console writes, log files)
#[derive(Error, Debug)]
pub enum CodeDbgError
{
    /// An absolute executable path was given but nothing exists there
    ///
    /// Relative paths are never checked; the editor resolves them against
    /// the working directory carried in the payload.
    #[error("Executable not found: {}", .0.display())]
    ExecutableNotFound(PathBuf),

    /// The editor's command-line launcher is not on `PATH`
    #[error("{command} executable not found in PATH")]
    EditorNotFound
    {
        /// Launcher that was looked up (`code` or `code-insiders`)
        command: String,
    },

    /// The editor launcher ran but reported failure
    #[error("Failed to launch VS Code: {0}")]
    LaunchFailed(String),

    /// A string that should have been a launch URL is not one
    #[error("Invalid launch URL: {0}")]
    InvalidUrl(String),

    /// The payload is not valid base64
    #[error("Invalid payload encoding: {0}")]
    PayloadEncoding(#[from] base64::DecodeError),

    /// The payload could not be serialized, or decoded JSON has the wrong shape
    #[error("Invalid payload JSON: {0}")]
    PayloadJson(#[from] serde_json::Error),

    /// A verification block is missing, incomplete, or inconsistent
    #[error("Malformed verification block: {0}")]
    Verification(String),

    /// I/O error (console writes, log files, spawning processes)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, CodeDbgError>`
///
/// ```rust
/// use code_dbg_core::error::CodeDbgResult;
/// fn foo() -> CodeDbgResult<()>
/// {
///     Ok(())
/// }
/// ```
pub type CodeDbgResult<T> = std::result::Result<T, CodeDbgError>;
