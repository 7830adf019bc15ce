//! # Launch Payload
//!
//! The description of "what to debug" that travels inside the launch URL:
//! an executable, its arguments, and the working directory to run it in.
//!
//! On the wire the payload is a JSON object with exactly the keys `exe`,
//! `args` and `cwd`, base64 encoded (standard alphabet, padded) so it can sit
//! in a URL query string.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use code_dbg_utils::paths;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CodeDbgError, CodeDbgResult};

/// Executable, arguments, and working directory for one debug session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchPayload
{
    /// Executable path; absolute paths are normalized, relative ones kept verbatim
    pub exe: String,
    /// Arguments passed to the executable, in order
    pub args: Vec<String>,
    /// Absolute working directory
    pub cwd: String,
}

impl LaunchPayload
{
    /// Build a payload relative to the current working directory
    ///
    /// See [`LaunchPayload::resolve_in`] for the rules.
    ///
    /// ## Errors
    ///
    /// - [`CodeDbgError::Io`] if the current directory cannot be read
    /// - [`CodeDbgError::ExecutableNotFound`] for a missing absolute executable
    pub fn resolve(exe: &str, args: Vec<String>, cwd: Option<&Path>) -> CodeDbgResult<Self>
    {
        let base = std::env::current_dir()?;
        Self::resolve_in(exe, args, cwd, &base)
    }

    /// Build a payload, resolving relative paths against `base`
    ///
    /// - `cwd` defaults to `base`; either way it is made absolute and normalized.
    /// - An absolute `exe` is normalized and must exist.
    /// - A relative `exe` is left untouched so the editor can resolve it
    ///   against `cwd` (or `PATH`) the same way a shell would.
    ///
    /// ## Errors
    ///
    /// Returns [`CodeDbgError::ExecutableNotFound`] if `exe` is absolute and
    /// nothing exists at the normalized path.
    pub fn resolve_in(exe: &str, args: Vec<String>, cwd: Option<&Path>, base: &Path) -> CodeDbgResult<Self>
    {
        let cwd = paths::absolutize(cwd.unwrap_or(base), base);

        let exe_path = Path::new(exe);
        let exe = if exe_path.is_absolute() {
            let normalized = paths::normalize(exe_path);
            if !normalized.exists() {
                return Err(CodeDbgError::ExecutableNotFound(normalized));
            }
            normalized.to_string_lossy().into_owned()
        } else {
            exe.to_string()
        };

        debug!(exe = %exe, cwd = %cwd.display(), argc = args.len(), "Resolved launch payload");

        Ok(LaunchPayload {
            exe,
            args,
            cwd: cwd.to_string_lossy().into_owned(),
        })
    }

    /// Serialize to JSON and base64-encode
    ///
    /// ## Errors
    ///
    /// Returns [`CodeDbgError::PayloadJson`] if serialization fails.
    pub fn encode(&self) -> CodeDbgResult<String>
    {
        let json = serde_json::to_vec(self)?;
        Ok(BASE64.encode(json))
    }

    /// Reverse [`LaunchPayload::encode`]
    ///
    /// ## Errors
    ///
    /// - [`CodeDbgError::PayloadEncoding`] if `encoded` is not base64
    /// - [`CodeDbgError::PayloadJson`] if the bytes are not a payload object
    pub fn decode(encoded: &str) -> CodeDbgResult<Self>
    {
        let json = BASE64.decode(encoded.trim())?;
        Ok(serde_json::from_slice(&json)?)
    }

    /// File name of the executable, for user-facing messages
    #[must_use]
    pub fn exe_name(&self) -> String
    {
        Path::new(&self.exe)
            .file_name()
            .map_or_else(|| self.exe.clone(), |name| name.to_string_lossy().into_owned())
    }
}
