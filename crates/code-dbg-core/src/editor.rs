//! # Editor Openers
//!
//! Handing a [`LaunchUrl`] to the editor.
//!
//! Two strategies exist, selected per platform by [`create_opener`]:
//!
//! - **macOS / Linux**: run the editor's own launcher, `code --open-url <url>`
//!   (`code-insiders` for the Insiders channel).
//! - **Windows**: give the URL to the shell's protocol handler, which routes
//!   `vscode://` / `vscode-insiders://` to the registered editor.
//!
//! The [`UrlOpener`] trait is the seam; tests plug in their own opener.

use std::process::Command;

use tracing::{debug, info};

use crate::error::{CodeDbgError, CodeDbgResult};
use crate::launch_url::LaunchUrl;
use crate::types::EditorChannel;

/// Something that can deliver a launch URL to an editor
pub trait UrlOpener
{
    /// Short name for log messages
    fn name(&self) -> &str;

    /// Deliver `url`
    ///
    /// ## Errors
    ///
    /// - [`CodeDbgError::EditorNotFound`] if the editor cannot be located
    /// - [`CodeDbgError::LaunchFailed`] if it was found but refused the URL
    /// - [`CodeDbgError::Io`] if the helper process could not be spawned
    fn open(&self, url: &LaunchUrl) -> CodeDbgResult<()>;
}

/// Opens URLs through the editor's command-line launcher
#[derive(Debug, Clone)]
pub struct EditorCli
{
    command: String,
}

impl EditorCli
{
    /// Use the launcher that belongs to `channel`
    #[must_use]
    pub fn new(channel: EditorChannel) -> Self
    {
        Self::with_command(channel.command())
    }

    /// Use an explicit launcher command (name on `PATH` or a path)
    #[must_use]
    pub fn with_command(command: impl Into<String>) -> Self
    {
        EditorCli {
            command: command.into(),
        }
    }
}

impl UrlOpener for EditorCli
{
    fn name(&self) -> &str
    {
        &self.command
    }

    fn open(&self, url: &LaunchUrl) -> CodeDbgResult<()>
    {
        let program = which::which(&self.command).map_err(|e| {
            debug!(command = %self.command, error = %e, "Editor launcher lookup failed");
            CodeDbgError::EditorNotFound {
                command: self.command.clone(),
            }
        })?;

        info!(program = %program.display(), "Opening launch URL with editor CLI");
        let status = Command::new(&program).arg("--open-url").arg(url.to_string()).status()?;
        if !status.success() {
            return Err(CodeDbgError::LaunchFailed(format!(
                "'{} --open-url' exited with {status}",
                self.command
            )));
        }
        Ok(())
    }
}

/// Opens URLs through the operating system's protocol handler
///
/// Uses `cmd /C start "" <url>`; only meaningful on Windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUrlHandler;

impl UrlOpener for SystemUrlHandler
{
    fn name(&self) -> &str
    {
        "system URL handler"
    }

    fn open(&self, url: &LaunchUrl) -> CodeDbgResult<()>
    {
        info!("Opening launch URL with the system URL handler");
        // The empty string is the window title `start` expects before the target
        let status = Command::new("cmd")
            .args(["/C", "start", ""])
            .arg(url.to_string())
            .status()?;
        if !status.success() {
            return Err(CodeDbgError::LaunchFailed(format!("'start' exited with {status}")));
        }
        Ok(())
    }
}

/// Factory function to create the platform's opener for `channel`
///
/// ## Example
///
/// ```rust,no_run
/// use code_dbg_core::editor::create_opener;
/// use code_dbg_core::launch_url::LaunchUrl;
/// use code_dbg_core::payload::LaunchPayload;
/// use code_dbg_core::types::EditorChannel;
///
/// let payload = LaunchPayload::resolve("./app", vec![], None)?;
/// let url = LaunchUrl::new(EditorChannel::Stable, &payload)?;
/// create_opener(EditorChannel::Stable).open(&url)?;
/// # Ok::<(), code_dbg_core::error::CodeDbgError>(())
/// ```
#[must_use]
pub fn create_opener(channel: EditorChannel) -> Box<dyn UrlOpener>
{
    #[cfg(windows)]
    {
        let _ = channel;
        Box::new(SystemUrlHandler)
    }

    #[cfg(not(windows))]
    {
        Box::new(EditorCli::new(channel))
    }
}
