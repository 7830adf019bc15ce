//! Editor release channels.

use std::fmt;
use std::str::FromStr;

/// Which build of VS Code should receive the launch request
///
/// Stable and Insiders register different URL schemes and ship different
/// command-line launchers, so both values are derived from the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorChannel
{
    /// Regular VS Code (`vscode://`, `code`)
    #[default]
    Stable,
    /// VS Code Insiders (`vscode-insiders://`, `code-insiders`)
    Insiders,
}

impl EditorChannel
{
    /// URL scheme the editor registers with the operating system
    #[must_use]
    pub fn scheme(self) -> &'static str
    {
        match self {
            EditorChannel::Stable => "vscode",
            EditorChannel::Insiders => "vscode-insiders",
        }
    }

    /// Name of the command-line launcher on `PATH`
    #[must_use]
    pub fn command(self) -> &'static str
    {
        match self {
            EditorChannel::Stable => "code",
            EditorChannel::Insiders => "code-insiders",
        }
    }

    /// Look a channel up by its URL scheme
    #[must_use]
    pub fn from_scheme(scheme: &str) -> Option<Self>
    {
        match scheme {
            "vscode" => Some(EditorChannel::Stable),
            "vscode-insiders" => Some(EditorChannel::Insiders),
            _ => None,
        }
    }
}

impl fmt::Display for EditorChannel
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            EditorChannel::Stable => write!(f, "stable"),
            EditorChannel::Insiders => write!(f, "insiders"),
        }
    }
}

impl FromStr for EditorChannel
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "stable" | "code" | "vscode" => Ok(EditorChannel::Stable),
            "insiders" | "code-insiders" | "vscode-insiders" => Ok(EditorChannel::Insiders),
            _ => Err(format!("Unknown editor channel: {s}. Use 'stable' or 'insiders'")),
        }
    }
}
