//! # Launch URLs
//!
//! The editor extension registers a URI handler; the launcher talks to it with
//! URLs of the form
//!
//! ```text
//! vscode://bradphelan.code-dbg/launch?payload=<base64 JSON>
//! ```
//!
//! The scheme selects the editor build ([`EditorChannel`]). The payload is
//! the base64 text produced by [`LaunchPayload::encode`], placed in the query
//! unescaped.

use std::fmt;
use std::str::FromStr;

use crate::error::{CodeDbgError, CodeDbgResult};
use crate::payload::LaunchPayload;
use crate::types::EditorChannel;

/// Publisher-qualified id of the extension that handles launch URLs
pub const EXTENSION_ID: &str = "bradphelan.code-dbg";

/// Path of the launch endpoint on the extension's URI handler
pub const LAUNCH_PATH: &str = "/launch";

/// Query parameter carrying the encoded payload
pub const PAYLOAD_PARAM: &str = "payload";

/// A launch request addressed to one editor channel
///
/// ## Example
///
/// ```rust
/// use code_dbg_core::launch_url::LaunchUrl;
/// use code_dbg_core::payload::LaunchPayload;
/// use code_dbg_core::types::EditorChannel;
///
/// let payload = LaunchPayload {
///     exe: "./app".to_string(),
///     args: vec!["--verbose".to_string()],
///     cwd: "/work".to_string(),
/// };
/// let url = LaunchUrl::new(EditorChannel::Insiders, &payload)?;
/// assert!(url.to_string().starts_with("vscode-insiders://bradphelan.code-dbg/launch?payload="));
///
/// let parsed: LaunchUrl = url.to_string().parse()?;
/// assert_eq!(parsed.payload()?, payload);
/// # Ok::<(), code_dbg_core::error::CodeDbgError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchUrl
{
    channel: EditorChannel,
    encoded_payload: String,
}

impl LaunchUrl
{
    /// Encode `payload` into a URL for `channel`
    ///
    /// ## Errors
    ///
    /// Returns [`CodeDbgError::PayloadJson`] if the payload cannot be serialized.
    pub fn new(channel: EditorChannel, payload: &LaunchPayload) -> CodeDbgResult<Self>
    {
        Ok(LaunchUrl {
            channel,
            encoded_payload: payload.encode()?,
        })
    }

    /// Editor channel the URL is addressed to
    #[must_use]
    pub fn channel(&self) -> EditorChannel
    {
        self.channel
    }

    /// The base64 payload exactly as it appears in the query string
    #[must_use]
    pub fn encoded_payload(&self) -> &str
    {
        &self.encoded_payload
    }

    /// Decode the payload carried by this URL
    ///
    /// ## Errors
    ///
    /// Returns a payload error if the query value is not a valid encoded payload.
    pub fn payload(&self) -> CodeDbgResult<LaunchPayload>
    {
        LaunchPayload::decode(&self.encoded_payload)
    }
}

impl fmt::Display for LaunchUrl
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(
            f,
            "{}://{EXTENSION_ID}{LAUNCH_PATH}?{PAYLOAD_PARAM}={}",
            self.channel.scheme(),
            self.encoded_payload
        )
    }
}

impl FromStr for LaunchUrl
{
    type Err = CodeDbgError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        let s = s.trim();
        let (scheme, rest) = s
            .split_once("://")
            .ok_or_else(|| CodeDbgError::InvalidUrl(format!("missing scheme in '{s}'")))?;
        let channel = EditorChannel::from_scheme(scheme)
            .ok_or_else(|| CodeDbgError::InvalidUrl(format!("unsupported scheme '{scheme}'")))?;

        let (location, query) = rest
            .split_once('?')
            .ok_or_else(|| CodeDbgError::InvalidUrl("missing query string".to_string()))?;
        let expected = format!("{EXTENSION_ID}{LAUNCH_PATH}");
        if location != expected {
            return Err(CodeDbgError::InvalidUrl(format!(
                "expected '{expected}', found '{location}'"
            )));
        }

        let encoded_payload = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == PAYLOAD_PARAM)
            .map(|(_, value)| value.to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| CodeDbgError::InvalidUrl(format!("missing '{PAYLOAD_PARAM}' parameter")))?;

        Ok(LaunchUrl {
            channel,
            encoded_payload,
        })
    }
}
