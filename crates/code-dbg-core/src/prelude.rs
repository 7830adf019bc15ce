//! Common module for library exports

pub use crate::editor::{create_opener, EditorCli, SystemUrlHandler, UrlOpener};
pub use crate::error::{CodeDbgError, CodeDbgResult};
pub use crate::fixture::{RunSummary, Status, VerificationBlock};
pub use crate::launch_url::LaunchUrl;
pub use crate::payload::LaunchPayload;
pub use crate::types::{EditorChannel, ProcessId};
