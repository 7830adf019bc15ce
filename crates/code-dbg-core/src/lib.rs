//! # code-dbg-core
//!
//! The pieces behind the `code-dbg` launcher and the `hello-target` fixture.
//!
//! This crate provides:
//! - [`payload`]: the executable/arguments/working-directory description of a debug session
//! - [`launch_url`]: the `vscode://` URL that carries a payload to the editor extension
//! - [`editor`]: platform strategies for handing that URL to the editor
//! - [`fixture`]: the debug target's report, log mirroring, and verification block
//!
//! ## Flow
//!
//! ```text
//! code-dbg -- ./hello-target a b
//!     └─ LaunchPayload ─ encode ─ LaunchUrl ─ UrlOpener ─▶ editor debugs hello-target
//!                                                            └─ fixture::run ─▶ console + log
//! ```

pub mod editor;
pub mod error;
pub mod fixture;
pub mod launch_url;
pub mod payload;
pub mod prelude;
pub mod types;

pub use editor::{create_opener, UrlOpener};
// Re-export commonly used types
pub use error::{CodeDbgError, CodeDbgResult};
pub use launch_url::LaunchUrl;
pub use payload::LaunchPayload;
pub use types::{EditorChannel, ProcessId};
