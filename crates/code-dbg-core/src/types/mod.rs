//! # Types
//!
//! Small value types shared by the fixture and the launcher.

pub mod channel;
pub mod process;

// Re-export all public types
pub use channel::EditorChannel;
pub use process::ProcessId;
