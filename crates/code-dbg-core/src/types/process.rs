//! Process identity.

use std::fmt;

/// Process identifier (PID)
///
/// A PID is a unique number assigned to each running process by the operating
/// system. The standard library reports it as a `u32` on every platform
/// (`getpid()` on Unix, `GetCurrentProcessId()` on Windows).
///
/// Wrapping it keeps PIDs from being mixed up with the other integers the
/// fixture prints (argument counts, loop sums).
///
/// ## Example
///
/// ```rust
/// use code_dbg_core::types::ProcessId;
///
/// let pid = ProcessId::current();
/// assert_eq!(pid.raw(), std::process::id());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessId(pub u32);

impl ProcessId
{
    /// The PID of the running process
    #[must_use]
    pub fn current() -> Self
    {
        ProcessId(std::process::id())
    }

    /// Get the raw `u32` value
    #[must_use]
    pub fn raw(self) -> u32
    {
        self.0
    }
}

impl From<u32> for ProcessId
{
    fn from(pid: u32) -> Self
    {
        ProcessId(pid)
    }
}

impl From<ProcessId> for u32
{
    fn from(pid: ProcessId) -> Self
    {
        pid.0
    }
}

impl fmt::Display for ProcessId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.0)
    }
}
