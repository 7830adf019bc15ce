//! The human-readable report the fixture prints.
//!
//! Kept deliberately plain: one local variable per thing worth inspecting,
//! one line per loop iteration, so every step is a natural breakpoint.

use std::io::{self, Write};

use crate::types::ProcessId;

use super::verification::VerificationBlock;

/// Number of loop iterations
pub const ITERATIONS: i64 = 5;

/// Each iteration adds `iteration * STEP_FACTOR` to the sum
pub const STEP_FACTOR: i64 = 2;

const RULE: &str = "=================================";

/// Process identity and arguments of one fixture run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report
{
    pid: ProcessId,
    argv: Vec<String>,
}

impl Report
{
    /// `argv` is the full argument vector, program name first
    #[must_use]
    pub fn new(pid: ProcessId, argv: Vec<String>) -> Self
    {
        Report { pid, argv }
    }

    /// Argument count, program name included
    #[must_use]
    pub fn argc(&self) -> usize
    {
        self.argv.len()
    }

    /// Write the whole report and return the loop's final sum
    ///
    /// ## Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<i64>
    {
        Self::write_banner(out)?;
        self.write_process_info(out)?;
        Self::write_instructions(out)?;
        let sum = Self::write_loop(out)?;
        Self::write_summary(out, sum)?;
        Ok(sum)
    }

    /// Verification data for a completed run
    #[must_use]
    pub fn verification(&self, sum: i64) -> VerificationBlock
    {
        VerificationBlock::success(self.argv.clone(), sum)
    }

    fn write_banner<W: Write>(out: &mut W) -> io::Result<()>
    {
        writeln!(out, "{RULE}")?;
        writeln!(out, "Hello World Debug Test Application")?;
        writeln!(out, "{RULE}")?;
        writeln!(out)
    }

    fn write_process_info<W: Write>(&self, out: &mut W) -> io::Result<()>
    {
        writeln!(out, "Process Info:")?;
        writeln!(out, "  PID: {}", self.pid)?;
        writeln!(out, "  Command Line Arguments: {}", self.argc())?;

        if self.argc() > 1 {
            writeln!(out, "  Arguments:")?;
            for (i, arg) in self.argv.iter().enumerate().skip(1) {
                writeln!(out, "    [{i}]: {arg}")?;
            }
        } else {
            writeln!(out, "  (no arguments)")?;
        }
        writeln!(out)
    }

    fn write_instructions<W: Write>(out: &mut W) -> io::Result<()>
    {
        writeln!(out, "This application is a simple test for VS Code debugger.")?;
        writeln!(out, "You can:")?;
        writeln!(out, "  - Set breakpoints")?;
        writeln!(out, "  - Step through code")?;
        writeln!(out, "  - Inspect variables")?;
        writeln!(out)
    }

    fn write_loop<W: Write>(out: &mut W) -> io::Result<i64>
    {
        let mut sum = 0;
        for i in 1..=ITERATIONS {
            sum += i * STEP_FACTOR;
            writeln!(out, "  Loop iteration {i}: sum = {sum}")?;
        }
        writeln!(out)?;
        Ok(sum)
    }

    fn write_summary<W: Write>(out: &mut W, sum: i64) -> io::Result<()>
    {
        writeln!(out, "Final Result: {sum}")?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "Application completed successfully!")?;
        writeln!(out, "{RULE}")
    }
}
