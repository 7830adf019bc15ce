//! # Verification Block
//!
//! The trailer the fixture appends to its log file so an external harness can
//! check, without scraping the human-readable report, that the program ran to
//! completion with the expected arguments:
//!
//! ```text
//!
//! E2E_TEST_OUTPUT
//! argc=3
//! argv[0]=/path/to/hello-target
//! argv[1]=alpha
//! argv[2]=beta gamma
//! sum=30
//! status=SUCCESS
//! ```
//!
//! Values run to the end of the line and are not escaped, so an argument
//! containing a newline cannot be read back faithfully.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::error::{CodeDbgError, CodeDbgResult};

/// Header line that opens the block
pub const HEADER: &str = "E2E_TEST_OUTPUT";

/// Outcome recorded in the `status` line
///
/// The fixture only writes a block once it has run to completion, so a
/// block never records anything but success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status
{
    /// The run completed
    Success,
}

impl fmt::Display for Status
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Status::Success => write!(f, "SUCCESS"),
        }
    }
}

impl FromStr for Status
{
    type Err = CodeDbgError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s {
            "SUCCESS" => Ok(Status::Success),
            other => Err(CodeDbgError::Verification(format!("unknown status '{other}'"))),
        }
    }
}

/// Parsed or to-be-written verification data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationBlock
{
    /// Argument count, program name included
    pub argc: usize,
    /// Every argument, starting with the program name
    pub argv: Vec<String>,
    /// Result of the fixture's loop
    pub sum: i64,
    /// Run outcome
    pub status: Status,
}

impl VerificationBlock
{
    /// A successful run with the given arguments and sum
    #[must_use]
    pub fn success(argv: Vec<String>, sum: i64) -> Self
    {
        VerificationBlock {
            argc: argv.len(),
            argv,
            sum,
            status: Status::Success,
        }
    }

    /// Write the block, including the blank line that separates it from the report
    ///
    /// ## Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()>
    {
        writeln!(out)?;
        writeln!(out, "{HEADER}")?;
        writeln!(out, "argc={}", self.argc)?;
        for (i, arg) in self.argv.iter().enumerate() {
            writeln!(out, "argv[{i}]={arg}")?;
        }
        writeln!(out, "sum={}", self.sum)?;
        writeln!(out, "status={}", self.status)?;
        Ok(())
    }

    /// Read the block back out of a complete log
    ///
    /// The last `E2E_TEST_OUTPUT` header wins, so a log that was appended to
    /// by several runs yields the newest block. Lines after the header that
    /// are not `key=value` pairs end the block.
    ///
    /// ## Errors
    ///
    /// Returns [`CodeDbgError::Verification`] if there is no header, a key is
    /// missing or repeated, a number does not parse, the status is unknown,
    /// the `argv` indices have gaps, or `argc` disagrees with them.
    pub fn parse(log: &str) -> CodeDbgResult<Self>
    {
        let lines: Vec<&str> = log.lines().collect();
        let start = lines
            .iter()
            .rposition(|line| line.trim_end() == HEADER)
            .ok_or_else(|| CodeDbgError::Verification(format!("no {HEADER} header found")))?;

        let mut argc = None;
        let mut argv: Vec<(usize, String)> = Vec::new();
        let mut sum = None;
        let mut status = None;

        for &line in &lines[start + 1..] {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let Some((key, value)) = line.split_once('=') else {
                break;
            };
            match key {
                "argc" => set_once(&mut argc, key, parse_number::<usize>(key, value)?)?,
                "sum" => set_once(&mut sum, key, parse_number::<i64>(key, value)?)?,
                "status" => set_once(&mut status, key, value.parse::<Status>()?)?,
                _ => {
                    let index = key
                        .strip_prefix("argv[")
                        .and_then(|rest| rest.strip_suffix(']'))
                        .ok_or_else(|| CodeDbgError::Verification(format!("unexpected key '{key}'")))?;
                    argv.push((parse_number::<usize>(key, index)?, value.to_string()));
                }
            }
        }

        let argc = argc.ok_or_else(|| missing("argc"))?;
        let sum = sum.ok_or_else(|| missing("sum"))?;
        let status = status.ok_or_else(|| missing("status"))?;

        argv.sort_by_key(|(index, _)| *index);
        for (expected, (index, _)) in argv.iter().enumerate() {
            if *index != expected {
                return Err(CodeDbgError::Verification(format!(
                    "argv indices are not contiguous: expected argv[{expected}], found argv[{index}]"
                )));
            }
        }
        if argv.len() != argc {
            return Err(CodeDbgError::Verification(format!(
                "argc={argc} but {} argv entries present",
                argv.len()
            )));
        }

        Ok(VerificationBlock {
            argc,
            argv: argv.into_iter().map(|(_, value)| value).collect(),
            sum,
            status,
        })
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> CodeDbgResult<T>
{
    value
        .parse()
        .map_err(|_| CodeDbgError::Verification(format!("'{key}' has non-numeric value '{value}'")))
}

fn set_once<T>(slot: &mut Option<T>, key: &str, value: T) -> CodeDbgResult<()>
{
    if slot.is_some() {
        return Err(CodeDbgError::Verification(format!("'{key}' appears more than once")));
    }
    *slot = Some(value);
    Ok(())
}

fn missing(key: &str) -> CodeDbgError
{
    CodeDbgError::Verification(format!("'{key}' is missing"))
}
