//! # Tee Writer
//!
//! Everything the fixture prints goes to the console and, when a log file
//! could be opened, to that file too.
//!
//! The console is the primary sink: its write errors are returned to the
//! caller. The file is best effort: the first failed write logs a warning and
//! detaches the file, after which output continues console-only.

use std::io::{self, Write};

use tracing::warn;

/// Writer that mirrors console output into an optional file
///
/// ## Example
///
/// ```rust
/// use std::io::Write;
/// use code_dbg_core::fixture::sink::Tee;
///
/// let mut tee = Tee::new(Vec::new(), Some(Vec::new()));
/// writeln!(tee, "hello")?;
/// let (console, file) = tee.finish()?;
/// assert_eq!(console, b"hello\n");
/// assert_eq!(file.as_deref(), Some(&b"hello\n"[..]));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct Tee<C: Write, F: Write>
{
    console: C,
    file: Option<F>,
}

impl<C: Write, F: Write> Tee<C, F>
{
    /// Combine a console writer with an optional file writer
    pub fn new(console: C, file: Option<F>) -> Self
    {
        Tee { console, file }
    }

    /// Whether output is still being mirrored to a file
    pub fn has_file(&self) -> bool
    {
        self.file.is_some()
    }

    /// The file writer alone, for output that must not reach the console
    pub fn file_mut(&mut self) -> Option<&mut F>
    {
        self.file.as_mut()
    }

    /// Flush both sinks and hand them back
    ///
    /// A file flush failure is treated like any other file error: logged,
    /// and the file is not returned.
    ///
    /// ## Errors
    ///
    /// Returns an error if the console cannot be flushed.
    pub fn finish(mut self) -> io::Result<(C, Option<F>)>
    {
        self.flush()?;
        Ok((self.console, self.file))
    }

    fn mirror(&mut self, buf: &[u8])
    {
        let failed = match self.file.as_mut() {
            Some(file) => file.write_all(buf).err(),
            None => None,
        };
        if let Some(err) = failed {
            self.detach(&err);
        }
    }

    fn detach(&mut self, err: &io::Error)
    {
        warn!(error = %err, "Log file write failed; continuing with console output only");
        self.file = None;
    }
}

impl<C: Write, F: Write> Write for Tee<C, F>
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>
    {
        let written = self.console.write(buf)?;
        self.mirror(&buf[..written]);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()>
    {
        self.console.flush()?;
        let failed = match self.file.as_mut() {
            Some(file) => file.flush().err(),
            None => None,
        };
        if let Some(err) = failed {
            self.detach(&err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    /// Accepts a fixed number of bytes, then fails every write
    struct FailingWriter
    {
        remaining: usize,
        data: Vec<u8>,
    }

    impl Write for FailingWriter
    {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize>
        {
            if self.remaining == 0 {
                return Err(io::Error::other("disk full"));
            }
            let n = buf.len().min(self.remaining);
            self.remaining -= n;
            self.data.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()>
        {
            Ok(())
        }
    }

    /// Buffers every write, then fails to flush
    struct UnflushableWriter;

    impl Write for UnflushableWriter
    {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize>
        {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()>
        {
            Err(io::Error::other("no space left on device"))
        }
    }

    #[test]
    fn test_console_only()
    {
        let mut tee: Tee<Vec<u8>, Vec<u8>> = Tee::new(Vec::new(), None);
        assert!(!tee.has_file());
        write!(tee, "a={}", 1).unwrap();
        let (console, file) = tee.finish().unwrap();
        assert_eq!(console, b"a=1");
        assert!(file.is_none());
    }

    #[test]
    fn test_file_only_output_skips_console()
    {
        let mut tee = Tee::new(Vec::new(), Some(Vec::new()));
        writeln!(tee, "both").unwrap();
        writeln!(tee.file_mut().unwrap(), "file").unwrap();
        let (console, file) = tee.finish().unwrap();
        assert_eq!(console, b"both\n");
        assert_eq!(file.unwrap(), b"both\nfile\n");
    }

    #[test]
    fn test_file_error_detaches_file()
    {
        let file = FailingWriter {
            remaining: 4,
            data: Vec::new(),
        };
        let mut tee = Tee::new(Vec::new(), Some(file));
        writeln!(tee, "first line").unwrap();
        assert!(!tee.has_file());

        writeln!(tee, "second line").unwrap();
        let (console, file) = tee.finish().unwrap();
        assert_eq!(console, b"first line\nsecond line\n");
        assert!(file.is_none());
    }

    #[test]
    fn test_flush_error_detaches_file()
    {
        let mut tee = Tee::new(Vec::new(), Some(UnflushableWriter));
        writeln!(tee, "report").unwrap();
        assert!(tee.has_file());

        tee.flush().unwrap();
        assert!(!tee.has_file());

        let (console, file) = tee.finish().unwrap();
        assert_eq!(console, b"report\n");
        assert!(file.is_none());
    }
}
