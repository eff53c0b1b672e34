use std::io::{self, ErrorKind, Read};

use crate::error::FormatError;

/// Sequential little-endian reader over a borrowed byte stream.
///
/// End of stream is reported as [`FormatError::Truncated`] naming the field
/// being read; any other I/O failure is passed through as [`FormatError::Io`].
pub struct ByteStream<R> {
    inner: R,
    consumed: u64,
}

impl<R: Read> ByteStream<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, consumed: 0 }
    }

    /// Number of bytes consumed from the underlying stream so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    fn fill(&mut self, buf: &mut [u8], context: &'static str) -> Result<(), FormatError> {
        match self.inner.read_exact(buf) {
            Ok(()) => {
                self.consumed += buf.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                Err(FormatError::Truncated { context })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn read_u8(&mut self, context: &'static str) -> Result<u8, FormatError> {
        let mut buf = [0; 1];
        self.fill(&mut buf, context)?;
        Ok(buf[0])
    }

    pub fn read_u16(&mut self, context: &'static str) -> Result<u16, FormatError> {
        let mut buf = [0; 2];
        self.fill(&mut buf, context)?;
        Ok(u16::from_le_bytes(buf))
    }

    pub fn read_u32(&mut self, context: &'static str) -> Result<u32, FormatError> {
        let mut buf = [0; 4];
        self.fill(&mut buf, context)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Discards exactly `len` bytes.
    pub fn skip(&mut self, len: u64, context: &'static str) -> Result<(), FormatError> {
        let skipped = io::copy(&mut (&mut self.inner).take(len), &mut io::sink())?;
        self.consumed += skipped;
        if skipped < len {
            return Err(FormatError::Truncated { context });
        }
        Ok(())
    }
}
