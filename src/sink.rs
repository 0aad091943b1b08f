//! Ready-made sinks.

use core::fmt;
use core::str;

use no_std_io::{Result, Write};

/// Sink writing into a fixed memory buffer.
///
/// Once the buffer is full, writes keep what fits and fail.
#[derive(Debug)]
pub struct BufferSink<'a> {
    buffer: &'a mut [u8],
    len: usize,
}

impl<'a> BufferSink<'a> {
    pub fn new(buffer: &'a mut [u8]) -> BufferSink<'a> {
        BufferSink { buffer, len: 0 }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    /// The valid UTF-8 prefix of the written bytes.
    pub fn as_str(&self) -> &str {
        let bytes = self.as_bytes();
        match str::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<'a> Write for BufferSink<'a> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        if self.len == self.buffer.len() {
            return Err(());
        }

        self.buffer[self.len] = byte;
        self.len += 1;

        Ok(())
    }

    fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        let free = self.buffer.len() - self.len;
        let count = buf.len().min(free);

        self.buffer[self.len..self.len + count].copy_from_slice(&buf[..count]);
        self.len += count;

        if count == buf.len() {
            Ok(())
        } else {
            Err(())
        }
    }
}

/// Sink forwarding to a `core::fmt::Write` implementation, such as a
/// serial port driver that already implements it.
///
/// Bytes that are not valid UTF-8 are written as U+FFFD.
#[derive(Debug, Default)]
pub struct FmtSink<W> {
    inner: W,
}

impl<W> FmtSink<W>
where
    W: fmt::Write,
{
    pub fn new(inner: W) -> FmtSink<W> {
        FmtSink { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W> Write for FmtSink<W>
where
    W: fmt::Write,
{
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        let c = if byte.is_ascii() {
            byte as char
        } else {
            char::REPLACEMENT_CHARACTER
        };

        self.inner.write_char(c).map_err(|_| ())
    }

    fn write_bytes(&mut self, mut buf: &[u8]) -> Result<()> {
        while !buf.is_empty() {
            let valid_up_to = match str::from_utf8(buf) {
                Ok(s) => return self.write_str(s),
                Err(e) => e.valid_up_to(),
            };

            let (valid, rest) = buf.split_at(valid_up_to);
            if let Ok(s) = str::from_utf8(valid) {
                if !s.is_empty() {
                    self.write_str(s)?;
                }
            }

            // Bad byte
            self.write_byte(rest[0])?;
            buf = &rest[1..];
        }

        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        self.inner.write_str(s).map_err(|_| ())
    }

    fn write_char(&mut self, c: char) -> Result<()> {
        self.inner.write_char(c).map_err(|_| ())
    }
}
