#![cfg_attr(all(feature = "no_std", not(test)), no_std)]

pub type Error = ();

pub type Result<T> = ::core::result::Result<T, Error>;

/// A character output device.
///
/// Only `write_byte` is required. The provided methods stop at the first
/// byte the device refuses.
pub trait Write {
    fn write_byte(&mut self, byte: u8) -> Result<()>;

    fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        for b in buf.iter() {
            self.write_byte(*b)?;
        }

        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_bytes(s.as_bytes())
    }

    fn write_char(&mut self, c: char) -> Result<()> {
        self.write_str(c.encode_utf8(&mut [0; 4]))
    }
}

impl<W> Write for &mut W
where
    W: Write + ?Sized,
{
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        (**self).write_byte(byte)
    }

    #[inline]
    fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        (**self).write_bytes(buf)
    }

    #[inline]
    fn write_str(&mut self, s: &str) -> Result<()> {
        (**self).write_str(s)
    }

    #[inline]
    fn write_char(&mut self, c: char) -> Result<()> {
        (**self).write_char(c)
    }
}

#[cfg(any(not(feature = "no_std"), test))]
impl Write for Vec<u8> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.push(byte);
        Ok(())
    }

    fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        self.extend_from_slice(buf);
        Ok(())
    }
}
