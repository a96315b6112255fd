//! Binary buffer reader with cursor tracking.

use std::str;

use crate::BufferError;

/// A binary buffer reader that reads data from a byte slice.
///
/// The reader maintains a cursor position; every read checks the remaining
/// length first and returns [`BufferError::EndOfBuffer`] when the request
/// cannot be satisfied, leaving the cursor untouched.
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub buf: &'a [u8],
    /// Current cursor position.
    pub x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, x: 0 }
    }

    /// Returns the number of remaining bytes.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.x
    }

    /// Returns `true` once the cursor has reached the end of input.
    pub fn is_empty(&self) -> bool {
        self.x >= self.buf.len()
    }

    #[inline]
    fn check(&self, size: usize) -> Result<(), BufferError> {
        if self.remaining() < size {
            Err(BufferError::EndOfBuffer)
        } else {
            Ok(())
        }
    }

    /// Advances the cursor by the given number of bytes.
    pub fn skip(&mut self, size: usize) -> Result<(), BufferError> {
        self.check(size)?;
        self.x += size;
        Ok(())
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        self.check(1)?;
        let val = self.buf[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Returns a subslice of the given size and advances the cursor.
    pub fn bytes(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.check(size)?;
        let start = self.x;
        self.x += size;
        Ok(&self.buf[start..self.x])
    }

    /// Reads a UTF-8 string of the given byte size.
    pub fn utf8(&mut self, size: usize) -> Result<&'a str, BufferError> {
        let bytes = self.bytes(size)?;
        str::from_utf8(bytes).map_err(|_| BufferError::InvalidUtf8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u8(), Ok(0x01));
        assert_eq!(reader.u8(), Ok(0x02));
        assert_eq!(reader.u8(), Ok(0x03));
        assert_eq!(reader.u8(), Err(BufferError::EndOfBuffer));
    }

    #[test]
    fn test_bytes() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.bytes(3), Ok(&[0x01, 0x02, 0x03][..]));
        assert_eq!(reader.bytes(2), Err(BufferError::EndOfBuffer));
        assert_eq!(reader.bytes(1), Ok(&[0x04][..]));
    }

    #[test]
    fn test_skip() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.skip(2), Ok(()));
        assert_eq!(reader.u8(), Ok(0x03));
        assert_eq!(reader.skip(2), Err(BufferError::EndOfBuffer));
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn test_utf8() {
        let data = b"hello world";
        let mut reader = Reader::new(data);
        assert_eq!(reader.utf8(5), Ok("hello"));
        assert_eq!(reader.utf8(6), Ok(" world"));
        assert!(reader.is_empty());
    }

    #[test]
    fn test_utf8_invalid() {
        let data = [0xc3, 0x28];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.utf8(2), Err(BufferError::InvalidUtf8));
    }

    #[test]
    fn test_failed_read_keeps_cursor() {
        let data = [0x01, 0x02];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.bytes(3), Err(BufferError::EndOfBuffer));
        assert_eq!(reader.x, 0);
        assert_eq!(reader.u8(), Ok(0x01));
    }
}
