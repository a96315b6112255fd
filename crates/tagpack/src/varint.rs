//! Base-128 varint encoding over the buffer reader/writer.

use tagpack_buffers::{Reader, Writer};

use crate::constants::MAX_VARINT_LEN;
use crate::error::DecodeError;

/// Writes `value` as a varint, low 7-bit groups first.
pub fn write_varint(writer: &mut Writer, mut value: u64) {
    while value >= 0x80 {
        writer.u8((value as u8) | 0x80);
        value >>= 7;
    }
    writer.u8(value as u8);
}

/// Reads a varint of at most [`MAX_VARINT_LEN`] bytes.
pub fn read_varint(reader: &mut Reader) -> Result<u64, DecodeError> {
    let mut value: u64 = 0;
    for i in 0..MAX_VARINT_LEN {
        let byte = reader.u8()?;
        // the tenth byte may only carry bit 63 and must terminate
        if i == MAX_VARINT_LEN - 1 && byte > 0x01 {
            return Err(DecodeError::VarintTooLong);
        }
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(DecodeError::VarintTooLong)
}
