//! Record encoder.

use tagpack_buffers::Writer;

use crate::constants::{WIRE_KIND_BITS, WIRE_LEN, WIRE_VARINT};
use crate::error::EncodeError;
use crate::record::{FieldValue, Record};
use crate::schema::FieldKind;
use crate::varint::write_varint;

/// Encodes a [`Record`] into its wire form.
///
/// Present fields are written in ascending tag order, each as a header key
/// `(tag << 3) | wire_kind` followed by the payload. Absent fields are
/// omitted entirely; the decoder reads them back as zero values. Equal
/// records always produce byte-identical output.
pub struct RecordEncoder {
    pub writer: Writer,
}

impl Default for RecordEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes `record` and returns the wire bytes.
    pub fn encode(&mut self, record: &Record) -> Result<Vec<u8>, EncodeError> {
        self.writer.reset();
        for (tag, value) in record.fields() {
            let kind = record.schema().field(tag).map(|f| &f.kind);
            match (kind, value) {
                (Some(FieldKind::Int), FieldValue::Int(v)) => self.write_int(tag, *v),
                (Some(FieldKind::Str), FieldValue::Str(s)) => self.write_str(tag, s),
                (Some(FieldKind::Enum(_)), FieldValue::Enum(code)) => self.write_enum(tag, *code),
                _ => return Err(EncodeError::KindMismatch(tag)),
            }
        }
        Ok(self.writer.flush())
    }

    fn write_header(&mut self, tag: u32, wire_kind: u8) {
        let key = (u64::from(tag) << WIRE_KIND_BITS) | u64::from(wire_kind);
        write_varint(&mut self.writer, key);
    }

    /// INT payload: the value's two's-complement bits as a varint, so
    /// negative values always take ten bytes.
    fn write_int(&mut self, tag: u32, value: i64) {
        self.write_header(tag, WIRE_VARINT);
        write_varint(&mut self.writer, value as u64);
    }

    fn write_str(&mut self, tag: u32, value: &str) {
        self.write_header(tag, WIRE_LEN);
        write_varint(&mut self.writer, value.len() as u64);
        self.writer.utf8(value);
    }

    fn write_enum(&mut self, tag: u32, code: u32) {
        self.write_header(tag, WIRE_VARINT);
        write_varint(&mut self.writer, u64::from(code));
    }
}
