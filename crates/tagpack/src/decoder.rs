//! Record decoder.

use tagpack_buffers::Reader;

use crate::constants::{
    MAX_LEN_PREFIX, MAX_TAG, WIRE_FIXED32, WIRE_FIXED64, WIRE_KIND_BITS, WIRE_KIND_MASK, WIRE_LEN,
    WIRE_VARINT,
};
use crate::error::DecodeError;
use crate::record::{FieldValue, Record};
use crate::schema::{Field, FieldKind, Schema};
use crate::varint::read_varint;

/// Decodes wire bytes back into a [`Record`].
///
/// Parsing is strict left to right: header key, then the payload shaped by
/// the wire kind found in the header. A tag the schema does not declare, or
/// whose wire kind disagrees with the declared kind, has its payload
/// consumed and discarded rather than failing the decode; data written under
/// a newer schema still decodes under an older one.
#[derive(Default)]
pub struct RecordDecoder;

impl RecordDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes `blob` under `schema`. Empty input yields a record with
    /// every field absent.
    pub fn decode<'a>(&self, blob: &[u8], schema: &'a Schema) -> Result<Record<'a>, DecodeError> {
        let mut reader = Reader::new(blob);
        let mut record = Record::new(schema);
        while !reader.is_empty() {
            let key = read_varint(&mut reader)?;
            let wire_kind = (key & WIRE_KIND_MASK) as u8;
            let tag = key >> WIRE_KIND_BITS;
            if tag == 0 {
                return Err(DecodeError::ZeroTag);
            }
            // tags beyond the schema's representable range are unknown fields
            let declared: Option<&Field> = if tag <= u64::from(MAX_TAG) {
                schema.field(tag as u32)
            } else {
                None
            };
            match wire_kind {
                WIRE_VARINT => {
                    let raw = read_varint(&mut reader)?;
                    match declared.map(|f| (f.tag, &f.kind)) {
                        Some((tag, FieldKind::Int)) => {
                            record.insert_raw(tag, FieldValue::Int(raw as i64));
                        }
                        // open enum: codes outside the domain stay readable
                        Some((tag, FieldKind::Enum(_))) => {
                            record.insert_raw(tag, FieldValue::Enum(raw as u32));
                        }
                        // unknown tag or kind mismatch, payload already consumed
                        _ => {}
                    }
                }
                WIRE_LEN => {
                    let len = read_varint(&mut reader)?;
                    if len > MAX_LEN_PREFIX {
                        return Err(DecodeError::LengthOverflow(len));
                    }
                    let len = len as usize;
                    match declared.map(|f| (f.tag, &f.kind)) {
                        Some((tag, FieldKind::Str)) => {
                            let text = reader.utf8(len)?;
                            record.insert_raw(tag, FieldValue::Str(text.to_owned()));
                        }
                        _ => reader.skip(len)?,
                    }
                }
                // never written by this codec, but foreign fields may use them
                WIRE_FIXED64 => reader.skip(8)?,
                WIRE_FIXED32 => reader.skip(4)?,
                other => return Err(DecodeError::ReservedWireKind(other)),
            }
        }
        Ok(record)
    }
}
