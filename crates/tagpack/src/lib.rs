//! tagpack — schema-driven tagged binary record codec.
//!
//! A record type is described once by a [`Schema`]: fields with names,
//! numeric wire tags, and kinds (INT, STRING, ENUM). [`Record`] instances of
//! that type encode to a compact tagged byte sequence and decode back, with
//! absent fields reading as zero values and unknown fields skipped on decode
//! so that newer writers stay compatible with older readers.
//!
//! # Example
//!
//! ```
//! use tagpack::{EnumDomain, Field, FieldKind, Record, Schema};
//!
//! let gender = EnumDomain::new([("MALE", 0), ("FEMALE", 1)]).unwrap();
//! let schema = Schema::new([
//!     Field::new("name", 1, FieldKind::Str),
//!     Field::new("age", 2, FieldKind::Int),
//!     Field::new("gender", 3, FieldKind::Enum(gender)),
//! ])
//! .unwrap();
//!
//! let mut person = Record::new(&schema);
//! person.set_str(1, "Alice").unwrap();
//! person.set_int(2, 24).unwrap();
//! person.set_enum_name(3, "FEMALE").unwrap();
//!
//! let blob = tagpack::encode(&person).unwrap();
//! let back = tagpack::decode(&blob, &schema).unwrap();
//! assert_eq!(back.str(1), "Alice");
//! assert_eq!(back.int(2), 24);
//! assert_eq!(back.enum_name(3), Some("FEMALE"));
//! ```

pub mod constants;

mod decoder;
mod encoder;
mod error;
mod json;
mod record;
mod schema;
mod varint;

pub use decoder::RecordDecoder;
pub use encoder::RecordEncoder;
pub use error::{DecodeError, EncodeError, FieldError, JsonError, SchemaError};
pub use json::{record_from_json, record_to_json};
pub use record::{FieldValue, Record};
pub use schema::{EnumDomain, Field, FieldKind, Schema};

/// Encodes `record` into its wire bytes.
pub fn encode(record: &Record) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = RecordEncoder::new();
    encoder.encode(record)
}

/// Decodes `blob` into a record of `schema`.
pub fn decode<'a>(blob: &[u8], schema: &'a Schema) -> Result<Record<'a>, DecodeError> {
    let decoder = RecordDecoder::new();
    decoder.decode(blob, schema)
}
