//! Wire-format constants.
//!
//! A field on the wire is a varint header key `(tag << 3) | wire_kind`
//! followed by a payload whose shape the wire kind determines.

/// Wire kind for varint payloads (INT and ENUM fields).
pub const WIRE_VARINT: u8 = 0;
/// Wire kind for fixed 64-bit payloads. Never written by this codec, but
/// skipped correctly on decode.
pub const WIRE_FIXED64: u8 = 1;
/// Wire kind for length-delimited payloads (STRING fields).
pub const WIRE_LEN: u8 = 2;
/// Wire kind for fixed 32-bit payloads. Skip-only, like [`WIRE_FIXED64`].
pub const WIRE_FIXED32: u8 = 5;

/// Bits of the header key occupied by the wire kind.
pub const WIRE_KIND_BITS: u32 = 3;
/// Mask extracting the wire kind from a header key.
pub const WIRE_KIND_MASK: u64 = 0b111;

/// Largest permitted field tag (29 usable tag bits in a 32-bit header key).
pub const MAX_TAG: u32 = (1 << 29) - 1;

/// Longest legal varint: 64 payload bits, 7 per byte.
pub const MAX_VARINT_LEN: usize = 10;

/// Largest accepted length prefix for a length-delimited payload.
pub const MAX_LEN_PREFIX: u64 = 0x7fff_ffff;
