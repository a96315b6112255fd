//! Error types for schema construction, record mutation, and the codec.

use tagpack_buffers::BufferError;
use thiserror::Error;

/// Schema construction failure. Fatal to that schema; a schema that
/// constructed successfully never produces these again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("field tag {0} is out of range")]
    TagOutOfRange(u32),
    #[error("duplicate field tag {0}")]
    DuplicateTag(u32),
    #[error("duplicate field name `{0}`")]
    DuplicateName(String),
    #[error("enum domain is empty")]
    EmptyEnumDomain,
    #[error("enum domain has no member with code 0")]
    MissingZeroMember,
    #[error("duplicate enum member name `{0}`")]
    DuplicateEnumName(String),
    #[error("duplicate enum member code {0}")]
    DuplicateEnumCode(u32),
}

/// Record mutation failure: the caller asked for a field or value the
/// schema does not declare. Recoverable by the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("tag {0} is not declared in the schema")]
    UnknownTag(u32),
    #[error("value kind does not match the declared kind of tag {0}")]
    KindMismatch(u32),
    #[error("enum code {1} is not a member of the domain of tag {0}")]
    UnknownEnumCode(u32, u32),
    #[error("`{1}` is not a member of the enum domain of tag {0}")]
    UnknownEnumName(u32, String),
}

/// Encode failure. The encoder never silently drops a field; a stored value
/// whose kind disagrees with the schema fails the whole encode call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("stored value for tag {0} does not match its declared kind")]
    KindMismatch(u32),
}

/// Decode failure. Any decode error means the input is not a valid record
/// of the schema; [`DecodeError::is_truncation`] separates incomplete input
/// from structurally invalid input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("field tag 0 is reserved")]
    ZeroTag,
    #[error("varint is longer than 64 bits")]
    VarintTooLong,
    #[error("length prefix {0} exceeds the payload size limit")]
    LengthOverflow(u64),
    #[error("invalid UTF-8 in string payload")]
    InvalidUtf8,
    #[error("reserved wire kind {0}")]
    ReservedWireKind(u8),
}

impl DecodeError {
    /// `true` when the input ended before a header or payload was complete,
    /// `false` for structurally invalid input.
    pub fn is_truncation(&self) -> bool {
        matches!(self, DecodeError::UnexpectedEof)
    }
}

impl From<BufferError> for DecodeError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => DecodeError::UnexpectedEof,
            BufferError::InvalidUtf8 => DecodeError::InvalidUtf8,
        }
    }
}

/// Record/JSON conversion failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonError {
    #[error("expected a JSON object")]
    NotAnObject,
    #[error("`{0}` is not a field of the schema")]
    UnknownField(String),
    #[error("JSON value for field `{0}` does not match its declared kind")]
    KindMismatch(String),
    #[error("`{1}` is not a member of the enum domain of field `{0}`")]
    UnknownEnumMember(String, String),
    #[error("integer value for field `{0}` is out of range")]
    IntOutOfRange(String),
}
