//! Schema model: immutable field definitions keyed by wire tag.

use std::collections::BTreeMap;

use crate::constants::MAX_TAG;
use crate::error::SchemaError;

/// Ordered mapping from enum member names to their wire codes.
///
/// Code 0 is the zero value: an absent enum field reads as the code-0
/// member, so every domain must declare one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDomain {
    members: Vec<(String, u32)>,
}

impl EnumDomain {
    /// Validates and builds a domain from `(name, code)` pairs.
    pub fn new<N: Into<String>>(
        members: impl IntoIterator<Item = (N, u32)>,
    ) -> Result<Self, SchemaError> {
        let members: Vec<(String, u32)> =
            members.into_iter().map(|(n, c)| (n.into(), c)).collect();
        if members.is_empty() {
            return Err(SchemaError::EmptyEnumDomain);
        }
        for (i, (name, code)) in members.iter().enumerate() {
            for (seen_name, seen_code) in &members[..i] {
                if name == seen_name {
                    return Err(SchemaError::DuplicateEnumName(name.clone()));
                }
                if code == seen_code {
                    return Err(SchemaError::DuplicateEnumCode(*code));
                }
            }
        }
        if !members.iter().any(|(_, code)| *code == 0) {
            return Err(SchemaError::MissingZeroMember);
        }
        Ok(Self { members })
    }

    /// Wire code of `name`, if it is a member.
    pub fn code(&self, name: &str) -> Option<u32> {
        self.members.iter().find(|(n, _)| n == name).map(|(_, c)| *c)
    }

    /// Member name for `code`, if any.
    pub fn name(&self, code: u32) -> Option<&str> {
        self.members
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(n, _)| n.as_str())
    }

    /// Members in declaration order.
    pub fn members(&self) -> impl Iterator<Item = (&str, u32)> {
        self.members.iter().map(|(n, c)| (n.as_str(), *c))
    }
}

/// Primitive wire type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Str,
    Enum(EnumDomain),
}

/// A single field definition: name, wire tag, kind.
///
/// The tag, not the name, identifies the field on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub tag: u32,
    pub kind: FieldKind,
}

impl Field {
    pub fn new(name: impl Into<String>, tag: u32, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            tag,
            kind,
        }
    }
}

/// An immutable record type: field definitions keyed by tag.
///
/// Defined once and never mutated afterwards, so it can be shared freely by
/// any number of records and concurrent encode/decode calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: BTreeMap<u32, Field>,
}

impl Schema {
    /// Validates and builds a schema from field definitions.
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Result<Self, SchemaError> {
        let mut map: BTreeMap<u32, Field> = BTreeMap::new();
        for field in fields {
            if field.tag == 0 || field.tag > MAX_TAG {
                return Err(SchemaError::TagOutOfRange(field.tag));
            }
            if map.values().any(|f| f.name == field.name) {
                return Err(SchemaError::DuplicateName(field.name));
            }
            let tag = field.tag;
            if map.insert(tag, field).is_some() {
                return Err(SchemaError::DuplicateTag(tag));
            }
        }
        Ok(Self { fields: map })
    }

    /// Field declared under `tag`, if any.
    pub fn field(&self, tag: u32) -> Option<&Field> {
        self.fields.get(&tag)
    }

    /// Field with the given name, if any.
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.values().find(|f| f.name == name)
    }

    /// Fields in ascending tag order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
