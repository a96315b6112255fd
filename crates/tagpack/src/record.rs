//! Value model: a mutable record instance bound to a schema.

use std::collections::BTreeMap;

use crate::error::FieldError;
use crate::schema::{FieldKind, Schema};

/// A typed field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Int(i64),
    Str(String),
    Enum(u32),
}

/// An instance of a record type described by a [`Schema`].
///
/// Fields are present or absent; an absent field reads as its zero value
/// (0 for INT, `""` for STRING, the code-0 member for ENUM). Fields are
/// never required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    schema: &'a Schema,
    fields: BTreeMap<u32, FieldValue>,
}

impl<'a> Record<'a> {
    /// Creates a record with every field absent.
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            fields: BTreeMap::new(),
        }
    }

    /// Creates a record from initial `(tag, value)` pairs, validating each
    /// pair as [`Record::set`] does.
    pub fn with_fields(
        schema: &'a Schema,
        pairs: impl IntoIterator<Item = (u32, FieldValue)>,
    ) -> Result<Self, FieldError> {
        let mut record = Self::new(schema);
        for (tag, value) in pairs {
            record.set(tag, value)?;
        }
        Ok(record)
    }

    /// The schema this record conforms to.
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Sets the field `tag` to `value`, replacing any previous value.
    pub fn set(&mut self, tag: u32, value: FieldValue) -> Result<(), FieldError> {
        let field = self.schema.field(tag).ok_or(FieldError::UnknownTag(tag))?;
        match (&field.kind, &value) {
            (FieldKind::Int, FieldValue::Int(_)) => {}
            (FieldKind::Str, FieldValue::Str(_)) => {}
            (FieldKind::Enum(domain), FieldValue::Enum(code)) => {
                if domain.name(*code).is_none() {
                    return Err(FieldError::UnknownEnumCode(tag, *code));
                }
            }
            _ => return Err(FieldError::KindMismatch(tag)),
        }
        self.fields.insert(tag, value);
        Ok(())
    }

    pub fn set_int(&mut self, tag: u32, value: i64) -> Result<(), FieldError> {
        self.set(tag, FieldValue::Int(value))
    }

    pub fn set_str(&mut self, tag: u32, value: impl Into<String>) -> Result<(), FieldError> {
        self.set(tag, FieldValue::Str(value.into()))
    }

    pub fn set_enum(&mut self, tag: u32, code: u32) -> Result<(), FieldError> {
        self.set(tag, FieldValue::Enum(code))
    }

    /// Sets an enum field by member name.
    pub fn set_enum_name(&mut self, tag: u32, name: &str) -> Result<(), FieldError> {
        let field = self.schema.field(tag).ok_or(FieldError::UnknownTag(tag))?;
        let FieldKind::Enum(domain) = &field.kind else {
            return Err(FieldError::KindMismatch(tag));
        };
        let code = domain
            .code(name)
            .ok_or_else(|| FieldError::UnknownEnumName(tag, name.to_owned()))?;
        self.fields.insert(tag, FieldValue::Enum(code));
        Ok(())
    }

    /// Raw stored value; `None` when the field is absent.
    pub fn get(&self, tag: u32) -> Option<&FieldValue> {
        self.fields.get(&tag)
    }

    /// `true` if the field is present.
    pub fn is_set(&self, tag: u32) -> bool {
        self.fields.contains_key(&tag)
    }

    /// Removes a field, returning it to the absent state.
    pub fn clear(&mut self, tag: u32) {
        self.fields.remove(&tag);
    }

    /// INT accessor; 0 when absent.
    pub fn int(&self, tag: u32) -> i64 {
        match self.fields.get(&tag) {
            Some(FieldValue::Int(v)) => *v,
            _ => 0,
        }
    }

    /// STRING accessor; empty when absent.
    pub fn str(&self, tag: u32) -> &str {
        match self.fields.get(&tag) {
            Some(FieldValue::Str(s)) => s,
            _ => "",
        }
    }

    /// ENUM code accessor; 0 when absent.
    pub fn enum_code(&self, tag: u32) -> u32 {
        match self.fields.get(&tag) {
            Some(FieldValue::Enum(c)) => *c,
            _ => 0,
        }
    }

    /// ENUM member name accessor: resolves the stored (or zero) code through
    /// the field's domain. `None` for non-enum tags and for codes outside
    /// the domain.
    pub fn enum_name(&self, tag: u32) -> Option<&str> {
        let field = self.schema.field(tag)?;
        let FieldKind::Enum(domain) = &field.kind else {
            return None;
        };
        domain.name(self.enum_code(tag))
    }

    /// Present fields in ascending tag order.
    pub fn fields(&self) -> impl Iterator<Item = (u32, &FieldValue)> {
        self.fields.iter().map(|(tag, value)| (*tag, value))
    }

    /// Inserts without domain validation. Decode fills records straight from
    /// wire data, which may carry enum codes outside the domain.
    pub(crate) fn insert_raw(&mut self, tag: u32, value: FieldValue) {
        self.fields.insert(tag, value);
    }
}
