//! JSON view of records, for display and interop.

use serde_json::{Map, Number, Value};

use crate::error::JsonError;
use crate::record::{FieldValue, Record};
use crate::schema::{FieldKind, Schema};

/// Renders `record` as a JSON object keyed by field name.
///
/// Every schema field appears; absent fields render their zero values. Enum
/// fields render as the member name, falling back to the bare code for codes
/// outside the domain (unknown codes survive decode).
pub fn record_to_json(record: &Record) -> Value {
    let mut map = Map::new();
    for field in record.schema().fields() {
        let value = match &field.kind {
            FieldKind::Int => Value::Number(Number::from(record.int(field.tag))),
            FieldKind::Str => Value::String(record.str(field.tag).to_owned()),
            FieldKind::Enum(domain) => {
                let code = record.enum_code(field.tag);
                match domain.name(code) {
                    Some(name) => Value::String(name.to_owned()),
                    None => Value::Number(Number::from(code)),
                }
            }
        };
        map.insert(field.name.clone(), value);
    }
    Value::Object(map)
}

/// Builds a record from a JSON object keyed by field name.
///
/// Enum fields accept a member name or an integer code. Keys that are not
/// schema fields fail with [`JsonError::UnknownField`].
pub fn record_from_json<'a>(schema: &'a Schema, value: &Value) -> Result<Record<'a>, JsonError> {
    let Value::Object(map) = value else {
        return Err(JsonError::NotAnObject);
    };
    let mut record = Record::new(schema);
    for (name, json) in map {
        let field = schema
            .field_by_name(name)
            .ok_or_else(|| JsonError::UnknownField(name.clone()))?;
        let parsed = match (&field.kind, json) {
            (FieldKind::Int, Value::Number(n)) => {
                let v = n
                    .as_i64()
                    .ok_or_else(|| JsonError::IntOutOfRange(name.clone()))?;
                FieldValue::Int(v)
            }
            (FieldKind::Str, Value::String(s)) => FieldValue::Str(s.clone()),
            (FieldKind::Enum(domain), Value::String(s)) => {
                let code = domain
                    .code(s)
                    .ok_or_else(|| JsonError::UnknownEnumMember(name.clone(), s.clone()))?;
                FieldValue::Enum(code)
            }
            (FieldKind::Enum(domain), Value::Number(n)) => {
                let code = n
                    .as_u64()
                    .and_then(|v| u32::try_from(v).ok())
                    .filter(|code| domain.name(*code).is_some())
                    .ok_or_else(|| JsonError::UnknownEnumMember(name.clone(), n.to_string()))?;
                FieldValue::Enum(code)
            }
            _ => return Err(JsonError::KindMismatch(name.clone())),
        };
        record.insert_raw(field.tag, parsed);
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EnumDomain, Field};
    use serde_json::json;

    fn schema() -> Schema {
        let domain = EnumDomain::new([("MALE", 0), ("FEMALE", 1)]).unwrap();
        Schema::new([
            Field::new("name", 1, FieldKind::Str),
            Field::new("age", 2, FieldKind::Int),
            Field::new("gender", 3, FieldKind::Enum(domain)),
        ])
        .unwrap()
    }

    #[test]
    fn json_conversion_errors() {
        let schema = schema();
        assert_eq!(
            record_from_json(&schema, &json!([1, 2])),
            Err(JsonError::NotAnObject)
        );
        assert_eq!(
            record_from_json(&schema, &json!({"email": "a@b"})),
            Err(JsonError::UnknownField("email".to_owned()))
        );
        assert_eq!(
            record_from_json(&schema, &json!({"age": "old"})),
            Err(JsonError::KindMismatch("age".to_owned()))
        );
        assert_eq!(
            record_from_json(&schema, &json!({"gender": "OTHER"})),
            Err(JsonError::UnknownEnumMember("gender".to_owned(), "OTHER".to_owned()))
        );
        assert_eq!(
            record_from_json(&schema, &json!({"gender": 9})),
            Err(JsonError::UnknownEnumMember("gender".to_owned(), "9".to_owned()))
        );
        assert_eq!(
            record_from_json(&schema, &json!({"age": 1e30})),
            Err(JsonError::IntOutOfRange("age".to_owned()))
        );
    }

    #[test]
    fn unknown_enum_code_renders_numerically() {
        let schema = schema();
        let blob = [0x18, 0x05]; // gender = 5, outside the domain
        let record = crate::decode(&blob, &schema).unwrap();
        assert_eq!(
            record_to_json(&record),
            json!({"name": "", "age": 0, "gender": 5})
        );
    }
}
