use serde_json::json;
use tagpack::{
    record_from_json, record_to_json, EnumDomain, Field, FieldKind, Record, Schema,
};

fn person_schema() -> Schema {
    let gender = EnumDomain::new([("MALE", 0), ("FEMALE", 1)]).unwrap();
    Schema::new([
        Field::new("name", 1, FieldKind::Str),
        Field::new("age", 2, FieldKind::Int),
        Field::new("gender", 3, FieldKind::Enum(gender)),
    ])
    .unwrap()
}

fn alice(schema: &Schema) -> Record<'_> {
    let mut record = Record::new(schema);
    record.set_str(1, "Alice").unwrap();
    record.set_int(2, 24).unwrap();
    record.set_enum_name(3, "FEMALE").unwrap();
    record
}

#[test]
fn person_pinned_wire_bytes() {
    let schema = person_schema();
    let blob = tagpack::encode(&alice(&schema)).unwrap();
    assert_eq!(
        blob,
        [0x0a, 0x05, b'A', b'l', b'i', b'c', b'e', 0x10, 0x18, 0x18, 0x01]
    );
}

#[test]
fn person_roundtrip() {
    let schema = person_schema();
    let record = alice(&schema);
    let blob = tagpack::encode(&record).unwrap();
    let back = tagpack::decode(&blob, &schema).unwrap();
    assert_eq!(back, record);
    assert_eq!(back.str(1), "Alice");
    assert_eq!(back.int(2), 24);
    assert_eq!(back.enum_code(3), 1);
    assert_eq!(back.enum_name(3), Some("FEMALE"));
}

#[test]
fn encode_is_deterministic_and_order_independent() {
    let schema = person_schema();
    let a = tagpack::encode(&alice(&schema)).unwrap();

    // set fields in reverse order; wire order is tag order, not set order
    let mut record = Record::new(&schema);
    record.set_enum(3, 1).unwrap();
    record.set_int(2, 24).unwrap();
    record.set_str(1, "Alice").unwrap();
    let b = tagpack::encode(&record).unwrap();
    let c = tagpack::encode(&record).unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn partial_record_reads_zero_values() {
    let schema = person_schema();
    let mut record = Record::new(&schema);
    record.set_int(2, 24).unwrap();
    let blob = tagpack::encode(&record).unwrap();
    assert_eq!(blob, [0x10, 0x18]);

    let back = tagpack::decode(&blob, &schema).unwrap();
    assert_eq!(back.str(1), "");
    assert_eq!(back.int(2), 24);
    assert_eq!(back.enum_code(3), 0);
    assert_eq!(back.enum_name(3), Some("MALE"));
    assert!(!back.is_set(1));
    assert!(back.is_set(2));
    assert!(!back.is_set(3));
}

#[test]
fn negative_int_roundtrip() {
    let schema = person_schema();
    let mut record = Record::new(&schema);
    record.set_int(2, -1).unwrap();
    let blob = tagpack::encode(&record).unwrap();

    // two's-complement varint: header byte plus ten payload bytes
    let mut expected = vec![0x10];
    expected.extend_from_slice(&[0xff; 9]);
    expected.push(0x01);
    assert_eq!(blob, expected);

    let back = tagpack::decode(&blob, &schema).unwrap();
    assert_eq!(back.int(2), -1);
}

#[test]
fn int_extremes_roundtrip() {
    let schema = person_schema();
    for value in [i64::MIN, i64::MAX, 0, 1, -1_000_000] {
        let mut record = Record::new(&schema);
        record.set_int(2, value).unwrap();
        let blob = tagpack::encode(&record).unwrap();
        let back = tagpack::decode(&blob, &schema).unwrap();
        assert_eq!(back.int(2), value, "value {value}");
    }
}

#[test]
fn multibyte_string_roundtrip() {
    let schema = person_schema();
    let mut record = Record::new(&schema);
    record.set_str(1, "Алиса ✅").unwrap();
    let blob = tagpack::encode(&record).unwrap();
    let back = tagpack::decode(&blob, &schema).unwrap();
    assert_eq!(back.str(1), "Алиса ✅");
}

#[test]
fn json_view_matrix() {
    let schema = person_schema();
    let record = alice(&schema);
    assert_eq!(
        record_to_json(&record),
        json!({"name": "Alice", "age": 24, "gender": "FEMALE"})
    );

    // absent fields render their zero values
    assert_eq!(
        record_to_json(&Record::new(&schema)),
        json!({"name": "", "age": 0, "gender": "MALE"})
    );

    let back = record_from_json(
        &schema,
        &json!({"name": "Alice", "age": 24, "gender": "FEMALE"}),
    )
    .unwrap();
    assert_eq!(back, record);

    // enums also accept bare codes
    let by_code = record_from_json(&schema, &json!({"gender": 1})).unwrap();
    assert_eq!(by_code.enum_name(3), Some("FEMALE"));
    assert!(!by_code.is_set(1));
}
