use std::fmt::Write as _;

use scylla::frame::response::result::CqlValue;
use scylla::frame::value::CqlTimestamp;
use serde_json::{Map, Number, Value};

pub fn cell_to_json(cell: Option<CqlValue>) -> Value {
    match cell {
        None => Value::Null,
        Some(value) => cql_value_to_json(value),
    }
}

/// Maps a CQL value onto JSON: scalars natively, uuids/inet/timestamps as
/// strings, blobs as 0x-hex, collections and UDTs recursively. Types without
/// a natural JSON shape fall back to their debug rendering rather than being
/// dropped.
pub fn cql_value_to_json(value: CqlValue) -> Value {
    match value {
        CqlValue::Ascii(text) | CqlValue::Text(text) => Value::String(text),
        CqlValue::Boolean(value) => Value::Bool(value),
        CqlValue::TinyInt(value) => Value::Number(value.into()),
        CqlValue::SmallInt(value) => Value::Number(value.into()),
        CqlValue::Int(value) => Value::Number(value.into()),
        CqlValue::BigInt(value) => Value::Number(value.into()),
        CqlValue::Counter(counter) => Value::Number(counter.0.into()),
        CqlValue::Float(value) => float_to_json(f64::from(value)),
        CqlValue::Double(value) => float_to_json(value),
        CqlValue::Uuid(uuid) => Value::String(uuid.to_string()),
        CqlValue::Inet(addr) => Value::String(addr.to_string()),
        CqlValue::Timestamp(ts) => timestamp_to_json(ts),
        CqlValue::Blob(bytes) => Value::String(blob_hex(&bytes)),
        CqlValue::Empty => Value::Null,
        CqlValue::List(items) | CqlValue::Set(items) => {
            Value::Array(items.into_iter().map(cql_value_to_json).collect())
        }
        CqlValue::Tuple(items) => Value::Array(items.into_iter().map(cell_to_json).collect()),
        CqlValue::Map(pairs) => {
            let mut object = Map::new();
            for (key, value) in pairs {
                let key = match cql_value_to_json(key) {
                    Value::String(text) => text,
                    other => other.to_string(),
                };
                object.insert(key, cql_value_to_json(value));
            }
            Value::Object(object)
        }
        CqlValue::UserDefinedType { fields, .. } => {
            let mut object = Map::new();
            for (name, field) in fields {
                object.insert(name, cell_to_json(field));
            }
            Value::Object(object)
        }
        other => Value::String(format!("{other:?}")),
    }
}

fn float_to_json(value: f64) -> Value {
    // NaN and infinities have no JSON number form.
    Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(value.to_string()))
}

fn timestamp_to_json(ts: CqlTimestamp) -> Value {
    match chrono::DateTime::from_timestamp_millis(ts.0) {
        Some(datetime) => {
            Value::String(datetime.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
        }
        None => Value::Number(ts.0.into()),
    }
}

fn blob_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_cell_maps_to_null() {
        assert_eq!(cell_to_json(None), Value::Null);
        assert_eq!(cell_to_json(Some(CqlValue::Empty)), Value::Null);
    }

    #[test]
    fn scalars_map_natively() {
        assert_eq!(cql_value_to_json(CqlValue::Int(42)), json!(42));
        assert_eq!(cql_value_to_json(CqlValue::BigInt(-7)), json!(-7));
        assert_eq!(cql_value_to_json(CqlValue::Boolean(true)), json!(true));
        assert_eq!(
            cql_value_to_json(CqlValue::Text("BUS-001".to_string())),
            json!("BUS-001")
        );
        assert_eq!(cql_value_to_json(CqlValue::Double(1.5)), json!(1.5));
    }

    #[test]
    fn blob_renders_as_hex() {
        assert_eq!(
            cql_value_to_json(CqlValue::Blob(vec![0x00, 0xab, 0xff])),
            json!("0x00abff")
        );
    }

    #[test]
    fn timestamp_renders_as_rfc3339() {
        let value = cql_value_to_json(CqlValue::Timestamp(CqlTimestamp(0)));
        assert_eq!(value, json!("1970-01-01T00:00:00.000Z"));
    }

    #[test]
    fn collections_convert_recursively() {
        let list = CqlValue::List(vec![CqlValue::Int(1), CqlValue::Int(2)]);
        assert_eq!(cql_value_to_json(list), json!([1, 2]));

        let map = CqlValue::Map(vec![(
            CqlValue::Text("zone".to_string()),
            CqlValue::Text("PARIS-A".to_string()),
        )]);
        assert_eq!(cql_value_to_json(map), json!({"zone": "PARIS-A"}));

        let tuple = CqlValue::Tuple(vec![Some(CqlValue::Int(1)), None]);
        assert_eq!(cql_value_to_json(tuple), json!([1, null]));
    }

    #[test]
    fn udt_converts_to_object() {
        let udt = CqlValue::UserDefinedType {
            keyspace: "fleet".to_string(),
            type_name: "position".to_string(),
            fields: vec![
                ("lat".to_string(), Some(CqlValue::Double(48.85))),
                ("lon".to_string(), None),
            ],
        };
        assert_eq!(cql_value_to_json(udt), json!({"lat": 48.85, "lon": null}));
    }

    #[test]
    fn non_finite_floats_fall_back_to_strings() {
        assert_eq!(cql_value_to_json(CqlValue::Double(f64::NAN)), json!("NaN"));
    }
}
