use toon_codec::{Map, Number, Value};

#[test]
fn number_canonical_forms() {
    assert_eq!(Number::from_f64(3.0), Some(Number::I64(3)));
    assert_eq!(Number::from_f64(-0.0), Some(Number::I64(0)));
    assert_eq!(Number::from_f64(2.5), Some(Number::F64(2.5)));
    assert_eq!(Number::from_f64(f64::NAN), None);
    assert_eq!(Number::from_f64(f64::INFINITY), None);
    assert_eq!(
        Number::from_f64(1e19),
        Some(Number::U64(10_000_000_000_000_000_000))
    );
    assert_eq!(Number::from_u64(7), Number::I64(7));
    assert_eq!(Number::from_u64(u64::MAX), Number::U64(u64::MAX));
}

#[test]
fn number_accessors() {
    assert_eq!(Number::I64(-3).as_i64(), Some(-3));
    assert_eq!(Number::I64(-3).as_u64(), None);
    assert_eq!(Number::I64(3).as_u64(), Some(3));
    assert_eq!(Number::U64(u64::MAX).as_i64(), None);
    assert_eq!(Number::F64(2.5).as_f64(), 2.5);
}

#[test]
fn from_impls_cover_the_common_shapes() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(-5i32), Value::Number(Number::I64(-5)));
    assert_eq!(Value::from(5u8), Value::Number(Number::I64(5)));
    assert_eq!(Value::from(u64::MAX), Value::Number(Number::U64(u64::MAX)));
    assert_eq!(Value::from(f64::NAN), Value::Null);
    assert_eq!(Value::from("s"), Value::String("s".into()));
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some(1i64)), Value::Number(Number::I64(1)));

    let arr = Value::from(vec![1i64, 2, 3]);
    assert_eq!(arr.as_array().map(<[Value]>::len), Some(3));

    let collected: Value = (1i64..=3).collect();
    assert_eq!(collected, arr);
}

#[test]
fn maps_keep_insertion_order() {
    let mut map = Map::new();
    map.insert("z", Value::from(1i64));
    map.insert("a", Value::from(2i64));
    let keys: Vec<&String> = map.keys().collect();
    assert_eq!(keys, ["z", "a"]);

    // Re-inserting an existing key keeps its original position.
    map.insert("z", Value::from(3i64));
    let keys: Vec<&String> = map.keys().collect();
    assert_eq!(keys, ["z", "a"]);
    assert_eq!(map.get("z"), Some(&Value::from(3i64)));
}

#[test]
fn value_accessors() {
    let value = Value::from(vec![Value::from(1i64)]);
    assert!(value.as_object().is_none());
    assert_eq!(value.as_array().map(<[Value]>::len), Some(1));

    let mut map = Map::new();
    map.insert("k", Value::from("v"));
    let obj = Value::Object(map);
    assert_eq!(obj.get("k").and_then(Value::as_str), Some("v"));
    assert_eq!(obj.get("missing"), None);
    assert!(obj.as_array().is_none());
}

#[cfg(feature = "json")]
mod json_interop {
    use serde_json::json;
    use toon_codec::{Number, Value};

    #[test]
    fn object_order_is_preserved_both_ways() {
        let value = Value::from(json!({"z": 1, "a": 2}));
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a"]);

        let back = serde_json::Value::from(value);
        let keys: Vec<&str> = back.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn json_numbers_map_onto_the_canonical_variants() {
        assert_eq!(Value::from(json!(1)), Value::Number(Number::I64(1)));
        assert_eq!(
            Value::from(json!(u64::MAX)),
            Value::Number(Number::U64(u64::MAX))
        );
        assert_eq!(Value::from(json!(2.5)), Value::Number(Number::F64(2.5)));

        assert_eq!(serde_json::Value::from(Value::Number(Number::U64(u64::MAX))), json!(u64::MAX));
        assert_eq!(serde_json::Value::from(Value::Number(Number::F64(2.5))), json!(2.5));
    }
}
