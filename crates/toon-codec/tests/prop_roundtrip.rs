use proptest::prelude::*;
use toon_codec::{DecodeOptions, Delimiter, EncodeOptions, Map, Number, Value, decode, encode};

fn leaf(pat: &'static str) -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (i64::MAX as u64 + 1..=u64::MAX).prop_map(Value::from),
        any::<f64>().prop_filter_map("finite", |f| Number::from_f64(f).map(Value::Number)),
        pat.prop_map(Value::from),
    ]
}

/// Arbitrary nested values. Objects are kept non-empty: an empty object as
/// the first field of a list item cannot be told apart from a nested object
/// holding the item's remaining fields.
fn value(pat: &'static str) -> impl Strategy<Value = Value> {
    leaf(pat).prop_recursive(3, 24, 6, move |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::vec((".*", inner), 1..5).prop_map(|entries| {
                let mut map = Map::new();
                for (key, value) in entries {
                    map.insert(key, value);
                }
                Value::Object(map)
            }),
        ]
    })
}

/// Root documents: a non-empty object or an array. A bare multi-word string
/// at the root does not decode, and an empty root object encodes to nothing.
fn root(pat: &'static str) -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec((".*", value(pat)), 1..5).prop_map(|entries| {
            let mut map = Map::new();
            for (key, value) in entries {
                map.insert(key, value);
            }
            Value::Object(map)
        }),
        prop::collection::vec(value(pat), 0..5).prop_map(Value::Array),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn encode_decode_is_identity(value in root(".*")) {
        let text = encode(&value, &EncodeOptions::default());
        let back = decode(&text, &DecodeOptions::default()).unwrap();
        prop_assert_eq!(back, value);
    }

    // A bare list item holding a comma always reads back as an inline array,
    // so string leaves here steer clear of commas.
    #[test]
    fn encode_decode_is_identity_with_pipes(value in root("[^,]*")) {
        let opts = EncodeOptions::default().with_delimiter(Delimiter::Pipe);
        let text = encode(&value, &opts);
        let back = decode(&text, &DecodeOptions::default()).unwrap();
        prop_assert_eq!(back, value);
    }

    #[test]
    fn decoding_never_panics(input in "(?s).{0,200}") {
        let _ = decode(&input, &DecodeOptions::default());
        let _ = decode(&input, &DecodeOptions::default().with_strict(false));
    }
}
