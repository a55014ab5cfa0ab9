#![cfg(feature = "json")]

use serde_json::json;
use toon_codec::{DecodeOptions, Delimiter, EncodeOptions, Value, decode, encode};

fn assert_table(input: serde_json::Value, opts: &EncodeOptions, expected: &str) {
    let value = Value::from(input.clone());
    let text = encode(&value, opts);
    assert_eq!(text, expected);

    let back = decode(&text, &DecodeOptions::default()).unwrap();
    assert_eq!(serde_json::Value::from(back), input);
}

#[test]
fn comma_table() {
    assert_table(
        json!({
            "users": [
                {"id": 1, "name": "ada", "admin": true},
                {"id": 2, "name": "grace", "admin": false},
            ]
        }),
        &EncodeOptions::default(),
        "users[2]{id,name,admin}:\n  1,ada,true\n  2,grace,false",
    );
}

#[test]
fn pipe_table_quotes_only_its_own_delimiter() {
    assert_table(
        json!({
            "rows": [
                {"msg": "a,b", "n": 1},
                {"msg": "c|d", "n": 2},
            ]
        }),
        &EncodeOptions::default().with_delimiter(Delimiter::Pipe),
        "rows[2|]{msg|n}:\n  a,b|1\n  \"c|d\"|2",
    );
}

#[test]
fn tab_table_leaves_spaces_bare() {
    assert_table(
        json!({"t": [{"a": "x y", "b": 1}]}),
        &EncodeOptions::default().with_delimiter(Delimiter::Tab),
        "t[1\t]{a\tb}:\n  x y\t1",
    );
}

#[test]
fn length_marker_survives_the_trip() {
    assert_table(
        json!({"xs": [1, 2], "users": [{"id": 1}]}),
        &EncodeOptions::default().with_length_marker(true),
        "xs[#2]: 1,2\nusers[#1]{id}:\n  1",
    );
}

#[test]
fn quoted_field_names() {
    assert_table(
        json!({"rows": [{"full name": "ada", "id": 1}]}),
        &EncodeOptions::default(),
        "rows[1]{\"full name\",id}:\n  ada,1",
    );
}
