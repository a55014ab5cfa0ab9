#![cfg(feature = "json")]

use serde_json::json;
use toon_codec::{encode, EncodeOptions, Value};

fn enc(v: serde_json::Value) -> String {
    encode(&Value::from(v), &EncodeOptions::default())
}

#[test]
fn root_primitives_are_bare_tokens() {
    assert_eq!(enc(json!(null)), "null");
    assert_eq!(enc(json!(true)), "true");
    assert_eq!(enc(json!(false)), "false");
    assert_eq!(enc(json!(42)), "42");
    assert_eq!(enc(json!(-7)), "-7");
    assert_eq!(enc(json!(2.5)), "2.5");
    assert_eq!(enc(json!("hello")), "hello");
}

#[test]
fn flat_object() {
    assert_eq!(enc(json!({"a": 1, "b": true, "s": "hi"})), "a: 1\nb: true\ns: hi");
    assert_eq!(
        enc(json!({"id": 123, "name": "Ada", "active": true})),
        "id: 123\nname: Ada\nactive: true"
    );
}

#[test]
fn nested_objects_indent_one_level_per_depth() {
    assert_eq!(enc(json!({"outer": {"inner": 5}})), "outer:\n  inner: 5");
    assert_eq!(
        enc(json!({"a": {"b": {"c": 1}}})),
        "a:\n  b:\n    c: 1"
    );
}

#[test]
fn empty_containers() {
    assert_eq!(enc(json!([])), "[0]:");
    assert_eq!(enc(json!({"xs": []})), "xs[0]:");
    assert_eq!(enc(json!({"cfg": {}})), "cfg:");
    assert_eq!(enc(json!({})), "");
}

#[test]
fn keys_quote_unless_identifier_shaped() {
    assert_eq!(enc(json!({"a key": 1})), "\"a key\": 1");
    assert_eq!(enc(json!({"": 1})), "\"\": 1");
    assert_eq!(enc(json!({"dotted.path_2": 1})), "dotted.path_2: 1");
    assert_eq!(enc(json!({"2start": 1})), "\"2start\": 1");
    assert_eq!(enc(json!({"has:colon": 1})), "\"has:colon\": 1");
}

#[test]
fn string_values_quote_only_when_needed() {
    assert_eq!(enc(json!({"v": "plain"})), "v: plain");
    assert_eq!(enc(json!({"v": "two words"})), "v: two words");
    assert_eq!(enc(json!({"v": "has,comma"})), "v: \"has,comma\"");
    assert_eq!(enc(json!({"v": "a:b"})), "v: \"a:b\"");
    assert_eq!(enc(json!({"v": " padded"})), "v: \" padded\"");
    assert_eq!(enc(json!({"v": "-dash"})), "v: \"-dash\"");
    assert_eq!(enc(json!({"v": "true"})), "v: \"true\"");
    assert_eq!(enc(json!({"v": ""})), "v: \"\"");
    assert_eq!(enc(json!({"v": "[5]"})), "v: \"[5]\"");
}

#[test]
fn escapes_cover_exactly_the_canonical_set() {
    assert_eq!(enc(json!({"v": "line\nbreak"})), "v: \"line\\nbreak\"");
    assert_eq!(enc(json!({"v": "tab\there"})), "v: \"tab\\there\"");
    assert_eq!(enc(json!({"v": "cr\rhere"})), "v: \"cr\\rhere\"");
    assert_eq!(enc(json!({"v": "q\"q"})), "v: \"q\\\"q\"");
    assert_eq!(enc(json!({"v": "b\\s"})), "v: \"b\\\\s\"");
    // Unicode passes through untouched.
    assert_eq!(enc(json!({"v": "héllo 世界"})), "v: héllo 世界");
}

#[test]
fn no_trailing_newline() {
    let text = enc(json!({"a": 1, "b": 2}));
    assert_eq!(text, "a: 1\nb: 2");
    assert!(!text.ends_with('\n'));
}

#[test]
fn numbers_canonicalize() {
    assert_eq!(enc(json!(3.0)), "3");
    assert_eq!(enc(json!(1e21)), "1000000000000000000000");
    assert_eq!(enc(json!(1.5e-7)), "0.00000015");
    assert_eq!(enc(json!(u64::MAX)), "18446744073709551615");
    assert_eq!(enc(json!(i64::MIN)), "-9223372036854775808");
}

#[test]
fn inline_array_of_primitives() {
    assert_eq!(enc(json!({"xs": [1, 2, 3]})), "xs[3]: 1,2,3");
    assert_eq!(enc(json!({"xs": [1, "a", true, null]})), "xs[4]: 1,a,true,null");
    assert_eq!(enc(json!([1, 2])), "[2]: 1,2");
}

#[test]
fn nested_arrays_expand_to_list_items() {
    assert_eq!(
        enc(json!({"xs": [[1, 2], [3]]})),
        "xs[2]:\n  - [2]: 1,2\n  - [1]: 3"
    );
}
