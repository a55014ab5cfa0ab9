#![no_main]
use libfuzzer_sys::fuzz_target;
use toon_codec::{DecodeOptions, EncodeOptions, Map, Value, decode, encode};

const MAX_DEPTH: usize = 6;
const MAX_LEN: usize = 12;

fn gen_value(u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
    let choice: u8 = u.arbitrary()?;
    if depth >= MAX_DEPTH {
        return Ok(Value::Null);
    }
    Ok(match choice % 8 {
        0 => Value::Null,
        1 => Value::from(u.arbitrary::<bool>()?),
        2 => Value::from(u.arbitrary::<i64>()?),
        3 => Value::from(u.arbitrary::<u64>()?),
        // Non-finite floats fold to null at construction.
        4 => Value::from(u.arbitrary::<f64>()?),
        5 => Value::from(u.arbitrary::<String>()?),
        6 => {
            let len = u.int_in_range(0..=MAX_LEN)?;
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(gen_value(u, depth + 1)?);
            }
            Value::Array(items)
        }
        _ => Value::Object(gen_object(u, depth + 1)?),
    })
}

/// Objects come out non-empty: an empty object as a list item's first field
/// cannot be told apart from a nested object holding the remaining fields.
fn gen_object(u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Map> {
    let len = u.int_in_range(1..=MAX_LEN)?;
    let mut map = Map::new();
    for _ in 0..len {
        let key: String = u.arbitrary()?;
        map.insert(key, gen_value(u, depth + 1)?);
    }
    Ok(map)
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);
    let Ok(root) = gen_object(&mut u, 0) else { return };
    let value = Value::Object(root);

    let text = encode(&value, &EncodeOptions::default());
    match decode(&text, &DecodeOptions::default()) {
        Ok(back) => assert_eq!(back, value, "text was:\n{text}"),
        Err(e) => panic!("decode failed: {e}\ntext was:\n{text}"),
    }
});
