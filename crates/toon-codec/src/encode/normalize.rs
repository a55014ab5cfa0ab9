use crate::value::{Number, Value};

/// Rebuild a value in canonical form: NaN and infinities become `null`,
/// `-0.0` becomes `0`, integral floats collapse to integers, and unsigned
/// magnitudes within `i64` range move to the signed variant. Containers
/// normalize recursively.
pub fn normalize_value(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => match *n {
            Number::I64(i) => Value::Number(Number::I64(i)),
            Number::U64(u) => Value::Number(Number::from_u64(u)),
            Number::F64(f) => match Number::from_f64(f) {
                Some(canonical) => Value::Number(canonical),
                None => Value::Null,
            },
        },
        Value::String(s) => Value::String(s.clone()),
        Value::Array(items) => Value::Array(items.iter().map(normalize_value).collect()),
        Value::Object(obj) => Value::Object(
            obj.iter()
                .map(|(k, v)| (k.clone(), normalize_value(v)))
                .collect(),
        ),
    }
}

/// The four array serialization strategies, in selection priority order.
pub enum ArrayShape {
    /// Header only, `[0]:`.
    Empty,
    /// Every item is a primitive; the whole array rides on the header line.
    Inline,
    /// Uniform objects: identical key sets, all values primitive. Carries the
    /// field names in first-object key order.
    Tabular(Vec<String>),
    /// Everything else expands to `- ` items.
    List,
}

pub fn classify_array(items: &[Value]) -> ArrayShape {
    if items.is_empty() {
        return ArrayShape::Empty;
    }
    if items.iter().all(Value::is_primitive) {
        return ArrayShape::Inline;
    }
    if items.iter().all(|v| matches!(v, Value::Object(_))) {
        if let Some(fields) = extract_tabular_fields(items) {
            return ArrayShape::Tabular(fields);
        }
    }
    ArrayShape::List
}

/// Field names for tabular form, or `None` when the rows do not line up.
/// Key-set equality is order-independent; the first row fixes column order.
fn extract_tabular_fields(items: &[Value]) -> Option<Vec<String>> {
    let first = match items.first() {
        Some(Value::Object(obj)) => obj,
        _ => return None,
    };
    if first.is_empty() {
        return None;
    }
    let fields: Vec<String> = first.keys().cloned().collect();

    for item in items {
        let Value::Object(obj) = item else {
            return None;
        };
        if obj.len() != fields.len() {
            return None;
        }
        for field in &fields {
            match obj.get(field) {
                Some(value) if value.is_primitive() => {}
                _ => return None,
            }
        }
    }
    Some(fields)
}
