use crate::options::{Delimiter, EncodeOptions};
use crate::value::Value;

/// Encode one primitive as a bare token. Strings pick up quotes as needed;
/// the active delimiter participates in that decision.
pub fn encode_primitive(value: &Value, delimiter: Delimiter) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => encode_string_literal(s, delimiter),
        Value::Array(_) | Value::Object(_) => unreachable!("expected a primitive"),
    }
}

pub fn encode_string_literal(value: &str, delimiter: Delimiter) -> String {
    if is_safe_unquoted(value, delimiter) {
        value.to_string()
    } else {
        escape_and_quote(value)
    }
}

pub fn encode_key(key: &str) -> String {
    if is_valid_unquoted_key(key) {
        key.to_string()
    } else {
        escape_and_quote(key)
    }
}

fn escape_and_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

pub fn encode_and_join_primitives(values: &[Value], delimiter: Delimiter) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(delimiter.as_char());
        }
        out.push_str(&encode_primitive(value, delimiter));
    }
    out
}

/// Format an array header: `key?[marker?N delim?]{fields?}:`. The delimiter
/// character appears in the bracket segment only when it is not the comma
/// default; field names are joined with the active delimiter.
pub fn format_header(
    length: usize,
    key: Option<&str>,
    fields: Option<&[String]>,
    options: &EncodeOptions,
) -> String {
    let mut header = String::new();
    if let Some(key) = key {
        header.push_str(&encode_key(key));
    }

    let marker = if options.length_marker { "#" } else { "" };
    match options.delimiter {
        Delimiter::Comma => header.push_str(&format!("[{marker}{length}]")),
        delim => header.push_str(&format!("[{marker}{length}{}]", delim.as_char())),
    }

    if let Some(fields) = fields {
        if !fields.is_empty() {
            let names: Vec<String> = fields.iter().map(|f| encode_key(f)).collect();
            header.push('{');
            header.push_str(&names.join(options.delimiter.as_str()));
            header.push('}');
        }
    }

    header.push(':');
    header
}

/// Header plus delimiter-joined values on one line; header alone when the
/// array is empty.
pub fn encode_inline_array_line(
    values: &[Value],
    key: Option<&str>,
    options: &EncodeOptions,
) -> String {
    let header = format_header(values.len(), key, None, options);
    if values.is_empty() {
        return header;
    }
    let joined = encode_and_join_primitives(values, options.delimiter);
    format!("{header} {joined}")
}

/// Whether a string survives as a bare token: no structural characters, no
/// delimiter, no literal lookalikes, no surrounding whitespace, and no
/// leading list marker.
pub fn is_safe_unquoted(value: &str, delimiter: Delimiter) -> bool {
    if value.is_empty() || value.trim() != value {
        return false;
    }
    if matches!(value, "true" | "false" | "null") || is_numeric_like(value) {
        return false;
    }
    if value.contains([':', '"', '\\', '[', ']', '{', '}', '\n', '\r', '\t']) {
        return false;
    }
    if value.contains(delimiter.as_char()) {
        return false;
    }
    !value.starts_with('-')
}

/// Whether a string could be mistaken for a number by the decoder. Covers the
/// signed-decimal pattern, leading-zero forms like `0123`, and anything the
/// float parser itself would accept.
pub fn is_numeric_like(value: &str) -> bool {
    is_decimal_pattern(value)
        || is_octal_like(value)
        || matches!(value.parse::<f64>(), Ok(v) if v.is_finite())
}

fn is_decimal_pattern(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0usize;
    if i < b.len() && b[i] == b'-' {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    if i == int_start {
        return false;
    }
    if i < b.len() && b[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return false;
        }
    }
    if i < b.len() && matches!(b[i], b'e' | b'E') {
        i += 1;
        if i < b.len() && matches!(b[i], b'+' | b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == b.len()
}

fn is_octal_like(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() > 1 && b[0] == b'0' && b[1..].iter().all(u8::is_ascii_digit)
}

/// Keys stay bare only for `^[A-Za-z_][A-Za-z0-9_.]*$`.
pub fn is_valid_unquoted_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}
