use crate::error::{Error, Result};
use crate::options::Delimiter;
use crate::value::{Number, Value};

/// Parsed form of `key?[marker?length delim?]{fields?}:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayHeader {
    pub key: Option<String>,
    /// Declared element count.
    pub length: usize,
    pub delimiter: Delimiter,
    /// Column names; a non-empty list selects tabular decoding.
    pub fields: Option<Vec<String>>,
    pub has_length_marker: bool,
}

/// First position of `needle` outside double quotes, honoring backslash
/// escapes inside quotes. `needle` must be ASCII.
pub fn find_unquoted(s: &str, needle: char) -> Option<usize> {
    debug_assert!(needle.is_ascii());
    let target = needle as u8;
    let mut in_str = false;
    let mut escape = false;
    for (i, &ch) in s.as_bytes().iter().enumerate() {
        if in_str {
            if escape {
                escape = false;
                continue;
            }
            match ch {
                b'\\' => escape = true,
                b'"' => in_str = false,
                _ => {}
            }
        } else if ch == b'"' {
            in_str = true;
        } else if ch == target {
            return Some(i);
        }
    }
    None
}

/// Position of the quote closing the one at `open`, skipping escaped pairs.
pub fn find_closing_quote(s: &str, open: usize) -> Option<usize> {
    let b = s.as_bytes();
    let mut i = open + 1;
    while i < b.len() {
        match b[i] {
            b'\\' => i += 2,
            b'"' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Split on the delimiter outside quotes, trimming each token. Interior
/// empties survive (`a,,b` gives three tokens); empty input gives none.
pub fn split_delimited<'a>(s: &'a str, delimiter: Delimiter) -> Vec<&'a str> {
    if s.is_empty() {
        return Vec::new();
    }
    let target = delimiter.as_char() as u8;
    let b = s.as_bytes();
    let mut out = Vec::new();
    let mut start = 0usize;
    let mut in_quotes = false;
    let mut i = 0usize;
    while i < b.len() {
        let ch = b[i];
        if ch == b'\\' && in_quotes && i + 1 < b.len() {
            i += 2;
            continue;
        }
        if ch == b'"' {
            in_quotes = !in_quotes;
            i += 1;
            continue;
        }
        if ch == target && !in_quotes {
            out.push(s[start..i].trim());
            start = i + 1;
        }
        i += 1;
    }
    out.push(s[start..].trim());
    out
}

/// Decide between "data row" and "key-value line" in one scan: whichever of
/// the delimiter or `:` appears first outside quotes wins; a line with
/// neither is a row.
pub fn is_row_line(content: &str, delimiter: Delimiter) -> bool {
    let target = delimiter.as_char() as u8;
    let mut in_str = false;
    let mut escape = false;
    for &ch in content.as_bytes() {
        if in_str {
            if escape {
                escape = false;
                continue;
            }
            match ch {
                b'\\' => escape = true,
                b'"' => in_str = false,
                _ => {}
            }
        } else if ch == b'"' {
            in_str = true;
        } else if ch == target {
            return true;
        } else if ch == b':' {
            return false;
        }
    }
    true
}

/// Whether an object-field line can hold a key-value pair. Quoted keys only
/// count when a colon follows the closing quote.
pub fn is_key_value_line(content: &str) -> bool {
    if content.starts_with('"') {
        match find_closing_quote(content, 0) {
            Some(close) => content[close + 1..].contains(':'),
            None => false,
        }
    } else {
        content.contains(':')
    }
}

/// Whether list-item content (after the `- ` marker) begins a keyless array
/// header.
pub fn starts_array_header(content: &str) -> bool {
    let t = content.trim();
    t.starts_with('[') && find_unquoted(t, ':').is_some()
}

/// Undo the canonical escapes. Anything else after a backslash is malformed.
pub fn unescape(s: &str) -> Result<String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => {
                return Err(Error::malformed(format!(
                    "invalid escape sequence: \\{other}"
                )));
            }
            None => {
                return Err(Error::malformed(
                    "invalid escape sequence: trailing backslash",
                ));
            }
        }
    }
    Ok(out)
}

/// Quoted tokens must be exactly one quoted span; unquoted tokens pass
/// through trimmed.
pub fn parse_string_literal(token: &str) -> Result<String> {
    let t = token.trim();
    if !t.starts_with('"') {
        return Ok(t.to_string());
    }
    match find_closing_quote(t, 0) {
        None => Err(Error::malformed(
            "unterminated string: missing closing quote",
        )),
        Some(close) if close != t.len() - 1 => {
            Err(Error::malformed("unexpected characters after closing quote"))
        }
        Some(close) => unescape(&t[1..close]),
    }
}

/// The numeric-literal test: a leading zero disqualifies unless a fraction
/// follows (`05` stays a string, `0.5` does not), and the token must parse
/// as a finite decimal. Sign, fraction, and exponent are accepted.
pub fn is_numeric_literal(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    let b = token.as_bytes();
    if b.len() > 1 && b[0] == b'0' && b[1] != b'.' {
        return false;
    }
    matches!(token.parse::<f64>(), Ok(v) if v.is_finite())
}

/// One token to one primitive. Integer unless the token spells a fraction or
/// exponent; integers past `u64` fall back to float.
pub fn parse_primitive_token(token: &str) -> Result<Value> {
    let t = token.trim();
    if t.is_empty() {
        return Ok(Value::String(String::new()));
    }
    if t.starts_with('"') {
        return parse_string_literal(t).map(Value::String);
    }
    match t {
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        "null" => return Ok(Value::Null),
        _ => {}
    }
    if is_numeric_literal(t) {
        let fractional = t.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'));
        if !fractional {
            if let Ok(i) = t.parse::<i64>() {
                return Ok(Value::Number(Number::I64(i)));
            }
            if let Ok(u) = t.parse::<u64>() {
                return Ok(Value::Number(Number::U64(u)));
            }
        }
        if let Ok(f) = t.parse::<f64>() {
            return Ok(Value::Number(Number::F64(f)));
        }
    }
    Ok(Value::String(t.to_string()))
}

/// Parse a key at the start of `content`, returning it with the byte offset
/// just past the colon.
pub fn parse_key(content: &str) -> Result<(String, usize)> {
    if content.starts_with('"') {
        let Some(close) = find_closing_quote(content, 0) else {
            return Err(Error::malformed("unterminated quoted key"));
        };
        let key = unescape(&content[1..close])?;
        let after = close + 1;
        if content[after..].starts_with(':') {
            Ok((key, after + 1))
        } else {
            Err(Error::malformed("missing colon after key"))
        }
    } else {
        match content.find(':') {
            Some(at) => Ok((content[..at].trim().to_string(), at + 1)),
            None => Err(Error::malformed("missing colon after key")),
        }
    }
}

/// Try to read `content` as an array header line.
///
/// `Ok(None)` means the line is not header-shaped and should be handled as a
/// key-value pair. Once an unquoted `[`...`]` group appears before the first
/// unquoted colon the line is committed: a bad length token inside it is a
/// fatal error rather than a fallback. The colon must directly follow the
/// bracket group or the `{fields}` group.
///
/// Returns the header and any inline values after the colon.
pub fn parse_array_header(content: &str) -> Result<Option<(ArrayHeader, Option<&str>)>> {
    let s = content.trim_start();
    let Some(colon) = find_unquoted(s, ':') else {
        return Ok(None);
    };
    let Some(bracket) = find_unquoted(s, '[') else {
        return Ok(None);
    };
    if bracket > colon {
        return Ok(None);
    }
    let Some(close_rel) = s[bracket..].find(']') else {
        return Ok(None);
    };
    let bracket_end = bracket + close_rel;

    let after_bracket = &s[bracket_end + 1..];
    let (fields_src, colon_at) = if let Some(rest) = after_bracket.strip_prefix('{') {
        let Some(brace_rel) = find_unquoted(rest, '}') else {
            return Ok(None);
        };
        if !rest[brace_rel + 1..].starts_with(':') {
            return Ok(None);
        }
        (Some(&rest[..brace_rel]), bracket_end + 2 + brace_rel + 1)
    } else if after_bracket.starts_with(':') {
        (None, bracket_end + 1)
    } else {
        return Ok(None);
    };

    let (length, delimiter, has_length_marker) =
        parse_bracket_segment(&s[bracket + 1..bracket_end])?;

    let key = if bracket > 0 {
        let raw = s[..bracket].trim();
        if raw.starts_with('"') {
            match parse_string_literal(raw) {
                Ok(k) => Some(k),
                Err(_) => return Ok(None),
            }
        } else {
            Some(raw.to_string())
        }
    } else {
        None
    };

    let fields = match fields_src {
        Some(src) => {
            let mut names = Vec::new();
            for token in split_delimited(src, delimiter) {
                names.push(parse_string_literal(token)?);
            }
            Some(names)
        }
        None => None,
    };

    let inline = {
        let rest = s[colon_at + 1..].trim();
        if rest.is_empty() { None } else { Some(rest) }
    };

    Ok(Some((
        ArrayHeader {
            key,
            length,
            delimiter,
            fields,
            has_length_marker,
        },
        inline,
    )))
}

/// Bracket segment `#?N<delim?>`: optional marker, digits, optional trailing
/// delimiter character.
fn parse_bracket_segment(seg: &str) -> Result<(usize, Delimiter, bool)> {
    let mut rest = seg;
    let has_marker = if let Some(stripped) = rest.strip_prefix('#') {
        rest = stripped;
        true
    } else {
        false
    };
    let mut delimiter = Delimiter::Comma;
    if let Some(last) = rest.chars().last() {
        if let Some(d) = Delimiter::from_suffix(last) {
            delimiter = d;
            rest = &rest[..rest.len() - last.len_utf8()];
        }
    }
    match rest.trim().parse::<usize>() {
        Ok(length) => Ok((length, delimiter, has_marker)),
        Err(_) => Err(Error::malformed(format!("invalid array length: {seg}"))),
    }
}
