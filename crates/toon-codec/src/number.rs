/// Canonical text for a finite f64:
/// - shortest decimal digits that round-trip (ryu), never exponent notation
/// - no trailing fractional zeros, no trailing decimal point
/// - -0.0 renders as `0`
pub(crate) fn format_canonical_f64(value: f64) -> String {
    if !value.is_finite() {
        debug_assert!(false, "format_canonical_f64 called with non-finite value");
        return String::from("null");
    }
    if value == 0.0 {
        return String::from("0");
    }

    let negative = value < 0.0;
    let mut buf = ryu::Buffer::new();
    let shortest = buf.format_finite(value.abs());

    let body = match shortest.find(['e', 'E']) {
        Some(at) => {
            let exp: i32 = shortest[at + 1..].parse().unwrap_or(0);
            expand(&shortest[..at], exp)
        }
        None => trim_fraction(String::from(shortest)),
    };
    if negative {
        let mut out = String::with_capacity(body.len() + 1);
        out.push('-');
        out.push_str(&body);
        out
    } else {
        body
    }
}

/// Rewrite `mantissa * 10^exp` as plain fixed-point digits.
fn expand(mantissa: &str, exp: i32) -> String {
    let mut digits = String::with_capacity(mantissa.len());
    let mut point = None;
    for ch in mantissa.chars() {
        if ch == '.' {
            point = Some(digits.len());
        } else {
            digits.push(ch);
        }
    }
    // Where the decimal point lands after applying the exponent.
    let pos = point.unwrap_or(digits.len()) as i32 + exp;

    let mut out = String::with_capacity(digits.len() + exp.unsigned_abs() as usize + 2);
    if pos <= 0 {
        out.push_str("0.");
        for _ in 0..-pos {
            out.push('0');
        }
        out.push_str(&digits);
    } else if (pos as usize) >= digits.len() {
        out.push_str(&digits);
        for _ in digits.len()..pos as usize {
            out.push('0');
        }
    } else {
        let (head, tail) = digits.split_at(pos as usize);
        out.push_str(head);
        out.push('.');
        out.push_str(tail);
    }
    trim_fraction(out)
}

fn trim_fraction(mut s: String) -> String {
    if let Some(dot) = s.find('.') {
        let mut end = s.len();
        let bytes = s.as_bytes();
        while end > dot + 1 && bytes[end - 1] == b'0' {
            end -= 1;
        }
        if end == dot + 1 {
            end = dot;
        }
        s.truncate(end);
    }
    s
}
