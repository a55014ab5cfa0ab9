use crate::decode::parser::{
    find_unquoted, is_key_value_line, is_numeric_literal, is_row_line, parse_array_header,
    parse_key, parse_primitive_token, split_delimited, starts_array_header, ArrayHeader,
};
use crate::decode::scanner::Cursor;
use crate::decode::validation::{
    check_blank_lines, check_count, check_no_extra_list_items, check_no_extra_rows,
};
use crate::error::{Error, Result};
use crate::options::{DecodeOptions, Delimiter};
use crate::value::{Map, Value};

const LIST_ITEM_PREFIX: &str = "- ";

/// Decode a value from scanned lines.
///
/// Root dispatch: a keyless array header opens a root array; a lone
/// non-key-value line is a single primitive; anything else is an object.
pub fn decode_value_from_lines(cursor: &mut Cursor<'_>, options: &DecodeOptions) -> Result<Value> {
    let Some(first) = cursor.peek() else {
        return Err(Error::EmptyInput);
    };

    if starts_array_header(first.content) {
        if let Some((header, inline)) = parse_array_header(first.content)? {
            cursor.advance();
            return decode_array_from_header(&header, inline, cursor, 0, options)
                .map(Value::Array);
        }
    }

    if cursor.len() == 1 && !is_key_value_line(first.content) {
        let content = first.content.trim();
        // A bare multi-word line is ambiguous with a key-value pair whose
        // colon was dropped; reject it rather than guess.
        if content.contains(' ')
            && !content.starts_with('"')
            && !content.starts_with('-')
            && !matches!(content, "true" | "false" | "null")
            && !is_numeric_literal(content)
        {
            return Err(Error::syntax(
                first.line_no,
                format!("expected colon in key-value pair: {content}"),
            ));
        }
        return parse_primitive_token(content);
    }

    decode_object(cursor, 0, options).map(Value::Object)
}

/// Decode object fields at a fixed depth. The first field encountered at or
/// below `base_depth` sets the depth every sibling must match.
fn decode_object(cursor: &mut Cursor<'_>, base_depth: usize, options: &DecodeOptions) -> Result<Map> {
    let mut obj = Map::new();
    let mut computed_depth: Option<usize> = None;

    while let Some(line) = cursor.peek() {
        if line.depth < base_depth {
            break;
        }
        let depth = *computed_depth.get_or_insert(line.depth);
        if line.depth != depth {
            break;
        }
        if !is_key_value_line(line.content) {
            return Err(Error::syntax(
                line.line_no,
                format!("expected colon in object field: {}", line.content),
            ));
        }
        cursor.advance();
        let (key, value, _) = decode_key_value(line.content, cursor, depth, options)?;
        obj.insert(key, value);
    }

    Ok(obj)
}

/// Decode one `key: value` pair whose line is already consumed. Returns the
/// depth at which any continuation fields of the same owner live.
fn decode_key_value(
    content: &str,
    cursor: &mut Cursor<'_>,
    base_depth: usize,
    options: &DecodeOptions,
) -> Result<(String, Value, usize)> {
    // Array-valued fields are recognized by header shape before the key is
    // split off.
    if let Some((header, inline)) = parse_array_header(content)? {
        if let Some(key) = header.key.clone() {
            let value = decode_array_from_header(&header, inline, cursor, base_depth, options)?;
            return Ok((key, Value::Array(value), base_depth + 1));
        }
    }

    let (key, after) = parse_key(content)?;
    let rest = content[after..].trim();

    if rest.is_empty() {
        if cursor.peek().is_some_and(|next| next.depth > base_depth) {
            let nested = decode_object(cursor, base_depth + 1, options)?;
            return Ok((key, Value::Object(nested), base_depth + 1));
        }
        return Ok((key, Value::Object(Map::new()), base_depth + 1));
    }

    Ok((key, parse_primitive_token(rest)?, base_depth + 1))
}

/// Pick the body form an array header calls for.
fn decode_array_from_header(
    header: &ArrayHeader,
    inline: Option<&str>,
    cursor: &mut Cursor<'_>,
    base_depth: usize,
    options: &DecodeOptions,
) -> Result<Vec<Value>> {
    if let Some(values) = inline {
        return decode_inline_array(header, values, options);
    }
    if header.fields.as_ref().is_some_and(|f| !f.is_empty()) {
        return decode_tabular_array(header, cursor, base_depth, options);
    }
    decode_list_array(header, cursor, base_depth, options)
}

fn decode_inline_array(
    header: &ArrayHeader,
    values: &str,
    options: &DecodeOptions,
) -> Result<Vec<Value>> {
    let tokens = split_delimited(values, header.delimiter);
    let mut items = Vec::with_capacity(tokens.len());
    for token in &tokens {
        items.push(parse_primitive_token(token)?);
    }
    check_count(items.len(), header.length, "inline array items", options)?;
    Ok(items)
}

fn decode_list_array(
    header: &ArrayHeader,
    cursor: &mut Cursor<'_>,
    base_depth: usize,
    options: &DecodeOptions,
) -> Result<Vec<Value>> {
    let item_depth = base_depth + 1;
    let mut items = Vec::new();
    let mut start_line: Option<usize> = None;
    let mut end_line = 0usize;

    while items.len() < header.length {
        let Some(line) = cursor.peek() else { break };
        let is_item = line.content.starts_with(LIST_ITEM_PREFIX) || line.content == "-";
        if line.depth != item_depth || !is_item {
            break;
        }
        start_line.get_or_insert(line.line_no);
        end_line = line.line_no;

        items.push(decode_list_item(cursor, item_depth, options)?);

        // An item may span several lines; track the last one it consumed.
        if let Some(last) = cursor.current() {
            end_line = last.line_no;
        }
    }

    check_count(items.len(), header.length, "list array items", options)?;

    if options.strict {
        if let Some(start) = start_line {
            check_blank_lines(start, end_line, cursor.blank_lines(), "list array")?;
        }
        check_no_extra_list_items(cursor, item_depth, header.length)?;
    }

    Ok(items)
}

fn decode_tabular_array(
    header: &ArrayHeader,
    cursor: &mut Cursor<'_>,
    base_depth: usize,
    options: &DecodeOptions,
) -> Result<Vec<Value>> {
    let fields = header.fields.as_deref().unwrap_or_default();
    let row_depth = base_depth + 1;
    let mut rows = Vec::new();
    let mut start_line: Option<usize> = None;
    let mut end_line = 0usize;

    while rows.len() < header.length {
        let Some(line) = cursor.peek() else { break };
        // A sibling key-value line at row depth ends the table even when the
        // declared count has not been reached.
        if line.depth != row_depth || !is_row_line(line.content, header.delimiter) {
            break;
        }
        start_line.get_or_insert(line.line_no);
        end_line = line.line_no;
        cursor.advance();

        let tokens = split_delimited(line.content, header.delimiter);
        check_count(tokens.len(), fields.len(), "tabular row values", options)?;

        let mut values = Vec::with_capacity(tokens.len());
        for token in &tokens {
            values.push(parse_primitive_token(token)?);
        }
        let mut row = Map::with_capacity(fields.len());
        for (field, value) in fields.iter().zip(values) {
            row.insert(field.clone(), value);
        }
        rows.push(Value::Object(row));
    }

    check_count(rows.len(), header.length, "tabular rows", options)?;

    if options.strict {
        if let Some(start) = start_line {
            check_blank_lines(start, end_line, cursor.blank_lines(), "tabular array")?;
        }
        check_no_extra_rows(cursor, row_depth, header)?;
    }

    Ok(rows)
}

/// Decode one list item. The content after `- ` dispatches to a nested array
/// header, an object whose first field sits inline, an anonymous inline
/// array, or a bare primitive.
fn decode_list_item(
    cursor: &mut Cursor<'_>,
    base_depth: usize,
    options: &DecodeOptions,
) -> Result<Value> {
    let Some(line) = cursor.take() else {
        return Err(Error::malformed("expected list item"));
    };

    if line.content == "-" {
        return Ok(Value::Object(Map::new()));
    }
    let Some(after_hyphen) = line.content.strip_prefix(LIST_ITEM_PREFIX) else {
        return Err(Error::syntax(
            line.line_no,
            format!("expected list item to start with {LIST_ITEM_PREFIX:?}"),
        ));
    };
    if after_hyphen.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    if starts_array_header(after_hyphen) {
        if let Some((header, inline)) = parse_array_header(after_hyphen)? {
            return decode_array_from_header(&header, inline, cursor, base_depth, options)
                .map(Value::Array);
        }
    }

    if find_unquoted(after_hyphen, ':').is_some() {
        return decode_object_from_list_item(after_hyphen, cursor, base_depth, options)
            .map(Value::Object);
    }

    if find_unquoted(after_hyphen, ',').is_some() {
        let mut items = Vec::new();
        for token in split_delimited(after_hyphen, Delimiter::Comma) {
            items.push(parse_primitive_token(token)?);
        }
        return Ok(Value::Array(items));
    }

    parse_primitive_token(after_hyphen)
}

/// Decode an object list item: the first field rides on the item line, the
/// rest follow one level below the item marker.
fn decode_object_from_list_item(
    after_hyphen: &str,
    cursor: &mut Cursor<'_>,
    base_depth: usize,
    options: &DecodeOptions,
) -> Result<Map> {
    let (key, value, follow_depth) = decode_key_value(after_hyphen, cursor, base_depth, options)?;

    let mut obj = Map::new();
    obj.insert(key, value);

    while let Some(line) = cursor.peek() {
        if line.depth != follow_depth || line.content.starts_with(LIST_ITEM_PREFIX) {
            break;
        }
        if !is_key_value_line(line.content) {
            return Err(Error::syntax(
                line.line_no,
                format!("expected colon in key-value pair: {}", line.content),
            ));
        }
        cursor.advance();
        let (k, v, _) = decode_key_value(line.content, cursor, follow_depth, options)?;
        obj.insert(k, v);
    }

    Ok(obj)
}
