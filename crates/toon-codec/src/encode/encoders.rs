use crate::encode::normalize::{classify_array, ArrayShape};
use crate::encode::primitives::{
    encode_inline_array_line, encode_key, encode_primitive, format_header,
};
use crate::encode::writer::LineWriter;
use crate::options::EncodeOptions;
use crate::value::{Map, Value};

/// Encode a value to text. A root primitive becomes a single bare token; root
/// arrays and objects go through the line writer.
pub fn encode_value(value: &Value, options: &EncodeOptions) -> String {
    match value {
        Value::Array(items) => {
            let mut writer = LineWriter::new(options.indent);
            encode_array(None, items, &mut writer, 0, options);
            writer.into_string()
        }
        Value::Object(obj) => {
            let mut writer = LineWriter::new(options.indent);
            encode_object(obj, &mut writer, 0, options);
            writer.into_string()
        }
        primitive => encode_primitive(primitive, options.delimiter),
    }
}

fn encode_object(obj: &Map, writer: &mut LineWriter, depth: usize, options: &EncodeOptions) {
    for (key, value) in obj.iter() {
        encode_key_value_pair(key, value, writer, depth, options);
    }
}

fn encode_key_value_pair(
    key: &str,
    value: &Value,
    writer: &mut LineWriter,
    depth: usize,
    options: &EncodeOptions,
) {
    match value {
        Value::Array(items) => encode_array(Some(key), items, writer, depth, options),
        Value::Object(nested) => {
            writer.push(depth, &format!("{}:", encode_key(key)));
            encode_object(nested, writer, depth + 1, options);
        }
        primitive => {
            let token = encode_primitive(primitive, options.delimiter);
            writer.push(depth, &format!("{}: {token}", encode_key(key)));
        }
    }
}

fn encode_array(
    key: Option<&str>,
    items: &[Value],
    writer: &mut LineWriter,
    depth: usize,
    options: &EncodeOptions,
) {
    match classify_array(items) {
        ArrayShape::Empty | ArrayShape::Inline => {
            writer.push(depth, &encode_inline_array_line(items, key, options));
        }
        ArrayShape::Tabular(fields) => {
            let header = format_header(items.len(), key, Some(&fields), options);
            writer.push(depth, &header);
            write_tabular_rows(items, &fields, writer, depth + 1, options);
        }
        ArrayShape::List => {
            let header = format_header(items.len(), key, None, options);
            writer.push(depth, &header);
            for item in items {
                encode_list_item_value(item, writer, depth + 1, options);
            }
        }
    }
}

/// Rows are emitted in header field order regardless of each object's own
/// key order.
fn write_tabular_rows(
    rows: &[Value],
    fields: &[String],
    writer: &mut LineWriter,
    depth: usize,
    options: &EncodeOptions,
) {
    for row in rows {
        let Value::Object(obj) = row else { continue };
        let mut line = String::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                line.push(options.delimiter.as_char());
            }
            if let Some(value) = obj.get(field) {
                line.push_str(&encode_primitive(value, options.delimiter));
            }
        }
        writer.push(depth, &line);
    }
}

fn encode_list_item_value(
    value: &Value,
    writer: &mut LineWriter,
    depth: usize,
    options: &EncodeOptions,
) {
    match value {
        Value::Array(items) => match classify_array(items) {
            ArrayShape::Empty | ArrayShape::Inline => {
                writer.push_list_item(depth, &encode_inline_array_line(items, None, options));
            }
            ArrayShape::Tabular(fields) => {
                let header = format_header(items.len(), None, Some(&fields), options);
                writer.push_list_item(depth, &header);
                write_tabular_rows(items, &fields, writer, depth + 1, options);
            }
            ArrayShape::List => {
                let header = format_header(items.len(), None, None, options);
                writer.push_list_item(depth, &header);
                for item in items {
                    encode_list_item_value(item, writer, depth + 1, options);
                }
            }
        },
        Value::Object(obj) => encode_object_as_list_item(obj, writer, depth, options),
        primitive => {
            writer.push_list_item(depth, &encode_primitive(primitive, options.delimiter));
        }
    }
}

/// An object list item carries its first field inline after the `- ` marker;
/// the remaining fields continue one level below the marker. A first-field
/// nested object indents its own fields one level further still.
fn encode_object_as_list_item(
    obj: &Map,
    writer: &mut LineWriter,
    depth: usize,
    options: &EncodeOptions,
) {
    let mut entries = obj.iter();
    let Some((first_key, first_value)) = entries.next() else {
        writer.push(depth, "-");
        return;
    };

    match first_value {
        Value::Array(items) => match classify_array(items) {
            ArrayShape::Empty | ArrayShape::Inline => {
                let line = encode_inline_array_line(items, Some(first_key), options);
                writer.push_list_item(depth, &line);
            }
            ArrayShape::Tabular(fields) => {
                let header = format_header(items.len(), Some(first_key), Some(&fields), options);
                writer.push_list_item(depth, &header);
                write_tabular_rows(items, &fields, writer, depth + 1, options);
            }
            ArrayShape::List => {
                let header = format_header(items.len(), Some(first_key), None, options);
                writer.push_list_item(depth, &header);
                for item in items {
                    encode_list_item_value(item, writer, depth + 1, options);
                }
            }
        },
        Value::Object(nested) => {
            writer.push_list_item(depth, &format!("{}:", encode_key(first_key)));
            encode_object(nested, writer, depth + 2, options);
        }
        primitive => {
            let token = encode_primitive(primitive, options.delimiter);
            writer.push_list_item(depth, &format!("{}: {token}", encode_key(first_key)));
        }
    }

    for (key, value) in entries {
        encode_key_value_pair(key, value, writer, depth + 1, options);
    }
}
