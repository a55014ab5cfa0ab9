//! Decoding pipeline: scanner, header/token parser, structural decoders,
//! strict-mode validation.

pub mod decoders;
pub mod parser;
pub mod scanner;
pub mod validation;

use crate::error::{Error, Result};
use crate::options::DecodeOptions;
use crate::value::Value;

use scanner::{fold_newlines, scan, Cursor};

/// Decode text into a [`Value`].
///
/// Line endings are folded to `\n` before scanning. Empty or whitespace-only
/// input is rejected with [`Error::EmptyInput`]; callers that prefer an empty
/// object can map that case themselves.
pub(crate) fn decode_text(input: &str, options: &DecodeOptions) -> Result<Value> {
    let folded = fold_newlines(input);
    let (lines, blanks) = scan(&folded, options.indent, options.strict)?;
    let mut cursor = Cursor::new(lines, blanks);
    if cursor.is_empty() {
        return Err(Error::EmptyInput);
    }
    decoders::decode_value_from_lines(&mut cursor, options)
}
