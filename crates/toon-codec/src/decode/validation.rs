use crate::decode::parser::{is_row_line, ArrayHeader};
use crate::decode::scanner::{BlankLine, Cursor};
use crate::error::{Error, Result};
use crate::options::DecodeOptions;

/// Strict-mode count check. Lenient mode keeps whatever was actually read.
pub fn check_count(
    actual: usize,
    expected: usize,
    what: &'static str,
    options: &DecodeOptions,
) -> Result<()> {
    if options.strict && actual != expected {
        return Err(Error::CountMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Reject blank lines falling strictly between the first and last consumed
/// line of an array body.
pub fn check_blank_lines(
    start_line: usize,
    end_line: usize,
    blanks: &[BlankLine],
    context: &str,
) -> Result<()> {
    if let Some(blank) = blanks
        .iter()
        .find(|b| b.line_no > start_line && b.line_no < end_line)
    {
        return Err(Error::syntax(
            blank.line_no,
            format!("blank lines inside {context} are not allowed in strict mode"),
        ));
    }
    Ok(())
}

/// After a list array has consumed its declared count, a further item line at
/// the same depth is an overflow.
pub fn check_no_extra_list_items(
    cursor: &Cursor<'_>,
    item_depth: usize,
    expected: usize,
) -> Result<()> {
    if let Some(line) = cursor.peek() {
        if line.depth == item_depth && line.content.starts_with("- ") {
            return Err(Error::TooMany {
                what: "list array items",
                expected,
            });
        }
    }
    Ok(())
}

/// After a tabular array has consumed its declared count, a further data row
/// at the same depth is an overflow.
pub fn check_no_extra_rows(
    cursor: &Cursor<'_>,
    row_depth: usize,
    header: &ArrayHeader,
) -> Result<()> {
    if let Some(line) = cursor.peek() {
        if line.depth == row_depth
            && !line.content.starts_with("- ")
            && is_row_line(line.content, header.delimiter)
        {
            return Err(Error::TooMany {
                what: "tabular rows",
                expected: header.length,
            });
        }
    }
    Ok(())
}
