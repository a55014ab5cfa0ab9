use std::borrow::Cow;

use crate::error::{Error, Result};

/// One non-blank physical line, depth-tagged. Slices borrow from the scanned
/// input; nothing is copied per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub raw: &'a str,
    /// Leading space count. Tabs never count toward the indent; in lenient
    /// mode a tab after the leading spaces simply starts the content.
    pub indent: usize,
    /// `indent / indent_width`, flooring.
    pub depth: usize,
    /// Text after the leading spaces.
    pub content: &'a str,
    /// 1-based.
    pub line_no: usize,
}

/// Position of an empty or whitespace-only line, kept aside for strict-mode
/// gap detection inside array bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlankLine {
    pub line_no: usize,
    pub indent: usize,
    pub depth: usize,
}

/// Fold `\r\n` and lone `\r` line endings to `\n`. Borrows when the input has
/// no carriage returns.
pub fn fold_newlines(input: &str) -> Cow<'_, str> {
    if input.contains('\r') {
        Cow::Owned(input.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(input)
    }
}

#[inline]
fn leading_spaces(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0usize;
    while i < b.len() && b[i] == b' ' {
        i += 1;
    }
    i
}

#[inline]
fn leading_whitespace(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0usize;
    while i < b.len() && matches!(b[i], b' ' | b'\t') {
        i += 1;
    }
    i
}

/// Split `input` into depth-tagged lines plus a blank-line side list.
///
/// Strict mode rejects non-blank lines with tabs in the leading-whitespace
/// run or an indent that is not an exact multiple of `indent_width`. Lenient
/// mode floors the depth instead. Empty or whitespace-only input yields no
/// lines at all.
pub fn scan<'a>(
    input: &'a str,
    indent_width: usize,
    strict: bool,
) -> Result<(Vec<ParsedLine<'a>>, Vec<BlankLine>)> {
    if input.trim().is_empty() {
        return Ok((Vec::new(), Vec::new()));
    }
    let width = if indent_width == 0 { 1 } else { indent_width };

    let mut lines = Vec::new();
    let mut blanks = Vec::new();
    for (idx, raw) in input.split('\n').enumerate() {
        let line_no = idx + 1;
        let indent = leading_spaces(raw);
        let content = &raw[indent..];
        // Whitespace-only lines are tracked, never validated.
        if content.trim().is_empty() {
            blanks.push(BlankLine {
                line_no,
                indent,
                depth: indent / width,
            });
            continue;
        }
        let ws_end = leading_whitespace(raw);
        if strict && raw.as_bytes()[..ws_end].contains(&b'\t') {
            return Err(Error::syntax(line_no, "tabs not allowed in indentation"));
        }
        if strict && indent % width != 0 {
            return Err(Error::syntax(
                line_no,
                format!("indent must be an exact multiple of {width}"),
            ));
        }
        lines.push(ParsedLine {
            raw,
            indent,
            depth: indent / width,
            content,
            line_no,
        });
    }
    Ok((lines, blanks))
}

/// Forward-only cursor over scanned lines.
#[derive(Debug)]
pub struct Cursor<'a> {
    lines: Vec<ParsedLine<'a>>,
    blanks: Vec<BlankLine>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(lines: Vec<ParsedLine<'a>>, blanks: Vec<BlankLine>) -> Self {
        Cursor {
            lines,
            blanks,
            pos: 0,
        }
    }

    pub fn peek(&self) -> Option<ParsedLine<'a>> {
        self.lines.get(self.pos).copied()
    }

    /// Consume and return the next line.
    pub fn take(&mut self) -> Option<ParsedLine<'a>> {
        let line = self.lines.get(self.pos).copied();
        if line.is_some() {
            self.pos += 1;
        }
        line
    }

    pub fn advance(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }

    /// Most recently consumed line.
    pub fn current(&self) -> Option<ParsedLine<'a>> {
        if self.pos == 0 {
            None
        } else {
            self.lines.get(self.pos - 1).copied()
        }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn blank_lines(&self) -> &[BlankLine] {
        &self.blanks
    }
}
