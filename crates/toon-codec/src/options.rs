#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Field separator used inside inline arrays and tabular rows.
///
/// Comma is the default and is never shown in non-tabular headers; tab and
/// pipe are recorded in the header's bracket segment so the decoder can pick
/// them up without out-of-band configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }

    /// Delimiter named by a bracket-segment suffix character, if any.
    pub(crate) fn from_suffix(ch: char) -> Option<Delimiter> {
        match ch {
            '\t' => Some(Delimiter::Tab),
            '|' => Some(Delimiter::Pipe),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncodeOptions {
    /// Spaces per nesting level (default: 2).
    pub indent: usize,
    pub delimiter: Delimiter,
    /// Prefix declared lengths with `#` (`[#3]` instead of `[3]`).
    pub length_marker: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            delimiter: Delimiter::default(),
            length_marker: false,
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_length_marker(mut self, enabled: bool) -> Self {
        self.length_marker = enabled;
        self
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecodeOptions {
    /// Spaces per nesting level expected in the input (default: 2).
    pub indent: usize,
    /// Strict mode rejects declared/actual count mismatches, blank lines
    /// inside array bodies, extra trailing rows or items, tabs in
    /// indentation, and indents that are not an exact multiple of `indent`.
    /// Lenient mode accepts all of those and keeps whatever was actually
    /// read; a declared length larger than the item count yields a short
    /// array with no padding.
    pub strict: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            strict: true,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
