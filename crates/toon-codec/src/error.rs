use thiserror::Error;

use std::io;

/// Everything that can go wrong while encoding to or decoding from TOON text.
///
/// Grammar violations (`Malformed`, `Syntax` without a strict-mode message)
/// are fatal in both decode modes. Count and overflow mismatches are only
/// produced when [`DecodeOptions::strict`](crate::options::DecodeOptions) is
/// set.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A line-addressed problem: bad indentation, or a blank line inside an
    /// array body in strict mode.
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// A token-level grammar violation: unterminated string, bad escape,
    /// missing colon, invalid array length.
    #[error("{message}")]
    Malformed { message: String },

    /// Strict mode: declared array length or row width does not match what
    /// was actually read.
    #[error("expected {expected} {what}, but got {actual}")]
    CountMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Strict mode: more items or rows follow a fully consumed array.
    #[error("expected {expected} {what}, but found more")]
    TooMany { what: &'static str, expected: usize },

    /// The input was empty or whitespace-only. Callers decide whether this is
    /// an error or stands for the empty object.
    #[error("cannot decode empty input")]
    EmptyInput,
}

impl Error {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Error::Malformed {
            message: message.into(),
        }
    }

    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            message: message.into(),
        }
    }

    /// 1-based source line of the error, where one is known.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Syntax { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
