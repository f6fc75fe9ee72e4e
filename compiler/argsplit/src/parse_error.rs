//! Tokenizer error type.
//!
//! A [`ParseError`] carries everything a caller needs to point at the
//! problem: the message, the full original input, and the zero-based
//! code-point index where the failure was detected.

use thiserror::Error;

/// What went wrong while tokenizing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum ParseErrorKind {
    /// A read past the end of the input.
    ///
    /// Reachable only through a backslash that ends the input. Every other
    /// read is guarded by a lookahead check.
    #[error("buffer overrun while parsing arguments")]
    BufferOverrun,
    /// The code point opening a quoted argument was not the quote that was
    /// peeked. Unreachable while peek and advance agree.
    #[error("actual next character '{found}' did not match expected quotation character '{expected}'")]
    QuoteMismatch { expected: char, found: char },
}

/// A tokenizer failure, located in the original input.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{message} at position {position}")]
pub struct ParseError {
    kind: ParseErrorKind,
    message: String,
    input: String,
    position: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, input: &str, position: usize) -> Self {
        ParseError {
            kind,
            message: kind.to_string(),
            input: input.to_owned(),
            position,
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Human-readable description, without location.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The complete input that was being tokenized.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Zero-based code-point index where the failure was detected.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Render the input with a caret under the offending code point.
    ///
    /// ```text
    /// say hi\
    ///       ^
    /// ```
    ///
    /// The caret column counts code points, so it lines up for any input
    /// made of single-width characters.
    pub fn render(&self) -> String {
        format!("{}\n{:width$}^", self.input, "", width = self.position)
    }
}
