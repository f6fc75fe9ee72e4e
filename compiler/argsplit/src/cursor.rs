//! Bounds-checked cursor over the code points of an input string.
//!
//! The cursor tracks how many code points have been consumed. The index of
//! the most recently consumed code point is therefore `consumed - 1`, which
//! is "before the first code point" while nothing has been consumed yet.
//! Reads past the end never panic; they produce a
//! [`ParseErrorKind::BufferOverrun`] carrying the input and current index.

use crate::{ParseError, ParseErrorKind};

/// Cursor over the Unicode scalar values of an input string.
///
/// Owns a random-access copy of the code points so that lookahead and
/// position reporting are O(1). The original `&str` is kept only for
/// building errors.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    chars: Vec<char>,
    /// Number of code points consumed so far.
    consumed: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned before the first code point.
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().collect(),
            consumed: 0,
        }
    }

    /// Total number of code points in the input.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether at least one unconsumed code point remains.
    #[inline]
    pub(crate) fn has_more(&self) -> bool {
        self.consumed < self.chars.len()
    }

    /// Index of the last consumed code point, or `None` before the first.
    #[inline]
    pub(crate) fn index(&self) -> Option<usize> {
        self.consumed.checked_sub(1)
    }

    /// Returns the next code point without consuming it.
    pub(crate) fn peek(&self) -> Result<char, ParseError> {
        match self.chars.get(self.consumed) {
            Some(&c) => Ok(c),
            None => Err(self.overrun()),
        }
    }

    /// Consumes and returns the next code point.
    pub(crate) fn advance(&mut self) -> Result<char, ParseError> {
        let c = self.peek()?;
        self.consumed += 1;
        Ok(c)
    }

    /// Consumes a run of whitespace. Stops at end of input.
    pub(crate) fn skip_whitespace(&mut self) {
        while self
            .chars
            .get(self.consumed)
            .is_some_and(|c| c.is_whitespace())
        {
            self.consumed += 1;
        }
    }

    /// Build an error located at the last consumed code point.
    ///
    /// Before anything is consumed the position saturates to `0`.
    pub(crate) fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.input, self.index().unwrap_or(0))
    }

    fn overrun(&self) -> ParseError {
        self.error(ParseErrorKind::BufferOverrun)
    }
}
