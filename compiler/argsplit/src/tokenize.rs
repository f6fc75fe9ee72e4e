//! Argument scanner.
//!
//! Each argument is dispatched on its first code point: a `'` or `"` starts
//! a quoted argument, anything else (including end of input) an unquoted
//! one. Backslash escapes are resolved in both.

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::{ParseError, ParseErrorKind};

const BACKSLASH: char = '\\';
const SINGLE_QUOTE: char = '\'';
const DOUBLE_QUOTE: char = '"';

/// Split `input` into arguments, honoring quotes and backslash escapes.
///
/// Empty input yields no arguments. Whitespace runs between arguments
/// produce nothing, but whitespace at the very end yields one trailing
/// empty argument (`"a "` gives `["a", ""]`), marking where the next
/// argument would begin.
///
/// Unterminated quotes are accepted: the argument ends at end of input.
///
/// # Errors
///
/// Returns [`ParseErrorKind::BufferOverrun`] when the input ends with a
/// dangling backslash. On error no arguments are returned.
#[tracing::instrument(level = "trace", skip_all, fields(len = input.len()))]
pub fn tokenize(input: &str) -> Result<Vec<String>, ParseError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut cursor = Cursor::new(input);
    scan_args(&mut cursor).inspect_err(|err| {
        debug!(position = err.position(), kind = ?err.kind(), "tokenize failed");
    })
}

/// Like [`tokenize`], but empty input yields a single empty argument.
///
/// For callers that always need an argument zero to anchor on, such as a
/// completion popup over an empty command line.
pub fn tokenize_lenient(input: &str) -> Result<Vec<String>, ParseError> {
    if input.is_empty() {
        return Ok(vec![String::new()]);
    }
    tokenize(input)
}

fn scan_args(cursor: &mut Cursor<'_>) -> Result<Vec<String>, ParseError> {
    let mut args = Vec::with_capacity(cursor.len() / 4);
    while cursor.has_more() {
        cursor.skip_whitespace();
        let arg = next_arg(cursor)?;
        trace!(index = args.len(), arg = %arg, "argument");
        args.push(arg);
    }
    Ok(args)
}

fn next_arg(cursor: &mut Cursor<'_>) -> Result<String, ParseError> {
    let mut arg = String::new();
    if cursor.has_more() {
        match cursor.peek()? {
            quote @ (SINGLE_QUOTE | DOUBLE_QUOTE) => parse_quoted(cursor, quote, &mut arg)?,
            _ => parse_unquoted(cursor, &mut arg)?,
        }
    }
    Ok(arg)
}

/// Scan a quoted argument. The closing quote is consumed but not kept; a
/// missing one ends the argument at end of input.
fn parse_quoted(cursor: &mut Cursor<'_>, quote: char, out: &mut String) -> Result<(), ParseError> {
    let opening = cursor.advance()?;
    if opening != quote {
        return Err(cursor.error(ParseErrorKind::QuoteMismatch {
            expected: quote,
            found: opening,
        }));
    }

    while cursor.has_more() {
        match cursor.peek()? {
            c if c == quote => {
                cursor.advance()?;
                return Ok(());
            }
            BACKSLASH => parse_escape(cursor, out)?,
            _ => out.push(cursor.advance()?),
        }
    }
    Ok(())
}

/// Scan up to (not including) the next whitespace or end of input.
fn parse_unquoted(cursor: &mut Cursor<'_>, out: &mut String) -> Result<(), ParseError> {
    while cursor.has_more() {
        match cursor.peek()? {
            c if c.is_whitespace() => return Ok(()),
            BACKSLASH => parse_escape(cursor, out)?,
            _ => out.push(cursor.advance()?),
        }
    }
    Ok(())
}

/// `\X` becomes `X` for any code point `X`.
fn parse_escape(cursor: &mut Cursor<'_>, out: &mut String) -> Result<(), ParseError> {
    cursor.advance()?;
    out.push(cursor.advance()?);
    Ok(())
}
