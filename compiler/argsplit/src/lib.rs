//! Quote-aware tokenizer for command-line style input.
//!
//! Splits a raw string such as `give "Old Steve" diamond\ sword` into the
//! argument list `["give", "Old Steve", "diamond sword"]`. The scanner is a
//! single pass with one code point of lookahead:
//!
//! ```text
//! WHITESPACE   := char::is_whitespace
//! ESCAPE       := '\' CHAR
//! QUOTE        := '\'' | '"'
//! UNQUOTED_ARG := (CHAR | ESCAPE)+            (ends before WHITESPACE)
//! QUOTED_ARG   := QUOTE (CHAR | ESCAPE)* QUOTE?
//! ARGS         := (WHITESPACE* (UNQUOTED_ARG | QUOTED_ARG))*
//! ```
//!
//! # Leniency
//!
//! Malformed input is tolerated wherever a sensible reading exists. An
//! unterminated quote ends its argument at end of input instead of failing,
//! so partially typed commands (e.g. during live tab completion) still
//! tokenize. The only reportable failure is a backslash with nothing after
//! it, surfaced as [`ParseErrorKind::BufferOverrun`].
//!
//! # Units
//!
//! All positions count Unicode scalar values (`char`), never bytes.
//!
//! ```
//! let args = argsplit::tokenize("tp 'spawn point' --safe").unwrap();
//! assert_eq!(args, ["tp", "spawn point", "--safe"]);
//! ```

mod cursor;
mod parse_error;
mod tokenize;

pub use parse_error::{ParseError, ParseErrorKind};
pub use tokenize::{tokenize, tokenize_lenient};
