//! Command-line option parsing.

use thiserror::Error;

/// Which entry point to tokenize with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// `tokenize`: empty input yields no arguments.
    #[default]
    Standard,
    /// `tokenize_lenient`: empty input yields one empty argument.
    Lenient,
}

impl Mode {
    pub fn tokenize(self, input: &str) -> Result<Vec<String>, argsplit::ParseError> {
        match self {
            Mode::Standard => argsplit::tokenize(input),
            Mode::Lenient => argsplit::tokenize_lenient(input),
        }
    }
}

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    /// Text given on the command line, joined with single spaces.
    /// `None` means read stdin line by line.
    pub text: Option<String>,
}

/// Why the command line was not accepted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("help requested")]
    Help,
    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

impl Options {
    /// Parse arguments, excluding the program name.
    pub fn parse(args: &[String]) -> Result<Self, UsageError> {
        let mut options = Options::default();
        let mut text: Vec<&str> = Vec::new();
        let mut flags_done = false;

        for arg in args {
            if flags_done || !arg.starts_with('-') || arg == "-" {
                text.push(arg);
                continue;
            }
            match arg.as_str() {
                "--" => flags_done = true,
                "--lenient" | "-l" => options.mode = Mode::Lenient,
                "--help" | "-h" => return Err(UsageError::Help),
                other => return Err(UsageError::UnknownOption(other.to_owned())),
            }
        }

        if !text.is_empty() {
            options.text = Some(text.join(" "));
        }
        Ok(options)
    }
}

pub const USAGE: &str = "\
Usage: argsplit [options] [--] [TEXT...]

Split TEXT into arguments, honoring quotes and backslash escapes.
Without TEXT, each line of stdin is split separately.

Options:
  -l, --lenient   Empty input yields one empty argument
  -h, --help      Show this message

Set RUST_LOG (e.g. RUST_LOG=argsplit=trace) to enable logging.";

#[cfg(test)]
mod tests;
