//! Tokenize inputs and print the results.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::options::Mode;

/// Tokenize one input, writing each argument as `[arg]` on its own line.
///
/// Errors go to `err` as a message plus caret rendering. Returns whether
/// the input tokenized successfully.
pub fn run_text(
    input: &str,
    mode: Mode,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    match mode.tokenize(input) {
        Ok(args) => {
            for arg in &args {
                writeln!(out, "[{arg}]")?;
            }
            Ok(true)
        }
        Err(e) => {
            writeln!(err, "error: {e}")?;
            writeln!(err, "{}", e.render())?;
            Ok(false)
        }
    }
}

/// Tokenize each line of `reader` independently, separating the outputs
/// with a blank line. Returns whether every line succeeded.
pub fn run_lines(
    reader: impl BufRead,
    mode: Mode,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut all_ok = true;
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if number > 0 {
            writeln!(out)?;
        }
        debug!(line = number + 1, "tokenizing");
        all_ok &= run_text(&line, mode, out, err)?;
    }
    Ok(all_ok)
}

#[cfg(test)]
mod tests;
