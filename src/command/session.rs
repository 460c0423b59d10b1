use super::{Interpreter, format_result};
use crate::geometry::Polygon;
use crate::input::lossy_lines;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Line written in place of a result when a command fails
pub const INVALID_COMMAND: &str = "<INVALID COMMAND>";

/// Tally of one session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Commands that ran without error, including ignored verbs
    pub executed: usize,
    /// Commands rejected with an error
    pub failed: usize,
}

/// Run every command line from `input` against `polygons`
///
/// # Behaviour
/// - blank lines are skipped
/// - a successful command prints its result on its own line
/// - a failed command prints `invalid_message` and the session continues,
///   lines that are not valid UTF-8 included
///
/// Only I/O failures end the session early.
pub fn run_session<R, W>(
    input: R,
    mut output: W,
    polygons: &mut Vec<Polygon>,
    interpreter: &Interpreter,
    invalid_message: &str,
) -> Result<SessionStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = SessionStats::default();

    for (index, line) in lossy_lines(input).enumerate() {
        let line = line.with_context(|| format!("Failed to read command {}", index + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        match interpreter.execute(&line, polygons) {
            Ok(Some(value)) => {
                stats.executed += 1;
                writeln!(output, "{}", format_result(value))?;
            }
            Ok(None) => stats.executed += 1,
            Err(e) => {
                stats.failed += 1;
                tracing::debug!(line = index + 1, error = %e, "command rejected");
                writeln!(output, "{}", invalid_message)?;
            }
        }
    }

    output.flush().context("Failed to flush output")?;
    Ok(stats)
}
