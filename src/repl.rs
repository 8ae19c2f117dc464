use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::{Calculation, calculate, interpreter::token::TokenList};

/// Printed once when an interactive session starts.
pub const BANNER: &str = "Step-by-step Calculator. Type 'quit' or 'exit' to leave.";
/// Printed before each line is read interactively.
pub const PROMPT: &str = "Enter expression: ";
/// Printed when a session ends on a sentinel.
pub const FAREWELL: &str = "Goodbye.";

/// Options for a calculator session.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplConfig {
    /// Print only the formatted result of each expression (or its error line),
    /// with no banner, prompt or trace.
    pub pipe_mode: bool,
}

/// What the session should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop reading.
    Quit,
}

/// Returns `true` for the words that end a session, in any letter case.
#[must_use]
pub fn is_sentinel(line: &str) -> bool {
    line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit")
}

/// Handles one line of input.
///
/// The line is trimmed. `quit` and `exit` end the session, blank lines are
/// ignored, and anything else is calculated. A failed calculation is reported
/// as a single `Error:` line and does not end the session.
///
/// # Errors
/// Only I/O errors from writing to `output`.
///
/// # Example
/// ```
/// use stepcalc::repl::{Flow, ReplConfig, handle_line};
///
/// let mut out = Vec::new();
/// let config = ReplConfig { pipe_mode: true };
///
/// assert_eq!(handle_line("1/4", &mut out, config).unwrap(), Flow::Continue);
/// assert_eq!(handle_line("1/0", &mut out, config).unwrap(), Flow::Continue);
/// assert_eq!(handle_line("EXIT", &mut out, config).unwrap(), Flow::Quit);
///
/// assert_eq!(String::from_utf8(out).unwrap(), "0.25\nError: Division by zero.\n");
/// ```
pub fn handle_line<W: Write>(line: &str, output: &mut W, config: ReplConfig) -> io::Result<Flow> {
    let expression = line.trim();

    if is_sentinel(expression) {
        if !config.pipe_mode {
            writeln!(output, "{FAREWELL}")?;
        }
        return Ok(Flow::Quit);
    }
    if expression.is_empty() {
        return Ok(Flow::Continue);
    }

    match calculate(expression) {
        Ok(calculation) => write_report(output, &calculation, config)?,
        Err(e) => {
            debug!("{expression:?} failed: {e:?}");
            writeln!(output, "Error: {e}")?;
        },
    }

    Ok(Flow::Continue)
}

/// Writes the report for a successful calculation.
///
/// In pipe mode this is the formatted result alone. Otherwise it lists the
/// tokens, the postfix sequence, each evaluation step and the result.
///
/// # Errors
/// Only I/O errors from writing to `output`.
pub fn write_report<W: Write>(output: &mut W,
                              calculation: &Calculation,
                              config: ReplConfig)
                              -> io::Result<()> {
    if config.pipe_mode {
        return writeln!(output, "{}", calculation.formatted_result());
    }

    writeln!(output, "Tokens: {}", TokenList(&calculation.tokens))?;
    writeln!(output, "Postfix: {}", TokenList(&calculation.postfix))?;
    writeln!(output)?;
    writeln!(output, "Evaluation steps:")?;
    for step in &calculation.steps {
        writeln!(output, "   {step}")?;
    }
    writeln!(output)?;
    writeln!(output, "Result: {}", calculation.formatted_result())
}

/// Runs an interactive session.
///
/// Prints the banner, then prompts for and handles one line at a time until a
/// sentinel or the end of `input`.
///
/// # Errors
/// Only I/O errors from reading `input` or writing `output`.
pub fn run_interactive<R: BufRead, W: Write>(mut input: R,
                                             output: &mut W,
                                             config: ReplConfig)
                                             -> io::Result<()> {
    if !config.pipe_mode {
        writeln!(output, "{BANNER}")?;
    }

    let mut line = String::new();
    loop {
        if !config.pipe_mode {
            write!(output, "\n{PROMPT}")?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("end of input");
            break;
        }
        if handle_line(&line, output, config)? == Flow::Quit {
            break;
        }
    }

    Ok(())
}

/// Handles every line of `script` in order, as if typed interactively but
/// without banner or prompts.
///
/// # Errors
/// Only I/O errors from writing `output`.
pub fn run_script<W: Write>(script: &str, output: &mut W, config: ReplConfig) -> io::Result<()> {
    for (number, line) in script.lines().enumerate() {
        debug!("line {}: {line:?}", number + 1);
        if handle_line(line, output, config)? == Flow::Quit {
            break;
        }
    }

    Ok(())
}
