// ============================================================
// Layer 1 — Interactive Prompts
// ============================================================
// Asks the user a question and reads one line back. Used for
// paths that were not given as flags.

use anyhow::{bail, Context, Result};
use std::io::Write;

use crate::domain::traits::LineSource;

/// Print `question` (no newline) and return the trimmed answer.
/// End of input before an answer is an error.
pub fn ask<S, W>(question: &str, input: &mut S, out: &mut W) -> Result<String>
where
    S: LineSource + ?Sized,
    W: Write,
{
    write!(out, "{question}").context("Cannot write prompt")?;
    out.flush().context("Cannot write prompt")?;

    match input.next_line()? {
        Some(answer) => Ok(answer.trim().to_string()),
        None => bail!("No answer given for \"{}\"", question.trim()),
    }
}
