//! Interactive feedback prompts
//!
//! Reads the green pattern, the orange rows and the grey letters one line at
//! a time. Generic over the reader and writer so tests can script a session.

use std::io::{BufRead, Write};

use crate::error::PromptError;
use crate::filter::Feedback;

/// Read one line without its terminator. `None` at end of input.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, PromptError> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn prompt<W: Write>(writer: &mut W, text: &str) -> Result<(), PromptError> {
    write!(writer, "{}", text)?;
    writer.flush()?;
    Ok(())
}

/// Ask for the green pattern
pub fn read_green<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    placeholder: char,
) -> Result<String, PromptError> {
    prompt(
        writer,
        &format!("Enter green letters ('{}' if unknown): ", placeholder),
    )?;
    read_line(reader)?.ok_or(PromptError::UnexpectedEof("green pattern"))
}

/// Ask for orange rows until an empty line or end of input
pub fn read_orange_rows<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    placeholder: char,
) -> Result<Vec<String>, PromptError> {
    let mut rows = Vec::new();

    loop {
        prompt(
            writer,
            &format!(
                "Enter orange letters ('{}' if unknown, return when done): ",
                placeholder
            ),
        )?;

        match read_line(reader)? {
            Some(row) if !row.is_empty() => rows.push(row),
            _ => break,
        }
    }

    Ok(rows)
}

/// Ask for the grey letters. End of input counts as none.
pub fn read_grey<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<String, PromptError> {
    prompt(writer, "Enter grey letters: ")?;
    Ok(read_line(reader)?.unwrap_or_default())
}

/// Run the full prompt sequence
pub fn read_feedback<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    placeholder: char,
) -> Result<Feedback, PromptError> {
    let green = read_green(reader, writer, placeholder)?;
    let orange = read_orange_rows(reader, writer, placeholder)?;
    let grey = read_grey(reader, writer)?;

    Ok(Feedback::new(&green, orange, &grey).with_placeholder(placeholder))
}
