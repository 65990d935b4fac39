//! Command-line interface definition for wordle-filter
//!
//! Feedback is read interactively unless `--green` is given on the command line.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::filter::{Feedback, DEFAULT_PLACEHOLDER};
use crate::source::DEFAULT_SOURCE;

const USAGE: &str = r#"
--- Wordle Solver ---

# Synopsis

This program will display all words that satisfy the constraints of a given wordle board.

# Usage

First enter the locations and values of the green letters with underscores in between.

Example:
    The final word is 'crane',
    We know 'c', 'a', and 'n',
    So we enter:

    'c_an_'

Next enter the locations of orange letters for every row that contains orange letters.
Press return on an empty line when done.

Example:
    The final word is 'nasty',
    We know 'a' and 's' are in the word:

    '__as_'

    We also know 'n' is in the word:

    '___n_'

Next we enter all letters that are not in the word:

    'gelpbc'

The same feedback can be given without prompts:

    wordle-filter --green _____ --orange __as_ --orange ___n_ --grey gelpbc

--- Wordle Solver ---
"#;

/// Wordle helper: list every dictionary word consistent with the board
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordle-filter",
    author = "m0h1nd4",
    version,
    about = "List every dictionary word consistent with a Wordle board",
    long_about = USAGE,
    disable_help_flag = true
)]
pub struct Args {
    /// Print usage instructions and exit
    #[arg(short = 'h', long = "help", action = ArgAction::HelpLong)]
    pub help: Option<bool>,

    /// Green pattern, e.g. c_an_ (skips the interactive prompts)
    #[arg(short, long, value_name = "PATTERN")]
    pub green: Option<String>,

    /// Orange row, e.g. __as_ (repeat once per row)
    #[arg(short, long, value_name = "ROW", requires = "green")]
    pub orange: Vec<String>,

    /// Grey letters, e.g. gelpb
    #[arg(long, value_name = "LETTERS", requires = "green")]
    pub grey: Option<String>,

    /// URL of a newline-delimited word list
    #[arg(
        short,
        long,
        value_name = "URL",
        env = "WORDLE_FILTER_SOURCE",
        default_value = DEFAULT_SOURCE
    )]
    pub source: String,

    /// Character marking unknown positions
    #[arg(long, value_name = "CHAR", default_value_t = DEFAULT_PLACEHOLDER, value_parser = parse_placeholder)]
    pub placeholder: char,

    /// Drop repeated words (case-insensitive) from the word list
    #[arg(long, default_value_t = false)]
    pub dedup: bool,

    /// Also write the matches to this file, one per line
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Show run statistics
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - only prompts and results
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Whether feedback has to be read from stdin
    pub fn is_interactive(&self) -> bool {
        self.green.is_none()
    }

    /// Feedback given through flags, if any
    pub fn feedback(&self) -> Option<Feedback> {
        let green = self.green.as_deref()?;
        let grey = self.grey.as_deref().unwrap_or_default();

        Some(Feedback::new(green, &self.orange, grey).with_placeholder(self.placeholder))
    }
}

/// The placeholder must be a single non-letter character
fn parse_placeholder(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => {
            Err(format!("placeholder '{}' must not be a letter", c))
        }
        (Some(c), None) if c.is_whitespace() => {
            Err("placeholder must not be whitespace".to_string())
        }
        (Some(c), None) => Ok(c),
        _ => Err(format!("placeholder must be a single character, got '{}'", value)),
    }
}
