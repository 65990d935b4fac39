//! # Wordle Filter
//!
//! Lists every dictionary word consistent with the feedback of a Wordle board.
//!
//! ## Features
//!
//! - **Green letters**: a pattern such as `c_an_` fixes known positions
//! - **Orange letters**: one row per guess; the letters must appear, but not there
//! - **Grey letters**: excluded, except where also green
//! - **Remote dictionary**: downloads a newline-delimited word list over HTTP
//!
//! ## Usage
//!
//! ```bash
//! # Interactive prompts
//! wordle-filter
//!
//! # Feedback on the command line
//! wordle-filter --green c_an_ --grey slt
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wordle_filter::filter::{filter_words, Feedback};
//!
//! let words = vec!["CRANE".to_string(), "SLATE".to_string(), "PLANE".to_string()];
//! let feedback = Feedback::new("c_an_", Vec::<String>::new(), "");
//!
//! assert_eq!(filter_words(&words, &feedback).unwrap(), vec!["crane"]);
//! ```

pub mod cli;
pub mod dedup;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod output;
pub mod processor;
pub mod progress;
pub mod prompt;
pub mod source;

pub use cli::Args;
pub use error::{FilterError, PromptError, SourceError};
pub use filter::{filter_words, Feedback};
pub use processor::{Processor, ProcessorConfig, RunOutcome};
pub use source::{HttpWordSource, StaticWordSource, WordSource};
