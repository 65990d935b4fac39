//! Core processing pipeline
//!
//! Fetches the word list, reports contradictory feedback and narrows the
//! list down to the matching words.

use std::path::PathBuf;

use crate::cli::Args;
use crate::dedup::dedup_words;
use crate::error::SourceError;
use crate::filter::{filter_words, find_conflicts, Feedback};
use crate::output::OutputWriter;
use crate::progress::{create_spinner, print_info, print_warning, RunStats, Status};
use crate::source::WordSource;

/// Processor configuration
#[derive(Debug, Clone, Default)]
pub struct ProcessorConfig {
    pub dedup: bool,
    pub output: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
    pub stats: bool,
}

impl ProcessorConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            dedup: args.dedup,
            output: args.output.clone(),
            quiet: args.quiet,
            verbose: args.verbose,
            stats: args.stats,
        }
    }
}

/// How a run ended
#[derive(Debug)]
pub enum RunOutcome {
    /// Matching words in source order
    Matched(Vec<String>),
    /// The word list could not be obtained
    SourceFailed(SourceError),
}

/// Main processor
pub struct Processor<S: WordSource> {
    config: ProcessorConfig,
    source: S,
}

impl<S: WordSource> Processor<S> {
    pub fn new(config: ProcessorConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Fetch, then filter. Errors other than source failures are returned as `Err`.
    pub fn run(&self, feedback: &Feedback) -> anyhow::Result<RunOutcome> {
        let mut stats = RunStats::new();

        Status::Fetching.print(self.config.quiet);
        if self.config.verbose {
            print_info(&format!("Source: {}", self.source.describe()));
        }

        let words = match self.fetch() {
            Ok(words) => words,
            Err(e) => {
                Status::Failed.print(self.config.quiet);
                return Ok(RunOutcome::SourceFailed(e));
            }
        };
        Status::Done.print(self.config.quiet);
        stats.fetched_words = words.len() as u64;

        let words = if self.config.dedup {
            let unique = dedup_words(words);
            stats.duplicate_words = stats.fetched_words - unique.len() as u64;
            unique
        } else {
            words
        };

        let conflicts = find_conflicts(feedback);
        for message in conflicts.messages() {
            log::warn!("{}", message);
            print_warning(&message);
        }

        Status::Matching.print(self.config.quiet);
        let matches = filter_words(&words, feedback)?;
        stats.matched_words = matches.len() as u64;
        log::info!("{} of {} words match", matches.len(), words.len());

        if let Some(ref path) = self.config.output {
            let mut writer = OutputWriter::new(path.clone())?;
            writer.write_all(&matches)?;
            if !self.config.quiet {
                print_info(&format!(
                    "Wrote {} words to {:?}",
                    writer.lines_written(),
                    writer.path()
                ));
            }
        }

        if self.config.stats && !self.config.quiet {
            stats.print_summary();
        }

        Ok(RunOutcome::Matched(matches))
    }

    fn fetch(&self) -> Result<Vec<String>, SourceError> {
        if self.config.quiet {
            return self.source.fetch();
        }

        let spinner = create_spinner("Downloading...");
        let result = self.source.fetch();
        spinner.finish_and_clear();
        result
    }
}
