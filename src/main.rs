//! Wordle Filter - list the dictionary words consistent with a Wordle board
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::io::{self, Write};
use std::process;

use wordle_filter::cli::Args;
use wordle_filter::output::write_matches;
use wordle_filter::processor::{Processor, ProcessorConfig, RunOutcome};
use wordle_filter::progress::{print_banner, print_error, Status};
use wordle_filter::prompt::read_feedback;
use wordle_filter::source::HttpWordSource;

fn main() {
    // Parse command-line arguments; -h prints usage and exits here
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if !args.quiet && args.is_interactive() {
        print_banner();
    }

    // A malformed location fails before any prompting
    let source = match HttpWordSource::new(&args.source) {
        Ok(source) => source,
        Err(e) => {
            Status::Failed.print(args.quiet);
            report_failure(&e);
            return Ok(());
        }
    };

    let feedback = match args.feedback() {
        Some(feedback) => feedback,
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            read_feedback(&mut stdin.lock(), &mut stdout, args.placeholder)?
        }
    };
    log::debug!("Feedback: {:?}", feedback);

    let processor = Processor::new(ProcessorConfig::from_args(&args), source);

    match processor.run(&feedback)? {
        RunOutcome::Matched(words) => {
            let mut stdout = io::stdout().lock();
            write_matches(&mut stdout, &words)?;
            stdout.flush()?;
        }
        RunOutcome::SourceFailed(e) => report_failure(&e),
    }

    Ok(())
}

/// Print an error and its causes without aborting
fn report_failure(err: &dyn std::error::Error) {
    print_error(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        print_error(&format!("  Caused by: {}", cause));
        source = cause.source();
    }
}
