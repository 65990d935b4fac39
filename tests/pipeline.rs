use pretty_assertions::assert_eq;
use std::io::Cursor;
use tempfile::TempDir;

use wordle_filter::processor::{Processor, ProcessorConfig, RunOutcome};
use wordle_filter::prompt::read_feedback;
use wordle_filter::source::{HttpWordSource, StaticWordSource};
use wordle_filter::{Feedback, SourceError};

const CORNCOB_SAMPLE: &str = "CRANE\r\nSLATE\r\nPLANE\r\nNASTY\r\nTOAST\r\nSTAMP\r\nSANTA\r\nTANGY\r\n";

fn quiet() -> ProcessorConfig {
    ProcessorConfig {
        quiet: true,
        ..Default::default()
    }
}

fn matched(outcome: RunOutcome) -> Vec<String> {
    match outcome {
        RunOutcome::Matched(words) => words,
        RunOutcome::SourceFailed(e) => panic!("Unexpected source failure: {}", e),
    }
}

#[test]
fn test_interactive_session_end_to_end() {
    let mut input = Cursor::new("_____\n__as_\n\ngelpbc\n");
    let mut prompts = Vec::new();
    let feedback = read_feedback(&mut input, &mut prompts, '_').unwrap();

    let processor = Processor::new(quiet(), StaticWordSource::from_text(CORNCOB_SAMPLE));
    let words = matched(processor.run(&feedback).unwrap());

    // santa and nasty keep 'a' and 's' away from the flagged slots
    assert_eq!(words, vec!["nasty", "santa"]);
}

#[test]
fn test_green_grey_overlap_keeps_green_words() {
    // 'a' is grey from an earlier guess but green now
    let feedback = Feedback::new("__a__", Vec::<String>::new(), "a");
    let processor = Processor::new(quiet(), StaticWordSource::from_text(CORNCOB_SAMPLE));

    let words = matched(processor.run(&feedback).unwrap());
    assert_eq!(words, vec!["crane", "slate", "plane", "toast", "stamp"]);
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("matches.txt");

    let config = ProcessorConfig {
        output: Some(path.clone()),
        ..quiet()
    };
    let processor = Processor::new(config, StaticWordSource::from_text(CORNCOB_SAMPLE));
    let feedback = Feedback::new("__an_", Vec::<String>::new(), "");

    let words = matched(processor.run(&feedback).unwrap());
    assert_eq!(words, vec!["crane", "plane"]);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "crane\nplane\n");
}

#[test]
fn test_malformed_source_location() {
    assert!(matches!(
        HttpWordSource::new("://corncob"),
        Err(SourceError::BadSource { .. })
    ));
}
