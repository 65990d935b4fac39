//! Progress display module
//!
//! Status messages, a spinner for the blocking download and the run summary.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════╗
║              --- Wordle Solver ---           ║
║   filter a dictionary by green, orange and   ║
║               grey letter feedback           ║
╚══════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Pipeline stages that get a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Fetching,
    Done,
    Matching,
    Failed,
}

impl Status {
    pub fn message(self) -> &'static str {
        match self {
            Self::Fetching => "Fetching word list...",
            Self::Done => "Done.",
            Self::Matching => "Matching words...",
            Self::Failed => "Failed.",
        }
    }

    /// Print the status line unless `quiet`. Failure is always shown.
    pub fn print(self, quiet: bool) {
        match self {
            Self::Failed => print_error(self.message()),
            _ if quiet => {}
            Self::Done => print_success(self.message()),
            _ => print_header(self.message()),
        }
    }
}

/// Create a styled spinner for indeterminate progress
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    if let Ok(style) = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {msg}")
    {
        pb.set_style(style.tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "));
    }

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Statistics for one run
#[derive(Debug)]
pub struct RunStats {
    pub fetched_words: u64,
    pub duplicate_words: u64,
    pub matched_words: u64,
    pub start_time: Instant,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            fetched_words: 0,
            duplicate_words: 0,
            matched_words: 0,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        println!();
        println!("{}", "═".repeat(48).green());
        println!("  {} {}", "Words fetched:  ".green(), format_number(self.fetched_words));
        if self.duplicate_words > 0 {
            println!("  {} {}", "Duplicates:     ".yellow(), format_number(self.duplicate_words));
        }
        println!(
            "  {} {}",
            "Matches:        ".green().bold(),
            format_number(self.matched_words).green().bold()
        );
        println!("  {} {}", "Duration:       ".green(), format_duration(self.elapsed()));
        println!("{}", "═".repeat(48).green());
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        assert_eq!(Status::Fetching.message(), "Fetching word list...");
        assert_eq!(Status::Done.message(), "Done.");
        assert_eq!(Status::Matching.message(), "Matching words...");
        assert_eq!(Status::Failed.message(), "Failed.");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(58112), "58,112");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
    }
}
