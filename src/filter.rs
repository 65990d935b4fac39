//! Word filtering module
//!
//! Narrows a word list down to the words consistent with Wordle feedback:
//! green letters (right letter, right place), orange letters (in the word,
//! wrong place) and grey letters (not in the word).

use regex::Regex;
use std::collections::BTreeSet;

use crate::error::FilterError;

/// Character meaning "no information at this position"
pub const DEFAULT_PLACEHOLDER: char = '_';

/// Feedback gathered from one board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Known letters at known positions, placeholder elsewhere
    pub green: String,
    /// One row per guess with misplaced letters, placeholder elsewhere
    pub orange: Vec<String>,
    /// Letters reported absent
    pub grey: String,
    pub placeholder: char,
}

impl Feedback {
    /// Create feedback with the default placeholder. All input is lowercased.
    pub fn new<I, S>(green: &str, orange: I, grey: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            green: normalize(green),
            orange: orange.into_iter().map(|row| normalize(row.as_ref())).collect(),
            grey: normalize(grey),
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }

    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Length every candidate must have
    pub fn word_length(&self) -> usize {
        self.green.chars().count()
    }

    /// Letters fixed by the green pattern
    pub fn green_letters(&self) -> BTreeSet<char> {
        self.letters_of(&self.green)
    }

    /// Letters the word must contain: every orange letter of every row
    pub fn must_contain(&self) -> BTreeSet<char> {
        self.orange
            .iter()
            .flat_map(|row| self.letters_of(row))
            .collect()
    }

    /// Grey letters as entered, without whitespace or placeholders
    pub fn grey_letters(&self) -> BTreeSet<char> {
        self.letters_of(&self.grey)
    }

    /// Grey letters minus green letters
    pub fn effective_disallowed(&self) -> BTreeSet<char> {
        let green = self.green_letters();
        self.grey_letters()
            .into_iter()
            .filter(|c| !green.contains(c))
            .collect()
    }

    fn letters_of(&self, s: &str) -> BTreeSet<char> {
        s.chars()
            .filter(|&c| c != self.placeholder && !c.is_whitespace())
            .collect()
    }

    /// Compile the feedback into a reusable filter
    pub fn constraints(&self) -> Result<Constraints, FilterError> {
        Constraints::new(self)
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Contradictions found in a set of feedback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conflicts {
    /// Letters marked both green and grey; grey is ignored for these
    pub green_and_grey: BTreeSet<char>,
    /// Letters marked both orange and grey; nothing can match
    pub orange_and_grey: BTreeSet<char>,
    /// Indices of orange rows whose length differs from the green pattern
    pub mismatched_rows: Vec<usize>,
}

impl Conflicts {
    pub fn is_empty(&self) -> bool {
        self.green_and_grey.is_empty()
            && self.orange_and_grey.is_empty()
            && self.mismatched_rows.is_empty()
    }

    /// One warning line per problem
    pub fn messages(&self) -> Vec<String> {
        let mut messages = Vec::new();

        if !self.green_and_grey.is_empty() {
            messages.push(format!(
                "Letters marked both green and grey: {} (treating them as green)",
                join_letters(&self.green_and_grey)
            ));
        }
        if !self.orange_and_grey.is_empty() {
            messages.push(format!(
                "Letters marked both orange and grey: {} (no word can match)",
                join_letters(&self.orange_and_grey)
            ));
        }
        for &row in &self.mismatched_rows {
            messages.push(format!(
                "Orange row {} has a different length than the green pattern",
                row + 1
            ));
        }

        messages
    }
}

fn join_letters(letters: &BTreeSet<char>) -> String {
    letters.iter().collect()
}

/// Look for contradictory feedback
pub fn find_conflicts(feedback: &Feedback) -> Conflicts {
    let green = feedback.green_letters();
    let grey = feedback.grey_letters();
    let disallowed = feedback.effective_disallowed();
    let length = feedback.word_length();

    Conflicts {
        green_and_grey: grey.intersection(&green).copied().collect(),
        orange_and_grey: disallowed
            .intersection(&feedback.must_contain())
            .copied()
            .collect(),
        mismatched_rows: feedback
            .orange
            .iter()
            .enumerate()
            .filter(|(_, row)| row.chars().count() != length)
            .map(|(i, _)| i)
            .collect(),
    }
}

/// Green pattern compiled to an anchored regex
#[derive(Debug, Clone)]
pub struct GreenPattern {
    pattern: Regex,
}

impl GreenPattern {
    pub fn new(green: &str, placeholder: char) -> Result<Self, FilterError> {
        let mut source = String::with_capacity(green.len() + 2);
        source.push('^');
        for c in green.chars() {
            if c == placeholder {
                source.push('.');
            } else {
                source.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
            }
        }
        source.push('$');

        let pattern = Regex::new(&source).map_err(|e| FilterError::Pattern {
            pattern: green.to_string(),
            source: e,
        })?;

        Ok(Self { pattern })
    }

    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        self.pattern.is_match(word)
    }

    pub fn pattern_str(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Feedback reduced to the checks applied to each word
#[derive(Debug, Clone)]
pub struct Constraints {
    length: usize,
    green: GreenPattern,
    disallowed: BTreeSet<char>,
    must_contain: BTreeSet<char>,
    /// Per orange row, the letter excluded at each position
    excluded_at: Vec<Vec<Option<char>>>,
}

impl Constraints {
    pub fn new(feedback: &Feedback) -> Result<Self, FilterError> {
        let excluded_at = feedback
            .orange
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| (c != feedback.placeholder).then_some(c))
                    .collect()
            })
            .collect();

        let constraints = Self {
            length: feedback.word_length(),
            green: GreenPattern::new(&feedback.green, feedback.placeholder)?,
            disallowed: feedback.effective_disallowed(),
            must_contain: feedback.must_contain(),
            excluded_at,
        };

        log::debug!(
            "Green pattern {}, disallowed [{}], must contain [{}]",
            constraints.green.pattern_str(),
            join_letters(&constraints.disallowed),
            join_letters(&constraints.must_contain)
        );

        Ok(constraints)
    }

    pub fn disallowed(&self) -> &BTreeSet<char> {
        &self.disallowed
    }

    pub fn must_contain(&self) -> &BTreeSet<char> {
        &self.must_contain
    }

    /// Length, grey and orange checks. Expects a lowercased word.
    pub fn passes_letters(&self, word: &str) -> bool {
        if word.chars().count() != self.length {
            return false;
        }

        if word.chars().any(|c| self.disallowed.contains(&c)) {
            return false;
        }

        if !self.must_contain.iter().all(|&c| word.contains(c)) {
            return false;
        }

        // An orange letter is in the word, but never where it was flagged
        !self.excluded_at.iter().any(|row| {
            row.iter()
                .zip(word.chars())
                .any(|(excluded, c)| *excluded == Some(c))
        })
    }

    /// Green check. Expects a lowercased word.
    #[inline]
    pub fn matches_green(&self, word: &str) -> bool {
        self.green.matches(word)
    }

    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        self.passes_letters(word) && self.matches_green(word)
    }
}

/// Filter `words` by `feedback`, returning lowercased matches in source order
pub fn filter_words(words: &[String], feedback: &Feedback) -> Result<Vec<String>, FilterError> {
    let constraints = feedback.constraints()?;

    let survivors: Vec<String> = words
        .iter()
        .map(|word| word.to_lowercase())
        .filter(|word| constraints.passes_letters(word))
        .collect();

    Ok(survivors
        .into_iter()
        .filter(|word| constraints.matches_green(word))
        .collect())
}
