//! Synopsis heading detection.
//!
//! Doc comments are plain prose. Short capitalized lines standing alone
//! ("Overview", "Quick Start") are promoted to markdown headings so the
//! synopsis keeps its structure.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static RE_ONE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9]+)$").unwrap());

static RE_TITLE_CASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:[A-Z][A-Za-z0-9]*)(?:[ \t]+[A-Z][A-Za-z0-9]*)*)$").unwrap()
});

static RE_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:[A-Za-z0-9]+)(?:[ \t]+[A-Za-z0-9]+)*)$").unwrap()
});

static RE_TITLE_CASE_ONE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:[A-Za-z0-9]+)|(?:(?:[A-Z][A-Za-z0-9]*)(?:[ \t]+[A-Z][A-Za-z0-9]*)*))$")
        .unwrap()
});

/// Rule deciding which synopsis lines become headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingPattern {
    /// A single alphanumeric word.
    OneWord,
    /// Every word starts with an uppercase letter.
    TitleCase,
    /// Every word is alphanumeric, any case.
    Title,
    /// `OneWord` or `TitleCase`.
    #[default]
    TitleCase1Word,
    /// Detection disabled.
    None,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown heading pattern: {0:?}. Use 1Word, TitleCase, Title, TitleCase1Word, or \"\"")]
pub struct UnknownHeading(pub String);

impl HeadingPattern {
    fn regex(self) -> Option<&'static Regex> {
        match self {
            HeadingPattern::OneWord => Some(&*RE_ONE_WORD),
            HeadingPattern::TitleCase => Some(&*RE_TITLE_CASE),
            HeadingPattern::Title => Some(&*RE_TITLE),
            HeadingPattern::TitleCase1Word => Some(&*RE_TITLE_CASE_ONE_WORD),
            HeadingPattern::None => None,
        }
    }

    /// Whether a single line would be promoted.
    pub fn classify_line(self, line: &str) -> bool {
        if line.contains('\n') {
            return false;
        }
        self.regex().is_some_and(|re| re.is_match(line))
    }

    /// Prefix every matching line of `text` with `marker`.
    pub fn promote(self, text: &str, marker: &str) -> String {
        if self == HeadingPattern::None {
            return text.to_string();
        }
        text.split_inclusive('\n')
            .map(|line| {
                if self.classify_line(line.trim_end_matches('\n')) {
                    format!("{} {}", marker, line)
                } else {
                    line.to_string()
                }
            })
            .collect()
    }
}

impl FromStr for HeadingPattern {
    type Err = UnknownHeading;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1Word" | "OneWord" => Ok(HeadingPattern::OneWord),
            "TitleCase" => Ok(HeadingPattern::TitleCase),
            "Title" => Ok(HeadingPattern::Title),
            "TitleCase1Word" => Ok(HeadingPattern::TitleCase1Word),
            "" | "-" | "none" => Ok(HeadingPattern::None),
            other => Err(UnknownHeading(other.to_string())),
        }
    }
}

impl fmt::Display for HeadingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeadingPattern::OneWord => "1Word",
            HeadingPattern::TitleCase => "TitleCase",
            HeadingPattern::Title => "Title",
            HeadingPattern::TitleCase1Word => "TitleCase1Word",
            HeadingPattern::None => "",
        };
        f.write_str(name)
    }
}
