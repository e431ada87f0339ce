use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::roles::Role;
use super::segmenter::SegmentSource;
use crate::error::SegmentError;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("valid word regex"));

/// Count word tokens: alphanumeric runs bounded by word boundaries.
/// Punctuation-only tokens do not count.
pub fn word_count(text: &str) -> usize {
    WORD.find_iter(text).count()
}

/// One attributed utterance. Content is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    role: Role,
    content: String,
    word_count: usize,
}

impl Turn {
    /// Build a turn, or `None` if the content is blank.
    pub fn new(role: Role, content: &str) -> Option<Turn> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        Some(Turn {
            role,
            content: content.to_string(),
            word_count: word_count(content),
        })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

/// Result of segmenting a transcript.
///
/// A session is either fully usable or entirely rejected: when `errors` is
/// non-empty, `turns` is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedSession {
    turns: Vec<Turn>,
    errors: Vec<SegmentError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<SegmentSource>,
}

impl ParsedSession {
    pub(crate) fn parsed(turns: Vec<Turn>, source: SegmentSource) -> ParsedSession {
        if turns.is_empty() {
            return ParsedSession::rejected(SegmentError::NoRecognizableTurns);
        }
        ParsedSession {
            turns,
            errors: Vec::new(),
            source: Some(source),
        }
    }

    pub(crate) fn rejected(error: SegmentError) -> ParsedSession {
        ParsedSession {
            turns: Vec::new(),
            errors: vec![error],
            source: None,
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn errors(&self) -> &[SegmentError] {
        &self.errors
    }

    /// The path that produced the turns; `None` for rejected sessions.
    pub fn source(&self) -> Option<SegmentSource> {
        self.source
    }

    pub fn is_usable(&self) -> bool {
        self.errors.is_empty()
    }

    /// Turns spoken by `role`, in conversational order.
    pub fn turns_by(&self, role: Role) -> impl Iterator<Item = &Turn> {
        self.turns.iter().filter(move |t| t.role == role)
    }
}
