use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::roles::Role;
use super::session::{ParsedSession, Turn};
use super::structured::parse_structured;
use crate::config::{
    DEFAULT_LINE_MARKERS, FIXED_ASSISTANT_MARKER, FIXED_USER_MARKER, LOOKAHEAD_ASSISTANT_MARKERS,
    LOOKAHEAD_USER_MARKERS,
};
use crate::error::SegmentError;

fn marker_alternation() -> String {
    LOOKAHEAD_USER_MARKERS
        .iter()
        .chain(LOOKAHEAD_ASSISTANT_MARKERS)
        .map(|m| regex::escape(m))
        .collect::<Vec<_>>()
        .join("|")
}

/// A newline, optional whitespace, then a speaker marker. Group 1 is the
/// marker, which starts the next segment.
static LOOKAHEAD_SPLIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\n\s*((?:{}):)", marker_alternation())).expect("valid split regex")
});

static LOOKAHEAD_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(?:{}):", marker_alternation())).expect("valid start regex")
});

static USER_PREFIX: Lazy<Regex> = Lazy::new(|| prefix_regex(LOOKAHEAD_USER_MARKERS));
static ASSISTANT_PREFIX: Lazy<Regex> = Lazy::new(|| prefix_regex(LOOKAHEAD_ASSISTANT_MARKERS));

fn prefix_regex(markers: &[&str]) -> Regex {
    let alternation = markers
        .iter()
        .map(|m| regex::escape(m))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)^(?:{}):\s*", alternation)).expect("valid prefix regex")
}

/// Which plain-text strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentStrategy {
    /// Pick one from the shape of the text.
    #[default]
    Auto,
    Lookahead,
    LineBuffered,
    FixedDelimiter,
}

/// The path that actually produced a session's turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentSource {
    Structured,
    Lookahead,
    LineBuffered,
    FixedDelimiter,
}

/// `label:` prefixes recognised at the start of a line by the line-buffered
/// strategy. Labels are stored lowercase and matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    markers: Vec<(String, Role)>,
    extended: bool,
}

impl Default for MarkerSet {
    fn default() -> Self {
        let mut set = MarkerSet {
            markers: DEFAULT_LINE_MARKERS
                .iter()
                .map(|(label, role)| (label.to_string(), *role))
                .collect(),
            extended: false,
        };
        set.sort();
        set
    }
}

impl MarkerSet {
    /// Add (or re-map) a label.
    pub fn with(mut self, label: &str, role: Role) -> Self {
        let label = label.trim().to_lowercase();
        if label.is_empty() {
            return self;
        }
        self.markers.retain(|(existing, _)| *existing != label);
        self.markers.push((label, role));
        self.extended = true;
        self.sort();
        self
    }

    /// True once caller-supplied labels have been added.
    pub fn is_extended(&self) -> bool {
        self.extended
    }

    pub fn labels(&self) -> impl Iterator<Item = (&str, Role)> {
        self.markers.iter().map(|(label, role)| (label.as_str(), *role))
    }

    // Longest first, then alphabetical, so `labels()` has a stable order.
    fn sort(&mut self) {
        self.markers.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
    }

    /// Detect a marker at the start of `line`. Returns the role and the rest
    /// of the line after the colon.
    pub fn detect<'a>(&self, line: &'a str) -> Option<(Role, &'a str)> {
        let trimmed = line.trim_start();
        self.markers.iter().find_map(|(label, role)| {
            let head = trimmed.get(..label.len())?;
            let rest = trimmed.get(label.len()..)?;
            if head.to_lowercase() == *label && rest.starts_with(':') {
                Some((*role, rest[1..].trim_start()))
            } else {
                None
            }
        })
    }
}

/// The two literal markers of the fixed-delimiter strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedMarkers {
    pub user: String,
    pub assistant: String,
}

impl Default for FixedMarkers {
    fn default() -> Self {
        FixedMarkers {
            user: FIXED_USER_MARKER.to_string(),
            assistant: FIXED_ASSISTANT_MARKER.to_string(),
        }
    }
}

impl FixedMarkers {
    fn present_in(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        lower.contains(&self.user.to_lowercase()) && lower.contains(&self.assistant.to_lowercase())
    }

    fn split_regex(&self) -> Option<Regex> {
        Regex::new(&format!(
            "(?i)(?:{}|{})",
            regex::escape(&self.user),
            regex::escape(&self.assistant)
        ))
        .ok()
    }

    /// Strip a leading marker, returning its role and the remaining text.
    fn strip<'a>(&self, segment: &'a str) -> Option<(Role, &'a str)> {
        [(self.user.as_str(), Role::User), (self.assistant.as_str(), Role::Assistant)]
            .into_iter()
            .find_map(|(marker, role)| {
                let head = segment.get(..marker.len())?;
                if head.eq_ignore_ascii_case(marker) {
                    Some((role, &segment[marker.len()..]))
                } else {
                    None
                }
            })
    }
}

/// A plain-text split, once the strategy has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlainSplit {
    Lookahead,
    LineBuffered,
    FixedDelimiter,
}

impl From<PlainSplit> for SegmentSource {
    fn from(split: PlainSplit) -> Self {
        match split {
            PlainSplit::Lookahead => SegmentSource::Lookahead,
            PlainSplit::LineBuffered => SegmentSource::LineBuffered,
            PlainSplit::FixedDelimiter => SegmentSource::FixedDelimiter,
        }
    }
}

/// How to segment plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentOptions {
    pub strategy: SegmentStrategy,
    /// Skip the structured (JSON) path when true.
    pub plain_text_only: bool,
    pub markers: MarkerSet,
    pub fixed: FixedMarkers,
}

/// Split a transcript into attributed turns.
///
/// The structured path is tried first; input that is not a well-formed
/// record collection falls through to plain-text segmentation. A session
/// with zero non-empty turns is rejected.
pub fn segment(text: &str, options: &SegmentOptions) -> ParsedSession {
    if text.trim().is_empty() {
        debug!("empty transcript");
        return ParsedSession::rejected(SegmentError::EmptyInput);
    }

    let text = normalize_line_endings(text);

    if !options.plain_text_only {
        if let Some(turns) = parse_structured(&text) {
            debug!(turns = turns.len(), "parsed structured transcript");
            return ParsedSession::parsed(turns, SegmentSource::Structured);
        }
    }

    let split = match options.strategy {
        SegmentStrategy::Auto => detect_split(&text, options),
        SegmentStrategy::Lookahead => PlainSplit::Lookahead,
        SegmentStrategy::LineBuffered => PlainSplit::LineBuffered,
        SegmentStrategy::FixedDelimiter => PlainSplit::FixedDelimiter,
    };

    let turns = match split {
        PlainSplit::FixedDelimiter => split_fixed(&text, &options.fixed),
        PlainSplit::Lookahead => split_lookahead(&text),
        PlainSplit::LineBuffered => split_lines(&text, &options.markers),
    };

    debug!(?split, turns = turns.len(), "segmented plain-text transcript");
    ParsedSession::parsed(turns, split.into())
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Caller-extended markers first, then line-leading lookahead markers. The
/// fixed-delimiter pair is only a fallback for text without either, so a
/// quoted "you said:" inside a `User:`/`AI:` transcript does not split it.
fn detect_split(text: &str, options: &SegmentOptions) -> PlainSplit {
    if options.markers.is_extended() && text.lines().any(|l| options.markers.detect(l).is_some()) {
        return PlainSplit::LineBuffered;
    }
    if LOOKAHEAD_SPLIT.is_match(text) || LOOKAHEAD_START.is_match(text.trim_start()) {
        return PlainSplit::Lookahead;
    }
    if options.fixed.present_in(text) {
        return PlainSplit::FixedDelimiter;
    }
    PlainSplit::LineBuffered
}

/// Split before every line-leading speaker marker.
///
/// A segment without a marker takes the role implied by strict alternation
/// starting from `user`. Consecutive same-role turns without markers are
/// therefore mislabeled; this is kept as-is.
fn split_lookahead(text: &str) -> Vec<Turn> {
    let text = text.trim();

    let mut segments = Vec::new();
    let mut start = 0;
    for caps in LOOKAHEAD_SPLIT.captures_iter(text) {
        let (Some(whole), Some(marker)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        segments.push(&text[start..whole.start()]);
        start = marker.start();
    }
    segments.push(&text[start..]);

    let mut turns = Vec::new();
    let mut expected = Role::User;

    for segment in segments {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let (role, content) = if let Some(m) = USER_PREFIX.find(segment) {
            (Role::User, &segment[m.end()..])
        } else if let Some(m) = ASSISTANT_PREFIX.find(segment) {
            (Role::Assistant, &segment[m.end()..])
        } else {
            (expected, segment)
        };

        if let Some(turn) = Turn::new(role, content) {
            expected = role.other();
            turns.push(turn);
        }
    }

    turns
}

/// Split on the two literal markers only.
///
/// Every cut lands on a marker, so only the text before the first marker can
/// lack one; it becomes a user turn.
fn split_fixed(text: &str, markers: &FixedMarkers) -> Vec<Turn> {
    let Some(splitter) = markers.split_regex() else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    let mut start = 0;
    for m in splitter.find_iter(text) {
        if m.start() > start {
            segments.push(&text[start..m.start()]);
        }
        start = m.start();
    }
    segments.push(&text[start..]);

    attribute_fixed(segments, markers)
}

/// Attribute fixed-delimiter segments. A segment matching neither marker is
/// appended to the previous turn, separated by a blank line, or becomes a
/// user turn when there is none.
fn attribute_fixed<'a>(
    segments: impl IntoIterator<Item = &'a str>,
    markers: &FixedMarkers,
) -> Vec<Turn> {
    let mut pending: Vec<(Role, String)> = Vec::new();
    for segment in segments {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        match markers.strip(segment) {
            Some((role, content)) => pending.push((role, content.trim().to_string())),
            None => match pending.last_mut() {
                Some((_, previous)) => {
                    previous.push_str("\n\n");
                    previous.push_str(segment);
                }
                None => pending.push((Role::User, segment.to_string())),
            },
        }
    }

    pending
        .into_iter()
        .filter_map(|(role, content)| Turn::new(role, &content))
        .collect()
}

/// Walk the text line by line. A marker line flushes the previous turn and
/// opens a new one; other lines join the current turn. Lines before the
/// first marker belong to the user.
fn split_lines(text: &str, markers: &MarkerSet) -> Vec<Turn> {
    let mut turns = Vec::new();
    let mut current: Option<(Role, Vec<&str>)> = None;

    for line in text.lines() {
        match markers.detect(line) {
            Some((role, rest)) => {
                if let Some((previous, buffer)) = current.take() {
                    turns.extend(Turn::new(previous, &buffer.join("\n")));
                }
                current = Some((role, vec![rest]));
            }
            None => match current.as_mut() {
                Some((_, buffer)) => buffer.push(line),
                None => current = Some((Role::User, vec![line])),
            },
        }
    }

    if let Some((role, buffer)) = current {
        turns.extend(Turn::new(role, &buffer.join("\n")));
    }

    turns
}
