//! Product-tuned constants for segmentation and scoring.
//!
//! Keyword lists and thresholds live here so they can be revisited without
//! touching segmentation or scoring code.

use crate::transcript::Role;

// ---------------------------------------------------------------------------
// Role labels
// ---------------------------------------------------------------------------

/// Labels that normalize to [`Role::User`].
pub const USER_ALIASES: &[&str] = &["user", "human", "u", "you"];

/// Labels that normalize to [`Role::Assistant`].
pub const ASSISTANT_ALIASES: &[&str] = &["assistant", "ai", "bot", "system", "model", "chatgpt"];

// ---------------------------------------------------------------------------
// Segmentation
// ---------------------------------------------------------------------------

/// Speaker markers recognised by the lookahead split. Matched case-sensitively
/// at the start of a line, followed by a colon.
pub const LOOKAHEAD_USER_MARKERS: &[&str] = &["User", "You", "Human"];
pub const LOOKAHEAD_ASSISTANT_MARKERS: &[&str] = &["AI", "Assistant", "ChatGPT"];

/// Default `label:` prefixes for the line-buffered strategy.
pub const DEFAULT_LINE_MARKERS: &[(&str, Role)] = &[
    ("user", Role::User),
    ("you", Role::User),
    ("human", Role::User),
    ("ai", Role::Assistant),
    ("assistant", Role::Assistant),
    ("chatgpt", Role::Assistant),
    ("bot", Role::Assistant),
    ("model", Role::Assistant),
];

/// Marker pair used by the ChatGPT web export ("You said: ... ChatGPT said: ...").
pub const FIXED_USER_MARKER: &str = "You said:";
pub const FIXED_ASSISTANT_MARKER: &str = "ChatGPT said:";

/// Markers that open and close a fenced block.
pub const FENCE_MARKERS: &[&str] = &["```", "~~~"];

// ---------------------------------------------------------------------------
// SHAPE scoring
// ---------------------------------------------------------------------------

pub const STRUCTURAL_KEYWORDS: &[&str] =
    &["outline", "structure", "organize", "framework", "reorganize", "format"];
pub const HUMAN_MEANING_KEYWORDS: &[&str] =
    &["meaning", "interpret", "clarify", "the point is", "in other words"];
pub const AUTHORIAL_VOICE_KEYWORDS: &[&str] =
    &["my voice", "style", "tone", "make it sound like", "more personal"];
pub const PURPOSE_FRAMING_KEYWORDS: &[&str] = &["audience", "purpose", "goal", "for a", "so that"];
pub const EDITORIAL_KEYWORDS: &[&str] =
    &["edit", "refine", "change", "add", "remove", "improve", "rewrite"];

/// Maximum score of a single SHAPE dimension.
pub const DIMENSION_MAX: u8 = 5;

/// Highest total that still classifies as Tool / Enhancer.
pub const TOOL_ENHANCER_MAX: u8 = 10;
/// Highest total that still classifies as Assistant.
pub const ASSISTANT_MAX: u8 = 17;
/// Highest total that still classifies as Augmentor. Anything above is Cocreator.
pub const AUGMENTOR_MAX: u8 = 22;

// ---------------------------------------------------------------------------
// Single-scalar scoring
// ---------------------------------------------------------------------------

pub const SCALAR_BASELINE: i32 = 2;
pub const SCALAR_MAX: u8 = 5;
pub const HIGH_AI_SHARE: f64 = 0.65;
pub const HIGH_USER_SHARE: f64 = 0.60;
pub const LOW_AI_SHARE: f64 = 0.20;
pub const LONG_SESSION_TURNS: usize = 12;
pub const STRICT_LONG_SESSION_TURNS: usize = 20;

/// Label per scalar score, indexed by score.
pub const SCALAR_LABELS: [&str; 6] = [
    "Negligible AI influence",
    "Light AI assistance",
    "Moderate AI shaping",
    "Substantial AI shaping",
    "Heavy AI shaping",
    "AI-dominant shaping",
];
