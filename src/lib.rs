//! Collaboration scoring for human/AI chat transcripts.
//!
//! Pipeline: raw text → [`transcript::segment`] → [`SessionStatistics`] →
//! [`CollaborationAssessment`]. Every step is a pure function of its input.

pub mod analysis;
pub mod config;
pub mod error;
pub mod transcript;

pub use analysis::{
    analyze_session, Analysis, CollaborationAssessment, CollaborationTier, Recommendation,
    ScalarConfig, ScoringMode, SessionStatistics,
};
pub use error::{SegmentError, SessionRejected};
pub use transcript::{ParsedSession, Role, SegmentOptions, Turn};

/// Everything the engine needs besides the transcript.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzerConfig {
    pub segment: SegmentOptions,
    pub scoring: ScoringMode,
}

/// Segment, measure and score a transcript in one call.
pub fn analyze(text: &str, config: &AnalyzerConfig) -> Result<Analysis, SessionRejected> {
    let session = transcript::segment(text, &config.segment);
    analyze_session(&session, &config.scoring)
}
