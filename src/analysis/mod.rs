pub mod recommendations;
pub mod scalar;
pub mod shape;
pub mod stats;

use serde::Serialize;

use crate::error::SessionRejected;
use crate::transcript::{ParsedSession, SegmentSource};

pub use recommendations::Recommendation;
pub use scalar::{Penalty, ScalarAssessment, ScalarConfig};
pub use shape::{CollaborationTier, ShapeAssessment, ShapeDimension, ShapeScores};
pub use stats::SessionStatistics;

/// Which scorer turns statistics into an assessment.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScoringMode {
    /// Five keyword dimensions summed into a tiered total.
    #[default]
    Shape,
    /// One bounded score from word share, length and fenced blocks.
    Scalar(ScalarConfig),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CollaborationAssessment {
    Shape(ShapeAssessment),
    Scalar(ScalarAssessment),
}

impl CollaborationAssessment {
    /// The tier, for SHAPE assessments.
    pub fn classification(&self) -> Option<CollaborationTier> {
        match self {
            CollaborationAssessment::Shape(shape) => Some(shape.classification),
            CollaborationAssessment::Scalar(_) => None,
        }
    }

    pub fn reasons(&self) -> &[String] {
        match self {
            CollaborationAssessment::Shape(shape) => &shape.reasons,
            CollaborationAssessment::Scalar(scalar) => &scalar.reasons,
        }
    }
}

/// Statistics and assessment of a usable session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub source: SegmentSource,
    pub statistics: SessionStatistics,
    pub assessment: CollaborationAssessment,
}

impl Analysis {
    pub fn recommendation(&self) -> Option<Recommendation> {
        self.assessment.classification().map(recommendations::for_tier)
    }
}

/// Compute statistics and an assessment. Rejected sessions are returned as
/// an error without any partial scoring.
pub fn analyze_session(
    session: &ParsedSession,
    mode: &ScoringMode,
) -> Result<Analysis, SessionRejected> {
    let source = match session.source() {
        Some(source) if session.is_usable() => source,
        _ => {
            return Err(SessionRejected {
                errors: session.errors().to_vec(),
            })
        }
    };

    let statistics = SessionStatistics::from_turns(session.turns());
    let assessment = match mode {
        ScoringMode::Shape => CollaborationAssessment::Shape(shape::assess(session.turns())),
        ScoringMode::Scalar(config) => {
            CollaborationAssessment::Scalar(scalar::assess(&statistics, config))
        }
    };

    Ok(Analysis {
        source,
        statistics,
        assessment,
    })
}
