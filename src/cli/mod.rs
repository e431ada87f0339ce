pub mod analyze;
pub mod input;
pub mod render;

use clap::ValueEnum;

use aics::transcript::SegmentStrategy;
use aics::{ScalarConfig, ScoringMode};

/// Scoring mode.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ModeArg {
    /// Five SHAPE dimensions mapped to a collaboration tier (default)
    #[default]
    Shape,
    /// Single 0-5 score from word share, session length and fenced blocks
    Scalar,
}

impl ModeArg {
    pub fn scoring_mode(self, strict: bool, long_session: Option<usize>) -> ScoringMode {
        match self {
            ModeArg::Shape => ScoringMode::Shape,
            ModeArg::Scalar => {
                let mut config = if strict {
                    ScalarConfig::strict()
                } else {
                    ScalarConfig::default()
                };
                if let Some(turns) = long_session {
                    config.long_session_turns = turns;
                }
                ScoringMode::Scalar(config)
            }
        }
    }
}

/// Plain-text segmentation strategy.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum StrategyArg {
    /// Detect from the transcript (default)
    #[default]
    Auto,
    /// Split before `User:` / `AI:` style markers at line starts
    Lookahead,
    /// Line by line, with an extensible `label:` marker set
    Line,
    /// "You said:" / "ChatGPT said:" exports
    Fixed,
}

impl From<StrategyArg> for SegmentStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Auto => SegmentStrategy::Auto,
            StrategyArg::Lookahead => SegmentStrategy::Lookahead,
            StrategyArg::Line => SegmentStrategy::LineBuffered,
            StrategyArg::Fixed => SegmentStrategy::FixedDelimiter,
        }
    }
}
