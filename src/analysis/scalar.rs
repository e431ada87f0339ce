//! Lightweight single-scalar scorer.
//!
//! Starts from a baseline and applies adjustments in a fixed order, each
//! appending a reason when it fires. The result is clamped to `0..=5`.

use serde::Serialize;

use super::stats::SessionStatistics;
use crate::config::{
    HIGH_AI_SHARE, HIGH_USER_SHARE, LONG_SESSION_TURNS, LOW_AI_SHARE, SCALAR_BASELINE, SCALAR_LABELS,
    SCALAR_MAX, STRICT_LONG_SESSION_TURNS,
};

/// When the final adjustment subtracts a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "threshold", rename_all = "snake_case")]
pub enum Penalty {
    /// User share strictly above the threshold.
    UserShareAbove(f64),
    /// AI share at or below the threshold, only if the high-share bonus did not fire.
    AiShareAtMost(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalarConfig {
    pub high_ai_share: f64,
    pub high_ai_share_bonus: i32,
    /// Sessions with more turns than this get a point.
    pub long_session_turns: usize,
    pub penalty: Penalty,
}

impl Default for ScalarConfig {
    fn default() -> Self {
        ScalarConfig {
            high_ai_share: HIGH_AI_SHARE,
            high_ai_share_bonus: 1,
            long_session_turns: LONG_SESSION_TURNS,
            penalty: Penalty::UserShareAbove(HIGH_USER_SHARE),
        }
    }
}

impl ScalarConfig {
    pub fn strict() -> Self {
        ScalarConfig {
            high_ai_share: HIGH_AI_SHARE,
            high_ai_share_bonus: 2,
            long_session_turns: STRICT_LONG_SESSION_TURNS,
            penalty: Penalty::AiShareAtMost(LOW_AI_SHARE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScalarAssessment {
    pub score: u8,
    pub label: String,
    pub interpretation: String,
    pub reasons: Vec<String>,
}

pub fn assess(stats: &SessionStatistics, config: &ScalarConfig) -> ScalarAssessment {
    let mut score = SCALAR_BASELINE;
    let mut reasons = Vec::new();

    let high_share = stats.ai_share >= config.high_ai_share;
    if high_share {
        score += config.high_ai_share_bonus;
        reasons.push(format!(
            "The AI wrote {} of the words (at least {}).",
            percent(stats.ai_share),
            percent(config.high_ai_share)
        ));
    }

    if stats.total_turns > config.long_session_turns {
        score += 1;
        reasons.push(format!(
            "Long session: {} turns (more than {}).",
            stats.total_turns, config.long_session_turns
        ));
    }

    if stats.has_structured_block {
        score += 1;
        reasons.push("The conversation contains fenced structured blocks.".to_string());
    }

    match config.penalty {
        Penalty::UserShareAbove(threshold) if stats.user_share() > threshold => {
            score -= 1;
            reasons.push(format!(
                "You wrote {} of the words (more than {}).",
                percent(stats.user_share()),
                percent(threshold)
            ));
        }
        Penalty::AiShareAtMost(threshold) if !high_share && stats.ai_share <= threshold => {
            score -= 1;
            reasons.push(format!(
                "The AI wrote only {} of the words (at most {}).",
                percent(stats.ai_share),
                percent(threshold)
            ));
        }
        _ => {}
    }

    let score = score.clamp(0, SCALAR_MAX as i32) as u8;

    ScalarAssessment {
        score,
        label: SCALAR_LABELS[score as usize].to_string(),
        interpretation: interpretation(score).to_string(),
        reasons,
    }
}

fn interpretation(score: u8) -> &'static str {
    match score {
        0 => "The transcript reads as your own work; the AI contributed little or nothing.",
        1 => "The AI helped at the edges, but the substance and direction are yours.",
        2 => "You and the AI shared the work, with you setting the direction.",
        3 => "The AI shaped a substantial part of the content; review it for your own voice.",
        4 => "Most of the content came from the AI; consider how much of the thinking is yours.",
        _ => "The AI shaped nearly all of the content; your role was mostly prompting.",
    }
}

fn percent(share: f64) -> String {
    format!("{:.0}%", share * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(user_words: usize, ai_words: usize, total_turns: usize, fenced: bool) -> SessionStatistics {
        let total = (user_words + ai_words).max(1);
        SessionStatistics {
            total_turns,
            user_turns: total_turns / 2,
            ai_turns: total_turns - total_turns / 2,
            user_words,
            ai_words,
            ai_share: ai_words as f64 / total as f64,
            has_structured_block: fenced,
        }
    }

    #[test]
    fn test_balanced_session_stays_at_baseline() {
        let result = assess(&stats(50, 50, 4, false), &ScalarConfig::default());
        assert_eq!(result.score, 2);
        assert_eq!(result.label, "Moderate AI shaping");
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_all_bonuses_clamp_at_five() {
        let result = assess(&stats(10, 90, 30, true), &ScalarConfig::strict());
        // 2 + 2 + 1 + 1 = 6, clamped.
        assert_eq!(result.score, 5);
        assert_eq!(result.label, "AI-dominant shaping");
        assert_eq!(result.reasons.len(), 3);
    }

    #[test]
    fn test_lenient_bonuses() {
        let result = assess(&stats(30, 70, 13, true), &ScalarConfig::default());
        assert_eq!(result.score, 5);
        assert_eq!(result.reasons.len(), 3);
    }

    #[test]
    fn test_turn_threshold_is_exclusive() {
        let config = ScalarConfig::default();
        assert_eq!(assess(&stats(50, 50, 12, false), &config).score, 2);
        assert_eq!(assess(&stats(50, 50, 13, false), &config).score, 3);
    }

    #[test]
    fn test_user_dominance_penalty() {
        let result = assess(&stats(70, 30, 2, false), &ScalarConfig::default());
        assert_eq!(result.score, 1);
        assert_eq!(result.label, "Light AI assistance");
        assert_eq!(result.reasons.len(), 1);
    }

    #[test]
    fn test_strict_low_share_penalty() {
        let config = ScalarConfig::strict();
        assert_eq!(assess(&stats(80, 20, 2, false), &config).score, 1);
        assert_eq!(assess(&stats(70, 30, 2, false), &config).score, 2);
    }

    #[test]
    fn test_empty_words_session() {
        // ai_share = 0 and user_share = 0: only the strict penalty can fire.
        assert_eq!(assess(&stats(0, 0, 1, false), &ScalarConfig::default()).score, 2);
        assert_eq!(assess(&stats(0, 0, 1, false), &ScalarConfig::strict()).score, 1);
    }

    #[test]
    fn test_user_only_session() {
        let config = ScalarConfig {
            high_ai_share_bonus: 0,
            ..ScalarConfig::default()
        };
        let result = assess(&stats(100, 0, 1, false), &config);
        assert_eq!(result.score, 1);
        assert_eq!(result.label, SCALAR_LABELS[1]);
    }
}
