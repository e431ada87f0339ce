use serde::Serialize;

use crate::config::FENCE_MARKERS;
use crate::transcript::{Role, Turn};

/// Per-role counts for one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStatistics {
    pub total_turns: usize,
    pub user_turns: usize,
    pub ai_turns: usize,
    pub user_words: usize,
    pub ai_words: usize,
    /// `ai_words / max(1, user_words + ai_words)`.
    pub ai_share: f64,
    pub has_structured_block: bool,
}

impl SessionStatistics {
    pub fn from_turns(turns: &[Turn]) -> SessionStatistics {
        let mut user_turns = 0;
        let mut ai_turns = 0;
        let mut user_words = 0;
        let mut ai_words = 0;

        for turn in turns {
            match turn.role() {
                Role::User => {
                    user_turns += 1;
                    user_words += turn.word_count();
                }
                Role::Assistant => {
                    ai_turns += 1;
                    ai_words += turn.word_count();
                }
            }
        }

        let total_words = (user_words + ai_words).max(1);

        SessionStatistics {
            total_turns: user_turns + ai_turns,
            user_turns,
            ai_turns,
            user_words,
            ai_words,
            ai_share: ai_words as f64 / total_words as f64,
            has_structured_block: turns.iter().any(|t| has_fenced_block(t.content())),
        }
    }

    pub fn total_words(&self) -> usize {
        self.user_words + self.ai_words
    }

    /// Fraction of words written by the user, with the same zero floor as `ai_share`.
    pub fn user_share(&self) -> f64 {
        self.user_words as f64 / self.total_words().max(1) as f64
    }
}

/// True when `content` holds at least one opening/closing fence pair.
pub fn has_fenced_block(content: &str) -> bool {
    FENCE_MARKERS
        .iter()
        .any(|fence| content.matches(fence).count() >= 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(role: Role, content: &str) -> Turn {
        Turn::new(role, content).unwrap()
    }

    #[test]
    fn test_counts_per_role() {
        let turns = vec![
            turn(Role::User, "one two three"),
            turn(Role::Assistant, "four five six seven"),
            turn(Role::User, "eight"),
        ];
        let stats = SessionStatistics::from_turns(&turns);
        assert_eq!(stats.total_turns, 3);
        assert_eq!(stats.user_turns, 2);
        assert_eq!(stats.ai_turns, 1);
        assert_eq!(stats.user_words, 4);
        assert_eq!(stats.ai_words, 4);
        assert!((stats.ai_share - 0.5).abs() < f64::EPSILON);
        assert!((stats.user_share() - 0.5).abs() < f64::EPSILON);
        assert!(!stats.has_structured_block);
    }

    #[test]
    fn test_zero_turns_of_a_role() {
        let stats = SessionStatistics::from_turns(&[turn(Role::User, "hello")]);
        assert_eq!(stats.ai_turns, 0);
        assert_eq!(stats.ai_words, 0);
        assert_eq!(stats.ai_share, 0.0);
    }

    #[test]
    fn test_no_words_does_not_divide_by_zero() {
        let stats = SessionStatistics::from_turns(&[turn(Role::Assistant, "!!!")]);
        assert_eq!(stats.total_words(), 0);
        assert_eq!(stats.ai_share, 0.0);
        assert_eq!(stats.user_share(), 0.0);

        let empty = SessionStatistics::from_turns(&[]);
        assert_eq!(empty.total_turns, 0);
        assert_eq!(empty.ai_share, 0.0);
    }

    #[test]
    fn test_fenced_block_detection() {
        assert!(has_fenced_block("Here:\n```rust\nfn main() {}\n```"));
        assert!(has_fenced_block("~~~\nplain\n~~~"));
        assert!(!has_fenced_block("a lone ``` fence"));
        assert!(!has_fenced_block("no fences"));

        let turns = vec![turn(Role::Assistant, "```\ncode\n```")];
        assert!(SessionStatistics::from_turns(&turns).has_structured_block);
    }
}
