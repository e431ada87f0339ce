use serde::Serialize;

use super::shape::CollaborationTier;

/// Next-step advice for a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub summary: &'static str,
    pub tactics: &'static [&'static str],
}

pub fn for_tier(tier: CollaborationTier) -> Recommendation {
    match tier {
        CollaborationTier::ToolEnhancer => Recommendation {
            title: "Your Path to Assistant",
            summary: "You're using AI for specific tasks. To grow, try giving the AI more open-ended problems to solve.",
            tactics: &[
                "Ask the AI for a full first draft instead of just a small piece.",
                "Request multiple different versions or approaches to a problem.",
                "Provide more context about your audience and goal in your initial prompt.",
            ],
        },
        CollaborationTier::Assistant => Recommendation {
            title: "Your Path to Augmentor",
            summary: "You're good at refining AI output. To advance, focus on providing more strategic direction before the AI generates.",
            tactics: &[
                "Define a clear structure or outline for the AI to follow.",
                "Ask the AI to critique its own work or identify weaknesses in its response.",
                "Specify a clear tone, style, and voice for the AI to adopt.",
            ],
        },
        CollaborationTier::Augmentor => Recommendation {
            title: "Your Path to Cocreator",
            summary: "You are effectively guiding the AI with strong strategic input. To reach the next level, push the AI to become a true thinking partner.",
            tactics: &[
                "Challenge the AI's assumptions by asking 'What are the flaws in this approach?'.",
                "Use the AI for more creative, divergent thinking: 'Brainstorm three unconventional solutions.'",
                "Delegate comparative analysis: 'How does this plan compare to successful examples in other fields?'",
            ],
        },
        CollaborationTier::Cocreator => Recommendation {
            title: "You are a Cocreator!",
            summary: "You are operating at the highest level of human-AI collaboration, using the AI as a true strategic partner. Keep exploring the boundaries of what's possible.",
            tactics: &[
                "Continue to push the AI into novel domains and complex, multi-step reasoning tasks.",
                "Experiment with having the AI adopt multiple expert personas to debate a topic.",
                "Use the AI to synthesize information from completely different fields to spark innovation.",
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tier_has_two_to_four_tactics() {
        for tier in CollaborationTier::ALL {
            let rec = for_tier(tier);
            assert!((2..=4).contains(&rec.tactics.len()), "{tier}");
            assert!(!rec.summary.is_empty());
        }
    }
}
