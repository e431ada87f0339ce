//! SHAPE scoring: Structural vision, Human-led meaning, Authorial voice,
//! Purpose framing, Editorial intervention.
//!
//! Each dimension counts the user turns that contain at least one of its
//! keywords (case-insensitive substring match), clamped to
//! [`DIMENSION_MAX`]. The five scores sum to a total in `0..=25`, which maps
//! to a [`CollaborationTier`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{
    ASSISTANT_MAX, AUGMENTOR_MAX, AUTHORIAL_VOICE_KEYWORDS, DIMENSION_MAX, EDITORIAL_KEYWORDS,
    HUMAN_MEANING_KEYWORDS, PURPOSE_FRAMING_KEYWORDS, STRUCTURAL_KEYWORDS, TOOL_ENHANCER_MAX,
};
use crate::transcript::{Role, Turn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeDimension {
    Structural,
    HumanMeaning,
    AuthorialVoice,
    PurposeFraming,
    Editorial,
}

impl ShapeDimension {
    pub const ALL: [ShapeDimension; 5] = [
        ShapeDimension::Structural,
        ShapeDimension::HumanMeaning,
        ShapeDimension::AuthorialVoice,
        ShapeDimension::PurposeFraming,
        ShapeDimension::Editorial,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            ShapeDimension::Structural => STRUCTURAL_KEYWORDS,
            ShapeDimension::HumanMeaning => HUMAN_MEANING_KEYWORDS,
            ShapeDimension::AuthorialVoice => AUTHORIAL_VOICE_KEYWORDS,
            ShapeDimension::PurposeFraming => PURPOSE_FRAMING_KEYWORDS,
            ShapeDimension::Editorial => EDITORIAL_KEYWORDS,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ShapeDimension::Structural => "Structural vision",
            ShapeDimension::HumanMeaning => "Human-led meaning",
            ShapeDimension::AuthorialVoice => "Authorial voice",
            ShapeDimension::PurposeFraming => "Purpose framing",
            ShapeDimension::Editorial => "Editorial intervention",
        }
    }

    fn matches(self, lowered: &str) -> bool {
        self.keywords().iter().any(|k| lowered.contains(k))
    }
}

/// Per-dimension scores, each in `0..=5`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShapeScores {
    pub structural: u8,
    pub human_meaning: u8,
    pub authorial_voice: u8,
    pub purpose_framing: u8,
    pub editorial: u8,
}

impl ShapeScores {
    /// Score the user-authored turns. Assistant turns are ignored.
    pub fn from_turns(turns: &[Turn]) -> ShapeScores {
        let prompts: Vec<String> = turns
            .iter()
            .filter(|t| t.role() == Role::User)
            .map(|t| t.content().to_lowercase())
            .collect();

        let mut scores = ShapeScores::default();
        for dimension in ShapeDimension::ALL {
            let hits = prompts.iter().filter(|p| dimension.matches(p)).count();
            *scores.slot(dimension) = hits.min(DIMENSION_MAX as usize) as u8;
        }
        scores
    }

    pub fn get(&self, dimension: ShapeDimension) -> u8 {
        match dimension {
            ShapeDimension::Structural => self.structural,
            ShapeDimension::HumanMeaning => self.human_meaning,
            ShapeDimension::AuthorialVoice => self.authorial_voice,
            ShapeDimension::PurposeFraming => self.purpose_framing,
            ShapeDimension::Editorial => self.editorial,
        }
    }

    fn slot(&mut self, dimension: ShapeDimension) -> &mut u8 {
        match dimension {
            ShapeDimension::Structural => &mut self.structural,
            ShapeDimension::HumanMeaning => &mut self.human_meaning,
            ShapeDimension::AuthorialVoice => &mut self.authorial_voice,
            ShapeDimension::PurposeFraming => &mut self.purpose_framing,
            ShapeDimension::Editorial => &mut self.editorial,
        }
    }

    /// Sum of the five scores, in `0..=25`.
    pub fn total(&self) -> u8 {
        ShapeDimension::ALL.iter().map(|d| self.get(*d)).sum()
    }
}

/// Ordered collaboration-depth tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaborationTier {
    ToolEnhancer,
    Assistant,
    Augmentor,
    Cocreator,
}

impl CollaborationTier {
    pub const ALL: [CollaborationTier; 4] = [
        CollaborationTier::ToolEnhancer,
        CollaborationTier::Assistant,
        CollaborationTier::Augmentor,
        CollaborationTier::Cocreator,
    ];

    /// Classify a SHAPE total. `<=10` Tool / Enhancer, `11..=17` Assistant,
    /// `18..=22` Augmentor, anything higher Cocreator.
    pub fn from_total(total: u8) -> CollaborationTier {
        if total <= TOOL_ENHANCER_MAX {
            CollaborationTier::ToolEnhancer
        } else if total <= ASSISTANT_MAX {
            CollaborationTier::Assistant
        } else if total <= AUGMENTOR_MAX {
            CollaborationTier::Augmentor
        } else {
            CollaborationTier::Cocreator
        }
    }

    /// Inclusive SHAPE total range of this tier.
    pub fn range(self) -> (u8, u8) {
        match self {
            CollaborationTier::ToolEnhancer => (0, TOOL_ENHANCER_MAX),
            CollaborationTier::Assistant => (TOOL_ENHANCER_MAX + 1, ASSISTANT_MAX),
            CollaborationTier::Augmentor => (ASSISTANT_MAX + 1, AUGMENTOR_MAX),
            CollaborationTier::Cocreator => (AUGMENTOR_MAX + 1, DIMENSION_MAX * 5),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CollaborationTier::ToolEnhancer => "Tool / Enhancer",
            CollaborationTier::Assistant => "Assistant",
            CollaborationTier::Augmentor => "Augmentor",
            CollaborationTier::Cocreator => "Cocreator",
        }
    }

    pub fn rationale(self) -> &'static str {
        match self {
            CollaborationTier::ToolEnhancer => {
                "Your prompts rarely steer structure, meaning, voice, purpose or edits; the AI is used for discrete tasks."
            }
            CollaborationTier::Assistant => {
                "You steer the AI on some dimensions and refine what it produces."
            }
            CollaborationTier::Augmentor => {
                "You give consistent strategic direction across most dimensions before and after the AI writes."
            }
            CollaborationTier::Cocreator => {
                "You shape every dimension of the work; the AI acts as a thinking partner rather than a generator."
            }
        }
    }
}

impl fmt::Display for CollaborationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// SHAPE-mode assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeAssessment {
    pub scores: ShapeScores,
    pub total_shape_score: u8,
    pub classification: CollaborationTier,
    pub reasons: Vec<String>,
}

pub fn assess(turns: &[Turn]) -> ShapeAssessment {
    let scores = ShapeScores::from_turns(turns);
    let total = scores.total();
    let classification = CollaborationTier::from_total(total);

    let mut reasons: Vec<String> = ShapeDimension::ALL
        .iter()
        .filter(|d| scores.get(**d) > 0)
        .map(|d| format!("{}: {} prompt(s)", d.display_name(), scores.get(*d)))
        .collect();
    if reasons.is_empty() {
        reasons.push("No prompt steered structure, meaning, voice, purpose or edits.".to_string());
    }
    reasons.push(classification.rationale().to_string());

    ShapeAssessment {
        scores,
        total_shape_score: total,
        classification,
        reasons,
    }
}
