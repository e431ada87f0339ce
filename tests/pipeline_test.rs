// tests/pipeline_test.rs — End-to-end: text → turns → statistics → assessment

use aics::analysis::{CollaborationTier, ShapeScores};
use aics::transcript::{segment, SegmentOptions, SegmentSource};
use aics::{
    analyze, AnalyzerConfig, CollaborationAssessment, Role, ScalarConfig, ScoringMode,
    SegmentError,
};
use proptest::prelude::*;

fn shape(text: &str) -> aics::analysis::ShapeAssessment {
    match analyze(text, &AnalyzerConfig::default()).unwrap().assessment {
        CollaborationAssessment::Shape(shape) => shape,
        other => panic!("expected shape assessment, got {other:?}"),
    }
}

#[test]
fn test_outline_scenario() {
    let analysis = analyze(
        "User: Outline a plan\nAI: Here is an outline...",
        &AnalyzerConfig::default(),
    )
    .unwrap();

    assert_eq!(analysis.statistics.user_turns, 1);
    assert_eq!(analysis.statistics.ai_turns, 1);
    match analysis.assessment {
        CollaborationAssessment::Shape(shape) => assert!(shape.scores.structural >= 1),
        other => panic!("unexpected assessment: {other:?}"),
    }
}

#[test]
fn test_empty_input_scenario() {
    let rejected = analyze("", &AnalyzerConfig::default()).unwrap_err();
    assert_eq!(rejected.errors, vec![SegmentError::EmptyInput]);
}

#[test]
fn test_unmarked_single_line_scenario() {
    let analysis = analyze("hello", &AnalyzerConfig::default()).unwrap();
    let stats = &analysis.statistics;
    assert_eq!(stats.user_turns, 1);
    assert_eq!(stats.ai_turns, 0);
    assert_eq!(stats.ai_share, 0.0);

    let session = segment("hello", &SegmentOptions::default());
    assert_eq!(session.turns()[0].content(), "hello");
}

#[test]
fn test_structured_scenario() {
    let json = r#"{"messages":[{"role":"human","content":"hi"},{"role":"bot","content":"hello there"}]}"#;
    let session = segment(json, &SegmentOptions::default());
    let roles: Vec<Role> = session.turns().iter().map(|t| t.role()).collect();
    assert_eq!(roles, vec![Role::User, Role::Assistant]);

    let analysis = analyze(json, &AnalyzerConfig::default()).unwrap();
    assert_eq!(analysis.source, SegmentSource::Structured);
    assert_eq!(analysis.statistics.total_turns, 2);
    assert_eq!(analysis.statistics.ai_words, 2);
}

#[test]
fn test_malformed_json_falls_back_to_text() {
    let analysis = analyze(r#"[{"role": "user", "content": "oops"#, &AnalyzerConfig::default())
        .unwrap();
    assert_ne!(analysis.source, SegmentSource::Structured);
    assert_eq!(analysis.statistics.user_turns, 1);
}

#[test]
fn test_chatgpt_export() {
    let text = "You said:\nHelp me create a marketing strategy for a bakery\n\
                ChatGPT said:\nHere is a strategy:\n```\n1. Social\n2. Local\n```\n\
                You said:\nRewrite it in my voice so that it feels more personal";
    let config = AnalyzerConfig {
        scoring: ScoringMode::Scalar(ScalarConfig::default()),
        ..AnalyzerConfig::default()
    };
    let analysis = analyze(text, &config).unwrap();
    assert_eq!(analysis.source, SegmentSource::FixedDelimiter);
    assert_eq!(analysis.statistics.user_turns, 2);
    assert_eq!(analysis.statistics.ai_turns, 1);
    assert!(analysis.statistics.has_structured_block);

    let shape = shape(text);
    assert_eq!(shape.scores.purpose_framing, 2);
    assert_eq!(shape.scores.authorial_voice, 1);
    assert_eq!(shape.scores.editorial, 1);
}

#[test]
fn test_consecutive_unmarked_turns_are_not_detected() {
    // Strict alternation only looks at markers: an unmarked leading block is
    // always attributed to the user, even when it is really the assistant.
    let text = "Sure, here is the draft you asked for.\nUser: thanks\nAI: welcome";
    let session = segment(text, &SegmentOptions::default());
    let roles: Vec<Role> = session.turns().iter().map(|t| t.role()).collect();
    assert_eq!(roles, vec![Role::User, Role::User, Role::Assistant]);
}

#[test]
fn test_cocreator_session() {
    let prompt = "User: Reorganize the outline, clarify the meaning, keep my voice, \
                  aim it at the audience, and refine the ending\nAI: Done.";
    let text = std::iter::repeat(prompt).take(5).collect::<Vec<_>>().join("\n");
    let shape = shape(&text);
    assert_eq!(shape.total_shape_score, 25);
    assert_eq!(shape.classification, CollaborationTier::Cocreator);
}

fn arb_turn() -> impl Strategy<Value = (bool, String)> {
    (any::<bool>(), "[a-zA-Z ,.!?]{0,40}")
}

fn render(turns: &[(bool, String)]) -> String {
    turns
        .iter()
        .map(|(is_user, content)| {
            format!("{}: {}", if *is_user { "User" } else { "AI" }, content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #[test]
    fn prop_segmentation_is_idempotent(text in "(?s).{0,200}") {
        let options = SegmentOptions::default();
        prop_assert_eq!(segment(&text, &options), segment(&text, &options));
    }

    #[test]
    fn prop_rejected_sessions_have_no_turns(text in "(?s).{0,200}") {
        let session = segment(&text, &SegmentOptions::default());
        prop_assert_eq!(session.is_usable(), session.errors().is_empty());
        if !session.is_usable() {
            prop_assert!(session.turns().is_empty());
            prop_assert_eq!(session.errors().len(), 1);
        }
    }

    #[test]
    fn prop_word_counts_are_conserved(turns in prop::collection::vec(arb_turn(), 1..12)) {
        let text = render(&turns);
        let session = segment(&text, &SegmentOptions::default());
        if let Ok(analysis) = aics::analyze_session(&session, &ScoringMode::Shape) {
            let per_turn: usize = session.turns().iter().map(|t| t.word_count()).sum();
            let stats = &analysis.statistics;
            prop_assert_eq!(stats.user_words + stats.ai_words, per_turn);
            prop_assert_eq!(stats.total_turns, stats.user_turns + stats.ai_turns);
            prop_assert!((0.0..=1.0).contains(&stats.ai_share));
            prop_assert_eq!(stats.ai_share == 0.0, stats.ai_words == 0);
        }
    }

    #[test]
    fn prop_scores_are_bounded(turns in prop::collection::vec(arb_turn(), 1..30), strict in any::<bool>()) {
        let text = render(&turns);
        let scalar = if strict { ScalarConfig::strict() } else { ScalarConfig::default() };
        let config = AnalyzerConfig {
            scoring: ScoringMode::Scalar(scalar),
            ..AnalyzerConfig::default()
        };
        if let Ok(analysis) = analyze(&text, &config) {
            if let CollaborationAssessment::Scalar(result) = analysis.assessment {
                prop_assert!(result.score <= 5);
            }
        }
        let session = segment(&text, &SegmentOptions::default());
        let scores = ShapeScores::from_turns(session.turns());
        prop_assert!(scores.total() <= 25);
        prop_assert!(scores.structural <= 5 && scores.editorial <= 5);
    }

    #[test]
    fn prop_tiers_are_monotonic(a in 0u8..=25, b in 0u8..=25) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(CollaborationTier::from_total(low) <= CollaborationTier::from_total(high));
    }
}
