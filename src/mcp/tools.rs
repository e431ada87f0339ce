use serde_json::{json, Value};
use tracing::{info, warn};

use aics::analysis::recommendations;
use aics::{AnalyzerConfig, CollaborationTier};

use crate::cli::input;
use crate::cli::ModeArg;
use crate::report::{Report, ReportDetail};

/// Text payload of a tool call. `is_error` marks a rejected transcript,
/// which is a normal tool result rather than a protocol error.
#[derive(Debug)]
pub struct ToolOutput {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutput {
    fn ok(text: String) -> Self {
        ToolOutput { text, is_error: false }
    }

    fn error(text: String) -> Self {
        ToolOutput { text, is_error: true }
    }
}

/// Return all tool definitions for MCP tools/list.
pub fn tool_definitions() -> Vec<Value> {
    vec![
        json!({
            "name": "analyze_transcript",
            "description": "Analyze a human/AI chat transcript and report how much the AI shaped the content: turn and word counts per role, AI word share, and either a SHAPE score (five dimensions, 0-25) with a collaboration tier or a single 0-5 score. Accepts 'User:/AI:' style text, 'You said:/ChatGPT said:' exports, or a JSON list of {role, content} records.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "transcript": {
                        "type": "string",
                        "description": "The transcript text or JSON"
                    },
                    "mode": {
                        "type": "string",
                        "enum": ["shape", "scalar"],
                        "description": "Scoring mode (default: shape)"
                    },
                    "strict": {
                        "type": "boolean",
                        "description": "Use the stricter scalar thresholds (scalar mode only)"
                    },
                    "full": {
                        "type": "boolean",
                        "description": "Include next-step recommendations for the tier (default: false)"
                    }
                },
                "required": ["transcript"]
            }
        }),
        json!({
            "name": "describe_tiers",
            "description": "List the four collaboration tiers with their SHAPE score ranges and recommendations.",
            "inputSchema": {
                "type": "object",
                "properties": {}
            }
        }),
    ]
}

/// Dispatch a tool call to the appropriate handler.
pub fn dispatch(name: &str, args: &Value, max_input_chars: usize) -> anyhow::Result<ToolOutput> {
    match name {
        "analyze_transcript" => handle_analyze(args, max_input_chars),
        "describe_tiers" => handle_describe_tiers(),
        _ => Ok(ToolOutput::error(format!("Unknown tool: {}", name))),
    }
}

fn handle_analyze(args: &Value, max_input_chars: usize) -> anyhow::Result<ToolOutput> {
    let transcript = args
        .get("transcript")
        .and_then(|t| t.as_str())
        .ok_or_else(|| anyhow::anyhow!("Missing required parameter: transcript"))?;

    if let Err(err) = input::check_length(transcript, max_input_chars) {
        return Ok(ToolOutput::error(err.to_string()));
    }

    let mode = match args.get("mode").and_then(|m| m.as_str()).unwrap_or("shape") {
        "shape" => ModeArg::Shape,
        "scalar" => ModeArg::Scalar,
        other => anyhow::bail!("Unknown mode: {} (expected shape or scalar)", other),
    };
    let strict = args.get("strict").and_then(|s| s.as_bool()).unwrap_or(false);
    let full = args.get("full").and_then(|f| f.as_bool()).unwrap_or(false);

    let config = AnalyzerConfig {
        scoring: mode.scoring_mode(strict, None),
        ..AnalyzerConfig::default()
    };

    match aics::analyze(transcript, &config) {
        Ok(analysis) => {
            info!(turns = analysis.statistics.total_turns, "analyzed transcript via tool call");
            let report = Report::new(analysis, ReportDetail::from_flag(full));
            Ok(ToolOutput::ok(serde_json::to_string_pretty(&report)?))
        }
        Err(rejected) => {
            warn!(errors = rejected.errors.len(), "transcript rejected via tool call");
            Ok(ToolOutput::error(rejected.messages().join("\n")))
        }
    }
}

fn handle_describe_tiers() -> anyhow::Result<ToolOutput> {
    let tiers: Vec<Value> = CollaborationTier::ALL
        .iter()
        .map(|tier| {
            let (min, max) = tier.range();
            json!({
                "tier": tier,
                "name": tier.display_name(),
                "min_score": min,
                "max_score": max,
                "rationale": tier.rationale(),
                "recommendation": recommendations::for_tier(*tier),
            })
        })
        .collect();

    Ok(ToolOutput::ok(serde_json::to_string_pretty(&tiers)?))
}
