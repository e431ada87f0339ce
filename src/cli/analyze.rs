use std::path::PathBuf;

use clap::Args;
use serde_json::json;
use tracing::{info, warn};

use aics::transcript::{MarkerSet, SegmentOptions};
use aics::{AnalyzerConfig, Role};

use super::input::{max_input_chars, read_file, read_input};
use super::render;
use super::{ModeArg, StrategyArg};
use crate::report::{Report, ReportDetail};

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Transcript file (.txt, .md or .json); reads stdin when omitted
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Scoring mode
    #[arg(short, long, value_enum, default_value_t)]
    pub mode: ModeArg,

    /// Use the stricter scalar thresholds
    #[arg(long)]
    pub strict: bool,

    /// Turn count above which a scalar session counts as long
    #[arg(long, value_name = "TURNS")]
    pub long_session: Option<usize>,

    /// Plain-text segmentation strategy
    #[arg(short, long, value_enum, default_value_t)]
    pub strategy: StrategyArg,

    /// Extra speaker marker for line-based segmentation (repeatable)
    #[arg(long = "marker", value_name = "LABEL=ROLE", value_parser = parse_marker)]
    pub markers: Vec<(String, Role)>,

    /// Never interpret the input as JSON records
    #[arg(long)]
    pub plain_text: bool,

    /// Include next-step recommendations
    #[arg(long)]
    pub full: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl AnalyzeArgs {
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        let markers = self
            .markers
            .iter()
            .fold(MarkerSet::default(), |set, (label, role)| set.with(label, *role));

        AnalyzerConfig {
            segment: SegmentOptions {
                strategy: self.strategy.into(),
                plain_text_only: self.plain_text,
                markers,
                ..SegmentOptions::default()
            },
            scoring: self.mode.scoring_mode(self.strict, self.long_session),
        }
    }
}

pub fn run(args: &AnalyzeArgs) -> anyhow::Result<()> {
    let limit = max_input_chars()?;
    let text = match &args.file {
        Some(path) => read_file(path, limit)?,
        None => read_input(std::io::stdin().lock(), limit)?,
    };

    let analyzer = args.analyzer_config();

    let analysis = match aics::analyze(&text, &analyzer) {
        Ok(analysis) => analysis,
        Err(rejected) => {
            warn!(errors = rejected.errors.len(), "transcript rejected");
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({ "errors": rejected.messages() }))?
                );
            }
            return Err(rejected.into());
        }
    };

    info!(
        turns = analysis.statistics.total_turns,
        source = ?analysis.source,
        "analyzed transcript"
    );

    let report = Report::new(analysis, ReportDetail::from_flag(args.full));
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::render_text(&report)?);
    }

    Ok(())
}

fn parse_marker(raw: &str) -> Result<(String, Role), String> {
    let (label, role) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=ROLE, got '{}'", raw))?;
    let label = label.trim();
    if label.is_empty() {
        return Err("marker label is empty".to_string());
    }
    let role = Role::recognize(role).ok_or_else(|| format!("unknown role '{}'", role.trim()))?;
    Ok((label.to_string(), role))
}
