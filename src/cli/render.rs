use std::fmt::{self, Write};

use aics::analysis::ShapeDimension;
use aics::CollaborationAssessment;

use crate::report::Report;

/// Plain-text rendering of a report.
pub fn render_text(report: &Report) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let stats = &report.analysis.statistics;

    writeln!(out, "AI collaboration report")?;
    writeln!(out, "=======================")?;
    writeln!(out, "Turns:      {} ({} you / {} AI)", stats.total_turns, stats.user_turns, stats.ai_turns)?;
    writeln!(out, "Words:      {} you / {} AI", format_number(stats.user_words), format_number(stats.ai_words))?;
    writeln!(out, "AI share:   {}", format_percent(stats.ai_share))?;
    if stats.has_structured_block {
        writeln!(out, "Blocks:     fenced structured output present")?;
    }
    writeln!(out)?;

    match &report.analysis.assessment {
        CollaborationAssessment::Shape(shape) => {
            writeln!(out, "SHAPE score: {}/25 ({})", shape.total_shape_score, shape.classification)?;
            for dimension in ShapeDimension::ALL {
                let score = shape.scores.get(dimension);
                writeln!(
                    out,
                    "  {:<24}{} {}/5",
                    dimension.display_name(),
                    bar(score),
                    score
                )?;
            }
        }
        CollaborationAssessment::Scalar(scalar) => {
            writeln!(out, "Score: {}/5 ({})", scalar.score, scalar.label)?;
            writeln!(out, "{}", scalar.interpretation)?;
        }
    }

    let reasons = report.analysis.assessment.reasons();
    if !reasons.is_empty() {
        writeln!(out)?;
        writeln!(out, "Why:")?;
        for reason in reasons {
            writeln!(out, "  - {}", reason)?;
        }
    }

    if let Some(rec) = &report.recommendation {
        writeln!(out)?;
        writeln!(out, "{}", rec.title)?;
        writeln!(out, "{}", rec.summary)?;
        for (i, tactic) in rec.tactics.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, tactic)?;
        }
    }

    Ok(out)
}

fn bar(score: u8) -> String {
    let filled = score.min(5) as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(5 - filled))
}

fn format_percent(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

fn format_number(n: usize) -> String {
    if n < 1_000 {
        n.to_string()
    } else if n < 1_000_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    }
}
