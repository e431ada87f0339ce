use chrono::{DateTime, Utc};
use serde::Serialize;

use aics::{Analysis, Recommendation};

/// How much of the analysis a report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportDetail {
    /// Statistics and assessment.
    Light,
    /// Adds the next-step recommendation for the tier.
    Full,
}

impl ReportDetail {
    pub fn from_flag(full: bool) -> Self {
        if full {
            ReportDetail::Full
        } else {
            ReportDetail::Light
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub detail: ReportDetail,
    #[serde(flatten)]
    pub analysis: Analysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
}

impl Report {
    pub fn new(analysis: Analysis, detail: ReportDetail) -> Self {
        let recommendation = match detail {
            ReportDetail::Full => analysis.recommendation(),
            ReportDetail::Light => None,
        };
        Report {
            generated_at: Utc::now(),
            detail,
            analysis,
            recommendation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis() -> Analysis {
        aics::analyze("User: Outline a plan\nAI: Here is an outline...", &Default::default()).unwrap()
    }

    #[test]
    fn test_light_report_omits_recommendation() {
        let report = Report::new(analysis(), ReportDetail::Light);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("recommendation").is_none());
        assert_eq!(json["detail"], "light");
        assert_eq!(json["statistics"]["user_turns"], 1);
    }

    #[test]
    fn test_full_report_includes_recommendation() {
        let report = Report::new(analysis(), ReportDetail::Full);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["recommendation"]["title"], "Your Path to Assistant");
        assert_eq!(json["assessment"]["scores"]["structural"], 1);
    }
}
