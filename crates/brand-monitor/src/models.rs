//! Request and response bodies of the analysis API

use serde::{Deserialize, Serialize};

/// A competing brand and its stock ticker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub ticker: String,
}

impl Competitor {
    pub fn new(name: impl Into<String>, ticker: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ticker: ticker.into(),
        }
    }
}

/// Body of `POST /api/v1/analyze-brand`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub brand_name: String,
    pub competitors: Vec<Competitor>,
}

/// Outcome of an analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AnalysisStatus {
    Success,
    Error,
}

/// Body returned by `POST /api/v1/analyze-brand`
///
/// Pipeline failures are reported here with `status: "ERROR"` rather than
/// through the HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub status: AnalysisStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResponse {
    /// Successful run carrying the final Markdown report
    pub fn success(report: impl Into<String>) -> Self {
        Self {
            status: AnalysisStatus::Success,
            message: "Brand analysis completed successfully".to_string(),
            report: Some(report.into()),
            error: None,
        }
    }

    /// Failed run carrying the error description
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            status: AnalysisStatus::Error,
            message: "Failed to generate brand analysis".to_string(),
            report: None,
            error: Some(error.into()),
        }
    }
}
