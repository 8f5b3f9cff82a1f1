use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::{RiskEntry, TestDebtSummary};
use crate::metrics::{CoverageSummary, MetricsRecord};

/// Machine-readable twin of the HTML report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub generated_at: DateTime<Utc>,
    pub frameworks: Vec<FrameworkSummary>,
    pub coverage: CoverageSummary,
    pub risks: Vec<RiskEntry>,
    pub test_debt: TestDebtSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkSummary {
    pub key: String,
    pub label: String,
    /// False when no artifact was found for this target.
    pub artifact_present: bool,
    #[serde(flatten)]
    pub metrics: MetricsRecord,
}
