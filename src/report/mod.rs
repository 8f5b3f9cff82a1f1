pub mod html;
pub mod summary;

use chrono::Utc;
use std::path::PathBuf;
use tracing::info;

use crate::analytics::ReportAnalytics;
use crate::artifacts::read_artifacts;
use crate::config::ReportConfig;
use crate::error::{write_file, ReportError};
use crate::metrics::{calculate_metrics, CoverageSummary, MetricsRecord};
use html::{render_html, ReportInput};
use summary::{FrameworkSummary, ReportSummary};

/// Where the report landed and what it contained.
#[derive(Debug)]
pub struct GeneratedReport {
    pub html_path: PathBuf,
    pub summary_path: PathBuf,
    pub summary: ReportSummary,
}

/// Read artifacts, compute metrics, render and write the report files.
/// Existing report files are overwritten.
pub fn generate_report(
    config: &ReportConfig,
    analytics: &ReportAnalytics,
) -> Result<GeneratedReport, ReportError> {
    info!("Generating consolidated report in {:?}", config.reports_dir);

    std::fs::create_dir_all(&config.reports_dir).map_err(|source| ReportError::CreateDir {
        path: config.reports_dir.clone(),
        source,
    })?;

    let artifacts = read_artifacts(&config.reports_dir);
    let records: Vec<MetricsRecord> = artifacts
        .iter()
        .map(|artifact| calculate_metrics(&artifact.text))
        .collect();
    let coverage = CoverageSummary::from_records(&records, &analytics.coverage);
    let generated_at = Utc::now();

    for (artifact, record) in artifacts.iter().zip(&records) {
        info!(
            "  {}: total: {}, passed: {}, failed: {}, skipped: {}, {}ms{}",
            artifact.target.label,
            record.total,
            record.passed,
            record.failed,
            record.skipped,
            record.duration_ms,
            if record.fallback { " (fallback)" } else { "" }
        );
    }
    info!("Overall pass rate: {}%", coverage.overall_percentage);

    let html = render_html(&ReportInput {
        generated_at,
        artifacts: &artifacts,
        records: &records,
        coverage: &coverage,
        risks: &analytics.risks,
        test_debt: &analytics.test_debt,
    });

    let html_path = config.report_html_path();
    write_file(&html_path, html)?;
    info!("HTML report generated: {:?}", html_path);

    let summary = ReportSummary {
        generated_at,
        frameworks: artifacts
            .iter()
            .zip(&records)
            .map(|(artifact, record)| FrameworkSummary {
                key: artifact.target.key.to_string(),
                label: artifact.target.label.to_string(),
                artifact_present: artifact.present,
                metrics: *record,
            })
            .collect(),
        coverage,
        risks: analytics.risks.clone(),
        test_debt: analytics.test_debt.clone(),
    };

    let summary_path = config.report_summary_path();
    write_file(&summary_path, serde_json::to_string_pretty(&summary)?)?;
    info!("Report summary written: {:?}", summary_path);

    Ok(GeneratedReport {
        html_path,
        summary_path,
        summary,
    })
}
