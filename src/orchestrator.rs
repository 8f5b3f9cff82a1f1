use tracing::{info, warn};

use crate::analytics::ReportAnalytics;
use crate::artifacts::{artifact_path, find_target};
use crate::config::{ReportConfig, FAILED_EXECUTION_TEXT};
use crate::diagnostics::{RunEventKind, RunLog};
use crate::error::{write_file, ReportError};
use crate::mock::{create_directories, generate_mock_results};
use crate::process::runner::{execute, RunnerSpec};
use crate::report::{generate_report, GeneratedReport};

#[derive(Debug)]
pub struct RunSummary {
    pub run_id: String,
    pub demo: bool,
    /// Labels of runners that exited unsuccessfully.
    pub failed_runners: Vec<String>,
    pub report: GeneratedReport,
}

/// Create the results layout, produce artifacts (real runners or mock data),
/// then generate the report.
///
/// Runners execute strictly one after another; a failing runner is recorded
/// and the sequence continues. Only directory, artifact or report write
/// failures abort the run.
pub async fn run_all(
    config: &ReportConfig,
    analytics: &ReportAnalytics,
    runners: &[RunnerSpec],
    demo: bool,
) -> Result<RunSummary, ReportError> {
    let run_id = uuid::Uuid::new_v4().to_string();
    let mut log = RunLog::new();
    log.emit(RunEventKind::RunStarted {
        run_id: run_id.clone(),
        demo,
    });

    info!("Creating results directories under {:?}", config.results_dir);
    create_directories(config)?;

    let mut failed_runners = Vec::new();

    if demo {
        info!("Running in DEMO mode - generating mock results instead of running actual tests");
        let targets = generate_mock_results(&config.reports_dir)?;
        log.emit(RunEventKind::MockGenerated {
            targets: targets.iter().map(|t| t.key.to_string()).collect(),
        });
    } else {
        for spec in runners {
            let target = find_target(spec.target_key).ok_or_else(|| {
                ReportError::Other(format!("Runner {} has unknown target {}", spec.label, spec.target_key))
            })?;

            log.emit(RunEventKind::RunnerStarted {
                label: spec.label.to_string(),
                command: spec.command.to_string(),
            });

            let outcome = execute(spec, &config.project_dir).await;

            log.emit(RunEventKind::RunnerCompleted {
                label: spec.label.to_string(),
                success: outcome.success,
                exit_code: outcome.exit_code,
                duration_secs: outcome.duration.as_secs_f64(),
                output_bytes: outcome.output.len(),
            });

            if !outcome.success {
                warn!("{} failed; continuing with remaining runners", spec.label);
                failed_runners.push(spec.label.to_string());
            }

            let contents = if outcome.output.is_empty() {
                FAILED_EXECUTION_TEXT
            } else {
                outcome.output.as_str()
            };
            let path = artifact_path(&config.reports_dir, target);
            write_file(&path, contents)?;
            log.emit(RunEventKind::ArtifactWritten {
                target: target.key.to_string(),
                path: path.display().to_string(),
            });
        }
    }

    info!("Generating test reports...");
    let report = generate_report(config, analytics)?;
    log.emit(RunEventKind::ReportGenerated {
        path: report.html_path.display().to_string(),
        overall_percentage: report.summary.coverage.overall_percentage,
    });

    log.emit(RunEventKind::RunFinished {
        run_id: run_id.clone(),
        runners_failed: failed_runners.len(),
    });
    let log_path = config.run_log_path();
    log.write_to(&log_path)?;
    info!("Run log written: {:?}", log_path);

    if failed_runners.is_empty() {
        info!("All tests completed!");
    } else {
        warn!(
            "All tests completed, {} runner(s) failed: {}",
            failed_runners.len(),
            failed_runners.join(", ")
        );
    }

    Ok(RunSummary {
        run_id,
        demo,
        failed_runners,
        report,
    })
}
