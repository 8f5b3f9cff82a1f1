use internet_test_report::analytics::ReportAnalytics;
use internet_test_report::config::{ReportConfig, FAILED_EXECUTION_TEXT};
use internet_test_report::orchestrator::run_all;
use internet_test_report::process::runner::RunnerSpec;
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> ReportConfig {
    let mut config = ReportConfig::for_results_dir(dir.path().join("results"));
    config.project_dir = dir.path().to_path_buf();
    config
}

#[tokio::test]
async fn test_demo_run_generates_report_and_log() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let summary = run_all(&config, &ReportAnalytics::default(), &[], true)
        .await
        .unwrap();

    assert!(summary.demo);
    assert!(summary.failed_runners.is_empty());
    assert_eq!(summary.report.summary.coverage.overall_percentage, 100);
    assert!(config.report_html_path().is_file());
    assert!(dir.path().join("results/screenshots").is_dir());

    let log: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(config.run_log_path()).unwrap()).unwrap();
    let kinds: Vec<&str> = log
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec!["run_started", "mock_generated", "report_generated", "run_finished"]
    );
    assert_eq!(log[0]["data"]["run_id"], summary.run_id.as_str());
}

#[cfg(unix)]
#[tokio::test]
async fn test_failing_runner_does_not_abort_sequence() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let runners = [
        RunnerSpec {
            target_key: "Playwright",
            label: "passing runner",
            command: "printf '  ✓ ok\n  ✓ ok too\nFinished in 42ms\n'",
            envs: &[],
        },
        RunnerSpec {
            target_key: "Selenium-Chrome",
            label: "crashing runner",
            command: "echo 'Error: no chromedriver' >&2; exit 1",
            envs: &[],
        },
        RunnerSpec {
            target_key: "Selenium-Firefox",
            label: "silent failure",
            command: "exit 2",
            envs: &[],
        },
        RunnerSpec {
            target_key: "Puppeteer",
            label: "env runner",
            command: "echo \"  ✓ $BROWSER\"",
            envs: &[("BROWSER", "chromium")],
        },
    ];

    let summary = run_all(&config, &ReportAnalytics::default(), &runners, false)
        .await
        .unwrap();

    assert_eq!(
        summary.failed_runners,
        vec!["crashing runner".to_string(), "silent failure".to_string()]
    );

    let reports = &config.reports_dir;
    let playwright = std::fs::read_to_string(reports.join("playwright-results.txt")).unwrap();
    assert!(playwright.contains("Finished in 42ms"));

    let chrome = std::fs::read_to_string(reports.join("selenium-chrome-results.txt")).unwrap();
    assert_eq!(chrome, "Error: no chromedriver\n");

    let firefox = std::fs::read_to_string(reports.join("selenium-firefox-results.txt")).unwrap();
    assert_eq!(firefox, FAILED_EXECUTION_TEXT);

    let frameworks = &summary.report.summary.frameworks;
    assert_eq!(frameworks[0].metrics.total, 2);
    assert_eq!(frameworks[0].metrics.duration_ms, 42);
    assert!(frameworks[1].metrics.fallback);
    assert!(frameworks[2].metrics.fallback);
    assert_eq!(frameworks[3].metrics.passed, 1);

    let html = std::fs::read_to_string(config.report_html_path()).unwrap();
    assert!(html.contains("Error: no chromedriver"));
}

#[tokio::test]
async fn test_unknown_target_is_error() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let runners = [RunnerSpec {
        target_key: "Cypress",
        label: "cypress",
        command: "true",
        envs: &[],
    }];

    assert!(run_all(&config, &ReportAnalytics::default(), &runners, false)
        .await
        .is_err());
}
