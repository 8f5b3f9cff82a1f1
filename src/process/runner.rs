use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::{Child, Command};
use tracing::{error, info};

use crate::error::ReportError;
use crate::process::capture::{spawn_line_collector, OutputStream};

/// One external test-runner invocation and the artifact it feeds.
#[derive(Debug, Clone)]
pub struct RunnerSpec {
    pub target_key: &'static str,
    pub label: &'static str,
    pub command: &'static str,
    pub envs: &'static [(&'static str, &'static str)],
}

/// Runner invocations, executed in this order.
pub static RUNNERS: &[RunnerSpec] = &[
    RunnerSpec {
        target_key: "Playwright",
        label: "Playwright tests",
        command: "npx playwright test --browser=chromium,firefox",
        envs: &[],
    },
    RunnerSpec {
        target_key: "Selenium-Chrome",
        label: "Selenium tests with Chrome",
        command: "npx mocha test_scripts/selenium/**/*.test.js",
        envs: &[("BROWSER", "chrome")],
    },
    RunnerSpec {
        target_key: "Selenium-Firefox",
        label: "Selenium tests with Firefox",
        command: "npx mocha test_scripts/selenium/**/*.test.js",
        envs: &[("BROWSER", "firefox")],
    },
    RunnerSpec {
        target_key: "Puppeteer",
        label: "Puppeteer tests",
        command: "npx mocha test_scripts/puppeteer/**/*.test.js",
        envs: &[],
    },
];

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub success: bool,
    /// Stdout on success, stderr (or the spawn error) on failure.
    pub output: String,
    pub exit_code: Option<i32>,
    pub duration: Duration,
}

/// Run `spec` through the platform shell inside `project_dir`.
///
/// Never returns an error: spawn and wait failures are folded into an
/// unsuccessful outcome so the caller can move on to the next runner.
pub async fn execute(spec: &RunnerSpec, project_dir: &Path) -> RunOutcome {
    info!("Running {}...", spec.label);
    let started = Instant::now();

    let result = match spawn_shell(spec, project_dir) {
        Ok(child) => wait_with_output(child, spec.label).await,
        Err(e) => Err(e),
    };

    let outcome = match result {
        Ok((status, stdout, _stderr)) if status.success() => RunOutcome {
            success: true,
            output: stdout,
            exit_code: status.code(),
            duration: started.elapsed(),
        },
        Ok((status, _stdout, stderr)) => RunOutcome {
            success: false,
            output: stderr,
            exit_code: status.code(),
            duration: started.elapsed(),
        },
        Err(e) => RunOutcome {
            success: false,
            output: e.to_string(),
            exit_code: None,
            duration: started.elapsed(),
        },
    };

    if outcome.success {
        info!(
            "Completed {} successfully in {:.1}s",
            spec.label,
            outcome.duration.as_secs_f64()
        );
    } else {
        error!(
            "Error running {} (exit code: {:?})",
            spec.label, outcome.exit_code
        );
    }

    outcome
}

fn spawn_shell(spec: &RunnerSpec, project_dir: &Path) -> Result<Child, ReportError> {
    #[cfg(windows)]
    let mut cmd = {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", spec.command]);
        cmd
    };

    #[cfg(not(windows))]
    let mut cmd = {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", spec.command]);
        cmd
    };

    cmd.current_dir(project_dir)
        .envs(spec.envs.iter().copied())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    cmd.spawn()
        .map_err(|e| ReportError::Process(format!("Failed to spawn {}: {}", spec.label, e)))
}

async fn wait_with_output(
    mut child: Child,
    label: &str,
) -> Result<(std::process::ExitStatus, String, String), ReportError> {
    let stdout = child
        .stdout
        .take()
        .map(|s| spawn_line_collector(s, OutputStream::Stdout, label.to_string()));
    let stderr = child
        .stderr
        .take()
        .map(|s| spawn_line_collector(s, OutputStream::Stderr, label.to_string()));

    let status = child.wait().await?;

    let stdout = match stdout {
        Some(handle) => handle
            .await
            .map_err(|e| ReportError::Other(format!("stdout reader failed: {}", e)))?,
        None => String::new(),
    };
    let stderr = match stderr {
        Some(handle) => handle
            .await
            .map_err(|e| ReportError::Other(format!("stderr reader failed: {}", e)))?,
        None => String::new(),
    };

    Ok((status, stdout, stderr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::find_target;

    #[test]
    fn test_every_runner_feeds_a_known_target() {
        for runner in RUNNERS {
            assert!(find_target(runner.target_key).is_some(), "{}", runner.target_key);
        }
    }

    #[test]
    fn test_selenium_runners_select_browser() {
        let chrome = RUNNERS.iter().find(|r| r.target_key == "Selenium-Chrome").unwrap();
        assert_eq!(chrome.envs, &[("BROWSER", "chrome")]);
        let firefox = RUNNERS.iter().find(|r| r.target_key == "Selenium-Firefox").unwrap();
        assert_eq!(firefox.envs, &[("BROWSER", "firefox")]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_execute_success_captures_stdout() {
        let spec = RunnerSpec {
            target_key: "Playwright",
            label: "echo",
            command: "echo \"  ✓ ok\"; echo noise >&2",
            envs: &[],
        };
        let outcome = execute(&spec, Path::new(".")).await;
        assert!(outcome.success);
        assert_eq!(outcome.exit_code, Some(0));
        assert_eq!(outcome.output, "  ✓ ok\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_execute_failure_captures_stderr() {
        let spec = RunnerSpec {
            target_key: "Puppeteer",
            label: "fail",
            command: "echo partial; echo \"it broke\" >&2; exit 3",
            envs: &[],
        };
        let outcome = execute(&spec, Path::new(".")).await;
        assert!(!outcome.success);
        assert_eq!(outcome.exit_code, Some(3));
        assert_eq!(outcome.output, "it broke\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_execute_passes_env() {
        let spec = RunnerSpec {
            target_key: "Selenium-Chrome",
            label: "env",
            command: "echo \"browser=$BROWSER\"",
            envs: &[("BROWSER", "chrome")],
        };
        let outcome = execute(&spec, Path::new(".")).await;
        assert_eq!(outcome.output, "browser=chrome\n");
    }

    #[tokio::test]
    async fn test_execute_missing_dir_is_failure_not_error() {
        let spec = RunnerSpec {
            target_key: "Puppeteer",
            label: "missing dir",
            command: "echo hi",
            envs: &[],
        };
        let outcome = execute(&spec, Path::new("/definitely/not/a/real/dir")).await;
        assert!(!outcome.success);
        assert!(outcome.exit_code.is_none());
        assert!(outcome.output.contains("Failed to spawn missing dir"));
    }
}
