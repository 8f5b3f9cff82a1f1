use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::MISSING_RESULTS_TEXT;

/// One framework/browser combination that produces a result artifact.
#[derive(Debug, PartialEq, Eq)]
pub struct FrameworkTarget {
    /// Framework key, e.g. `Selenium-Chrome`.
    pub key: &'static str,
    /// Row label in the metrics table.
    pub label: &'static str,
    /// Framework the target belongs to; raw results are grouped by it.
    pub framework: &'static str,
    pub browser: Option<&'static str>,
    pub file_name: &'static str,
}

/// The four targets, in report order.
pub static TARGETS: &[FrameworkTarget] = &[
    FrameworkTarget {
        key: "Playwright",
        label: "Playwright",
        framework: "Playwright",
        browser: None,
        file_name: "playwright-results.txt",
    },
    FrameworkTarget {
        key: "Selenium-Chrome",
        label: "Selenium (Chrome)",
        framework: "Selenium",
        browser: Some("Chrome"),
        file_name: "selenium-chrome-results.txt",
    },
    FrameworkTarget {
        key: "Selenium-Firefox",
        label: "Selenium (Firefox)",
        framework: "Selenium",
        browser: Some("Firefox"),
        file_name: "selenium-firefox-results.txt",
    },
    FrameworkTarget {
        key: "Puppeteer",
        label: "Puppeteer",
        framework: "Puppeteer",
        browser: None,
        file_name: "puppeteer-results.txt",
    },
];

pub fn find_target(key: &str) -> Option<&'static FrameworkTarget> {
    TARGETS.iter().find(|t| t.key == key)
}

/// Raw runner output for a single target.
#[derive(Debug, Clone)]
pub struct ResultArtifact {
    pub target: &'static FrameworkTarget,
    pub text: String,
    /// False when the file was missing and `text` is the placeholder.
    pub present: bool,
}

pub fn artifact_path(reports_dir: &Path, target: &FrameworkTarget) -> PathBuf {
    reports_dir.join(target.file_name)
}

/// Read the artifact for `target`, falling back to the placeholder text.
pub fn read_artifact(reports_dir: &Path, target: &'static FrameworkTarget) -> ResultArtifact {
    let path = artifact_path(reports_dir, target);
    match std::fs::read(&path) {
        Ok(bytes) => {
            debug!("Loaded {} results from {:?}", target.key, path);
            ResultArtifact {
                target,
                text: String::from_utf8_lossy(&bytes).into_owned(),
                present: true,
            }
        }
        Err(e) => {
            if path.exists() {
                warn!("Failed to read {:?}: {}", path, e);
            } else {
                debug!("No {} results at {:?}", target.key, path);
            }
            ResultArtifact {
                target,
                text: MISSING_RESULTS_TEXT.to_string(),
                present: false,
            }
        }
    }
}

/// Read every known artifact. Never fails; absent files get the placeholder.
pub fn read_artifacts(reports_dir: &Path) -> Vec<ResultArtifact> {
    TARGETS
        .iter()
        .map(|target| read_artifact(reports_dir, target))
        .collect()
}
