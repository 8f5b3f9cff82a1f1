use std::path::Path;
use tracing::info;

use crate::artifacts::{artifact_path, find_target, FrameworkTarget};
use crate::config::ReportConfig;
use crate::error::{write_file, ReportError};

const PLAYWRIGHT_SAMPLE: &str = r#"
============================== Test Results ==============================
Authentication Tests
  ✓ should allow login with valid credentials (745ms)
  ✓ should show error with invalid username (324ms)
  ✓ should show error with invalid password (298ms)
  ✓ should allow user to logout (512ms)
  ✓ should allow access with Basic Auth (203ms)
  ✓ should allow access with Digest Auth (455ms)
  ✓ should maintain session after navigation (689ms)

Authentication Security
  ✓ should have protection against CSRF (112ms)
  ✓ should transmit credentials securely (425ms)

Authentication Accessibility
  ✓ login form should be accessible (231ms)

Authentication Performance
  ✓ login should respond within acceptable time (854ms)

Dynamic Content
  ✓ should load a hidden element (5213ms)
  ✓ should render a new element dynamically (5187ms)
  ✓ should dynamically remove and add a checkbox (6321ms)
  ✓ should dynamically enable and disable an input field (6124ms)
  ✓ should change content on page reload (824ms)
  ✓ should maintain static content across reloads (783ms)

Dynamic Content Accessibility
  ✓ dynamically loaded content should be accessible (5532ms)

Dynamic Content Security
  ✓ should sanitize dynamic content against XSS (133ms)

Dynamic Content Performance
  ✓ dynamic loading should complete within acceptable time (5324ms)

Dynamic Content Edge Cases
  ✓ should handle rapid toggle operations (6721ms)

Finished in 47365ms

21 passed, 0 failed, 0 skipped
============================== End Results ==============================
"#;

const SELENIUM_CHROME_SAMPLE: &str = r#"
============================== Test Results ==============================
Authentication Tests - Selenium WebDriver
  ✓ should allow login with valid credentials (1245ms)
  ✓ should show error with invalid username (943ms)
  ✓ should show error with invalid password (876ms)
  ✓ should allow user to logout (1125ms)
  ✓ should maintain session after navigation (1543ms)

Authentication Security Tests - Selenium WebDriver
  ✓ should have protection against CSRF (432ms)

Authentication Accessibility Tests - Selenium WebDriver
  ✓ login form should be accessible (765ms)

Authentication Performance Tests - Selenium WebDriver
  ✓ login should respond within acceptable time (1654ms)

Finished in 8583ms

8 passed, 0 failed, 0 skipped
============================== End Results ==============================
"#;

const SELENIUM_FIREFOX_SAMPLE: &str = r#"
============================== Test Results ==============================
Authentication Tests - Selenium WebDriver
  ✓ should allow login with valid credentials (1345ms)
  ✓ should show error with invalid username (987ms)
  ✓ should show error with invalid password (912ms)
  ✓ should allow user to logout (1254ms)
  ✓ should maintain session after navigation (1643ms)

Authentication Security Tests - Selenium WebDriver
  ✓ should have protection against CSRF (465ms)

Authentication Accessibility Tests - Selenium WebDriver
  ✓ login form should be accessible (832ms)

Authentication Performance Tests - Selenium WebDriver
  ✓ login should respond within acceptable time (1765ms)

Finished in 9203ms

8 passed, 0 failed, 0 skipped
============================== End Results ==============================
"#;

const PUPPETEER_SAMPLE: &str = r#"
============================== Test Results ==============================
Authentication Tests - Puppeteer
  ✓ should allow login with valid credentials (956ms)
  ✓ should show error with invalid username (543ms)
  ✓ should show error with invalid password (512ms)
  ✓ should allow user to logout (876ms)
  ✓ should maintain session after navigation (1023ms)

Authentication Security Tests - Puppeteer
  ✓ should have protection against CSRF (234ms)
  ✓ should transmit credentials securely (654ms)

Authentication Accessibility Tests - Puppeteer
  ✓ login form should be accessible (432ms)

Authentication Performance Tests - Puppeteer
  ✓ login should respond within acceptable time (1234ms)

Finished in 6464ms

9 passed, 0 failed, 0 skipped
============================== End Results ==============================
"#;

/// Fixed sample output per framework key.
pub static MOCK_RESULTS: &[(&str, &str)] = &[
    ("Playwright", PLAYWRIGHT_SAMPLE),
    ("Selenium-Chrome", SELENIUM_CHROME_SAMPLE),
    ("Selenium-Firefox", SELENIUM_FIREFOX_SAMPLE),
    ("Puppeteer", PUPPETEER_SAMPLE),
];

/// Create the results layout the runners and the report expect.
pub fn create_directories(config: &ReportConfig) -> Result<(), ReportError> {
    for dir in config.result_dirs() {
        std::fs::create_dir_all(&dir)
            .map_err(|source| ReportError::CreateDir { path: dir, source })?;
    }
    Ok(())
}

/// Write the sample artifacts into `reports_dir`, replacing existing ones.
pub fn generate_mock_results(reports_dir: &Path) -> Result<Vec<&'static FrameworkTarget>, ReportError> {
    let mut written = Vec::with_capacity(MOCK_RESULTS.len());
    for (key, sample) in MOCK_RESULTS {
        let target = find_target(key)
            .ok_or_else(|| ReportError::Other(format!("Unknown framework key: {}", key)))?;
        write_file(&artifact_path(reports_dir, target), sample)?;
        written.push(target);
    }
    info!("Mock test results have been generated in {:?}", reports_dir);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::TARGETS;
    use crate::metrics::calculate_metrics;

    #[test]
    fn test_every_target_has_a_sample() {
        for target in TARGETS {
            assert!(
                MOCK_RESULTS.iter().any(|(key, _)| *key == target.key),
                "missing sample for {}",
                target.key
            );
        }
    }

    #[test]
    fn test_sample_metrics() {
        let expected = [
            ("Playwright", 21, 47365),
            ("Selenium-Chrome", 8, 8583),
            ("Selenium-Firefox", 8, 9203),
            ("Puppeteer", 9, 6464),
        ];
        for ((key, sample), (expected_key, total, duration)) in MOCK_RESULTS.iter().zip(expected) {
            assert_eq!(*key, expected_key);
            let m = calculate_metrics(sample);
            assert_eq!(m.total, total, "{}", key);
            assert_eq!(m.passed, total, "{}", key);
            assert_eq!(m.failed, 0);
            assert_eq!(m.skipped, 0);
            assert_eq!(m.duration_ms, duration);
            assert!(!m.fallback);
        }
    }
}
