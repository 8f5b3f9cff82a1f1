//! HTML report rendering
//!
//! Produces one self-contained page with inline CSS: a KPI block followed by
//! the raw output of every runner.

use chrono::{DateTime, Utc};

use crate::analytics::{RiskEntry, TestDebtSummary};
use crate::artifacts::ResultArtifact;
use crate::metrics::{CoverageSummary, MetricsRecord};

pub const REPORT_TITLE: &str = "Test Results - The Internet Test Framework";

/// Everything the renderer needs. `artifacts` and `records` are parallel.
pub struct ReportInput<'a> {
    pub generated_at: DateTime<Utc>,
    pub artifacts: &'a [ResultArtifact],
    pub records: &'a [MetricsRecord],
    pub coverage: &'a CoverageSummary,
    pub risks: &'a [RiskEntry],
    pub test_debt: &'a TestDebtSummary,
}

pub fn render_html(input: &ReportInput<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <title>{title}</title>
  <style>{css}</style>
</head>
<body>
  <h1>{title}</h1>
  <div class="summary">
    <h2>Summary</h2>
    <p>Date: {date}</p>
    <p>This report shows the combined results from {frameworks} tests against The Internet application.</p>
  </div>

  <div class="kpi">
    <h2>Key Performance Indicators</h2>
{coverage}
{metrics}
{risks}
{debt}
  </div>
{results}
</body>
</html>
"#,
        title = REPORT_TITLE,
        css = inline_css(),
        date = input.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        frameworks = framework_list(input.artifacts),
        coverage = render_coverage(input.coverage),
        metrics = render_metrics_table(input.artifacts, input.records),
        risks = render_risk_table(input.risks),
        debt = render_test_debt(input.test_debt),
        results = render_results(input.artifacts),
    )
}

fn inline_css() -> &'static str {
    r#"
    body { font-family: Arial, sans-serif; margin: 20px; }
    h1, h2, h3 { color: #333; }
    .summary { margin: 20px 0; padding: 10px; background-color: #f0f0f0; }
    .framework { margin: 30px 0; }
    .kpi { margin: 20px 0; padding: 15px; background-color: #e9f7ef; border-radius: 5px; }
    table { border-collapse: collapse; width: 100%; }
    th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
    th { background-color: #f2f2f2; }
    .pass { color: green; }
    .fail { color: red; }
    .risk-high { background-color: #ffcccc; }
    .risk-medium { background-color: #ffffcc; }
    .risk-low { background-color: #e6ffcc; }
  "#
}

/// "Playwright, Selenium, and Puppeteer" from the distinct framework names.
fn framework_list(artifacts: &[ResultArtifact]) -> String {
    let names = framework_groups(artifacts)
        .into_iter()
        .map(|(name, _)| html_escape(name))
        .collect::<Vec<_>>();

    match names.as_slice() {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] => format!("{} and {}", a, b),
        [head @ .., last] => format!("{}, and {}", head.join(", "), last),
    }
}

fn render_coverage(coverage: &CoverageSummary) -> String {
    format!(
        r#"    <h3>1. Test Coverage</h3>
    <p>Overall Test Coverage: {}%</p>
    <ul>
      <li>Functional Coverage: {}%</li>
      <li>UI/Visual Coverage: {}%</li>
      <li>Security Coverage: {}%</li>
      <li>Performance Coverage: {}%</li>
    </ul>"#,
        coverage.overall_percentage,
        coverage.functional,
        coverage.visual,
        coverage.security,
        coverage.performance,
    )
}

fn render_metrics_table(artifacts: &[ResultArtifact], records: &[MetricsRecord]) -> String {
    let rows: String = artifacts
        .iter()
        .zip(records)
        .map(|(artifact, m)| {
            format!(
                r#"
      <tr>
        <td>{}</td>
        <td>{}</td>
        <td class="pass">{}</td>
        <td class="fail">{}</td>
        <td>{}</td>
        <td>{}ms</td>
      </tr>"#,
                html_escape(artifact.target.label),
                m.total,
                m.passed,
                m.failed,
                m.skipped,
                m.duration_ms,
            )
        })
        .collect();

    format!(
        r#"    <h3>2. Test Metrics &amp; Analytics</h3>
    <table>
      <tr>
        <th>Framework</th>
        <th>Total Tests</th>
        <th>Passed</th>
        <th>Failed</th>
        <th>Skipped</th>
        <th>Duration</th>
      </tr>{rows}
    </table>"#
    )
}

fn render_risk_table(risks: &[RiskEntry]) -> String {
    let rows: String = risks
        .iter()
        .map(|risk| {
            format!(
                r#"
      <tr class="{}">
        <td>{}</td>
        <td>{}</td>
        <td>{}</td>
        <td>{}</td>
        <td>{}%</td>
      </tr>"#,
                risk.level.css_class(),
                html_escape(&risk.area),
                risk.impact,
                risk.probability,
                risk.level,
                risk.coverage_percent,
            )
        })
        .collect();

    format!(
        r#"    <h3>3. Risk-Based Testing</h3>
    <table>
      <tr>
        <th>Risk Area</th>
        <th>Impact</th>
        <th>Probability</th>
        <th>Risk Level</th>
        <th>Test Coverage</th>
      </tr>{rows}
    </table>"#
    )
}

fn render_test_debt(debt: &TestDebtSummary) -> String {
    let recommendations: String = debt
        .recommendations
        .iter()
        .map(|rec| format!("\n      <li>{}</li>", html_escape(rec)))
        .collect();

    format!(
        r#"    <h3>4. Test Debt</h3>
    <p>Current Test Debt Score: {}/100</p>
    <ul>
      <li>Flaky Tests: {}</li>
      <li>Obsolete Tests: {}</li>
      <li>Missing Test Documentation: {}</li>
      <li>Technical Shortcuts: {}</li>
    </ul>
    <p>Recommended Actions:</p>
    <ul>{}
    </ul>"#,
        debt.score,
        debt.flaky_tests,
        debt.obsolete_tests,
        debt.missing_docs,
        debt.technical_shortcuts,
        recommendations,
    )
}

/// Consecutive artifacts sharing a framework, in first-seen order.
fn framework_groups(artifacts: &[ResultArtifact]) -> Vec<(&'static str, Vec<&ResultArtifact>)> {
    let mut groups: Vec<(&'static str, Vec<&ResultArtifact>)> = Vec::new();
    for artifact in artifacts {
        let framework = artifact.target.framework;
        match groups.last_mut() {
            Some((name, members)) if *name == framework => members.push(artifact),
            _ => groups.push((framework, vec![artifact])),
        }
    }
    groups
}

fn render_results(artifacts: &[ResultArtifact]) -> String {
    let mut out = String::new();
    for (framework, members) in framework_groups(artifacts) {
        out.push_str("\n  <div class=\"framework\">\n");
        out.push_str(&format!("    <h2>{} Results</h2>\n", html_escape(framework)));
        for artifact in members {
            if let Some(browser) = artifact.target.browser {
                out.push_str(&format!("    <h3>{}</h3>\n", html_escape(browser)));
            }
            out.push_str(&format!(
                "    <pre>{}</pre>\n",
                html_escape(&format_results(&artifact.text))
            ));
        }
        out.push_str("  </div>\n");
    }
    out
}

/// Indent every line by two spaces, then trim the block.
pub fn format_results(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
