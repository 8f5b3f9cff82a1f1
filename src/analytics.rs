//! Coverage, risk and test-debt tables shown in the KPI section.
//!
//! None of these values are derived from runner output. The defaults are
//! the figures the report has always shown; callers override them with an
//! analytics JSON file.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// CSS class for the risk table row.
    pub fn css_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageDimensions {
    pub functional: u32,
    pub visual: u32,
    pub security: u32,
    pub performance: u32,
}

impl Default for CoverageDimensions {
    fn default() -> Self {
        CoverageDimensions {
            functional: 85,
            visual: 70,
            security: 65,
            performance: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskEntry {
    pub area: String,
    pub impact: RiskLevel,
    pub probability: RiskLevel,
    pub level: RiskLevel,
    pub coverage_percent: u32,
}

impl RiskEntry {
    fn new(
        area: &str,
        impact: RiskLevel,
        probability: RiskLevel,
        level: RiskLevel,
        coverage_percent: u32,
    ) -> Self {
        RiskEntry {
            area: area.to_string(),
            impact,
            probability,
            level,
            coverage_percent,
        }
    }
}

pub fn default_risks() -> Vec<RiskEntry> {
    use RiskLevel::{High, Low, Medium};
    vec![
        RiskEntry::new("Authentication", High, Medium, High, 90),
        RiskEntry::new("Dynamic Content", Medium, High, Medium, 85),
        RiskEntry::new("File Operations", High, Medium, High, 78),
        RiskEntry::new("Browser Compatibility", Medium, Medium, Medium, 80),
        RiskEntry::new("Security Vulnerabilities", High, Low, Medium, 65),
        RiskEntry::new("Performance Issues", Medium, Medium, Medium, 60),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestDebtSummary {
    pub score: u32,
    pub flaky_tests: u32,
    pub obsolete_tests: u32,
    pub missing_docs: u32,
    pub technical_shortcuts: u32,
    pub recommendations: Vec<String>,
}

impl Default for TestDebtSummary {
    fn default() -> Self {
        TestDebtSummary {
            score: 72,
            flaky_tests: 3,
            obsolete_tests: 2,
            missing_docs: 5,
            technical_shortcuts: 4,
            recommendations: [
                "Fix 3 flaky tests in dynamic loading module",
                "Update test documentation for visual regression tests",
                "Remove obsolete browser version checks",
                "Refactor repeated selector logic into helper functions",
                "Add missing edge case tests for form handling",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Everything in the report that is configured rather than measured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportAnalytics {
    pub coverage: CoverageDimensions,
    pub risks: Vec<RiskEntry>,
    pub test_debt: TestDebtSummary,
}

impl Default for ReportAnalytics {
    fn default() -> Self {
        ReportAnalytics {
            coverage: CoverageDimensions::default(),
            risks: default_risks(),
            test_debt: TestDebtSummary::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_risk_order() {
        let areas: Vec<String> = default_risks().into_iter().map(|r| r.area).collect();
        assert_eq!(
            areas,
            vec![
                "Authentication",
                "Dynamic Content",
                "File Operations",
                "Browser Compatibility",
                "Security Vulnerabilities",
                "Performance Issues",
            ]
        );
    }

    #[test]
    fn test_risk_level_css_class() {
        assert_eq!(RiskLevel::High.css_class(), "risk-high");
        assert_eq!(RiskLevel::Medium.css_class(), "risk-medium");
        assert_eq!(RiskLevel::Low.css_class(), "risk-low");
        assert_eq!(RiskLevel::Medium.to_string(), "Medium");
    }

    #[test]
    fn test_default_debt() {
        let debt = TestDebtSummary::default();
        assert_eq!(debt.score, 72);
        assert_eq!(debt.recommendations.len(), 5);
    }
}
