use internet_test_report::analytics::{ReportAnalytics, RiskLevel};
use internet_test_report::config::ReportConfig;
use internet_test_report::settings::{load_analytics, resolve_analytics, save_analytics};
use tempfile::TempDir;

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nonexistent.json");
    assert_eq!(load_analytics(&path), ReportAnalytics::default());
}

#[test]
fn test_load_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "not json at all {{{").unwrap();
    // Should return defaults instead of panicking
    assert_eq!(load_analytics(&path), ReportAnalytics::default());
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("analytics.json");

    let mut analytics = ReportAnalytics::default();
    analytics.coverage.security = 99;
    analytics.risks[0].level = RiskLevel::Low;
    analytics.test_debt.recommendations.clear();

    save_analytics(&path, &analytics).unwrap();
    assert_eq!(load_analytics(&path), analytics);
}

#[test]
fn test_partial_analytics() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.json");

    std::fs::write(&path, r#"{"coverage": {"functional": 40}, "test_debt": {"score": 10}}"#).unwrap();
    let loaded = load_analytics(&path);
    let defaults = ReportAnalytics::default();

    assert_eq!(loaded.coverage.functional, 40);
    assert_eq!(loaded.coverage.visual, defaults.coverage.visual);
    assert_eq!(loaded.test_debt.score, 10);
    assert_eq!(loaded.test_debt.flaky_tests, defaults.test_debt.flaky_tests);
    assert_eq!(loaded.risks, defaults.risks);
}

#[test]
fn test_risk_list_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("risks.json");

    std::fs::write(
        &path,
        r#"{"risks": [{"area": "Uploads", "impact": "Low", "probability": "High", "level": "Medium", "coverage_percent": 12}]}"#,
    )
    .unwrap();
    let loaded = load_analytics(&path);

    assert_eq!(loaded.risks.len(), 1);
    assert_eq!(loaded.risks[0].area, "Uploads");
    assert_eq!(loaded.risks[0].probability, RiskLevel::High);
    assert_eq!(loaded.risks[0].coverage_percent, 12);
}

#[test]
fn test_resolve_without_path_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ReportConfig::for_results_dir(dir.path());
    assert_eq!(resolve_analytics(&config), ReportAnalytics::default());
}
