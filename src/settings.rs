use std::path::Path;
use tracing::{info, warn};

use crate::analytics::ReportAnalytics;
use crate::config::ReportConfig;
use crate::error::{write_file, ReportError};

/// Load analytics overrides. Missing or malformed files fall back to defaults;
/// fields absent from the file keep their default values.
pub fn load_analytics(path: &Path) -> ReportAnalytics {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(analytics) => {
                info!("Loaded analytics overrides from {:?}", path);
                analytics
            }
            Err(e) => {
                warn!("Ignoring invalid analytics file {:?}: {}", path, e);
                ReportAnalytics::default()
            }
        },
        Err(e) => {
            warn!("Analytics file {:?} not readable ({}), using defaults", path, e);
            ReportAnalytics::default()
        }
    }
}

/// Analytics for this run: the configured file if any, defaults otherwise.
pub fn resolve_analytics(config: &ReportConfig) -> ReportAnalytics {
    match &config.analytics_path {
        Some(path) => load_analytics(path),
        None => ReportAnalytics::default(),
    }
}

pub fn save_analytics(path: &Path, analytics: &ReportAnalytics) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(analytics)?;
    write_file(path, json)
}
