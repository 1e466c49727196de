//! Report file maintenance
//!
//! The report file is a JSON array of records, one per analyzed version.
//! Append mode adds a record; replace mode first drops every record carrying
//! the same version string.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ReportResult;

/// One maintainability record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Package version the analysis ran against
    pub version: String,
    /// When the analysis ran (serialized as ISO-8601)
    pub timestamp: DateTime<Utc>,
    /// Raw analyzer output
    pub data: Value,
}

/// Loads the report list from `path`.
///
/// A missing or unparseable file yields an empty list, so a fresh checkout or
/// a corrupted file never blocks a new run.
#[must_use]
pub fn load_reports(path: &Path) -> Vec<Report> {
    let Ok(contents) = fs::read_to_string(path) else {
        return Vec::new();
    };
    serde_json::from_str(&contents).unwrap_or_default()
}

/// Writes the report list back to `path`, creating the parent directory if
/// needed.
///
/// # Errors
///
/// Returns [`crate::ReportError::Io`] on filesystem failures and
/// [`crate::ReportError::Json`] if the list cannot be serialized.
pub fn save_reports(path: &Path, reports: &[Report]) -> ReportResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(reports)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Appends `report` to the list. When `replace` is set, every existing record
/// with the same version is dropped first.
pub fn append_or_replace(reports: &mut Vec<Report>, report: Report, replace: bool) {
    if replace {
        reports.retain(|r| r.version != report.version);
    }
    reports.push(report);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    fn record(version: &str, data: Value) -> Report {
        Report {
            version: version.to_owned(),
            timestamp: Utc::now(),
            data,
        }
    }

    #[test]
    fn missing_file_loads_as_empty_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("maintainability.json");

        assert!(load_reports(&path).is_empty());
    }

    #[test]
    fn corrupt_file_loads_as_empty_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("maintainability.json");
        fs::write(&path, "{not json").unwrap();

        assert!(load_reports(&path).is_empty());
    }

    #[test]
    fn append_keeps_existing_versions() {
        let mut reports = vec![record("1.0.0", json!({"a": 1}))];

        append_or_replace(&mut reports, record("1.0.0", json!({"a": 2})), false);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].version, "1.0.0");
        assert_eq!(reports[1].version, "1.0.0");
    }

    #[test]
    fn replace_drops_all_records_with_matching_version() {
        let mut reports = vec![
            record("1.0.0", json!({"a": 1})),
            record("1.1.0", json!({"b": 1})),
            record("1.0.0", json!({"a": 2})),
        ];

        append_or_replace(&mut reports, record("1.0.0", json!({"a": 3})), true);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].version, "1.1.0");
        assert_eq!(reports[1].version, "1.0.0");
        assert_eq!(reports[1].data, json!({"a": 3}));
    }

    #[test]
    fn replace_on_unknown_version_just_appends() {
        let mut reports = vec![record("1.0.0", json!({}))];

        append_or_replace(&mut reports, record("2.0.0", json!({})), true);

        assert_eq!(reports.len(), 2);
    }

    #[test]
    fn save_creates_parent_directory_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports").join("maintainability.json");

        let reports = vec![record("1.2.3", json!({"src/main.py": {"mi": 87.5}}))];
        save_reports(&path, &reports).unwrap();

        let loaded = load_reports(&path);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].version, "1.2.3");
        assert_eq!(loaded[0].data, json!({"src/main.py": {"mi": 87.5}}));
    }

    #[test]
    fn timestamp_serializes_as_iso8601() {
        let report = record("1.0.0", json!({}));

        let value = serde_json::to_value(&report).unwrap();
        let timestamp = value["timestamp"].as_str().unwrap();

        assert!(timestamp.parse::<DateTime<Utc>>().is_ok());
        assert!(timestamp.contains('T'));
    }
}
