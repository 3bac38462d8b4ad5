use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single CSV row. Immutable once appended to the batch;
/// the sequence keeps CSV row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    pub mac_address: String,
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OperationResult {
    pub fn ok(mac_address: impl Into<String>) -> Self {
        Self {
            mac_address: mac_address.into(),
            success: true,
            error: None,
        }
    }

    pub fn failed(mac_address: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            mac_address: mac_address.into(),
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Totals for one finished batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl BatchSummary {
    pub fn from_results(
        results: &[OperationResult],
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let succeeded = results.iter().filter(|r| r.success).count();
        Self {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
            started_at,
            finished_at,
        }
    }
}

/// Batch-level pre-flight failures. When one of these fires, no row has
/// been processed and no HTTP call has been made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// The file contained no rows at all, not even a header
    EmptyFile,

    /// A required column is absent from the header row
    MissingColumn(&'static str),

    /// No API token in the session; the run is not started
    MissingToken,
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFile => write!(f, "The selected file is empty"),
            Self::MissingColumn(col) => write!(f, "The CSV header must contain a {col} column"),
            Self::MissingToken => write!(f, "No API token in the current session"),
        }
    }
}

impl std::error::Error for BatchError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_bulk_geotab::COL_GEOTAB_SERIAL;

    #[test]
    fn summary_counts_add_up() {
        let results = vec![
            OperationResult::ok("AA:BB:CC:DD:EE:01"),
            OperationResult::failed("AA:BB:CC:DD:EE:02", "HTTP 404 Not Found"),
            OperationResult::ok("AA:BB:CC:DD:EE:03"),
        ];
        let now = Utc::now();
        let summary = BatchSummary::from_results(&results, now, now);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.succeeded + summary.failed, summary.total);
    }

    #[test]
    fn missing_column_message_names_the_column() {
        let msg = BatchError::MissingColumn(COL_GEOTAB_SERIAL).to_string();
        assert!(msg.contains("geotabSerialNumber"));
    }
}
