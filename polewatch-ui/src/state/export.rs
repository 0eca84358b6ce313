//! Export Form Rules
//!
//! Dataset choices and the download URL / enablement rules.

use crate::api::join_url;

/// Exportable datasets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dataset {
    #[default]
    Telemetry,
    Alerts,
    Poles,
    Report,
}

impl Dataset {
    pub const ALL: [Dataset; 4] = [
        Dataset::Telemetry,
        Dataset::Alerts,
        Dataset::Poles,
        Dataset::Report,
    ];

    /// Path segment and `<option>` value
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Telemetry => "telemetry",
            Dataset::Alerts => "alerts",
            Dataset::Poles => "poles",
            Dataset::Report => "report",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dataset::Telemetry => "Telemetry",
            Dataset::Alerts => "Alerts",
            Dataset::Poles => "Poles",
            Dataset::Report => "Pole Health Report",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }

    /// The report ignores date ranges
    pub fn accepts_date_range(&self) -> bool {
        *self != Dataset::Report
    }
}

/// Disabled while loading, or when exactly one date is filled in
pub fn download_disabled(loading: bool, start: &str, end: &str) -> bool {
    loading || (start.is_empty() != end.is_empty())
}

/// `{base}/export/{dataset}` with `?start=..&end=..` when both dates apply
pub fn export_url(base: &str, dataset: Dataset, start: &str, end: &str) -> String {
    let mut url = join_url(base, &format!("export/{}", dataset.as_str()));
    if !start.is_empty() && !end.is_empty() && dataset.accepts_date_range() {
        url.push_str(&format!("?start={}&end={}", start, end));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_dates_disable_download() {
        assert!(!download_disabled(false, "", ""));
        assert!(download_disabled(false, "2024-01-01", ""));
        assert!(download_disabled(false, "", "2024-01-31"));
        assert!(!download_disabled(false, "2024-01-01", "2024-01-31"));
        assert!(download_disabled(true, "", ""));
    }

    #[test]
    fn test_export_url() {
        let base = "http://h/api/";
        assert_eq!(
            export_url(base, Dataset::Alerts, "2024-01-01", "2024-01-31"),
            "http://h/api/export/alerts?start=2024-01-01&end=2024-01-31"
        );
        assert_eq!(
            export_url(base, Dataset::Report, "2024-01-01", "2024-01-31"),
            "http://h/api/export/report"
        );
        assert_eq!(export_url(base, Dataset::Poles, "", ""), "http://h/api/export/poles");
    }

    #[test]
    fn test_dataset_values() {
        assert_eq!(Dataset::from_value("report"), Some(Dataset::Report));
        assert_eq!(Dataset::from_value("users"), None);
        assert_eq!(Dataset::default(), Dataset::Telemetry);
    }
}
