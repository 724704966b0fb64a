use super::FormatError;
use crate::models::CheckReport;

/// Serialize a CheckReport to pretty-printed JSON
pub fn to_json(report: &CheckReport) -> Result<String, FormatError> {
    serde_json::to_string_pretty(report).map_err(FormatError::from)
}

/// Serialize a CheckReport to compact JSON
#[allow(dead_code)]
pub fn to_json_compact(report: &CheckReport) -> Result<String, FormatError> {
    serde_json::to_string(report).map_err(FormatError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CheckStats, ScanMetadata};
    use std::path::PathBuf;

    #[test]
    fn test_to_json() {
        let report = CheckReport {
            root: PathBuf::from("/test"),
            files: vec![],
            stats: CheckStats::default(),
            metadata: ScanMetadata::default(),
        };

        let json = to_json(&report).unwrap();
        assert!(json.contains("\"root\""));
        assert!(json.contains("\"files\""));
        assert!(json.contains("\"stats\""));
    }
}
