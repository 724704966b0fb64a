use super::FormatError;
use crate::models::CheckReport;

/// Serialize a CheckReport to YAML
pub fn to_yaml(report: &CheckReport) -> Result<String, FormatError> {
    serde_yaml::to_string(report).map_err(FormatError::from)
}
