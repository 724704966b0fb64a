mod json;
mod yaml;

pub use json::to_json;
pub use yaml::to_yaml;

use crate::models::CheckReport;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Summary,
}

/// Format a CheckReport according to the specified format
pub fn format_report(report: &CheckReport, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Yaml => to_yaml(report),
        OutputFormat::Summary => Ok(format_summary(report)),
    }
}

/// Generate a human-readable summary
pub fn format_summary(report: &CheckReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Import Order Check Summary\n\
         ==========================\n\
         Root: {}\n\n",
        report.root.display()
    ));

    output.push_str(&format!(
        "Files Checked: {}\n\
         - JavaScript: {}\n\
         - TypeScript: {}\n\
         Imports Seen: {}\n\n",
        report.stats.total_files,
        report.stats.javascript_files,
        report.stats.typescript_files,
        report.stats.total_imports
    ));

    output.push_str(&format!(
        "Files With Issues: {}\n\
         - Unsorted import blocks: {}\n\
         - Unsorted specifier lists: {}\n\n",
        report.stats.files_with_issues, report.stats.unsorted_files, report.stats.specifier_issues
    ));

    for file in report.files.iter().filter(|f| f.has_issues()) {
        output.push_str(&format!("{}\n", file.path.display()));
        for diagnostic in &file.diagnostics {
            output.push_str(&format!("  {}: {}\n", diagnostic.line, diagnostic.message));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Scan Duration: {}ms ({:.2} files/sec)\n\
         Timestamp: {}\n\
         Tool Version: {}\n",
        report.metadata.scan_duration_ms,
        report.metadata.files_per_second,
        report.metadata.timestamp,
        report.metadata.tool_version
    ));

    output
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}
