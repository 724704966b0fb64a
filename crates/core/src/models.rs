use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How a bound name is introduced by an import statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecifierKind {
    /// `import { name } from '...'`
    Named,
    /// `import * as name from '...'`
    Namespace,
    /// `import name from '...'`
    Default,
}

/// A single bound name within an import statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specifier {
    /// Local identifier the import binds (the alias for `a as b`)
    pub local: String,
    pub kind: SpecifierKind,
}

impl Specifier {
    pub fn new(local: impl Into<String>, kind: SpecifierKind) -> Self {
        Self {
            local: local.into(),
            kind,
        }
    }
}

/// Byte range of a statement within its source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

/// A single import statement as extracted from a source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStatement {
    /// The module path being imported from
    pub source: String,
    /// Bound names in source order; empty for side-effect imports
    pub specifiers: Vec<Specifier>,
    /// Byte span of the statement in the original file
    pub span: TextSpan,
    /// 1-based line number of the statement start
    pub line: usize,
    /// Verbatim statement text
    pub raw: String,
}

impl ImportStatement {
    /// Side-effect imports bind no names
    pub fn is_side_effect(&self) -> bool {
        self.specifiers.is_empty()
    }
}

/// Semantic group an import is sorted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportGroup {
    External,
    Internal,
    InternalTypes,
    Styles,
}

impl ImportGroup {
    /// Canonical output order of the groups
    pub const ORDERED: [ImportGroup; 4] = [
        ImportGroup::External,
        ImportGroup::Internal,
        ImportGroup::InternalTypes,
        ImportGroup::Styles,
    ];
}

/// Language of the source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
}

impl Language {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" | "jsx" => Some(Language::JavaScript),
            "ts" | "mts" | "cts" | "tsx" => Some(Language::TypeScript),
            _ => None,
        }
    }
}

/// One entry in the canonical layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutEntry {
    /// A normalized import statement
    Statement(ImportStatement),
    /// A blank line separating two groups
    Blank,
}

/// Ordered statements interleaved with group separators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    pub entries: Vec<LayoutEntry>,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the statements in layout order, skipping separators
    pub fn statements(&self) -> impl Iterator<Item = &ImportStatement> {
        self.entries.iter().filter_map(|e| match e {
            LayoutEntry::Statement(stmt) => Some(stmt),
            LayoutEntry::Blank => None,
        })
    }
}

/// Kind of deviation reported for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Whole-file ordering/layout deviation
    UnsortedImports,
    /// A single statement's named specifiers are out of order
    UnsortedSpecifiers,
}

impl DiagnosticKind {
    pub fn message(&self) -> &'static str {
        match self {
            DiagnosticKind::UnsortedImports => "Imports are not sorted correctly.",
            DiagnosticKind::UnsortedSpecifiers => {
                "Named import specifiers are not sorted alphabetically."
            }
        }
    }
}

/// A reported deviation from the canonical layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// 1-based line of the offending statement (first import for whole-file)
    pub line: usize,
    pub span: TextSpan,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, line: usize, span: TextSpan) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
            line,
            span,
        }
    }
}

/// A single contiguous text substitution that fixes a file's import block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// Byte span from the first import's start to the last import's end
    pub span: TextSpan,
    /// Canonical replacement text for that span
    pub text: String,
}

/// Outcome of checking one file's import block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCheck {
    pub diagnostics: Vec<Diagnostic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<Replacement>,
}

impl FileCheck {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Per-file result within a project scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Relative path from the project root
    pub path: PathBuf,
    /// Absolute path
    pub absolute_path: PathBuf,
    pub language: Language,
    /// Number of import statements found
    pub import_count: usize,
    pub diagnostics: Vec<Diagnostic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<Replacement>,
}

impl FileReport {
    pub fn has_issues(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Statistics about a project scan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckStats {
    pub total_files: usize,
    pub files_with_issues: usize,
    pub total_imports: usize,
    pub unsorted_files: usize,
    pub specifier_issues: usize,
    pub javascript_files: usize,
    pub typescript_files: usize,
}

/// Scan metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanMetadata {
    pub scan_duration_ms: u64,
    pub files_per_second: f64,
    pub timestamp: String,
    pub tool_version: String,
}

impl Default for ScanMetadata {
    fn default() -> Self {
        Self {
            scan_duration_ms: 0,
            files_per_second: 0.0,
            timestamp: chrono::Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Aggregated result of checking a whole project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Project root path
    pub root: PathBuf,
    /// All source files checked
    pub files: Vec<FileReport>,
    pub stats: CheckStats,
    pub metadata: ScanMetadata,
}

impl CheckReport {
    pub fn has_issues(&self) -> bool {
        self.files.iter().any(|f| f.has_issues())
    }

    /// Keep only the files that produced diagnostics
    pub fn filter_to_issues(&self) -> Self {
        CheckReport {
            root: self.root.clone(),
            files: self
                .files
                .iter()
                .filter(|f| f.has_issues())
                .cloned()
                .collect(),
            stats: self.stats.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_extension() {
        assert_eq!(Language::from_extension("js"), Some(Language::JavaScript));
        assert_eq!(Language::from_extension("TSX"), Some(Language::TypeScript));
        assert_eq!(Language::from_extension("mjs"), Some(Language::JavaScript));
        assert_eq!(Language::from_extension("py"), None);
    }

    #[test]
    fn test_diagnostic_messages() {
        assert_eq!(
            DiagnosticKind::UnsortedImports.message(),
            "Imports are not sorted correctly."
        );
        assert_eq!(
            DiagnosticKind::UnsortedSpecifiers.message(),
            "Named import specifiers are not sorted alphabetically."
        );
    }

    #[test]
    fn test_group_order() {
        assert_eq!(ImportGroup::ORDERED[0], ImportGroup::External);
        assert_eq!(ImportGroup::ORDERED[3], ImportGroup::Styles);
    }

    #[test]
    fn test_side_effect_detection() {
        let stmt = ImportStatement {
            source: "./index.css".to_string(),
            specifiers: vec![],
            span: TextSpan { start: 0, end: 21 },
            line: 1,
            raw: "import './index.css';".to_string(),
        };
        assert!(stmt.is_side_effect());
    }
}
