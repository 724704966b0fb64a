use crate::models::ImportGroup;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Suffixes that mark an import as a stylesheet
const STYLE_PATTERN: &str = r"\.(css|scss|sass)$";

/// Path prefix that marks an import as an internal type module
const TYPES_PREFIX: &str = "types/";

/// Classifies import source paths into semantic groups
///
/// Classification is total: every path maps to exactly one group, with
/// `External` as the fallthrough. The prefix set is read-only for the
/// lifetime of the classifier; no filesystem access happens here.
pub struct ImportClassifier {
    /// Names of top-level project source directories
    internal_prefixes: HashSet<String>,
    style_pattern: Regex,
}

impl ImportClassifier {
    pub fn new(internal_prefixes: HashSet<String>) -> Self {
        Self {
            internal_prefixes,
            style_pattern: Regex::new(STYLE_PATTERN).expect("stylesheet pattern is valid"),
        }
    }

    /// Map a source path to its group, in priority order:
    /// stylesheet suffix, `types/` prefix, internal prefix or relative path,
    /// external.
    pub fn classify(&self, source: &str) -> ImportGroup {
        if self.style_pattern.is_match(source) {
            return ImportGroup::Styles;
        }

        if source.starts_with(TYPES_PREFIX) {
            return ImportGroup::InternalTypes;
        }

        if source.starts_with("./")
            || source.starts_with("../")
            || self
                .internal_prefixes
                .iter()
                .any(|prefix| source.starts_with(prefix.as_str()))
        {
            return ImportGroup::Internal;
        }

        ImportGroup::External
    }

    /// Get the configured internal prefixes
    pub fn internal_prefixes(&self) -> &HashSet<String> {
        &self.internal_prefixes
    }
}

/// List the immediate subdirectory names of `<root>/<src_dir>`
///
/// A missing or unreadable directory degrades to an empty set; discovery
/// failure is never surfaced as an error.
pub fn discover_internal_prefixes(root: &Path, src_dir: &str) -> HashSet<String> {
    let src_path = root.join(src_dir);

    match fs::read_dir(&src_path) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect(),
        Err(_) => HashSet::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier_with(prefixes: &[&str]) -> ImportClassifier {
        ImportClassifier::new(prefixes.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_styles_classification() {
        let classifier = classifier_with(&[]);
        assert_eq!(classifier.classify("./index.css"), ImportGroup::Styles);
        assert_eq!(classifier.classify("theme/dark.scss"), ImportGroup::Styles);
        assert_eq!(classifier.classify("main.sass"), ImportGroup::Styles);
    }

    #[test]
    fn test_styles_takes_priority_over_internal() {
        // A relative stylesheet is styles, not internal
        let classifier = classifier_with(&["theme"]);
        assert_eq!(classifier.classify("../app.css"), ImportGroup::Styles);
        assert_eq!(classifier.classify("theme/app.css"), ImportGroup::Styles);
    }

    #[test]
    fn test_internal_types_classification() {
        let classifier = classifier_with(&[]);
        assert_eq!(classifier.classify("types/Foo"), ImportGroup::InternalTypes);
        assert_eq!(
            classifier.classify("types/models/User"),
            ImportGroup::InternalTypes
        );
    }

    #[test]
    fn test_internal_classification() {
        let classifier = classifier_with(&["utils", "components"]);
        assert_eq!(classifier.classify("utils/helper"), ImportGroup::Internal);
        assert_eq!(
            classifier.classify("components/Button"),
            ImportGroup::Internal
        );
        assert_eq!(classifier.classify("./local"), ImportGroup::Internal);
        assert_eq!(classifier.classify("../parent"), ImportGroup::Internal);
    }

    #[test]
    fn test_external_fallthrough() {
        let classifier = classifier_with(&["utils"]);
        assert_eq!(classifier.classify("react"), ImportGroup::External);
        assert_eq!(classifier.classify("lodash"), ImportGroup::External);
        assert_eq!(classifier.classify("@scope/pkg"), ImportGroup::External);
    }

    #[test]
    fn test_classification_is_total() {
        let classifier = classifier_with(&[]);
        for source in ["", "~", "   ", "a/b/c", "\u{1F980}", ".hidden"] {
            // Every input classifies into exactly one group
            let _ = classifier.classify(source);
        }
    }

    #[test]
    fn test_discover_prefixes() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        std::fs::create_dir_all(src.join("utils")).unwrap();
        std::fs::create_dir_all(src.join("components")).unwrap();
        std::fs::write(src.join("index.ts"), "").unwrap();

        let prefixes = discover_internal_prefixes(dir.path(), "src");
        assert_eq!(prefixes.len(), 2);
        assert!(prefixes.contains("utils"));
        assert!(prefixes.contains("components"));
    }

    #[test]
    fn test_discover_prefixes_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let prefixes = discover_internal_prefixes(dir.path(), "does-not-exist");
        assert!(prefixes.is_empty());
    }
}
