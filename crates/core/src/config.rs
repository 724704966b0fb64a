use crate::models::Language;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to build glob pattern: {0}")]
    GlobError(#[from] globset::Error),
    #[error("Failed to parse gitignore: {0}")]
    GitignoreError(#[from] ignore::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// How bound names are compared when sorting specifiers and statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameComparison {
    /// Case-sensitive ordinal comparison, reproducible across environments
    #[default]
    Ordinal,
    /// Lowercased primary pass with an ordinal tiebreak
    CaseInsensitive,
}

/// Configuration for checking a project
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Root directory to scan
    pub root: PathBuf,
    /// Project-relative directory whose subdirectory names become internal prefixes
    pub src_dir: String,
    /// Emit a blank line between the internal-types and styles groups
    pub separator_before_styles: bool,
    /// Comparison mode for bound names
    pub name_comparison: NameComparison,
    /// Ignore trailing semicolons when diffing against the original text
    pub ignore_trailing_semicolons: bool,
    /// Emit per-statement diagnostics for unsorted named specifiers
    pub specifier_diagnostics: bool,
    /// Filter to specific languages
    pub language_filter: Option<Vec<Language>>,
    /// Additional ignore patterns (glob style)
    pub ignore_patterns: Vec<String>,
    /// Custom ignore file path
    pub ignore_file: Option<PathBuf>,
    /// Include node_modules in scan
    pub include_deps: bool,
    /// Number of threads (0 = auto)
    pub threads: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            src_dir: "src".to_string(),
            separator_before_styles: true,
            name_comparison: NameComparison::Ordinal,
            ignore_trailing_semicolons: false,
            specifier_diagnostics: true,
            language_filter: None,
            ignore_patterns: vec![],
            ignore_file: None,
            include_deps: false,
            threads: 0,
        }
    }
}

impl CheckConfig {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ..Default::default()
        }
    }

    pub fn with_src_dir(mut self, src_dir: impl Into<String>) -> Self {
        self.src_dir = src_dir.into();
        self
    }

    pub fn with_separator_before_styles(mut self, separator: bool) -> Self {
        self.separator_before_styles = separator;
        self
    }

    pub fn with_name_comparison(mut self, comparison: NameComparison) -> Self {
        self.name_comparison = comparison;
        self
    }

    pub fn with_ignore_trailing_semicolons(mut self, ignore: bool) -> Self {
        self.ignore_trailing_semicolons = ignore;
        self
    }

    pub fn with_specifier_diagnostics(mut self, enabled: bool) -> Self {
        self.specifier_diagnostics = enabled;
        self
    }

    pub fn with_language_filter(mut self, languages: Vec<Language>) -> Self {
        self.language_filter = Some(languages);
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn with_ignore_file(mut self, path: PathBuf) -> Self {
        self.ignore_file = Some(path);
        self
    }

    pub fn with_include_deps(mut self, include: bool) -> Self {
        self.include_deps = include;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}

/// Filter for ignoring files and directories
pub struct IgnoreFilter {
    gitignore: Option<Gitignore>,
    custom_globs: GlobSet,
    default_ignores: GlobSet,
}

impl IgnoreFilter {
    pub fn new(config: &CheckConfig) -> Result<Self, ConfigError> {
        // Load .gitignore if present
        let gitignore = if let Some(ref ignore_file) = config.ignore_file {
            let mut builder = GitignoreBuilder::new(&config.root);
            builder.add(ignore_file);
            Some(builder.build()?)
        } else {
            let gitignore_path = config.root.join(".gitignore");
            if gitignore_path.exists() {
                let mut builder = GitignoreBuilder::new(&config.root);
                builder.add(&gitignore_path);
                Some(builder.build()?)
            } else {
                None
            }
        };

        // Build custom ignore globs
        let mut custom_builder = GlobSetBuilder::new();
        for pattern in &config.ignore_patterns {
            custom_builder.add(Glob::new(pattern)?);
        }
        let custom_globs = custom_builder.build()?;

        // Default ignores (unless include_deps is true)
        let mut default_builder = GlobSetBuilder::new();
        if !config.include_deps {
            default_builder.add(Glob::new("**/node_modules/**")?);
            default_builder.add(Glob::new("**/dist/**")?);
            default_builder.add(Glob::new("**/build/**")?);
            default_builder.add(Glob::new("**/coverage/**")?);
            default_builder.add(Glob::new("**/.git/**")?);
            default_builder.add(Glob::new("**/.next/**")?);
            default_builder.add(Glob::new("**/.DS_Store")?);
        }
        let default_ignores = default_builder.build()?;

        Ok(Self {
            gitignore,
            custom_globs,
            default_ignores,
        })
    }

    /// Check if a path should be ignored
    pub fn should_ignore(&self, path: &Path, is_dir: bool) -> bool {
        let path_str = path.to_string_lossy();

        // Check default ignores
        if self.default_ignores.is_match(&*path_str) {
            return true;
        }

        // Check custom patterns
        if self.custom_globs.is_match(&*path_str) {
            return true;
        }

        // Check gitignore
        if let Some(ref gi) = self.gitignore {
            if gi.matched(path, is_dir).is_ignore() {
                return true;
            }
        }

        false
    }

    /// Check if a file extension matches the language filter
    pub fn matches_language_filter(&self, path: &Path, filter: &Option<Vec<Language>>) -> bool {
        match filter {
            None => true,
            Some(languages) => {
                if let Some(ext) = path.extension() {
                    if let Some(lang) = Language::from_extension(&ext.to_string_lossy()) {
                        languages.contains(&lang)
                    } else {
                        false
                    }
                } else {
                    false
                }
            }
        }
    }
}
