use crate::classifier::discover_internal_prefixes;
use crate::config::{CheckConfig, IgnoreFilter};
use crate::models::{
    CheckReport, CheckStats, DiagnosticKind, FileReport, Language, ScanMetadata,
};
use crate::parsers::create_parser;
use crate::sorter::ImportSorter;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] crate::config::ConfigError),
    #[error("Parser error: {0}")]
    ParserError(#[from] crate::parsers::ParserError),
}

/// Walks a project tree and checks the import ordering of every matching file
pub struct ProjectScanner {
    config: CheckConfig,
    ignore_filter: IgnoreFilter,
}

impl ProjectScanner {
    pub fn new(config: CheckConfig) -> Result<Self, ScanError> {
        let ignore_filter = IgnoreFilter::new(&config)?;
        Ok(Self {
            config,
            ignore_filter,
        })
    }

    /// Check the whole project and return the aggregated report
    pub fn scan(&self) -> Result<CheckReport, ScanError> {
        let start = Instant::now();

        // 1. Derive internal prefixes from the configured source directory
        let prefixes = discover_internal_prefixes(&self.config.root, &self.config.src_dir);

        // 2. Build the sorter once; it is read-only for the whole run
        let sorter = ImportSorter::new(self.config.clone(), prefixes);

        // 3. Find all source files
        let source_files = self.find_source_files()?;

        // 4. Check all files, in parallel unless a single thread is requested
        let files: Vec<FileReport> = if self.config.threads == 1 {
            source_files
                .into_iter()
                .filter_map(|(path, lang)| self.check_file(&path, lang, &sorter))
                .collect()
        } else {
            let pool = if self.config.threads > 0 {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(self.config.threads)
                    .build()
                    .ok()
            } else {
                None
            };

            match pool {
                Some(pool) => pool.install(|| {
                    source_files
                        .par_iter()
                        .filter_map(|(path, lang)| self.check_file(path, *lang, &sorter))
                        .collect()
                }),
                None => source_files
                    .par_iter()
                    .filter_map(|(path, lang)| self.check_file(path, *lang, &sorter))
                    .collect(),
            }
        };

        // 5. Aggregate statistics
        let stats = self.calculate_stats(&files);

        // 6. Build metadata
        let duration = start.elapsed();
        let metadata = ScanMetadata {
            scan_duration_ms: duration.as_millis() as u64,
            files_per_second: if duration.as_secs_f64() > 0.0 {
                files.len() as f64 / duration.as_secs_f64()
            } else {
                0.0
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        };

        Ok(CheckReport {
            root: self.config.root.clone(),
            files,
            stats,
            metadata,
        })
    }

    /// Find all source files matching the language filter
    fn find_source_files(&self) -> Result<Vec<(PathBuf, Language)>, ScanError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.config.root)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if entry.file_type().is_dir() {
                continue;
            }

            if self.ignore_filter.should_ignore(path, false) {
                continue;
            }

            if !self
                .ignore_filter
                .matches_language_filter(path, &self.config.language_filter)
            {
                continue;
            }

            if let Some(ext) = path.extension() {
                if let Some(lang) = Language::from_extension(&ext.to_string_lossy()) {
                    files.push((path.to_path_buf(), lang));
                }
            }
        }

        Ok(files)
    }

    /// Check a single source file; unreadable or unparsable files are skipped
    fn check_file(
        &self,
        path: &Path,
        language: Language,
        sorter: &ImportSorter,
    ) -> Option<FileReport> {
        let content = fs::read_to_string(path).ok()?;

        let mut parser = create_parser(&language).ok()?;
        let statements = parser.parse(&content);

        let check = sorter.check(&statements, &content);

        let relative_path = path
            .strip_prefix(&self.config.root)
            .unwrap_or(path)
            .to_path_buf();

        Some(FileReport {
            path: relative_path,
            absolute_path: path.to_path_buf(),
            language,
            import_count: statements.len(),
            diagnostics: check.diagnostics,
            replacement: check.replacement,
        })
    }

    /// Aggregate check statistics
    fn calculate_stats(&self, files: &[FileReport]) -> CheckStats {
        let mut stats = CheckStats {
            total_files: files.len(),
            ..Default::default()
        };

        for file in files {
            match file.language {
                Language::JavaScript => stats.javascript_files += 1,
                Language::TypeScript => stats.typescript_files += 1,
            }

            stats.total_imports += file.import_count;

            if file.has_issues() {
                stats.files_with_issues += 1;
            }

            for diagnostic in &file.diagnostics {
                match diagnostic.kind {
                    DiagnosticKind::UnsortedImports => stats.unsorted_files += 1,
                    DiagnosticKind::UnsortedSpecifiers => stats.specifier_issues += 1,
                }
            }
        }

        stats
    }
}
