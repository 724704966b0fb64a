//! Sortimports Core Library
//!
//! This library checks JavaScript/TypeScript files for a canonical ordering
//! of their import statements and produces the replacement text that fixes
//! deviations.
//!
//! # Features
//!
//! - Classify import paths into four groups: external, internal,
//!   internal-types, styles
//! - Order statements within a group by binding kind and primary name
//! - Render each statement in a canonical form and interleave groups with
//!   blank-line separators
//! - Diff the canonical layout against the original text and report a
//!   single-span replacement
//! - Scan whole project trees (gitignore-aware, parallel) and output
//!   results in JSON, YAML, or a human-readable summary
//!
//! # Example
//!
//! ```no_run
//! use sortimports_core::{format_report, CheckConfig, OutputFormat, ProjectScanner};
//! use std::path::PathBuf;
//!
//! let config = CheckConfig::new(PathBuf::from("."));
//! let scanner = ProjectScanner::new(config).unwrap();
//! let report = scanner.scan().unwrap();
//!
//! let json = format_report(&report, OutputFormat::Json).unwrap();
//! println!("{}", json);
//! ```

pub mod classifier;
pub mod config;
pub mod models;
pub mod output;
pub mod parsers;
pub mod render;
pub mod scanner;
pub mod sorter;
pub mod specifiers;

// Re-exports for convenience
pub use classifier::{discover_internal_prefixes, ImportClassifier};
pub use config::{CheckConfig, NameComparison};
pub use models::*;
pub use output::{format_report, format_summary, FormatError, OutputFormat};
pub use render::{render_layout, render_statement};
pub use scanner::{ProjectScanner, ScanError};
pub use sorter::{apply_replacement, compare_statements, ImportSorter};
