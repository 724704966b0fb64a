use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use sortimports_core::{
    apply_replacement, format_report, CheckConfig, Language, NameComparison, OutputFormat,
    ProjectScanner,
};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "sortimports")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check and fix import statement ordering in JavaScript/TypeScript projects")]
#[command(long_about = "A Rust-based tool that scans project directories and checks every \
    JavaScript/TypeScript file for a canonical import layout: external packages first, then \
    internal modules, then internal types, then stylesheets, each group sorted and separated \
    by a blank line. Deviations are reported per file; --fix rewrites the import block in \
    place. Supports .js, .jsx, .mjs, .cjs, .ts, .tsx, .mts, and .cts files.")]
pub struct Args {
    /// Project root directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Summary)]
    pub format: OutputFormatArg,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Rewrite files with the canonical import layout
    #[arg(long)]
    pub fix: bool,

    /// Project-relative directory whose subdirectory names count as internal
    #[arg(long, default_value = "src")]
    pub src_dir: String,

    /// Only scan specific language
    #[arg(long, value_enum)]
    pub language: Option<LanguageFilter>,

    /// Additional ignore patterns (gitignore style)
    #[arg(long, action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Ignore file path (defaults to .gitignore)
    #[arg(long)]
    pub ignore_file: Option<PathBuf>,

    /// Include node_modules in scan
    #[arg(long)]
    pub include_deps: bool,

    /// Do not require a blank line between internal types and styles
    #[arg(long)]
    pub no_styles_separator: bool,

    /// Compare bound names case-insensitively instead of ordinally
    #[arg(long)]
    pub case_insensitive_names: bool,

    /// Ignore trailing semicolons when comparing against the original text
    #[arg(long)]
    pub ignore_semicolons: bool,

    /// Disable per-statement specifier-order diagnostics
    #[arg(long)]
    pub no_specifier_check: bool,

    /// Report only files that have issues
    #[arg(long)]
    pub issues_only: bool,

    /// Show verbose progress
    #[arg(short, long)]
    pub verbose: bool,

    /// Parallel threads (0 = auto)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Summary,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Summary => OutputFormat::Summary,
        }
    }
}

#[derive(ValueEnum, Clone, Debug)]
pub enum LanguageFilter {
    JavaScript,
    TypeScript,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let language_filter = args.language.map(|l| match l {
        LanguageFilter::JavaScript => vec![Language::JavaScript],
        LanguageFilter::TypeScript => vec![Language::TypeScript],
    });

    let name_comparison = if args.case_insensitive_names {
        NameComparison::CaseInsensitive
    } else {
        NameComparison::Ordinal
    };

    // Build config
    let mut config = CheckConfig::new(args.path.clone())
        .with_src_dir(args.src_dir.clone())
        .with_separator_before_styles(!args.no_styles_separator)
        .with_name_comparison(name_comparison)
        .with_ignore_trailing_semicolons(args.ignore_semicolons)
        .with_specifier_diagnostics(!args.no_specifier_check)
        .with_ignore_patterns(args.ignore.clone())
        .with_include_deps(args.include_deps)
        .with_threads(args.threads);

    if let Some(languages) = language_filter {
        config = config.with_language_filter(languages);
    }

    if let Some(ignore_file) = args.ignore_file {
        config = config.with_ignore_file(ignore_file);
    }

    // Show progress if verbose
    let spinner = if args.verbose {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Checking imports...");
        Some(pb)
    } else {
        None
    };

    // Run the scan
    let scanner = ProjectScanner::new(config.clone())?;
    let mut report = scanner.scan()?;

    if let Some(ref pb) = spinner {
        pb.finish_with_message(format!(
            "Checked {} files in {}ms",
            report.stats.total_files, report.metadata.scan_duration_ms
        ));
    }

    // Apply fixes and rescan so the report reflects the final state
    if args.fix {
        let mut fixed_count = 0;
        for file in &report.files {
            if let Some(replacement) = &file.replacement {
                let content = fs::read_to_string(&file.absolute_path)?;
                fs::write(&file.absolute_path, apply_replacement(&content, replacement))?;
                fixed_count += 1;
            }
        }

        if args.verbose {
            eprintln!("Fixed {} files", fixed_count);
        }

        if fixed_count > 0 {
            report = ProjectScanner::new(config)?.scan()?;
        }
    }

    let reported = if args.issues_only {
        report.filter_to_issues()
    } else {
        report.clone()
    };

    let output = format_report(&reported, args.format.into())?;

    // Write output
    if let Some(path) = args.output {
        fs::write(&path, &output)?;
        if args.verbose {
            eprintln!("Output written to: {}", path.display());
        }
    } else {
        println!("{}", output);
    }

    if report.has_issues() {
        std::process::exit(1);
    }

    Ok(())
}
