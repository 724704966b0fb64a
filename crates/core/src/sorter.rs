//! Canonical layout assembly and diffing for one file's import block.

use crate::classifier::ImportClassifier;
use crate::config::{CheckConfig, NameComparison};
use crate::models::{
    Diagnostic, DiagnosticKind, FileCheck, ImportGroup, ImportStatement, Layout, LayoutEntry,
    Replacement, SpecifierKind, TextSpan,
};
use crate::render::render_layout;
use crate::specifiers::{compare_names, order_specifiers, primary_name, rank_tag};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Total order between two normalized statements of the same group
///
/// Binding-kind rank decides first; ties break on primary name. Equal keys
/// compare equal, so a stable sort preserves source order.
pub fn compare_statements(
    a: &ImportStatement,
    b: &ImportStatement,
    comparison: NameComparison,
) -> Ordering {
    rank_tag(&a.specifiers)
        .cmp(rank_tag(&b.specifiers))
        .then_with(|| {
            compare_names(
                primary_name(&a.specifiers),
                primary_name(&b.specifiers),
                comparison,
            )
        })
}

/// Apply a replacement to a file's content as a single contiguous substitution
pub fn apply_replacement(source: &str, replacement: &Replacement) -> String {
    let mut fixed = String::with_capacity(source.len() + replacement.text.len());
    fixed.push_str(&source[..replacement.span.start]);
    fixed.push_str(&replacement.text);
    fixed.push_str(&source[replacement.span.end..]);
    fixed
}

fn strip_trailing_semicolons(text: &str) -> String {
    text.lines()
        .map(|line| line.trim_end().trim_end_matches(';'))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assembles the canonical layout of a file's imports and diffs it against
/// the original text
///
/// Stateless across files; the internal prefix set is fixed at construction
/// and read at classification time only.
pub struct ImportSorter {
    classifier: ImportClassifier,
    config: CheckConfig,
}

impl ImportSorter {
    pub fn new(config: CheckConfig, internal_prefixes: HashSet<String>) -> Self {
        Self {
            classifier: ImportClassifier::new(internal_prefixes),
            config,
        }
    }

    /// Clone of a statement with its specifiers in canonical order
    fn normalize(&self, stmt: &ImportStatement) -> ImportStatement {
        ImportStatement {
            specifiers: order_specifiers(&stmt.specifiers, self.config.name_comparison),
            ..stmt.clone()
        }
    }

    /// Bucket, sort, and interleave statements with group separators
    ///
    /// Buckets are rebuilt from scratch; no pre-order survives. Within the
    /// non-style groups the comparator's rank dominates, which yields the
    /// named, namespace, default runs with side-effect imports last. Styles
    /// order by full source path and never get a trailing separator.
    pub fn assemble(&self, statements: &[ImportStatement]) -> Layout {
        let mut external = Vec::new();
        let mut internal = Vec::new();
        let mut internal_types = Vec::new();
        let mut styles = Vec::new();

        for stmt in statements {
            let normalized = self.normalize(stmt);
            match self.classifier.classify(&stmt.source) {
                ImportGroup::External => external.push(normalized),
                ImportGroup::Internal => internal.push(normalized),
                ImportGroup::InternalTypes => internal_types.push(normalized),
                ImportGroup::Styles => styles.push(normalized),
            }
        }

        let mut entries = Vec::new();

        for (group, mut bucket) in [
            (ImportGroup::External, external),
            (ImportGroup::Internal, internal),
            (ImportGroup::InternalTypes, internal_types),
        ] {
            if bucket.is_empty() {
                continue;
            }

            bucket.sort_by(|a, b| compare_statements(a, b, self.config.name_comparison));
            entries.extend(bucket.into_iter().map(LayoutEntry::Statement));

            if group != ImportGroup::InternalTypes || self.config.separator_before_styles {
                entries.push(LayoutEntry::Blank);
            }
        }

        styles.sort_by(|a, b| a.source.cmp(&b.source));
        entries.extend(styles.into_iter().map(LayoutEntry::Statement));

        // Layout never ends with a blank line
        while matches!(entries.last(), Some(LayoutEntry::Blank)) {
            entries.pop();
        }

        Layout { entries }
    }

    /// Canonical text of a file's import block
    pub fn canonical_text(&self, statements: &[ImportStatement]) -> String {
        render_layout(&self.assemble(statements))
    }

    /// Check one file's imports against the canonical layout
    ///
    /// `source` is the full file content the statements' spans index into.
    /// A mismatch yields the whole-file diagnostic plus a replacement
    /// covering first-import-start to last-import-end; per-statement
    /// specifier diagnostics layer on top when enabled.
    pub fn check(&self, statements: &[ImportStatement], source: &str) -> FileCheck {
        let (Some(first), Some(last)) = (statements.first(), statements.last()) else {
            return FileCheck::default();
        };

        let mut diagnostics = Vec::new();

        if self.config.specifier_diagnostics {
            for stmt in statements {
                if !self.named_specifiers_sorted(stmt) {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticKind::UnsortedSpecifiers,
                        stmt.line,
                        stmt.span,
                    ));
                }
            }
        }

        let expected = self.canonical_text(statements);
        let span = TextSpan {
            start: first.span.start,
            end: last.span.end,
        };
        let original = &source[span.start..span.end];

        let matches = if self.config.ignore_trailing_semicolons {
            strip_trailing_semicolons(&expected) == strip_trailing_semicolons(original)
        } else {
            expected == original
        };

        let mut replacement = None;
        if !matches {
            diagnostics.insert(
                0,
                Diagnostic::new(DiagnosticKind::UnsortedImports, first.line, span),
            );
            replacement = Some(Replacement {
                span,
                text: expected,
            });
        }

        FileCheck {
            diagnostics,
            replacement,
        }
    }

    /// True when the statement's named specifiers already display in
    /// canonical order
    fn named_specifiers_sorted(&self, stmt: &ImportStatement) -> bool {
        let named: Vec<&str> = stmt
            .specifiers
            .iter()
            .filter(|s| s.kind == SpecifierKind::Named)
            .map(|s| s.local.as_str())
            .collect();

        named.windows(2).all(|pair| {
            compare_names(pair[0], pair[1], self.config.name_comparison) != Ordering::Greater
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{ImportParser, JavaScriptParser};

    fn parse(source: &str) -> Vec<ImportStatement> {
        let mut parser = JavaScriptParser::new(false).unwrap();
        parser.parse(source)
    }

    fn sorter_with(prefixes: &[&str], config: CheckConfig) -> ImportSorter {
        ImportSorter::new(config, prefixes.iter().map(|s| s.to_string()).collect())
    }

    fn sorter(prefixes: &[&str]) -> ImportSorter {
        sorter_with(prefixes, CheckConfig::default())
    }

    #[test]
    fn test_scenario_full_regrouping() {
        let source = "import './index.css';\n\
                      import { FooType } from 'types/Foo';\n\
                      import lodash from 'lodash';\n\
                      import { doThing } from 'utils/helper';\n\
                      import { useState } from 'react';";
        let statements = parse(source);
        let check = sorter(&["utils"]).check(&statements, source);

        assert!(!check.is_clean());
        assert_eq!(check.diagnostics[0].kind, DiagnosticKind::UnsortedImports);
        assert_eq!(check.diagnostics[0].line, 1);

        let replacement = check.replacement.unwrap();
        assert_eq!(
            replacement.text,
            "import { useState } from 'react';\n\
             import lodash from 'lodash';\n\
             \n\
             import { doThing } from 'utils/helper';\n\
             \n\
             import { FooType } from 'types/Foo';\n\
             \n\
             import './index.css';"
        );
        assert_eq!(replacement.span.start, 0);
        assert_eq!(replacement.span.end, source.len());
    }

    #[test]
    fn test_idempotence_after_fix() {
        let source = "import './index.css';\n\
                      import { FooType } from 'types/Foo';\n\
                      import { useState } from 'react';";
        let statements = parse(source);
        let s = sorter(&[]);

        let check = s.check(&statements, source);
        let fixed = apply_replacement(source, &check.replacement.unwrap());

        let fixed_statements = parse(&fixed);
        let recheck = s.check(&fixed_statements, &fixed);
        assert!(recheck.is_clean());
        assert!(recheck.replacement.is_none());
    }

    #[test]
    fn test_scenario_specifier_only_violation() {
        let source = "import { B, A } from 'pkg';";
        let statements = parse(source);
        let check = sorter(&[]).check(&statements, source);

        let kinds: Vec<DiagnosticKind> = check.diagnostics.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticKind::UnsortedImports,
                DiagnosticKind::UnsortedSpecifiers
            ]
        );
        assert_eq!(
            check.replacement.unwrap().text,
            "import { A, B } from 'pkg';"
        );
    }

    #[test]
    fn test_specifier_diagnostics_can_be_disabled() {
        let source = "import { B, A } from 'pkg';";
        let statements = parse(source);
        let config = CheckConfig::default().with_specifier_diagnostics(false);
        let check = sorter_with(&[], config).check(&statements, source);

        assert_eq!(check.diagnostics.len(), 1);
        assert_eq!(check.diagnostics[0].kind, DiagnosticKind::UnsortedImports);
    }

    #[test]
    fn test_scenario_defaults_order_by_primary_name() {
        let source = "import d2 from 'zzz';\nimport d1 from 'aaa';";
        let statements = parse(source);
        let check = sorter(&[]).check(&statements, source);

        assert_eq!(
            check.replacement.unwrap().text,
            "import d1 from 'aaa';\nimport d2 from 'zzz';"
        );
    }

    #[test]
    fn test_scenario_mixed_default_ranks_by_named_specifier() {
        // Under case-insensitive comparison the primary name of
        // `import Foo, { a, z }` is `a`, so the statement sorts with the
        // named-first run despite carrying a default specifier
        let source = "import { b } from 'y';\nimport Foo, { a, z } from 'x';";
        let statements = parse(source);
        let config =
            CheckConfig::default().with_name_comparison(NameComparison::CaseInsensitive);
        let check = sorter_with(&[], config).check(&statements, source);

        assert_eq!(
            check.replacement.unwrap().text,
            "import Foo, { a, z } from 'x';\nimport { b } from 'y';"
        );
    }

    #[test]
    fn test_mixed_default_under_ordinal_comparison() {
        // Ordinally the uppercase default name leads the combined set, so
        // the same statement ranks with the defaults instead
        let source = "import Foo, { a, z } from 'x';\nimport { b } from 'y';";
        let statements = parse(source);
        let check = sorter(&[]).check(&statements, source);

        assert_eq!(
            check.replacement.unwrap().text,
            "import { b } from 'y';\nimport Foo, { a, z } from 'x';"
        );
    }

    #[test]
    fn test_binding_kind_runs_within_group() {
        let source = "import def from 'ccc';\n\
                      import * as ns from 'bbb';\n\
                      import { named } from 'aaa';";
        let statements = parse(source);
        let layout = sorter(&[]).assemble(&statements);

        let sources: Vec<&str> = layout.statements().map(|s| s.source.as_str()).collect();
        assert_eq!(sources, vec!["aaa", "bbb", "ccc"]);
    }

    #[test]
    fn test_side_effect_import_kept_and_ranked_last() {
        let source = "import 'polyfill';\nimport { a } from 'pkg';";
        let statements = parse(source);
        let s = sorter(&[]);
        let check = s.check(&statements, source);

        assert_eq!(
            check.replacement.unwrap().text,
            "import { a } from 'pkg';\nimport 'polyfill';"
        );
    }

    #[test]
    fn test_styles_sort_by_path() {
        let source = "import './z.css';\nimport './a.css';";
        let statements = parse(source);
        let check = sorter(&[]).check(&statements, source);

        assert_eq!(
            check.replacement.unwrap().text,
            "import './a.css';\nimport './z.css';"
        );
    }

    #[test]
    fn test_separator_before_styles_flag() {
        let source = "import { FooType } from 'types/Foo';\nimport './index.css';";
        let statements = parse(source);

        let without = CheckConfig::default().with_separator_before_styles(false);
        let check = sorter_with(&[], without).check(&statements, source);
        assert!(check.is_clean());

        let with = CheckConfig::default();
        let check = sorter_with(&[], with).check(&statements, source);
        assert_eq!(
            check.replacement.unwrap().text,
            "import { FooType } from 'types/Foo';\n\nimport './index.css';"
        );
    }

    #[test]
    fn test_group_order_is_stable() {
        let source = "import './app.css';\n\
                      import { T } from 'types/t';\n\
                      import { u } from 'utils/u';\n\
                      import { e } from 'ext';";
        let statements = parse(source);
        let s = sorter(&["utils"]);
        let layout = s.assemble(&statements);

        let sources: Vec<&str> = layout.statements().map(|st| st.source.as_str()).collect();
        assert_eq!(sources, vec!["ext", "utils/u", "types/t", "./app.css"]);
    }

    #[test]
    fn test_name_preservation() {
        let source = "import Foo, { z, a } from 'x';\n\
                      import * as ns from 'n';\n\
                      import { q } from './y';";
        let statements = parse(source);
        let s = sorter(&[]);
        let text = s.canonical_text(&statements);

        for name in ["Foo", "ns", "z", "a", "q"] {
            assert!(text.contains(name), "{name} missing from {text}");
        }
    }

    #[test]
    fn test_ignore_trailing_semicolons() {
        let source = "import { a } from 'pkg'";
        let statements = parse(source);

        let strict = sorter(&[]).check(&statements, source);
        assert!(!strict.is_clean());

        let relaxed = CheckConfig::default().with_ignore_trailing_semicolons(true);
        let check = sorter_with(&[], relaxed).check(&statements, source);
        assert!(check.is_clean());
    }

    #[test]
    fn test_empty_input_is_clean() {
        let check = sorter(&[]).check(&[], "const x = 1;");
        assert!(check.is_clean());
        assert!(check.replacement.is_none());
    }

    #[test]
    fn test_replacement_span_covers_import_block_only() {
        let source = "// header\nimport { b, a } from 'pkg';\n\nconst x = 1;\n";
        let statements = parse(source);
        let check = sorter(&[]).check(&statements, source);

        let replacement = check.replacement.unwrap();
        assert_eq!(
            &source[replacement.span.start..replacement.span.end],
            "import { b, a } from 'pkg';"
        );
        let fixed = apply_replacement(source, &replacement);
        assert_eq!(fixed, "// header\nimport { a, b } from 'pkg';\n\nconst x = 1;\n");
    }
}
