//! Canonical textual form of import statements and layouts.

use crate::models::{ImportStatement, Layout, LayoutEntry, SpecifierKind};

/// Render one statement in its canonical form
///
/// Expects the statement's specifiers to already be in normalized order;
/// the named list is emitted in that order. Clause slots are fixed:
/// default name, `* as ns`, then the named list. Every bound name from the
/// input appears exactly once.
pub fn render_statement(stmt: &ImportStatement) -> String {
    if stmt.specifiers.is_empty() {
        return format!("import '{}';", stmt.source);
    }

    let clause = if stmt.specifiers.len() == 1 {
        let spec = &stmt.specifiers[0];
        match spec.kind {
            SpecifierKind::Named => format!("{{ {} }}", spec.local),
            SpecifierKind::Namespace => format!("* as {}", spec.local),
            SpecifierKind::Default => spec.local.clone(),
        }
    } else {
        let default = stmt
            .specifiers
            .iter()
            .find(|s| s.kind == SpecifierKind::Default);
        let namespace = stmt
            .specifiers
            .iter()
            .find(|s| s.kind == SpecifierKind::Namespace);
        let named: Vec<&str> = stmt
            .specifiers
            .iter()
            .filter(|s| s.kind == SpecifierKind::Named)
            .map(|s| s.local.as_str())
            .collect();

        let mut parts = Vec::new();
        if let Some(spec) = default {
            parts.push(spec.local.clone());
        }
        if let Some(spec) = namespace {
            parts.push(format!("* as {}", spec.local));
        }
        if !named.is_empty() {
            parts.push(format!("{{ {} }}", named.join(", ")));
        }

        parts.join(", ")
    };

    format!("import {} from '{}';", clause, stmt.source)
}

/// Render a full layout as the canonical import block text
///
/// Statements join with single newlines and each separator becomes one
/// blank line. Runs of blank lines collapse to one and surrounding
/// whitespace is trimmed, so the result never starts or ends with a blank.
pub fn render_layout(layout: &Layout) -> String {
    let lines: Vec<String> = layout
        .entries
        .iter()
        .map(|entry| match entry {
            LayoutEntry::Statement(stmt) => render_statement(stmt),
            LayoutEntry::Blank => String::new(),
        })
        .collect();

    let mut text = lines.join("\n");
    while text.contains("\n\n\n") {
        text = text.replace("\n\n\n", "\n\n");
    }
    text.trim().to_string()
}
