//! Canonical ordering of the bound names within one import statement.
//!
//! All specifiers of a statement, regardless of kind, sort together by
//! local name. The first element of the sorted sequence drives both the
//! statement's binding-kind rank and its primary name for cross-statement
//! comparison.

use crate::config::NameComparison;
use crate::models::{Specifier, SpecifierKind};
use std::cmp::Ordering;

/// Sort key sentinel for side-effect imports; ranks after every kind tag
/// and every identifier.
pub const SIDE_EFFECT_KEY: &str = "~";

/// Compare two bound names under the configured comparison mode
pub fn compare_names(a: &str, b: &str, comparison: NameComparison) -> Ordering {
    match comparison {
        NameComparison::Ordinal => a.cmp(b),
        NameComparison::CaseInsensitive => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
    }
}

/// Sort all specifiers of one statement by local name, mixing kinds
///
/// Returns empty for a side-effect import. The sort is stable, so equal
/// names keep their source order.
pub fn order_specifiers(specifiers: &[Specifier], comparison: NameComparison) -> Vec<Specifier> {
    let mut ordered = specifiers.to_vec();
    ordered.sort_by(|a, b| compare_names(&a.local, &b.local, comparison));
    ordered
}

/// Alphabetically smallest local name of a normalized specifier list,
/// or the side-effect sentinel for an empty one
pub fn primary_name(ordered: &[Specifier]) -> &str {
    ordered
        .first()
        .map(|s| s.local.as_str())
        .unwrap_or(SIDE_EFFECT_KEY)
}

/// Binding-kind rank tag of a normalized specifier list
///
/// Tags compare ordinally: named before namespace before default, with the
/// `"~"` sentinel ranking side-effect imports last.
pub fn rank_tag(ordered: &[Specifier]) -> &'static str {
    match ordered.first().map(|s| s.kind) {
        Some(SpecifierKind::Named) => "1",
        Some(SpecifierKind::Namespace) => "2",
        Some(SpecifierKind::Default) => "3",
        None => SIDE_EFFECT_KEY,
    }
}
