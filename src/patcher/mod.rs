//! Conflict-safe edit collection and patch application.
//!
//! The planner accumulates its rewrites in an [`EditSet`]: a map from
//! [`Span`] to replacement text, ordered by `(start, end)`. Insertion refuses
//! candidates that strictly intersect an already-accepted edit, so the set is
//! totally ordered by start offset with no two ranges intersecting — by
//! construction, which makes the non-overlap property independently testable
//! on any planned unit.
//!
//! The same validity test gates which syntax nodes are considered for further
//! remapping at all: a node whose range is no longer valid was already
//! resolved by a more specific earlier rule (an annotation-payload rewrite
//! pre-empting the generic identifier pass over the same literal, for
//! example) and is skipped.
//!
//! Application splices replacements from the highest start offset to the
//! lowest, so earlier offsets stay valid while the string is rebuilt.
//!
//! # Examples
//!
//! ```rust
//! use mixremap::patcher::EditSet;
//! use mixremap::Span;
//!
//! let mut edits = EditSet::new();
//! assert!(edits.insert(Span::new(4, 9), "world".to_string()));
//! assert!(!edits.insert(Span::new(6, 12), "clash".to_string()));
//! assert_eq!(edits.apply("say hello!"), "say world!");
//! ```

use std::collections::BTreeMap;

use crate::Span;

/// A single text substitution: replace the covered range with new text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Range over the original source text
    pub span: Span,
    /// Replacement text
    pub replacement: String,
}

/// An ordered, non-overlapping collection of [`Edit`]s.
#[derive(Debug, Clone, Default)]
pub struct EditSet {
    edits: BTreeMap<Span, String>,
}

impl EditSet {
    /// An empty edit set.
    #[must_use]
    pub fn new() -> Self {
        EditSet::default()
    }

    /// Number of accepted edits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// True when no edit has been accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// True when no accepted edit's range intersects `span`.
    ///
    /// Because accepted ranges never overlap each other, only the nearest
    /// neighbors in span order can intersect a candidate: the greatest
    /// accepted range not above it and the least accepted range not below it.
    #[must_use]
    pub fn valid(&self, span: &Span) -> bool {
        if let Some((before, _)) = self.edits.range(..=*span).next_back() {
            if before.intersects(span) {
                return false;
            }
        }
        if let Some((after, _)) = self.edits.range(*span..).next() {
            if after.intersects(span) {
                return false;
            }
        }
        true
    }

    /// Accept an edit, unless its range conflicts with an accepted one.
    ///
    /// Re-inserting the exact same range overwrites the previous replacement.
    /// Returns whether the edit was accepted.
    pub fn insert(&mut self, span: Span, replacement: String) -> bool {
        if !self.edits.contains_key(&span) && !self.valid(&span) {
            return false;
        }
        self.edits.insert(span, replacement);
        true
    }

    /// The accepted edits in ascending span order.
    #[must_use]
    pub fn into_edits(self) -> Vec<Edit> {
        self.edits
            .into_iter()
            .map(|(span, replacement)| Edit { span, replacement })
            .collect()
    }

    /// Apply the accepted edits to `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (span, replacement) in self.edits.iter().rev() {
            result.replace_range(span.start..span.end, replacement);
        }
        result
    }
}

/// Apply a list of non-overlapping edits to `text`.
///
/// The edits may arrive in any order; they are applied from the highest start
/// offset to the lowest.
#[must_use]
pub fn apply(text: &str, edits: &[Edit]) -> String {
    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by_key(|edit| edit.span);
    let mut result = text.to_string();
    for edit in ordered.iter().rev() {
        result.replace_range(edit.span.start..edit.span.end, &edit.replacement);
    }
    result
}
