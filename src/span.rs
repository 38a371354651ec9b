//! Half-open byte ranges over original source text.
//!
//! [`Span`] is the unit of location used everywhere in this crate: the
//! semantic model locates identifiers and annotation values with spans, the
//! planner keys its edits by span, and the patcher splices replacement text
//! over spans. Ordering is by `(start, end)` so that outer ranges sort before
//! the ranges they contain.

use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` byte range over a unit's original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the first character covered by this span
    pub start: usize,
    /// Byte offset one past the last character covered by this span
    pub end: usize,
}

impl Span {
    /// Create a span covering `[start, end)`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Span { start, end }
    }

    /// A zero-width span at `offset`, used for pure insertions.
    #[must_use]
    pub fn empty(offset: usize) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Length of the covered range in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the span covers no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Strict intersection test.
    ///
    /// Two spans intersect when they share actual content, or when one is a
    /// zero-width insertion point strictly inside the other. Merely touching
    /// endpoints do not intersect, so adjacent edits are allowed.
    #[must_use]
    pub fn intersects(&self, other: &Span) -> bool {
        if self.is_empty() && other.is_empty() {
            return false;
        }
        self.start < other.end && other.start < self.end
    }

    /// True when `other` lies entirely within this span.
    #[must_use]
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Slice `text` to the covered range.
    #[must_use]
    pub fn text_in<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// 1-based line number of this span's start offset within `text`.
    #[must_use]
    pub fn line_in(&self, text: &str) -> usize {
        text[..self.start.min(text.len())]
            .bytes()
            .filter(|b| *b == b'\n')
            .count()
            + 1
    }
}
