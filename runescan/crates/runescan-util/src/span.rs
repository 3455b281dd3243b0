//! Byte ranges into scanned input.

use std::fmt;
use std::ops::Range;

/// A half-open byte range `start..end` into the scanned input.
///
/// Both offsets always sit on UTF-8 character boundaries, so slicing the
/// input with a span never panics.
///
/// # Examples
///
/// ```
/// use runescan_util::Span;
///
/// let span = Span::new(4, 7);
/// assert_eq!(span.len(), 3);
/// assert_eq!(span.slice("let foo = 1"), "foo");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span
    ///
    /// # Panics
    ///
    /// Debug builds assert `start <= end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} > end {}", start, end);
        Self { start, end }
    }

    /// An empty span positioned at `offset`.
    pub fn empty_at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the text this span covers in `source`.
    ///
    /// Out-of-range spans clamp to the end of `source` instead of panicking.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        let end = self.end.min(source.len());
        let start = self.start.min(end);
        source.get(start..end).unwrap_or("")
    }

    /// Whether `self` ends exactly where `next` starts.
    pub fn is_followed_by(&self, next: Span) -> bool {
        self.end == next.start
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
