use core::ops::Range;

use crate::cli::LineCol;
use crate::input::NL;

/// A byte offset into the input.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size(usize);

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub(crate) fn usize_range(range: Range<Size>) -> Range<usize> {
        range.start.0..range.end.0
    }

    #[inline]
    pub(crate) fn new(n: usize) -> Self {
        Self(n)
    }

    #[inline]
    pub(crate) fn checked_add(self, b: Size) -> Option<Self> {
        Some(Self(self.0.checked_add(b.0)?))
    }

    #[inline]
    pub(crate) fn saturating_add(self, n: Size) -> Self {
        Self(self.0.saturating_add(n.0))
    }
}

/// Get the line and column span of `span` inside of `data`.
pub(crate) fn pos_from(data: &[u8], span: Range<Size>) -> LineCol {
    let span = Size::usize_range(span);

    let Some(d) = data.get(..span.start) else {
        return LineCol::EMPTY;
    };

    let (line, start) = match memchr::memrchr(NL, d) {
        Some(last) => (
            memchr::memchr_iter(NL, d).count(),
            d.len().saturating_sub(last + 1),
        ),
        None => (0, d.len()),
    };

    let end = match data.get(span) {
        Some(rest) => start.saturating_add(memchr::memchr(NL, rest).unwrap_or(rest.len())),
        None => start,
    };

    LineCol::new(line, start, end)
}
