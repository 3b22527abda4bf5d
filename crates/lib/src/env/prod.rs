use core::ops::Range;

use crate::cli::LineCol;

/// Zero-sized stand-in for a byte offset.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size;

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self;

    #[inline]
    pub(crate) fn new(_: usize) -> Self {
        Self
    }

    #[inline]
    pub(crate) fn checked_add(self, _: Size) -> Option<Self> {
        Some(Self)
    }

    #[inline]
    pub(crate) fn saturating_add(self, _: Size) -> Self {
        Self
    }
}

pub(crate) fn pos_from(_: &[u8], _: Range<Size>) -> LineCol {
    LineCol::EMPTY
}
