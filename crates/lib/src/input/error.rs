use core::fmt;
use core::ops::Range;
use std::sync::Arc;

use crate::env::Size;

#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(&'static str),
    NotUtf8,
    ExpectedInteger,
    ExpectedTuple(usize),
    UnexpectedEof,
    TrailingInput,
    /// Error raised by a custom input processor.
    Boxed(Arc<anyhow::Error>),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::ExpectedInteger => write!(f, "expected integer"),
            ErrorKind::ExpectedTuple(n) => write!(f, "expected tuple of length `{n}`"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
            ErrorKind::TrailingInput => write!(f, "unexpected trailing input"),
            ErrorKind::Boxed(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Error raised through string processing.
#[derive(Debug)]
pub struct IStrError {
    pub(crate) span: Range<Size>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<Size>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// Construct an input error wrapping a custom error.
    #[inline]
    pub fn boxed(span: Range<Size>, error: anyhow::Error) -> Self {
        Self::new(span, ErrorKind::Boxed(Arc::new(error)))
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for IStrError {}
