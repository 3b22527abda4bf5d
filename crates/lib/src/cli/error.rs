use core::fmt;
use core::ops::Range;
use std::path::Path;

use crate::env::Size;
use crate::input::{IStr, IStrError};

/// Associate the location of an input error with the error.
///
/// `data` must be the input as it was originally loaded, since error spans
/// are relative to its start.
pub fn error_context<E>(path: &Path, data: IStr, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);

    let Some(span) = find_range(&error) else {
        return error;
    };

    let pos = crate::env::pos_from(data.as_data(), span);

    let context = ErrorContext {
        path: path.display().to_string(),
        pos,
    };

    error.context(context)
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy)]
pub struct LineCol {
    line: usize,
    start: usize,
    end: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0, 0);

    pub(crate) const fn new(line: usize, start: usize, end: usize) -> Self {
        Self { line, start, end }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        let start = self.start + 1;
        let end = self.end + 1;
        write!(f, "{line}:{start}-{end}")
    }
}

/// Need to be able to unwrap an error fully in case it's threaded through
/// multiple layers of processing.
fn find_range(error: &anyhow::Error) -> Option<Range<Size>> {
    error
        .chain()
        .find_map(|e| e.downcast_ref::<IStrError>())
        .map(|e| e.span.clone())
}

#[derive(Debug)]
struct ErrorContext {
    path: String,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}

#[cfg(all(test, not(prod)))]
mod tests {
    use std::path::Path;

    use super::error_context;
    use crate::input::{IStr, W};

    #[test]
    fn test_error_context() {
        let data = IStr::from_static(b"R 4\nU four\n");
        let mut input = data;

        let error = loop {
            match input.try_line::<(W<&str>, u32)>() {
                Ok(Some(..)) => continue,
                Ok(None) => panic!("expected an error"),
                Err(error) => break error,
            }
        };

        let error = error_context(Path::new("moves.txt"), data, error);
        assert_eq!(error.to_string(), "moves.txt:2:3-7");
    }
}
