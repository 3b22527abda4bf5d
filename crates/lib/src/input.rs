//! Input parser.

mod error;
#[cfg(test)]
mod tests;

use core::mem;
use core::ops;
use std::str::from_utf8;

use bstr::BStr;

pub use self::error::{ErrorKind, IStrError};

pub(self) type Result<T> = std::result::Result<T, IStrError>;
use crate::env::Size;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(prod, repr(transparent))]
pub struct IStr {
    /// The data being parsed.
    data: &'static [u8],
    /// Index of the first byte of `data` in the original input.
    index: Size,
}

impl IStr {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'static [u8], index: Size) -> Self {
        Self { data, index }
    }

    /// Construct an input processor over the whole of `data`.
    #[inline]
    pub fn from_static(data: &'static [u8]) -> Self {
        Self::new(data, Size::ZERO)
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> Size {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(self.as_data())
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, errors with `Err(IStrError)` if the line
    /// is not a valid value of type `T` or if anything but whitespace follows
    /// it. Returns `Ok(None)` once there are no more lines or when reaching a
    /// blank line.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        let Some(output) = line.try_next()? else {
            return Ok(None);
        };

        line.finish()?;
        Ok(Some(output))
    }

    /// Assert that only whitespace remains in the input.
    pub fn finish(&mut self) -> Result<()> {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));

        if s == self.data.len() {
            self.advance(s);
            return Ok(());
        }

        let n = self.find(s, u8::is_ascii_whitespace);
        let start = self.index.saturating_add(Size::new(s));
        let end = self.index.saturating_add(Size::new(n));
        Err(IStrError::new(start..end, ErrorKind::TrailingInput))
    }

    /// Try to parse the next word.
    pub fn try_next_word<T>(&mut self) -> Result<Option<(Size, T)>>
    where
        T: FromInput,
    {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let Some(mut input) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut input)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some((Size::new(s), value)))
    }

    /// Split once at the given byte or until the end of string, returning the
    /// new IStr associated with the split.
    fn split_once(&mut self, b: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = memchr::memchr(b, self.data) else {
            let data = mem::take(&mut self.data);
            let input = IStr::new(data, self.index);
            self.index = self.index.saturating_add(Size::new(data.len()));
            return Some(input);
        };

        let data = self.data.get(..at)?;
        let input = IStr::new(data, self.index);
        self.advance(at.checked_add(1)?);
        Some(input)
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(Size::new(n));
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr> {
        let index = self.index.checked_add(Size::new(range.start))?;

        Some(Self {
            data: self.data.get(range)?,
            index,
        })
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Custom error kind to use.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Optionally try to consume input ignoring leading whitespace by default.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

macro_rules! tuple {
    ($num:literal => $first:ident $first_id:ident $(, $rest:ident $rest_id:ident)* $(,)?) => {
        impl<$first, $($rest,)*> FromInput for ($first, $($rest, )*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let Some($first_id) = p.try_next()? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = p.try_next()? else {
                        return Err(IStrError::new(p.index..p.index, <$rest>::error_kind()));
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }
    }
}

#[rustfmt::skip]
macro_rules! integer {
    ($ty:ty, $error:ident) => {
        impl FromInput for $ty {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedInteger
            }

            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let index = p.index;

                let Some((n, string)) = p.try_next_word::<&'static str>()? else {
                    return Ok(None);
                };

                let Ok(value) = str::parse(string) else {
                    let start = index.saturating_add(n);
                    let end = start.saturating_add(Size::new(string.len()));
                    return Err(IStrError::new(start..end, ErrorKind::$error(string)));
                };

                Ok(Some(value))
            }
        }
    };
}

tuple!(2 => A a, B b);

integer!(usize, NotInteger);
integer!(u32, NotInteger);

impl FromInput for &'static [u8] {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        if p.data.is_empty() {
            return Ok(None);
        }

        let data = mem::take(&mut p.data);
        p.index = p.index.saturating_add(Size::new(data.len()));
        Ok(Some(data))
    }
}

impl FromInput for &'static str {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(IStrError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct Skip;

impl FromInput for Skip {
    #[inline]
    fn try_from_input(_: &mut IStr) -> Result<Option<Self>> {
        Ok(Some(Self))
    }
}

/// Parse a word of input, which parses until we reach a whitespace or control
/// character.
#[derive(Debug)]
pub struct W<T = Skip>(pub T);

impl<T> FromInput for W<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some((_, value)) = p.try_next_word()? else {
            return Ok(None);
        };

        Ok(Some(Self(value)))
    }
}
