/// Helper macro to build an input processor.
///
/// The closure receives a value parsed as `$ty` and converts it into `$out`.
/// Errors raised by the closure are reported with the span of the consumed
/// input, and the input is rewound to where parsing started.
///
/// # Examples
///
/// ```
/// use lib::input::{IStr, W};
///
/// struct Flag(bool);
///
/// lib::from_input! {
///     |(W(word)): W<&'static str>| -> Flag {
///         Ok(match word {
///             "on" => Flag(true),
///             "off" => Flag(false),
///             other => lib::prelude::bail!("bad flag `{other}`"),
///         })
///     }
/// }
///
/// let mut input = IStr::from_static(b"on off");
/// assert!(input.next::<Flag>()?.0);
/// assert!(!input.next::<Flag>()?.0);
/// # Ok::<_, lib::input::IStrError>(())
/// ```
#[macro_export]
macro_rules! from_input {
    (|$($value:ident)? $(($pat:pat))?: $ty:ty| -> $($rest:tt)*) => {
        $crate::from_input!(|[$($value)? $(($pat))?]: $ty| -> $($rest)*);
    };

    (|[$($value:tt)*]: $ty:ty| -> $out:ident $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let original = *p;

                let Some(value) = <$ty as $crate::input::FromInput>::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$($value)*: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::input::IStrError::boxed(span, e))
                    }
                }
            }
        }
    };
}
