pub mod cli;
pub mod env;
pub mod input;
mod macros;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::{FromInput, IStr, W};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub use bstr::{BStr, ByteSlice};
}
