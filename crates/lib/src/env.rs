//! Input loading and position tracking.
//!
//! Building with `--cfg prod` replaces byte offset tracking with a zero-sized
//! stand-in, which removes the bookkeeping from hot parsing loops at the cost
//! of error positions.

#[cfg_attr(prod, path = "env/prod.rs")]
#[cfg_attr(not(prod), path = "env/no_prod.rs")]
mod imp;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

pub use self::imp::Size;
pub(crate) use self::imp::pos_from;

use crate::input::IStr;

/// Read the input at the given path.
///
/// The loaded data is leaked into static storage because it's much easier to
/// deal with than lifetimes and memory for it will be freed once the process
/// exits *anyway*.
pub fn read(path: &Path) -> Result<IStr> {
    return inner(path).with_context(|| path.display().to_string());

    fn inner(path: &Path) -> Result<IStr> {
        let mut file = File::open(path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        Ok(IStr::from_static(Box::leak(buf.into_boxed_slice())))
    }
}
