//! Two-state variant of Golly's ["Extended RLE"
//! format](http://golly.sourceforge.net/Help/formats.html#rle).
//!
//! `b` (or `.`) is a clear cell, `o` (or `A`) is a set cell, `$` ends a row,
//! and `!` ends the mask; any item may be preceded by a repeat count. Rows are
//! listed top to bottom, which matches mask coordinates directly.
//!
//! RLEs can be `parse()`d from strings, converted to strings with
//! `to_string()`, and converted to/from `MaskArray`s.

use thiserror::Error;

mod components;
mod convert;

pub use components::Rle;
use components::*;

/// Maximum length of a line of runs when writing an RLE.
pub const MAX_LINE_LEN: usize = 70;

/// Result type returned by fallible RLE routines.
pub type RleResult<T> = Result<T, RleError>;

lazy_static::lazy_static! {
    /// Regex matching an optional positive integer followed by a single RLE
    /// item.
    static ref RLE_RUN_REGEX: regex::Regex = regex::Regex::new(r"\d*[^\d\s]").unwrap();
}

/// Error encountered during RLE import/export.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RleError {
    #[error("unknown symbol: '{0}'")]
    UnknownSymbol(char),
    #[error("invalid size")]
    InvalidSize,
    #[error("invalid count")]
    InvalidCount,
    #[error("missing RLE header")]
    MissingHeader,
    #[error("invalid RLE item")]
    InvalidItem,
    #[error("row {row} is wider than the declared width {width}")]
    TooBig { row: usize, width: usize },
    #[error("RLE contains non-ASCII characters")]
    NonAscii,
}

#[cfg(test)]
mod tests;
