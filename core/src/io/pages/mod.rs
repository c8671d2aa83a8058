//! Binary page format for masks.
//!
//! A stream starts with a header (`MAGIC`, `VERSION`, width, height), then an
//! optional symbol table, then one record per group of identical consecutive
//! rows, then `PAGE_ROWBREAK`. All integers after the magic and version are
//! LEB128 varints.
//!
//! Each record is a tag byte, a body, and a repeat count:
//!
//! | tag                            | body                          |
//! |--------------------------------|-------------------------------|
//! | `PAGE_ZEROS`                   | none                          |
//! | `PAGE_ONES`                    | none                          |
//! | `PAGE_PATTERN`                 | inline pattern                |
//! | `PAGE_FIRST_SYMBOL_TABLE`..    | none; symbol `tag - 0x03`     |
//! | `PAGE_SYMBOL_ESCAPE`           | varint symbol `index - 0xFB`  |
//!
//! Patterns used by at least `MIN_OCCURRENCES` rows are written once in the
//! symbol table (tag `PAGE_FIRST_ROW_TABLE`, symbol count, then each pattern)
//! and referenced by index. A pattern is a run count followed by each run as
//! the gap since the end of the previous run and the run length.

use thiserror::Error;

mod decode;
mod encode;
mod varint;

/// Minimum number of rows that must share a pattern for it to be placed in
/// the symbol table.
pub const MIN_OCCURRENCES: usize = 3;
/// Step by which the output buffer grows.
pub const CHUNK_INCREMENT: usize = 0x1000;
/// Size of a page.
pub const PAGE_SIZE: usize = 0x100_0000;
/// Maximum number of runs in a single pattern.
pub const MAX_SYMBOL_LENGTH: usize = PAGE_SIZE - 1;

/// Terminates the stream after the last row record.
pub const PAGE_ROWBREAK: u8 = 0x00;
/// Repeat count that is never valid in a row record.
pub const SUBSTITUTE_SKIP: u64 = 0x00;

/// Tag for rows with no cells set.
pub const PAGE_ZEROS: u8 = 0x00;
/// Tag for rows with every cell set.
pub const PAGE_ONES: u8 = 0x01;
/// Tag for rows stored as an inline pattern.
pub const PAGE_PATTERN: u8 = 0x02;
/// Tag for a reference to the first symbol; later symbols follow in order.
pub const PAGE_FIRST_SYMBOL_TABLE: u8 = 0x03;
/// Tag for a reference to a symbol whose index follows as a varint.
pub const PAGE_SYMBOL_ESCAPE: u8 = 0xFE;
/// Tag that starts the symbol table.
pub const PAGE_FIRST_ROW_TABLE: u8 = 0xFF;

/// Number of symbols that can be referenced by tag alone.
const SHORT_SYMBOLS: usize = (PAGE_SYMBOL_ESCAPE - PAGE_FIRST_SYMBOL_TABLE) as usize;

/// Magic bytes at the start of every stream.
pub const MAGIC: &[u8; 4] = b"MSKA";
/// Format version written by this crate.
pub const VERSION: u8 = 1;

/// Result type returned by fallible page format routines.
pub type PagesResult<T> = Result<T, PagesError>;

/// Error encountered while encoding or decoding the page format.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum PagesError {
    #[error("missing mask page header")]
    BadMagic,
    #[error("unsupported page format version {0}")]
    UnsupportedVersion(u8),
    #[error("unexpected end of input")]
    Truncated,
    #[error("integer does not fit in 64 bits")]
    VarintOverflow,
    #[error("value {0} does not fit in memory")]
    ValueTooLarge(u64),
    #[error("unexpected tag {0:#04x}")]
    UnexpectedTag(u8),
    #[error("symbol {index} is out of range for a table of {count} symbols")]
    SymbolOutOfRange { index: usize, count: usize },
    #[error("pattern has {0} runs; the maximum is {}", MAX_SYMBOL_LENGTH)]
    SymbolTooLong(usize),
    #[error("row record with zero repeat count")]
    ZeroRepeat,
    #[error("run ends at {end}, past the mask width {width}")]
    RunOutOfBounds { end: usize, width: usize },
    #[error("pattern runs are empty, overlapping, or adjacent")]
    NonCanonicalRuns,
    #[error("row records cover more than the mask height {0}")]
    TooManyRows(usize),
    #[error("missing row break after the last row")]
    MissingTerminator,
    #[error("{0} unexpected bytes after the last row")]
    TrailingData(usize),
}

#[cfg(test)]
mod tests;
