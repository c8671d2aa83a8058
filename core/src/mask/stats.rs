//! Memory usage statistics.

use std::collections::HashSet;
use std::fmt;
use std::mem::size_of;
use std::sync::Arc;

use super::*;
use crate::row::RowKind;

/// Summary of how a mask is stored.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct MaskStats {
    /// Rows with no cells set.
    pub zero_rows: usize,
    /// Rows with every cell set.
    pub one_rows: usize,
    /// Rows stored as a pattern.
    pub pattern_rows: usize,
    /// Distinct patterns used by the mask.
    pub unique_patterns: usize,
    /// Runs stored across all distinct patterns.
    pub stored_runs: usize,
    /// Estimated bytes used by the compact representation.
    pub compact_bytes: usize,
    /// Bytes needed to store the mask as a bitmap.
    pub dense_bytes: usize,
}
impl MaskStats {
    /// Returns how many times smaller the compact representation is than a
    /// bitmap.
    pub fn compression_ratio(&self) -> f64 {
        if self.compact_bytes == 0 {
            return 0.0;
        }
        self.dense_bytes as f64 / self.compact_bytes as f64
    }
}
impl fmt::Display for MaskStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "rows:            {} zeros, {} ones, {} patterns",
            self.zero_rows, self.one_rows, self.pattern_rows,
        )?;
        writeln!(f, "unique patterns: {}", self.unique_patterns)?;
        writeln!(f, "stored runs:     {}", self.stored_runs)?;
        writeln!(f, "compact bytes:   {}", self.compact_bytes)?;
        writeln!(f, "bitmap bytes:    {}", self.dense_bytes)?;
        write!(f, "ratio:           {:.2}x", self.compression_ratio())
    }
}

impl MaskArray {
    /// Returns statistics about the compact storage of this mask.
    ///
    /// Patterns shared with other masks through the pool are counted in full.
    pub fn stats(&self) -> MaskStats {
        let mut ret = MaskStats::default();
        let mut seen: HashSet<*const RunList> = HashSet::new();
        for row in &self.rows {
            match row.kind() {
                RowKind::Zeros => ret.zero_rows += 1,
                RowKind::Ones => ret.one_rows += 1,
                RowKind::Pattern => ret.pattern_rows += 1,
            }
            if let Row::Pattern(p) = row {
                if seen.insert(Arc::as_ptr(p)) {
                    ret.unique_patterns += 1;
                    ret.stored_runs += p.len();
                }
            }
        }
        ret.compact_bytes = size_of::<Self>()
            + self.rows.len() * size_of::<Row>()
            + ret.unique_patterns * size_of::<RunList>()
            + ret.stored_runs * size_of::<Run>();
        ret.dense_bytes = self.size().checked_product().map_or(usize::MAX, |n| {
            n / 8 + (n % 8 != 0) as usize
        });
        ret
    }
}
