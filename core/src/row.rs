//! Compact representation of a single mask row.

use std::borrow::Cow;
use std::sync::Arc;

use crate::pool::RowPool;
use crate::runs::RunList;

/// Kind of a row, matching the page tags of the binary format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// No cells set.
    Zeros,
    /// Every cell set.
    Ones,
    /// Anything else.
    Pattern,
}

/// One row of a mask.
///
/// Rows do not know their own width; the mask that owns them does. `Pattern`
/// rows are never empty and never full.
#[derive(Debug, Clone)]
pub enum Row {
    /// No cells set.
    Zeros,
    /// Every cell set.
    Ones,
    /// Interned run list.
    Pattern(Arc<RunList>),
}
impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Row::Zeros, Row::Zeros) | (Row::Ones, Row::Ones) => true,
            (Row::Pattern(a), Row::Pattern(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }
}
impl Eq for Row {}

impl Row {
    /// Classifies a run list for a row of the given width, interning it in
    /// `pool` if it is neither empty nor full.
    pub fn from_runs(pool: &RowPool, runs: RunList, width: usize) -> Self {
        if runs.is_empty() {
            Row::Zeros
        } else if runs.is_full(width) {
            Row::Ones
        } else {
            Row::Pattern(pool.intern(runs))
        }
    }

    /// Returns the kind of row.
    #[inline]
    pub fn kind(&self) -> RowKind {
        match self {
            Row::Zeros => RowKind::Zeros,
            Row::Ones => RowKind::Ones,
            Row::Pattern(_) => RowKind::Pattern,
        }
    }

    /// Returns the run list for the row.
    pub fn runs(&self, width: usize) -> Cow<'_, RunList> {
        match self {
            Row::Zeros => Cow::Owned(RunList::new()),
            Row::Ones => Cow::Owned(RunList::full(width)),
            Row::Pattern(p) => Cow::Borrowed(p),
        }
    }

    /// Returns whether the cell `x` is set.
    #[inline]
    pub fn get(&self, x: usize) -> bool {
        match self {
            Row::Zeros => false,
            Row::Ones => true,
            Row::Pattern(p) => p.get(x),
        }
    }

    /// Returns the number of set cells.
    #[inline]
    pub fn population(&self, width: usize) -> usize {
        match self {
            Row::Zeros => 0,
            Row::Ones => width,
            Row::Pattern(p) => p.population(),
        }
    }

    /// Returns the same row using `pool`'s instance of the pattern.
    pub fn adopt(&self, pool: &RowPool) -> Self {
        match self {
            Row::Pattern(p) if !pool.owns(p) => Row::Pattern(pool.intern((**p).clone())),
            other => other.clone(),
        }
    }
}
