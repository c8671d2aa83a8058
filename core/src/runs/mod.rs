//! Runs of set cells within a single mask row.
//!
//! A row is stored as a `RunList`: a sorted list of half-open intervals that
//! are non-empty, non-overlapping, and non-adjacent. This canonical form means
//! that two rows with the same cells always have identical run lists, which is
//! what lets the row pool deduplicate them by hashing.

use itertools::Itertools;
use std::fmt;
use std::ops::Range;

mod ops;

pub use ops::{combine, BoolOp};

/// Half-open interval `[start, end)` of set cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Run {
    /// First set cell.
    pub start: usize,
    /// One past the last set cell.
    pub end: usize,
}
impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
impl From<Range<usize>> for Run {
    #[inline]
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}
impl Run {
    /// Creates a run covering `start..end`.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
    /// Returns the number of cells in the run.
    #[inline]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }
    /// Returns `true` if the run contains no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.end <= self.start
    }
    /// Returns `true` if the run contains the cell `x`.
    #[inline]
    pub fn contains(self, x: usize) -> bool {
        self.start <= x && x < self.end
    }
    /// Returns the run as a range.
    #[inline]
    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

/// Canonical list of runs for one row.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct RunList(Vec<Run>);

impl fmt::Display for RunList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

impl RunList {
    /// Creates a row with no cells set.
    #[inline]
    pub fn new() -> Self {
        Self(vec![])
    }
    /// Creates a row with every cell in `0..width` set.
    #[inline]
    pub fn full(width: usize) -> Self {
        Self::single(0..width)
    }
    /// Creates a row with the cells in `range` set.
    #[inline]
    pub fn single(range: Range<usize>) -> Self {
        if range.start < range.end {
            Self(vec![range.into()])
        } else {
            Self::new()
        }
    }

    /// Creates a row from arbitrary runs, which may be unsorted, empty,
    /// overlapping, or adjacent.
    pub fn from_runs(runs: impl IntoIterator<Item = Run>) -> Self {
        let mut runs = runs.into_iter().filter(|r| !r.is_empty()).collect_vec();
        runs.sort_unstable();
        let mut ret: Vec<Run> = Vec::with_capacity(runs.len());
        for run in runs {
            match ret.last_mut() {
                // Overlapping or touching; extend the previous run.
                Some(last) if run.start <= last.end => last.end = last.end.max(run.end),
                _ => ret.push(run),
            }
        }
        Self(ret)
    }
    /// Wraps runs that are already known to be canonical.
    pub(crate) fn from_canonical(runs: Vec<Run>) -> Self {
        let ret = Self(runs);
        debug_assert!(ret.is_canonical(), "non-canonical runs: {}", ret);
        ret
    }

    /// Creates a row from a slice of booleans, where index `i` is cell `i`.
    pub fn from_bools(cells: &[bool]) -> Self {
        let mut runs = vec![];
        let mut start = None;
        for (x, &cell) in cells.iter().enumerate() {
            match (start, cell) {
                (None, true) => start = Some(x),
                (Some(s), false) => {
                    runs.push(Run::new(s, x));
                    start = None;
                }
                _ => (),
            }
        }
        if let Some(s) = start {
            runs.push(Run::new(s, cells.len()));
        }
        Self(runs)
    }
    /// Returns a vector of `width` booleans describing the row. Cells at or
    /// past `width` are dropped.
    pub fn to_bools(&self, width: usize) -> Vec<bool> {
        let mut ret = vec![false; width];
        for run in &self.0 {
            let end = run.end.min(width);
            if run.start < end {
                ret[run.start..end].iter_mut().for_each(|cell| *cell = true);
            }
        }
        ret
    }

    /// Returns the runs as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Run] {
        &self.0
    }
    /// Returns an iterator over the runs.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Run> {
        self.0.iter()
    }
    /// Returns the number of runs (not cells).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Returns `true` if no cells are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Returns `true` if exactly the cells `0..width` are set.
    #[inline]
    pub fn is_full(&self, width: usize) -> bool {
        width > 0 && self.0.as_slice() == [Run::new(0, width)]
    }
    /// Returns the number of set cells.
    #[inline]
    pub fn population(&self) -> usize {
        self.0.iter().map(|r| r.len()).sum()
    }
    /// Returns the first set cell.
    #[inline]
    pub fn first(&self) -> Option<usize> {
        self.0.first().map(|r| r.start)
    }
    /// Returns the last set cell (inclusive).
    #[inline]
    pub fn last(&self) -> Option<usize> {
        self.0.last().map(|r| r.end - 1)
    }

    /// Returns whether the cell `x` is set.
    pub fn get(&self, x: usize) -> bool {
        let i = self.0.partition_point(|r| r.end <= x);
        self.0.get(i).map_or(false, |r| r.contains(x))
    }
    /// Sets or clears the cell `x`.
    pub fn set(&mut self, x: usize, value: bool) {
        if self.get(x) != value {
            self.fill(x..x + 1, value);
        }
    }
    /// Sets or clears every cell in `range`.
    pub fn fill(&mut self, range: Range<usize>, value: bool) {
        let op = if value { BoolOp::Or } else { BoolOp::AndNot };
        *self = combine(self, &Self::single(range), op);
    }

    /// Returns the row with every cell in `0..width` inverted.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn complement(&self, width: usize) -> Self {
        combine(&Self::full(width), self, BoolOp::AndNot)
    }

    /// Returns the cells within `range`, shifted so that `range.start` becomes
    /// cell 0.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn crop(&self, range: Range<usize>) -> Self {
        let first = self.0.partition_point(|r| r.end <= range.start);
        Self(
            self.0[first..]
                .iter()
                .take_while(|r| r.start < range.end)
                .map(|r| {
                    Run::new(
                        r.start.max(range.start) - range.start,
                        r.end.min(range.end) - range.start,
                    )
                })
                .collect(),
        )
    }

    /// Returns the row moved by `offset` cells, dropping any cells that land
    /// outside `0..width`.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn shifted(&self, offset: isize, width: usize) -> Self {
        let shift = |x: usize| -> usize {
            if offset < 0 {
                x.saturating_sub(offset.unsigned_abs())
            } else {
                x.saturating_add(offset as usize).min(width)
            }
        };
        Self(
            self.0
                .iter()
                .map(|r| Run::new(shift(r.start), shift(r.end).min(width)))
                .filter(|r| !r.is_empty())
                .collect(),
        )
    }

    /// Returns `true` if every cell set in `self` is also set in `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        let mut others = other.0.iter().peekable();
        'runs: for run in &self.0 {
            while let Some(o) = others.peek() {
                if o.end <= run.start {
                    others.next();
                } else if o.start <= run.start && run.end <= o.end {
                    // Runs are non-adjacent, so a single run of `other` must
                    // cover all of `run`.
                    continue 'runs;
                } else {
                    return false;
                }
            }
            return false;
        }
        true
    }
    /// Returns `true` if any cell is set in both `self` and `other`.
    pub fn intersects(&self, other: &Self) -> bool {
        let (mut i, mut j) = (0, 0);
        while let (Some(a), Some(b)) = (self.0.get(i), other.0.get(j)) {
            if a.start < b.end && b.start < a.end {
                return true;
            }
            if a.end <= b.end {
                i += 1;
            } else {
                j += 1;
            }
        }
        false
    }

    /// Returns `true` if the runs are sorted, non-empty, non-overlapping, and
    /// non-adjacent.
    pub fn is_canonical(&self) -> bool {
        self.0.iter().all(|r| !r.is_empty())
            && self.0.iter().tuple_windows().all(|(a, b)| a.end < b.start)
    }
}

impl<'a> IntoIterator for &'a RunList {
    type Item = &'a Run;
    type IntoIter = std::slice::Iter<'a, Run>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
