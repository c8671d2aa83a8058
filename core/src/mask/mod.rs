//! Compact binary masks.
//!
//! A `MaskArray` stores a `width` by `height` binary mask as one `Row` per
//! scanline. Rows that are entirely clear or entirely set take no storage
//! beyond their tag, and every other row points into a shared `RowPool`, so
//! repeated rows (within one mask or across many masks) are stored once.
//!
//! All operations work on the run lists directly; nothing ever expands a mask
//! to one value per cell except `to_dense()`.

use itertools::Itertools;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

mod geometry;
mod ops;
mod query;
mod stats;

pub use query::MaskCover;
pub use stats::MaskStats;

use crate::dense::DenseMask;
use crate::pool::SharedRowPool;
use crate::rect::Rect;
use crate::row::Row;
use crate::runs::{Run, RunList};
use crate::vec2::UVec2;

/// Result type returned by fallible mask operations.
pub type MaskResult<T> = Result<T, MaskError>;

/// Error produced by a mask operation.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum MaskError {
    #[error("mask sizes differ: {0} vs {1}")]
    ShapeMismatch(UVec2, UVec2),
    #[error("position {pos} is outside mask of size {size}")]
    OutOfBounds { pos: UVec2, size: UVec2 },
    #[error("{rect} is outside mask of size {size}")]
    RectOutOfBounds { rect: Rect, size: UVec2 },
    #[error("expected {expected} cells; got {got}")]
    DataLength { expected: usize, got: usize },
    #[error("mask of size {0} is too large")]
    TooBig(UVec2),
}

/// Binary mask stored as run-length encoded, interned rows.
#[derive(Debug, Clone)]
pub struct MaskArray {
    width: usize,
    height: usize,
    rows: Vec<Row>,
    pool: SharedRowPool,
}

impl PartialEq for MaskArray {
    /// Masks are equal if they have the same size and the same cells,
    /// regardless of which pool they use.
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.rows == other.rows
    }
}
impl Eq for MaskArray {}

impl fmt::Display for MaskArray {
    /// Renders the mask as text, with `#` for set cells and `.` for clear
    /// ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render('#', '.'))
    }
}

impl MaskArray {
    /// Creates a mask with no cells set, using a new row pool.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_pool(width, height, SharedRowPool::new())
    }
    /// Creates a mask with no cells set, using an existing row pool.
    pub fn with_pool(width: usize, height: usize, pool: SharedRowPool) -> Self {
        Self {
            width,
            height,
            rows: vec![Row::Zeros; height],
            pool,
        }
    }
    /// Creates a mask with every cell set, using a new row pool.
    pub fn full(width: usize, height: usize) -> Self {
        Self::full_with_pool(width, height, SharedRowPool::new())
    }
    /// Creates a mask with every cell set, using an existing row pool.
    pub fn full_with_pool(width: usize, height: usize, pool: SharedRowPool) -> Self {
        let row = if width == 0 { Row::Zeros } else { Row::Ones };
        Self {
            width,
            height,
            rows: vec![row; height],
            pool,
        }
    }

    /// Creates a mask with only the cells in `rect` set. Parts of `rect`
    /// outside the mask are ignored.
    pub fn from_rect(width: usize, height: usize, rect: Rect) -> Self {
        let mut ret = Self::new(width, height);
        ret.fill_rect(rect, true);
        ret
    }

    /// Creates a mask by evaluating `f` at every cell.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(UVec2) -> bool) -> Self {
        Self::from_row_fn(width, height, SharedRowPool::new(), |y| {
            let cells = (0..width).map(|x| f(UVec2::new(x, y))).collect_vec();
            RunList::from_bools(&cells)
        })
    }

    /// Creates a mask from a row-major slice of booleans.
    pub fn from_bools(width: usize, height: usize, cells: &[bool]) -> MaskResult<Self> {
        let size = UVec2::new(width, height);
        let expected = size.checked_product().ok_or(MaskError::TooBig(size))?;
        if cells.len() != expected {
            return Err(MaskError::DataLength {
                expected,
                got: cells.len(),
            });
        }
        Ok(Self::from_row_fn(width, height, SharedRowPool::new(), |y| {
            RunList::from_bools(&cells[y * width..(y + 1) * width])
        }))
    }

    /// Creates a mask from a dense array of cells.
    pub fn from_dense(dense: &DenseMask) -> Self {
        Self::from_dense_with_pool(dense, SharedRowPool::new())
    }
    /// Creates a mask from a dense array of cells, using an existing row pool.
    pub fn from_dense_with_pool(dense: &DenseMask, pool: SharedRowPool) -> Self {
        let UVec2 { x: width, y: height } = *dense.size();
        Self::from_row_fn(width, height, pool, |y| RunList::from_bools(dense.row(y)))
    }

    /// Creates a mask from a function returning the runs of each row.
    ///
    /// Runs past `width` are clipped.
    pub fn from_row_fn(
        width: usize,
        height: usize,
        pool: SharedRowPool,
        mut row_runs: impl FnMut(usize) -> RunList,
    ) -> Self {
        let rows = (0..height)
            .map(|y| {
                let runs = row_runs(y);
                let runs = match runs.last() {
                    Some(last) if last >= width => runs.crop(0..width),
                    _ => runs,
                };
                Row::from_runs(&pool, runs, width)
            })
            .collect();
        Self {
            width,
            height,
            rows,
            pool,
        }
    }

    /// Converts the mask into a dense array with one `bool` per cell.
    ///
    /// # Panics
    ///
    /// This method panics if the array would be too large to fit in memory.
    pub fn to_dense(&self) -> DenseMask {
        let mut data = Vec::with_capacity(self.size().product());
        for row in &self.rows {
            data.extend(row.runs(self.width).to_bools(self.width));
        }
        DenseMask::from_flat_slice(self.size(), data)
    }

    /// Returns the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    /// Returns the size of the mask.
    #[inline]
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }
    /// Returns the rectangle covered by the mask, or `None` if it has zero
    /// area.
    #[inline]
    pub fn rect(&self) -> Option<Rect> {
        Rect::try_with_size(UVec2::origin(), self.size())
    }
    /// Returns the pool used to store row patterns.
    #[inline]
    pub fn pool(&self) -> &SharedRowPool {
        &self.pool
    }
    /// Returns the compact rows.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the runs of row `y`, or `None` if it is outside the mask.
    pub fn row_runs(&self, y: usize) -> Option<Cow<'_, RunList>> {
        self.rows.get(y).map(|row| row.runs(self.width))
    }
    /// Returns an iterator over the runs of every row, from top to bottom.
    pub fn iter_rows(&self) -> impl '_ + Iterator<Item = Cow<'_, RunList>> {
        self.rows.iter().map(move |row| row.runs(self.width))
    }
    /// Returns an iterator over every run in the mask, with its row.
    pub fn iter_runs(&self) -> impl '_ + Iterator<Item = (usize, Run)> {
        self.iter_rows()
            .enumerate()
            .flat_map(|(y, runs)| runs.iter().map(move |&r| (y, r)).collect_vec())
    }

    /// Returns whether the cell at `pos` is set. Cells outside the mask are
    /// never set.
    #[inline]
    pub fn get_cell(&self, pos: UVec2) -> bool {
        pos.x < self.width && self.rows.get(pos.y).map_or(false, |row| row.get(pos.x))
    }

    /// Sets or clears the cell at `pos`.
    pub fn set_cell(&mut self, pos: UVec2, value: bool) -> MaskResult<()> {
        if !pos.all_lt(self.size()) {
            return Err(MaskError::OutOfBounds {
                pos,
                size: self.size(),
            });
        }
        if self.get_cell(pos) != value {
            let mut runs = self.rows[pos.y].runs(self.width).into_owned();
            runs.set(pos.x, value);
            self.rows[pos.y] = self.make_row(runs);
        }
        Ok(())
    }

    /// Sets or clears every cell in `rect`. Parts of `rect` outside the mask
    /// are ignored.
    pub fn fill_rect(&mut self, rect: Rect, value: bool) {
        let rect = match self.rect().and_then(|r| r.intersection(&rect)) {
            Some(r) => r,
            None => return,
        };
        for y in rect.y_range() {
            let mut runs = self.rows[y].runs(self.width).into_owned();
            runs.fill(rect.x_range(), value);
            self.rows[y] = self.make_row(runs);
        }
    }

    /// Renders the mask as text, one line per row.
    pub fn render(&self, set: char, clear: char) -> String {
        let mut ret = String::with_capacity((self.width + 1) * self.height);
        for row in &self.rows {
            let runs = row.runs(self.width);
            let mut x = 0;
            for run in runs.iter() {
                ret.extend(std::iter::repeat(clear).take(run.start - x));
                ret.extend(std::iter::repeat(set).take(run.len()));
                x = run.end;
            }
            ret.extend(std::iter::repeat(clear).take(self.width - x));
            ret.push('\n');
        }
        ret
    }

    /// Creates a mask from rows that were already classified and interned in
    /// `pool`.
    pub(crate) fn from_rows(width: usize, rows: Vec<Row>, pool: SharedRowPool) -> Self {
        Self {
            width,
            height: rows.len(),
            rows,
            pool,
        }
    }

    /// Classifies and interns a run list for a row of this mask.
    fn make_row(&self, runs: RunList) -> Row {
        Row::from_runs(&self.pool, runs, self.width)
    }

    /// Returns an error if `other` does not have the same size as `self`.
    fn check_same_size(&self, other: &Self) -> MaskResult<()> {
        if self.size() == other.size() {
            Ok(())
        } else {
            Err(MaskError::ShapeMismatch(self.size(), other.size()))
        }
    }
}
