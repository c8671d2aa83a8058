//! Dense masks with one `bool` per cell.
//!
//! This is the baseline representation that `MaskArray` is compared against,
//! and the easiest way to get cells into or out of one.

use itertools::Itertools;
use std::ops::{Index, IndexMut};

use crate::rect::Rect;
use crate::vec2::UVec2;

/// Row-major array of cells.
///
/// The minimum coordinate of the array is always 0 along both axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMask {
    size: UVec2,
    data: Box<[bool]>,
}

impl Index<UVec2> for DenseMask {
    type Output = bool;

    #[inline]
    fn index(&self, pos: UVec2) -> &bool {
        &self.data[self.flatten_idx(pos)]
    }
}
impl IndexMut<UVec2> for DenseMask {
    #[inline]
    fn index_mut(&mut self, pos: UVec2) -> &mut bool {
        let idx = self.flatten_idx(pos);
        &mut self.data[idx]
    }
}

impl DenseMask {
    /// Creates a dense mask with no cells set.
    ///
    /// # Panics
    ///
    /// This function panics if the array would be too large to fit in memory.
    #[inline]
    pub fn new(size: UVec2) -> Self {
        Self {
            size,
            data: vec![false; size.product()].into_boxed_slice(),
        }
    }

    /// Creates a dense mask from a flat row-major vector.
    ///
    /// # Panics
    ///
    /// This function panics if the length of `data` does not match `size`.
    #[inline]
    pub fn from_flat_slice(size: UVec2, data: impl Into<Box<[bool]>>) -> Self {
        let data = data.into();
        assert_eq!(size.product(), data.len(), "Wrong size for DenseMask");
        Self { size, data }
    }

    /// Creates a dense mask by evaluating `f` at every cell.
    pub fn from_fn(size: UVec2, f: impl FnMut(UVec2) -> bool) -> Self {
        let data = match Rect::try_with_size(UVec2::origin(), size) {
            Some(rect) => rect.iter().map(f).collect_vec(),
            None => vec![],
        };
        Self::from_flat_slice(size, data)
    }

    /// Returns the flat data behind the array.
    #[inline]
    pub fn into_flat_slice(self) -> Box<[bool]> {
        self.data
    }

    /// Returns the size of the array along each axis.
    #[inline]
    pub fn size(&self) -> &UVec2 {
        &self.size
    }

    /// Returns the rectangular bounds of the array, or `None` if it has zero
    /// area.
    #[inline]
    pub fn rect(&self) -> Option<Rect> {
        Rect::try_with_size(UVec2::origin(), self.size)
    }

    /// Returns the cells of row `y`.
    ///
    /// # Panics
    ///
    /// This method panics if `y` is out of bounds.
    #[inline]
    pub fn row(&self, y: usize) -> &[bool] {
        assert!(y < self.size.y, "Row out of bounds for DenseMask");
        &self.data[y * self.size.x..(y + 1) * self.size.x]
    }

    /// Returns the number of set cells.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.data.iter().filter(|&&cell| cell).count()
    }

    /// Returns an iterator over all the cells in the array, enumerated by
    /// their positions.
    #[inline]
    pub fn iter_enumerated(&self) -> impl '_ + Iterator<Item = (UVec2, bool)> {
        let size = self.size;
        self.data
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (unflatten_idx(size, idx), cell))
    }

    /// Returns the index into `data` corresponding to a position.
    fn flatten_idx(&self, pos: UVec2) -> usize {
        flatten_idx(self.size, pos)
    }
}

/// Converts a "flattened" array index into a position for an array with the
/// given size.
fn unflatten_idx(size: UVec2, idx: usize) -> UVec2 {
    assert!(idx < size.product());
    UVec2::new(idx % size.x, idx / size.x)
}

/// Converts a position into a "flattened" array index for an array with the
/// given size.
fn flatten_idx(size: UVec2, pos: UVec2) -> usize {
    assert!(pos.all_lt(size), "Position out of bounds for DenseMask");
    pos.y * size.x + pos.x
}
