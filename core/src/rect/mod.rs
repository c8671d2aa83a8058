//! Axis-aligned rectangles of cells.

use std::fmt;
use std::ops::{Range, RangeInclusive};

pub mod iter;
mod ops;
#[cfg(test)]
mod tests;

use crate::axis::{Axis, AXES};
use crate::vec2::UVec2;
pub use iter::RectIter;

/// Rectangle of cells with positive area.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Most negative corner.
    start: UVec2,
    /// Size along each axis.
    size: UVec2,
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect({}..{})", self.min(), self.max())
    }
}

impl Rect {
    /// Creates a `Rect` with the given starting position and size.
    ///
    /// # Panics
    ///
    /// This function panics if `size` is zero along either axis.
    #[inline]
    pub fn with_size(start: UVec2, size: UVec2) -> Self {
        assert!(!size.is_degenerate(), "Rect must have positive area");
        Self { start, size }
    }

    /// Creates a `Rect` with the given starting position and size, or `None`
    /// if the size is zero along either axis.
    #[inline]
    pub fn try_with_size(start: UVec2, size: UVec2) -> Option<Self> {
        if size.is_degenerate() {
            None
        } else {
            Some(Self { start, size })
        }
    }

    /// Creates a `Rect` spanning between the given positions (inclusive).
    #[inline]
    pub fn span(a: UVec2, b: UVec2) -> Self {
        let start = a.min(b);
        let end = a.max(b);
        Self {
            start,
            size: end - start + UVec2::repeat(1),
        }
    }

    /// Creates a unit square at the given position.
    #[inline]
    pub fn single_cell(pos: UVec2) -> Self {
        Self {
            start: pos,
            size: UVec2::repeat(1),
        }
    }

    /// Returns the minimum (top-left) corner of the rectangle.
    #[inline]
    pub fn min(&self) -> UVec2 {
        self.start
    }

    /// Returns the maximum (bottom-right) corner of the rectangle, inclusive.
    #[inline]
    pub fn max(&self) -> UVec2 {
        self.start + self.size - UVec2::repeat(1)
    }

    /// Returns a vector of the lengths of the rectangle along each axis.
    #[inline]
    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Returns the length of the rectangle along the given axis.
    #[inline]
    pub fn len(&self, axis: Axis) -> usize {
        self.size[axis]
    }

    /// Returns the number of cells in the rectangle.
    #[inline]
    pub fn count(&self) -> usize {
        self.size.product()
    }

    /// Returns an iterator over all the cells in the rectangle, in row-major
    /// order.
    #[inline]
    pub fn iter(&self) -> RectIter {
        self.into()
    }

    /// Returns a range over all the values of the given axis in the rectangle.
    #[inline]
    pub fn axis_range(&self, axis: Axis) -> RangeInclusive<usize> {
        self.start[axis]..=self.max()[axis]
    }

    /// Returns the half-open range of columns covered by the rectangle.
    #[inline]
    pub fn x_range(&self) -> Range<usize> {
        self.start.x..self.start.x + self.size.x
    }

    /// Returns the half-open range of rows covered by the rectangle.
    #[inline]
    pub fn y_range(&self) -> Range<usize> {
        self.start.y..self.start.y + self.size.y
    }

    /// Returns `true` if the two rectangles intersect.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        // Iff `self` and `other` intersect along both axes, then they truly
        // intersect.
        AXES.iter().all(|&ax| {
            //   `self` is "before" `other`.         `other` is "before" `self`.
            !(self.max()[ax] < other.min()[ax] || other.max()[ax] < self.min()[ax])
        })
    }

    /// Returns the rectangular intersection of two rectangles, or `None` if
    /// they do not intersect.
    #[inline]
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if self.intersects(other) {
            Some(Self::span(
                self.min().max(other.min()),
                self.max().min(other.max()),
            ))
        } else {
            None
        }
    }

    /// Returns the smallest rectangle containing both rectangles.
    #[inline]
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn union(&self, other: &Self) -> Self {
        Self::span(self.min().min(other.min()), self.max().max(other.max()))
    }
}

/// Trait to allow overloading of the `contains()` method.
pub trait CanContain<I> {
    /// Returns `true` if `inner` is "contained" within `self`.
    fn contains(&self, inner: &I) -> bool;
}

impl CanContain<UVec2> for Rect {
    /// Returns `true` if `pos` is contained within the rectangle.
    #[inline]
    fn contains(&self, pos: &UVec2) -> bool {
        let max = self.max();
        AXES.iter()
            .all(|&ax| self.start[ax] <= pos[ax] && pos[ax] <= max[ax])
    }
}
impl CanContain<Self> for Rect {
    /// Returns `true` if `rect` is completely contained within the rectangle;
    /// i.e., the intersection of the two equals `rect`.
    #[inline]
    fn contains(&self, rect: &Self) -> bool {
        self.contains(&rect.min()) && self.contains(&rect.max())
    }
}
