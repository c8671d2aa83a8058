//! Unsigned 2D cell coordinates.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign};

use crate::axis::{Axis, AXES};

/// Position or size in a mask, measured in cells.
///
/// Row-major order is used everywhere: X is the column and Y is the row, with
/// row 0 at the top.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct UVec2 {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl fmt::Display for UVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl From<(usize, usize)> for UVec2 {
    #[inline]
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}
impl From<[usize; 2]> for UVec2 {
    #[inline]
    fn from([x, y]: [usize; 2]) -> Self {
        Self { x, y }
    }
}

impl UVec2 {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
    /// Returns the zero vector.
    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }
    /// Returns a vector with the same value along both axes.
    #[inline]
    pub const fn repeat(value: usize) -> Self {
        Self { x: value, y: value }
    }
    /// Creates a vector by evaluating `f` for each axis.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(Axis) -> usize) -> Self {
        Self {
            x: f(Axis::X),
            y: f(Axis::Y),
        }
    }

    /// Returns `x * y`, or `None` if that overflows.
    #[inline]
    pub fn checked_product(self) -> Option<usize> {
        self.x.checked_mul(self.y)
    }
    /// Returns `x * y`.
    ///
    /// # Panics
    ///
    /// This method panics if the product overflows.
    #[inline]
    pub fn product(self) -> usize {
        self.checked_product().expect("UVec2 product overflowed")
    }
    /// Returns `true` if either component is zero.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.x == 0 || self.y == 0
    }

    /// Returns the componentwise minimum of two vectors.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_fn(|ax| std::cmp::min(self[ax], other[ax]))
    }
    /// Returns the componentwise maximum of two vectors.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_fn(|ax| std::cmp::max(self[ax], other[ax]))
    }
    /// Returns `true` if every component is strictly less than the
    /// corresponding component of `other`.
    #[inline]
    pub fn all_lt(self, other: Self) -> bool {
        AXES.iter().all(|&ax| self[ax] < other[ax])
    }
    /// Componentwise checked addition.
    #[inline]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(other.x)?,
            y: self.y.checked_add(other.y)?,
        })
    }
}

impl Index<Axis> for UVec2 {
    type Output = usize;

    #[inline]
    fn index(&self, axis: Axis) -> &usize {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}
impl IndexMut<Axis> for UVec2 {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut usize {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}

impl Add for UVec2 {
    type Output = Self;

    #[inline]
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}
impl AddAssign for UVec2 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}
impl Sub for UVec2 {
    type Output = Self;

    #[inline]
    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}
impl SubAssign for UVec2 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}
