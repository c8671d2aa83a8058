//! Translation of `Rect`s by `UVec2` offsets.

use std::ops::*;

use super::*;

impl Add<UVec2> for Rect {
    type Output = Self;

    #[inline]
    fn add(self, offset: UVec2) -> Self {
        Self {
            start: self.start + offset,
            size: self.size,
        }
    }
}
impl AddAssign<UVec2> for Rect {
    #[inline]
    fn add_assign(&mut self, offset: UVec2) {
        self.start += offset
    }
}
impl Sub<UVec2> for Rect {
    type Output = Self;

    /// Moves the rectangle towards the origin.
    ///
    /// # Panics
    ///
    /// This operation panics if the minimum corner would become negative.
    #[inline]
    fn sub(self, offset: UVec2) -> Self {
        Self {
            start: self.start - offset,
            size: self.size,
        }
    }
}
impl SubAssign<UVec2> for Rect {
    #[inline]
    fn sub_assign(&mut self, offset: UVec2) {
        self.start -= offset
    }
}
