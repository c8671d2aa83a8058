//! Iterator over `UVec2` positions in a `Rect`.

use super::*;

impl IntoIterator for &Rect {
    type Item = UVec2;
    type IntoIter = RectIter;

    /// Returns an iterator over all the cells in the rectangle.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into()
    }
}

/// Iterator over positions in a rectangle, X varying fastest.
#[derive(Debug, Clone)]
pub struct RectIter {
    start: UVec2,
    end: UVec2,
    next: Option<UVec2>,
}
impl From<&Rect> for RectIter {
    #[inline]
    fn from(rect: &Rect) -> Self {
        let start = rect.min();
        let end = rect.max();
        let next = Some(start);
        Self { start, end, next }
    }
}
impl Iterator for RectIter {
    type Item = UVec2;

    #[inline]
    fn next(&mut self) -> Option<UVec2> {
        let ret = self.next;
        if let Some(next) = &mut self.next {
            for &ax in AXES {
                // Increment this axis.
                next[ax] += 1;
                // If this axis overflows ...
                if next[ax] > self.end[ax] {
                    // ... then reset it and increment the next axis.
                    next[ax] = self.start[ax];
                } else {
                    // No overflow; we're done.
                    return ret;
                }
            }
            // We overflowed on every axis, so return `None` forever.
            self.next = None;
        }
        ret
    }
}
