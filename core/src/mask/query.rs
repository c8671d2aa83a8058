//! Bounding and containment queries.

use super::*;
use crate::rect::CanContain;

/// How much of a region a mask covers.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum MaskCover {
    None,
    Partial,
    Full,
}

impl MaskArray {
    /// Returns the number of set cells.
    pub fn population(&self) -> usize {
        self.rows.iter().map(|row| row.population(self.width)).sum()
    }
    /// Returns `true` if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| *row == Row::Zeros)
    }
    /// Returns `true` if every cell is set.
    pub fn is_full(&self) -> bool {
        self.width == 0 || self.rows.iter().all(|row| *row == Row::Ones)
    }

    /// Returns the smallest rectangle containing every set cell, or `None` if
    /// the mask is empty.
    pub fn bounding_rect(&self) -> Option<Rect> {
        let is_set = |row: &Row| *row != Row::Zeros;
        let min_y = self.rows.iter().position(is_set)?;
        let max_y = self.rows.iter().rposition(is_set)?;

        let mut min_x = usize::MAX;
        let mut max_x = 0;
        for row in &self.rows[min_y..=max_y] {
            let runs = row.runs(self.width);
            if let (Some(first), Some(last)) = (runs.first(), runs.last()) {
                min_x = min_x.min(first);
                max_x = max_x.max(last);
            }
        }
        Some(Rect::span(
            UVec2::new(min_x, min_y),
            UVec2::new(max_x, max_y),
        ))
    }

    /// Returns `true` if every cell set in `other` is also set in `self`.
    pub fn contains(&self, other: &Self) -> MaskResult<bool> {
        self.check_same_size(other)?;
        Ok(self.rows.iter().zip(&other.rows).all(|(a, b)| match (a, b) {
            (Row::Ones, _) | (_, Row::Zeros) => true,
            (Row::Zeros, _) => false,
            _ => b.runs(self.width).is_subset_of(&a.runs(self.width)),
        }))
    }

    /// Returns `true` if any cell is set in both masks.
    pub fn overlaps(&self, other: &Self) -> MaskResult<bool> {
        self.check_same_size(other)?;
        Ok(self.rows.iter().zip(&other.rows).any(|(a, b)| match (a, b) {
            (Row::Zeros, _) | (_, Row::Zeros) => false,
            (Row::Ones, _) | (_, Row::Ones) => true,
            (Row::Pattern(p), Row::Pattern(q)) => p.intersects(q),
        }))
    }

    /// Returns how much of `rect` is covered by set cells. Parts of `rect`
    /// outside the mask count as uncovered.
    pub fn rect_cover(&self, rect: &Rect) -> MaskCover {
        let clipped = match self.rect().and_then(|r| r.intersection(rect)) {
            Some(r) => r,
            None => return MaskCover::None,
        };
        let covered: usize = clipped
            .y_range()
            .map(|y| match &self.rows[y] {
                Row::Zeros => 0,
                Row::Ones => clipped.len(crate::axis::X),
                Row::Pattern(p) => p.crop(clipped.x_range()).population(),
            })
            .sum();

        if covered == 0 {
            MaskCover::None
        } else if self.rect().map_or(false, |r| r.contains(rect)) && covered == clipped.count() {
            MaskCover::Full
        } else {
            MaskCover::Partial
        }
    }
}
