//! Cropping, pasting, and translating masks.

use super::*;
use crate::rect::CanContain;
use crate::runs::{self, BoolOp};

impl MaskArray {
    /// Returns the part of the mask inside `rect` as a new mask of the same
    /// size as `rect`, sharing this mask's row pool.
    pub fn crop(&self, rect: &Rect) -> MaskResult<Self> {
        if !self.rect().map_or(false, |r| r.contains(rect)) {
            return Err(MaskError::RectOutOfBounds {
                rect: *rect,
                size: self.size(),
            });
        }
        let width = rect.len(crate::axis::X);
        let rows = self.rows[rect.y_range()]
            .iter()
            .map(|row| match row {
                Row::Zeros => Row::Zeros,
                Row::Ones => Row::Ones,
                Row::Pattern(p) => Row::from_runs(&self.pool, p.crop(rect.x_range()), width),
            })
            .collect();
        Ok(Self {
            width,
            height: rect.len(crate::axis::Y),
            rows,
            pool: self.pool.clone(),
        })
    }

    /// Combines `src` into this mask with its top-left corner at `offset`.
    /// Cells outside the pasted region are unchanged, and parts of `src` that
    /// fall outside this mask are dropped.
    pub fn paste(&mut self, src: &MaskArray, offset: UVec2, op: BoolOp) {
        let region = match offset.checked_add(src.size()) {
            Some(end) if offset.all_lt(self.size()) => {
                let end = end.min(self.size());
                offset.x..end.x
            }
            // Nothing to paste.
            _ => return,
        };
        if region.start == region.end {
            return;
        }
        let region_runs = RunList::single(region.clone());
        let x_offset = offset.x as isize;

        for (src_y, src_row) in src.rows.iter().enumerate() {
            let y = offset.y + src_y;
            if y >= self.height {
                break;
            }
            let src_runs = src_row.runs(src.width).shifted(x_offset, region.end);
            let new_runs = {
                let dest_runs = self.rows[y].runs(self.width);
                let outside = runs::combine(&dest_runs, &region_runs, BoolOp::AndNot);
                let inside = runs::combine(
                    &runs::combine(&dest_runs, &region_runs, BoolOp::And),
                    &src_runs,
                    op,
                );
                runs::combine(&outside, &inside, BoolOp::Or)
            };
            self.rows[y] = self.make_row(new_runs);
        }
    }

    /// Returns the mask moved by `(dx, dy)` cells. Cells moved outside the
    /// mask are dropped and vacated cells are cleared.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn translated(&self, dx: isize, dy: isize) -> Self {
        let mut rows = vec![Row::Zeros; self.height];
        for (y, row) in self.rows.iter().enumerate() {
            let new_y = match (y as isize).checked_add(dy) {
                Some(new_y) if new_y >= 0 && (new_y as usize) < self.height => new_y as usize,
                _ => continue,
            };
            rows[new_y] = match row {
                Row::Zeros => Row::Zeros,
                _ if dx == 0 => row.clone(),
                _ => self.make_row(row.runs(self.width).shifted(dx, self.width)),
            };
        }
        Self {
            width: self.width,
            height: self.height,
            rows,
            pool: self.pool.clone(),
        }
    }
}
