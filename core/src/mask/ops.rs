//! Set algebra on masks.

use std::ops::{BitAnd, BitOr, BitXor, Not, Sub};

use super::*;
use crate::runs::{self, BoolOp};

impl MaskArray {
    /// Combines two masks of the same size cell-by-cell. The result uses
    /// `self`'s row pool.
    pub fn combine(&self, other: &Self, op: BoolOp) -> MaskResult<Self> {
        self.check_same_size(other)?;
        let same_pool = self.pool.ptr_eq(&other.pool);
        let rows = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| self.combine_rows(a, b, op, same_pool))
            .collect();
        Ok(Self {
            width: self.width,
            height: self.height,
            rows,
            pool: self.pool.clone(),
        })
    }

    fn combine_rows(&self, a: &Row, b: &Row, op: BoolOp, same_pool: bool) -> Row {
        use BoolOp::*;

        // `a` always comes from `self`, but `b` may need to be moved into
        // `self`'s pool.
        let adopt_b = || if same_pool { b.clone() } else { b.adopt(&self.pool) };

        match (op, a, b) {
            (Replace, _, _) => adopt_b(),

            (Or, Row::Ones, _) | (Or, _, Row::Ones) => Row::Ones,
            (Or, _, Row::Zeros) => a.clone(),
            (Or, Row::Zeros, _) => adopt_b(),

            (And, Row::Zeros, _) | (And, _, Row::Zeros) => Row::Zeros,
            (And, _, Row::Ones) => a.clone(),
            (And, Row::Ones, _) => adopt_b(),

            (Xor, _, Row::Zeros) => a.clone(),
            (Xor, Row::Zeros, _) => adopt_b(),

            (AndNot, Row::Zeros, _) | (AndNot, _, Row::Ones) => Row::Zeros,
            (AndNot, _, Row::Zeros) => a.clone(),

            _ => self.make_row(runs::combine(
                &a.runs(self.width),
                &b.runs(self.width),
                op,
            )),
        }
    }

    /// Returns the cells set in either mask.
    pub fn union(&self, other: &Self) -> MaskResult<Self> {
        self.combine(other, BoolOp::Or)
    }
    /// Returns the cells set in both masks.
    pub fn intersection(&self, other: &Self) -> MaskResult<Self> {
        self.combine(other, BoolOp::And)
    }
    /// Returns the cells set in `self` but not in `other`.
    pub fn difference(&self, other: &Self) -> MaskResult<Self> {
        self.combine(other, BoolOp::AndNot)
    }
    /// Returns the cells set in exactly one of the masks.
    pub fn symmetric_difference(&self, other: &Self) -> MaskResult<Self> {
        self.combine(other, BoolOp::Xor)
    }

    /// Returns the mask with every cell inverted.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn complement(&self) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| match row {
                Row::Zeros if self.width > 0 => Row::Ones,
                Row::Zeros => Row::Zeros,
                Row::Ones => Row::Zeros,
                Row::Pattern(p) => self.make_row(p.complement(self.width)),
            })
            .collect();
        Self {
            width: self.width,
            height: self.height,
            rows,
            pool: self.pool.clone(),
        }
    }
}

macro_rules! impl_mask_bin_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait for &MaskArray {
            type Output = MaskArray;

            /// # Panics
            ///
            /// This operation panics if the masks are not the same size.
            fn $method(self, other: &MaskArray) -> MaskArray {
                match self.combine(other, $op) {
                    Ok(ret) => ret,
                    Err(e) => panic!("{}", e),
                }
            }
        }
    };
}
impl_mask_bin_op!(BitOr, bitor, BoolOp::Or);
impl_mask_bin_op!(BitAnd, bitand, BoolOp::And);
impl_mask_bin_op!(BitXor, bitxor, BoolOp::Xor);
impl_mask_bin_op!(Sub, sub, BoolOp::AndNot);

impl Not for &MaskArray {
    type Output = MaskArray;

    fn not(self) -> MaskArray {
        self.complement()
    }
}
