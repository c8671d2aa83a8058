//! Boolean operations on run lists, using a sweep over run boundaries.

use std::iter::Peekable;

use super::{Run, RunList};

/// Boolean operation applied cell-by-cell to two masks or rows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BoolOp {
    /// Union (`a | b`).
    Or,
    /// Intersection (`a & b`).
    And,
    /// Symmetric difference (`a ^ b`).
    Xor,
    /// Difference (`a & !b`).
    AndNot,
    /// Overwrite with the right-hand side (`b`).
    Replace,
}
impl BoolOp {
    /// Applies the operation to a single pair of cells.
    #[inline]
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            BoolOp::Or => a | b,
            BoolOp::And => a & b,
            BoolOp::Xor => a ^ b,
            BoolOp::AndNot => a & !b,
            BoolOp::Replace => b,
        }
    }
}

/// Iterator over the positions at which a row toggles between clear and set.
///
/// Canonical runs are non-adjacent, so the positions are strictly increasing.
struct Edges<'a> {
    runs: std::slice::Iter<'a, Run>,
    pending_end: Option<usize>,
}
impl<'a> Edges<'a> {
    fn new(runs: &'a RunList) -> Peekable<Self> {
        Self {
            runs: runs.iter(),
            pending_end: None,
        }
        .peekable()
    }
}
impl Iterator for Edges<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if let Some(end) = self.pending_end.take() {
            return Some(end);
        }
        let run = self.runs.next()?;
        self.pending_end = Some(run.end);
        Some(run.start)
    }
}

/// Combines two rows cell-by-cell. The result is canonical.
pub fn combine(a: &RunList, b: &RunList, op: BoolOp) -> RunList {
    let mut edges_a = Edges::new(a);
    let mut edges_b = Edges::new(b);
    let mut in_a = false;
    let mut in_b = false;

    let mut runs = Vec::with_capacity(a.len() + b.len());
    let mut run_start = None;

    loop {
        let pos = match (edges_a.peek(), edges_b.peek()) {
            (Some(&x), Some(&y)) => x.min(y),
            (Some(&x), None) => x,
            (None, Some(&y)) => y,
            (None, None) => break,
        };
        if edges_a.peek() == Some(&pos) {
            edges_a.next();
            in_a = !in_a;
        }
        if edges_b.peek() == Some(&pos) {
            edges_b.next();
            in_b = !in_b;
        }

        match (run_start, op.apply(in_a, in_b)) {
            (None, true) => run_start = Some(pos),
            (Some(start), false) => {
                runs.push(Run::new(start, pos));
                run_start = None;
            }
            _ => (),
        }
    }
    // Every operation maps (false, false) to false, so there is never an open
    // run once both rows are exhausted.
    debug_assert!(run_start.is_none());

    RunList::from_canonical(runs)
}
