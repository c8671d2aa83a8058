use super::*;
use crate::mask::MaskArray;
use crate::pool::SharedRowPool;
use crate::runs::{Run, RunList};
use crate::vec2::UVec2;

impl MaskArray {
    /// Loads a mask from an RLE string using a new row pool.
    pub fn from_rle_str(s: &str) -> RleResult<Self> {
        Self::from_rle(&s.parse()?)
    }

    /// Loads a mask from an RLE struct using a new row pool.
    pub fn from_rle(rle: &Rle) -> RleResult<Self> {
        Self::from_rle_with_pool(rle, SharedRowPool::new())
    }

    /// Loads a mask from an RLE struct using an existing row pool.
    ///
    /// Rows past the declared height are ignored, but a row wider than the
    /// declared width is an error.
    pub fn from_rle_with_pool(rle: &Rle, pool: SharedRowPool) -> RleResult<Self> {
        let UVec2 {
            x: width,
            y: height,
        } = rle.header.size;

        let mut rows: Vec<RunList> = vec![];
        let mut current_row: Vec<Run> = vec![];
        let mut x = 0_usize;

        for run in &rle.runs {
            if rows.len() >= height {
                break;
            }
            if run.count == 0 {
                continue;
            }
            match run.item {
                RleItem::Cell(false) => x = x.saturating_add(run.count),
                RleItem::Cell(true) => {
                    let end = x.saturating_add(run.count);
                    if end > width {
                        return Err(RleError::TooBig {
                            row: rows.len(),
                            width,
                        });
                    }
                    current_row.push(Run::new(x, end));
                    x = end;
                }
                RleItem::NextRow => {
                    rows.push(RunList::from_runs(current_row.drain(..)));
                    // Any further rows skipped by the count are empty.
                    let empty_rows = (run.count - 1).min(height - rows.len());
                    rows.extend(std::iter::repeat_with(RunList::new).take(empty_rows));
                    x = 0;
                }
                RleItem::End => break,
            }
        }
        if !current_row.is_empty() && rows.len() < height {
            rows.push(RunList::from_runs(current_row));
        }

        log::debug!(
            "Loaded {}x{} mask from RLE with {} runs",
            width,
            height,
            rle.runs.len(),
        );
        Ok(MaskArray::from_row_fn(width, height, pool, |y| {
            rows.get_mut(y).map(std::mem::take).unwrap_or_default()
        }))
    }

    /// Exports the mask to an RLE struct.
    pub fn to_rle(&self) -> Rle {
        let mut runs = RleRunVec::default();
        for (y, row) in self.iter_rows().enumerate() {
            if y > 0 {
                runs.append(RleItem::NextRow);
            }
            let mut x = 0;
            for run in row.iter() {
                runs.append(RleRun {
                    count: run.start - x,
                    item: RleItem::Cell(false),
                });
                runs.append(RleRun {
                    count: run.len(),
                    item: RleItem::Cell(true),
                });
                x = run.end;
            }
        }
        runs.append(RleItem::End);

        Rle {
            header: RleHeader { size: self.size() },
            runs: runs.into_vec(),
            comments: String::new(),
        }
    }

    /// Exports the mask to an RLE string.
    pub fn to_rle_string(&self) -> String {
        self.to_rle().to_string()
    }
}
