use bytes::Buf;
use std::convert::TryFrom;

use super::varint::{get_varint, get_varint_usize};
use super::*;
use crate::mask::MaskArray;
use crate::pool::SharedRowPool;
use crate::row::Row;
use crate::runs::{Run, RunList};

impl MaskArray {
    /// Loads a mask from the binary page format using a new row pool.
    pub fn from_pages(data: &[u8]) -> PagesResult<Self> {
        Self::from_pages_with_pool(data, SharedRowPool::new())
    }

    /// Loads a mask from the binary page format using an existing row pool.
    pub fn from_pages_with_pool(data: &[u8], pool: SharedRowPool) -> PagesResult<Self> {
        let mut buf = data;
        if buf.len() < MAGIC.len() || &buf[..MAGIC.len()] != MAGIC {
            return Err(PagesError::BadMagic);
        }
        buf.advance(MAGIC.len());
        let version = get_u8(&mut buf)?;
        if version != VERSION {
            return Err(PagesError::UnsupportedVersion(version));
        }
        let width = get_varint_usize(&mut buf)?;
        let height = get_varint_usize(&mut buf)?;
        if height > isize::MAX as usize / std::mem::size_of::<Row>() {
            return Err(PagesError::ValueTooLarge(height as u64));
        }

        let mut symbols = vec![];
        if height > 0 && buf.first() == Some(&PAGE_FIRST_ROW_TABLE) {
            buf.advance(1);
            let count = get_varint_usize(&mut buf)?;
            for _ in 0..count {
                let runs = get_pattern(&mut buf, width)?;
                symbols.push(Row::from_runs(&pool, runs, width));
            }
        }

        let mut rows: Vec<Row> = vec![];
        while rows.len() < height {
            let row = match get_u8(&mut buf)? {
                PAGE_ZEROS => Row::Zeros,
                // A row with no cells has nothing to set.
                PAGE_ONES if width == 0 => Row::Zeros,
                PAGE_ONES => Row::Ones,
                PAGE_PATTERN => Row::from_runs(&pool, get_pattern(&mut buf, width)?, width),
                PAGE_FIRST_ROW_TABLE => {
                    return Err(PagesError::UnexpectedTag(PAGE_FIRST_ROW_TABLE));
                }
                tag => {
                    let index = if tag == PAGE_SYMBOL_ESCAPE {
                        let offset = get_varint(&mut buf)?;
                        usize::try_from(offset)
                            .ok()
                            .and_then(|offset| offset.checked_add(SHORT_SYMBOLS))
                            .ok_or(PagesError::ValueTooLarge(offset))?
                    } else {
                        (tag - PAGE_FIRST_SYMBOL_TABLE) as usize
                    };
                    symbols
                        .get(index)
                        .cloned()
                        .ok_or(PagesError::SymbolOutOfRange {
                            index,
                            count: symbols.len(),
                        })?
                }
            };
            let repeat = get_varint(&mut buf)?;
            if repeat == SUBSTITUTE_SKIP {
                return Err(PagesError::ZeroRepeat);
            }
            if repeat > (height - rows.len()) as u64 {
                return Err(PagesError::TooManyRows(height));
            }
            rows.extend(std::iter::repeat(row).take(repeat as usize));
        }

        match buf.first() {
            None => return Err(PagesError::MissingTerminator),
            Some(&PAGE_ROWBREAK) => buf.advance(1),
            Some(_) => return Err(PagesError::TooManyRows(height)),
        }
        if buf.has_remaining() {
            return Err(PagesError::TrailingData(buf.remaining()));
        }

        log::debug!(
            "Loaded {}x{} mask from {} bytes of pages ({} symbols)",
            width,
            height,
            data.len(),
            symbols.len(),
        );
        Ok(MaskArray::from_rows(width, rows, pool))
    }
}

fn get_u8(buf: &mut &[u8]) -> PagesResult<u8> {
    if buf.has_remaining() {
        Ok(buf.get_u8())
    } else {
        Err(PagesError::Truncated)
    }
}

/// Reads a pattern body and checks that its runs are canonical and fit in a
/// row of `width` cells.
fn get_pattern(buf: &mut &[u8], width: usize) -> PagesResult<RunList> {
    let count = get_varint_usize(buf)?;
    if count > MAX_SYMBOL_LENGTH {
        return Err(PagesError::SymbolTooLong(count));
    }
    // Each run takes at least two bytes.
    let mut runs = Vec::with_capacity(count.min(buf.remaining() / 2));
    let mut x = 0_usize;
    for i in 0..count {
        let gap = get_varint_usize(buf)?;
        let len = get_varint_usize(buf)?;
        if len == 0 || (i > 0 && gap == 0) {
            return Err(PagesError::NonCanonicalRuns);
        }
        let end = x
            .checked_add(gap)
            .and_then(|start| start.checked_add(len))
            .unwrap_or(usize::MAX);
        if end > width {
            return Err(PagesError::RunOutOfBounds { end, width });
        }
        runs.push(Run::new(end - len, end));
        x = end;
    }
    Ok(RunList::from_canonical(runs))
}
