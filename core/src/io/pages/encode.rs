use bytes::{BufMut, BytesMut};
use itertools::Itertools;
use std::collections::HashMap;

use super::varint::put_varint;
use super::*;
use crate::mask::MaskArray;
use crate::pool::RowHasher;
use crate::row::Row;
use crate::runs::RunList;

impl MaskArray {
    /// Exports the mask to the binary page format.
    ///
    /// Patterns used by at least `MIN_OCCURRENCES` rows are written once in
    /// the symbol table; consecutive identical rows share one record.
    pub fn to_pages(&self) -> PagesResult<Vec<u8>> {
        let mut buf = BytesMut::with_capacity(CHUNK_INCREMENT);
        buf.put_slice(MAGIC);
        buf.put_u8(VERSION);
        put_varint(&mut buf, self.width() as u64);
        put_varint(&mut buf, self.height() as u64);

        let symbols = frequent_patterns(self.rows());
        let symbol_indices: HashMap<&RunList, usize, RowHasher> = symbols
            .iter()
            .enumerate()
            .map(|(i, &runs)| (runs, i))
            .collect();
        if !symbols.is_empty() {
            buf.put_u8(PAGE_FIRST_ROW_TABLE);
            put_varint(&mut buf, symbols.len() as u64);
            for runs in &symbols {
                put_pattern(&mut buf, runs)?;
            }
        }

        let mut records = 0;
        for (repeat, row) in self.rows().iter().dedup_with_count() {
            reserve_chunks(&mut buf, 2 * MAX_VARINT_LEN + 1);
            match row {
                Row::Zeros => buf.put_u8(PAGE_ZEROS),
                Row::Ones => buf.put_u8(PAGE_ONES),
                Row::Pattern(runs) => match symbol_indices.get(&**runs) {
                    Some(&i) if i < SHORT_SYMBOLS => {
                        buf.put_u8(PAGE_FIRST_SYMBOL_TABLE + i as u8);
                    }
                    Some(&i) => {
                        buf.put_u8(PAGE_SYMBOL_ESCAPE);
                        put_varint(&mut buf, (i - SHORT_SYMBOLS) as u64);
                    }
                    None => {
                        buf.put_u8(PAGE_PATTERN);
                        put_pattern(&mut buf, runs)?;
                    }
                },
            }
            put_varint(&mut buf, repeat as u64);
            records += 1;
        }
        reserve_chunks(&mut buf, 1);
        buf.put_u8(PAGE_ROWBREAK);

        log::debug!(
            "Exported {}x{} mask to {} bytes ({} records, {} symbols)",
            self.width(),
            self.height(),
            buf.len(),
            records,
            symbols.len(),
        );
        Ok(buf.to_vec())
    }
}

/// Maximum number of bytes in an encoded `u64`.
const MAX_VARINT_LEN: usize = 10;

/// Returns the patterns used by at least `MIN_OCCURRENCES` rows, in order of
/// first use.
fn frequent_patterns(rows: &[Row]) -> Vec<&RunList> {
    let mut counts: HashMap<&RunList, usize, RowHasher> = HashMap::default();
    let mut order = vec![];
    for row in rows {
        if let Row::Pattern(runs) = row {
            let count = counts.entry(&**runs).or_insert(0);
            if *count == 0 {
                order.push(&**runs);
            }
            *count += 1;
        }
    }
    order.retain(|runs| counts[runs] >= MIN_OCCURRENCES);
    order
}

/// Writes a pattern body: the number of runs followed by the gap before and
/// length of each run.
fn put_pattern(buf: &mut BytesMut, runs: &RunList) -> PagesResult<()> {
    if runs.len() > MAX_SYMBOL_LENGTH {
        return Err(PagesError::SymbolTooLong(runs.len()));
    }
    reserve_chunks(buf, (2 * runs.len() + 1) * MAX_VARINT_LEN);
    put_varint(buf, runs.len() as u64);
    let mut x = 0;
    for run in runs {
        put_varint(buf, (run.start - x) as u64);
        put_varint(buf, run.len() as u64);
        x = run.end;
    }
    Ok(())
}

/// Ensures there is room for `additional` more bytes, growing the buffer by a
/// whole number of chunks.
fn reserve_chunks(buf: &mut BytesMut, additional: usize) {
    let free = buf.capacity() - buf.len();
    if free < additional {
        let chunks = (additional - free + CHUNK_INCREMENT - 1) / CHUNK_INCREMENT;
        buf.reserve(free + chunks * CHUNK_INCREMENT);
    }
}
