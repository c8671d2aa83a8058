use proptest::prelude::*;

use super::*;
use crate::mask::MaskArray;
use crate::pool::SharedRowPool;
use crate::runs::RunList;

/// Returns a mask whose rows are drawn from a small palette, so that the
/// encoder has repeated rows and repeated patterns to work with.
fn mask_from_palette(width: usize, palette: &[RunList], choices: &[usize]) -> MaskArray {
    MaskArray::from_row_fn(width, choices.len(), SharedRowPool::new(), |y| {
        palette[choices[y] % palette.len()].clone()
    })
}

fn header(width: u8, height: u8) -> Vec<u8> {
    let mut ret = MAGIC.to_vec();
    ret.extend_from_slice(&[VERSION, width, height]);
    ret
}

#[test]
fn test_pages_exact_bytes() {
    // . # # .
    // . . . .
    // # # # #
    let mask = MaskArray::from_row_fn(4, 3, SharedRowPool::new(), |y| match y {
        0 => RunList::single(1..3),
        1 => RunList::new(),
        _ => RunList::full(4),
    });
    let mut expected = header(4, 3);
    expected.extend_from_slice(&[
        PAGE_PATTERN, 1, 1, 2, 1, // row 0
        PAGE_ZEROS, 1, // row 1
        PAGE_ONES, 1, // row 2
        PAGE_ROWBREAK,
    ]);
    let bytes = mask.to_pages().unwrap();
    assert_eq!(expected, bytes);
    assert_eq!(mask, MaskArray::from_pages(&bytes).unwrap());
}

#[test]
fn test_pages_repeated_rows() {
    let mask = MaskArray::full(10, 200);
    let mut expected = header(10, 200);
    // 200 does not fit in one varint byte.
    expected.truncate(expected.len() - 1);
    expected.extend_from_slice(&[0xC8, 0x01, PAGE_ONES, 0xC8, 0x01, PAGE_ROWBREAK]);
    assert_eq!(expected, mask.to_pages().unwrap());
}

#[test]
fn test_pages_symbol_table() {
    let a = RunList::single(0..2);
    let b = RunList::single(3..4);
    let palette = [a.clone(), b];

    // `a` appears three times in separate records; `b` only twice.
    let mask = mask_from_palette(5, &palette, &[0, 1, 0, 1, 0]);
    let bytes = mask.to_pages().unwrap();
    let mut expected = header(5, 5);
    expected.extend_from_slice(&[
        PAGE_FIRST_ROW_TABLE, 1, 1, 0, 2, // table
        PAGE_FIRST_SYMBOL_TABLE, 1,
        PAGE_PATTERN, 1, 3, 1, 1,
        PAGE_FIRST_SYMBOL_TABLE, 1,
        PAGE_PATTERN, 1, 3, 1, 1,
        PAGE_FIRST_SYMBOL_TABLE, 1,
        PAGE_ROWBREAK,
    ]);
    assert_eq!(expected, bytes);
    assert_eq!(mask, MaskArray::from_pages(&bytes).unwrap());

    // Two uses is not enough for a table entry.
    let mask = mask_from_palette(5, &palette, &[0, 1, 0]);
    let bytes = mask.to_pages().unwrap();
    assert_eq!(PAGE_PATTERN, bytes[header(5, 3).len()]);

    // Three rows in one record still count as three uses.
    let mask = mask_from_palette(5, &palette, &[0, 0, 0]);
    let bytes = mask.to_pages().unwrap();
    assert_eq!(PAGE_FIRST_ROW_TABLE, bytes[header(5, 3).len()]);
}

#[test]
fn test_pages_symbol_escape() {
    let width = 301;
    let palette: Vec<RunList> = (0..300).map(|x| RunList::single(x..x + 1)).collect();
    let choices: Vec<usize> = (0..3).flat_map(|_| 0..300).collect();
    let mask = mask_from_palette(width, &palette, &choices);
    let bytes = mask.to_pages().unwrap();
    assert!(bytes.contains(&PAGE_SYMBOL_ESCAPE));
    let decoded = MaskArray::from_pages(&bytes).unwrap();
    assert_eq!(mask, decoded);
    assert_eq!(300, decoded.stats().unique_patterns);
}

#[test]
fn test_pages_shared_pool() {
    let pool = SharedRowPool::new();
    let mask = mask_from_palette(8, &[RunList::single(2..5)], &[0, 0, 0, 0]);
    let bytes = mask.to_pages().unwrap();
    let a = MaskArray::from_pages_with_pool(&bytes, pool.clone()).unwrap();
    let b = MaskArray::from_pages_with_pool(&bytes, pool.clone()).unwrap();
    assert_eq!(a, b);
    assert_eq!(1, pool.len());
}

#[test]
fn test_pages_empty() {
    for &(w, h) in &[(0, 0), (5, 0), (0, 5)] {
        let mask = MaskArray::new(w, h);
        let bytes = mask.to_pages().unwrap();
        assert_eq!(mask, MaskArray::from_pages(&bytes).unwrap());
    }
    let mut expected = header(0, 0);
    expected.push(PAGE_ROWBREAK);
    assert_eq!(expected, MaskArray::new(0, 0).to_pages().unwrap());
}

#[test]
fn test_pages_errors() {
    fn decode(tail: &[u8]) -> PagesResult<MaskArray> {
        let mut bytes = header(4, 2);
        bytes.extend_from_slice(tail);
        MaskArray::from_pages(&bytes)
    }

    assert_eq!(Err(PagesError::BadMagic), MaskArray::from_pages(b"MSK"));
    assert_eq!(Err(PagesError::BadMagic), MaskArray::from_pages(b"RLE!\x01"));
    assert_eq!(
        Err(PagesError::UnsupportedVersion(2)),
        MaskArray::from_pages(b"MSKA\x02\x04\x02"),
    );
    assert_eq!(Err(PagesError::Truncated), MaskArray::from_pages(b"MSKA\x01\x04"));

    assert_eq!(Ok(MaskArray::full(4, 2)), decode(&[PAGE_ONES, 2, PAGE_ROWBREAK]));
    assert_eq!(Err(PagesError::Truncated), decode(&[PAGE_ONES]));
    assert_eq!(Err(PagesError::ZeroRepeat), decode(&[PAGE_ONES, 0]));
    assert_eq!(Err(PagesError::TooManyRows(2)), decode(&[PAGE_ONES, 3]));
    assert_eq!(
        Err(PagesError::TooManyRows(2)),
        decode(&[PAGE_ONES, 2, PAGE_ONES, 1]),
    );
    assert_eq!(Err(PagesError::MissingTerminator), decode(&[PAGE_ONES, 2]));
    assert_eq!(
        Err(PagesError::TrailingData(2)),
        decode(&[PAGE_ONES, 2, PAGE_ROWBREAK, 1, 2]),
    );
    assert_eq!(
        Err(PagesError::SymbolOutOfRange { index: 0, count: 0 }),
        decode(&[PAGE_FIRST_SYMBOL_TABLE, 2]),
    );
    assert_eq!(
        Err(PagesError::SymbolOutOfRange { index: 252, count: 1 }),
        decode(&[PAGE_FIRST_ROW_TABLE, 1, 1, 0, 1, PAGE_SYMBOL_ESCAPE, 1, 2]),
    );
    assert_eq!(
        Err(PagesError::UnexpectedTag(PAGE_FIRST_ROW_TABLE)),
        decode(&[PAGE_ONES, 1, PAGE_FIRST_ROW_TABLE]),
    );
    assert_eq!(
        Err(PagesError::RunOutOfBounds { end: 5, width: 4 }),
        decode(&[PAGE_PATTERN, 1, 2, 3, 2]),
    );
    assert_eq!(
        Err(PagesError::NonCanonicalRuns),
        decode(&[PAGE_PATTERN, 2, 0, 1, 0, 1, 2]),
    );
    assert_eq!(
        Err(PagesError::NonCanonicalRuns),
        decode(&[PAGE_PATTERN, 1, 1, 0, 2]),
    );
    // Rows of a zero-width mask are always empty.
    let mask = MaskArray::from_pages(b"MSKA\x01\x00\x01\x01\x01\x00").unwrap();
    assert_eq!(MaskArray::new(0, 1), mask);
    assert!(mask.is_empty());
    assert_eq!(None, mask.bounding_rect());

    assert_eq!(
        Err(PagesError::SymbolTooLong(PAGE_SIZE)),
        decode(&[PAGE_PATTERN, 0x80, 0x80, 0x80, 0x08]),
    );
}

proptest! {
    #[test]
    fn test_pages_roundtrip(
        width in 1..40_usize,
        palette in proptest::collection::vec(proptest::collection::vec(0..40_usize, 0..8), 1..5),
        choices in proptest::collection::vec(0..5_usize, 0..30),
    ) {
        let palette: Vec<RunList> = palette
            .into_iter()
            .map(|cells| {
                let mut runs = RunList::new();
                for x in cells {
                    runs.set(x % width, true);
                }
                runs
            })
            .collect();
        let mask = mask_from_palette(width, &palette, &choices);
        let bytes = mask.to_pages().unwrap();
        prop_assert_eq!(&mask, &MaskArray::from_pages(&bytes).unwrap());
    }

    #[test]
    fn test_pages_garbage_no_panic(
        width in 0..8_u8,
        tail in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut bytes = header(width, 4);
        bytes.extend(tail);
        if let Ok(mask) = MaskArray::from_pages(&bytes) {
            prop_assert_eq!(4, mask.height());
            prop_assert_eq!(width as usize, mask.width());
            prop_assert_eq!(mask.is_empty(), mask.bounding_rect().is_none());
            prop_assert_eq!(mask.population(), mask.to_dense().count_ones());
        }
    }
}
