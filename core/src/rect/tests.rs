use proptest::prelude::*;
use std::collections::HashSet;

use super::*;

fn uvec2(max: usize) -> impl Strategy<Value = UVec2> {
    (0..=max, 0..=max).prop_map(UVec2::from)
}

fn test_rect_iter_validity(rect: Rect) {
    // Test that the iterator agrees with `count()`.
    let cells: Vec<UVec2> = rect.iter().collect();
    assert_eq!(rect.count(), cells.len());
    // Test that there are no duplicates.
    let cell_set: HashSet<UVec2> = cells.iter().copied().collect();
    assert_eq!(rect.count(), cell_set.len());
    for pos in &cells {
        assert!(rect.contains(pos));
    }
    // Row-major order.
    assert_eq!(Some(&rect.min()), cells.first());
    assert_eq!(Some(&rect.max()), cells.last());
}

#[test]
fn test_rect_row_major_iter() {
    let rect = Rect::span(UVec2::new(2, 5), UVec2::new(3, 6));
    let cells: Vec<UVec2> = rect.iter().collect();
    assert_eq!(
        vec![
            UVec2::new(2, 5),
            UVec2::new(3, 5),
            UVec2::new(2, 6),
            UVec2::new(3, 6),
        ],
        cells,
    );
}

#[test]
#[should_panic(expected = "Rect must have positive area")]
fn test_rect_zero_size() {
    Rect::with_size(UVec2::origin(), UVec2::new(3, 0));
}

proptest! {
    /// Tests `Rect::single_cell()` and various methods.
    #[test]
    fn test_rect_single_cell(pos in uvec2(100), dx in 0..3_usize, dy in 0..3_usize) {
        let rect = Rect::single_cell(pos);
        assert!(rect.contains(&pos));
        let other = pos + UVec2::new(dx, dy);
        assert_eq!(dx == 0 && dy == 0, rect.contains(&other));
        assert_eq!(pos, rect.min());
        assert_eq!(pos, rect.max());
        assert_eq!(UVec2::repeat(1), rect.size());
        assert_eq!(1, rect.count());
        test_rect_iter_validity(rect);
    }

    /// Tests `Rect::span()` and various methods.
    #[test]
    fn test_rect_span(corner1 in uvec2(8), corner2 in uvec2(8)) {
        let rect = Rect::span(corner1, corner2);
        assert!(rect.contains(&corner1));
        assert!(rect.contains(&corner2));
        test_rect_iter_validity(rect);
    }

    /// Tests `intersection()` against per-cell membership.
    #[test]
    fn test_rect_intersection(
        a1 in uvec2(8), a2 in uvec2(8),
        b1 in uvec2(8), b2 in uvec2(8),
    ) {
        let a = Rect::span(a1, a2);
        let b = Rect::span(b1, b2);
        let expected: HashSet<UVec2> = a.iter().filter(|p| b.contains(p)).collect();
        match a.intersection(&b) {
            Some(r) => {
                prop_assert!(a.intersects(&b));
                prop_assert_eq!(expected, r.iter().collect::<HashSet<_>>());
            }
            None => {
                prop_assert!(!a.intersects(&b));
                prop_assert!(expected.is_empty());
            }
        }
        let u = a.union(&b);
        prop_assert!(u.contains(&a));
        prop_assert!(u.contains(&b));
    }

    /// Tests translation of `Rect` by `UVec2`.
    #[test]
    fn test_rect_ops(corner1 in uvec2(100), corner2 in uvec2(100), offset in uvec2(100)) {
        prop_assert_eq!(
            Rect::span(corner1, corner2) + offset,
            Rect::span(corner1 + offset, corner2 + offset)
        );
        prop_assert_eq!(
            Rect::span(corner1 + offset, corner2 + offset) - offset,
            Rect::span(corner1, corner2)
        );
    }
}
