use proptest::collection::vec;
use proptest::prelude::*;

use super::*;
use crate::mask::MaskArray;
use crate::vec2::UVec2;

#[test]
fn test_rle_item() {
    assert_eq!(Ok(RleItem::Cell(false)), "b".parse());
    assert_eq!(Ok(RleItem::Cell(false)), ".".parse());
    assert_eq!(Ok(RleItem::Cell(true)), "o".parse());
    assert_eq!(Ok(RleItem::Cell(true)), "A".parse());
    assert_eq!(Ok(RleItem::NextRow), "$".parse());
    assert_eq!(Ok(RleItem::End), "!".parse());
    assert_eq!(Err::<RleItem, _>(RleError::UnknownSymbol('/')), "/".parse());
    assert_eq!(Err::<RleItem, _>(RleError::InvalidItem), "bo".parse());
    assert_eq!(Err::<RleItem, _>(RleError::NonAscii), "é".parse());

    for &item in &[
        RleItem::Cell(false),
        RleItem::Cell(true),
        RleItem::NextRow,
        RleItem::End,
    ] {
        assert_eq!(Ok(item), item.to_string().parse());
    }
}

#[test]
fn test_rle_run_merge() {
    let mut runs = RleRunVec::default();
    runs.append(RleRun {
        count: 2,
        item: RleItem::Cell(true),
    });
    runs.append(RleItem::Cell(true));
    runs.append(RleItem::Cell(false));
    runs.append(RleItem::NextRow);
    runs.append(RleItem::NextRow);
    runs.append(RleItem::End);
    assert_eq!(
        vec![
            RleRun {
                count: 3,
                item: RleItem::Cell(true),
            },
            RleRun::from(RleItem::End),
        ],
        runs.into_vec(),
    );
    assert_eq!(3, RleRun { count: 12, item: RleItem::NextRow }.str_len());
    assert_eq!(1, RleRun::from(RleItem::End).str_len());
}

proptest! {
    /// Tests that the RLE parser fails correctly and does not panic for short
    /// strings.
    #[test]
    fn test_rle_fail(s in ".{0,3}") {
        // This should not panic.
        if let Ok(item) = s.parse::<RleItem>() {
            // If it successfully parsed, we should be able to get back the
            // input string.
            match s.as_str() {
                "." => prop_assert_eq!("b", item.to_string()),
                "A" => prop_assert_eq!("o", item.to_string()),
                _ => prop_assert_eq!(s.clone(), item.to_string()),
            }
        }
        let _ = MaskArray::from_rle_str(&format!("x = 3, y = 3\n{}", s));
    }

    /// Tests that exporting and reimporting a mask gives the same mask.
    #[test]
    fn test_rle_mask_reimport(
        (w, cells) in (1..40_usize, 1..12_usize)
            .prop_flat_map(|(w, h)| (Just(w), vec(any::<bool>(), w * h))),
    ) {
        let mask = MaskArray::from_bools(w, cells.len() / w, &cells).unwrap();
        let s = mask.to_rle_string();
        for line in s.lines() {
            prop_assert!(line.len() <= MAX_LINE_LEN);
        }
        prop_assert_eq!(mask, MaskArray::from_rle_str(&s).unwrap());
    }
}

// Load and save a glider.
#[test]
fn test_rle_glider() {
    let imported = MaskArray::from_rle_str(
        "
        # Comment
        # Comment 2
        x = 5, y = 7, rule = Life
        # more
        4$2b
        bo$2b2b
        o$2b3o!

        #Another Comment 3
        #Comment 4
    ",
    )
    .expect("Failed to import RLE");
    assert_eq!(UVec2::new(5, 7), imported.size());
    assert_eq!(5, imported.population());
    assert!(imported.get_cell(UVec2::new(3, 4)));
    assert!(imported.get_cell(UVec2::new(4, 5)));
    assert!(imported.get_cell(UVec2::new(2, 6)));
    assert!(imported.get_cell(UVec2::new(3, 6)));
    assert!(imported.get_cell(UVec2::new(4, 6)));

    let exported = imported.to_rle_string();
    assert_eq!(
        "\
x = 5, y = 7
4$3bo$4bo$2b3o!
",
        exported,
    );
    let reimported = MaskArray::from_rle_str(&exported).expect("Failed to reimport RLE output");
    assert_eq!(imported, reimported);

    let cropped = imported
        .crop(&imported.bounding_rect().unwrap())
        .unwrap()
        .to_rle()
        .with_comments("glider");
    assert_eq!("#C glider\nx = 3, y = 3\nbo$2bo$3o!\n", cropped.to_string());
    let reparsed: Rle = cropped.to_string().parse().unwrap();
    assert_eq!("#C glider\n", reparsed.comments());
}

#[test]
fn test_rle_comments_collected() {
    let rle: Rle = "#N name\nx = 1, y = 1\no!\n#C trailing".parse().unwrap();
    assert_eq!("#N name\n#C trailing\n", rle.comments());
    assert_eq!(UVec2::new(1, 1), rle.size());
}

#[test]
fn test_empty_rle() {
    let mask = MaskArray::from_rle_str("x = 0, y = 0\n!").expect("Failed to import RLE");
    assert_eq!(UVec2::new(0, 0), mask.size());
    assert!(mask.is_empty());
    assert_eq!("x = 0, y = 0\n!\n", mask.to_rle_string());

    let blank = MaskArray::new(4, 3);
    assert_eq!("x = 4, y = 3\n!\n", blank.to_rle_string());
    assert_eq!(blank, MaskArray::from_rle_str(&blank.to_rle_string()).unwrap());
}

#[test]
fn test_rle_errors() {
    assert_eq!(
        Err(RleError::MissingHeader),
        MaskArray::from_rle_str("3o$3o!")
    );
    assert_eq!(
        Err(RleError::InvalidSize),
        MaskArray::from_rle_str("x = -1, y = 2\n!")
    );
    assert_eq!(
        Err(RleError::TooBig { row: 1, width: 3 }),
        MaskArray::from_rle_str("x = 3, y = 2\n3o$b3o!")
    );
    assert_eq!(
        Err(RleError::UnknownSymbol('z')),
        MaskArray::from_rle_str("x = 3, y = 2\n3z!")
    );
    // Rows past the declared height are dropped.
    let truncated = MaskArray::from_rle_str("x = 2, y = 1\n2o$2o$2o!").unwrap();
    assert_eq!(2, truncated.population());
}
