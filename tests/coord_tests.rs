use broadside::{Coord, CoordError};
use proptest::prelude::*;

#[test]
fn test_parse_corners() {
    let a1 = Coord::parse("A1").unwrap();
    assert_eq!((a1.row(), a1.col()), (0, 0));
    let j10 = Coord::parse("J10").unwrap();
    assert_eq!((j10.row(), j10.col()), (9, 9));
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!(Coord::parse("c7").unwrap(), Coord::parse("C7").unwrap());
    assert_eq!("c7".parse::<Coord>().unwrap().to_string(), "C7");
}

#[test]
fn test_parse_errors() {
    assert_eq!(Coord::parse(""), Err(CoordError::Empty));
    assert_eq!(Coord::parse("A"), Err(CoordError::TooShort));
    assert_eq!(Coord::parse("K1"), Err(CoordError::BadRow('K')));
    assert_eq!(Coord::parse("11"), Err(CoordError::BadRow('1')));
    assert_eq!(Coord::parse("Ax"), Err(CoordError::BadColumn("x".to_string())));
    assert_eq!(Coord::parse("A-1"), Err(CoordError::BadColumn("-1".to_string())));
    assert_eq!(Coord::parse("A0"), Err(CoordError::OutOfRange(0)));
    assert_eq!(Coord::parse("B11"), Err(CoordError::OutOfRange(11)));
}

#[test]
fn test_new_bounds() {
    assert!(Coord::new(9, 9).is_some());
    assert!(Coord::new(10, 0).is_none());
    assert!(Coord::new(0, 10).is_none());
}

#[test]
fn test_corners_orders_each_axis() {
    let (start, end) = Coord::corners(Coord::parse("D8").unwrap(), Coord::parse("B2").unwrap());
    assert_eq!(start.to_string(), "B2");
    assert_eq!(end.to_string(), "D8");
}

proptest! {
    #[test]
    fn label_roundtrip(row in 0usize..10, col in 0usize..10, lower in any::<bool>()) {
        let letter = (b'A' + row as u8) as char;
        let letter = if lower { letter.to_ascii_lowercase() } else { letter };
        let label = format!("{}{}", letter, col + 1);
        let coord = Coord::parse(&label).unwrap();
        prop_assert_eq!((coord.row(), coord.col()), (row, col));
        prop_assert_eq!(coord.to_string(), label.to_ascii_uppercase());
    }

    #[test]
    fn parse_never_panics(s in "\\PC{0,6}") {
        let _ = Coord::parse(&s);
    }
}
