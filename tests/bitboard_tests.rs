use broadside::{BitBoard, BitBoardError};

#[test]
fn test_get_set() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert_eq!(bb.count_ones(), 1);

    assert!(!bb.get(1, 2).unwrap());

    assert_eq!(
        bb.set(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 4, col: 0 }
    );
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 4>::from_cells([(3, 3), (0, 1)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);

    let err = BitBoard::<u16, 4>::from_cells([(0, 0), (0, 4)]).unwrap_err();
    assert_eq!(err, BitBoardError::IndexOutOfBounds { row: 0, col: 4 });
}

#[test]
fn test_neighbourhood_interior_cell() {
    let bb = BitBoard::<u128, 10>::from_cells([(4, 4)]).unwrap();
    let halo = bb.neighbourhood();
    assert_eq!(halo.count_ones(), 9);
    for r in 3..=5 {
        for c in 3..=5 {
            assert!(halo.get(r, c).unwrap());
        }
    }
    assert!(!halo.get(2, 4).unwrap());
}

#[test]
fn test_neighbourhood_clips_at_edges() {
    let corner = BitBoard::<u128, 10>::from_cells([(0, 0)]).unwrap();
    assert_eq!(corner.neighbourhood().count_ones(), 4);

    // last column must not wrap into the next row
    let edge = BitBoard::<u128, 10>::from_cells([(3, 9)]).unwrap();
    let halo = edge.neighbourhood();
    assert_eq!(halo.count_ones(), 6);
    assert!(!halo.get(4, 0).unwrap());
    assert!(!halo.get(3, 0).unwrap());
}

#[test]
fn test_intersects_and_union() {
    let a = BitBoard::<u16, 4>::from_cells([(0, 0), (1, 1)]).unwrap();
    let b = BitBoard::<u16, 4>::from_cells([(1, 1), (2, 2)]).unwrap();
    let c = BitBoard::<u16, 4>::from_cells([(3, 3)]).unwrap();
    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
    assert_eq!((a | b).count_ones(), 3);
    assert_eq!((a | c).iter_set_bits().last(), Some((3, 3)));
}
