use super::*;

fn c(x: i8, y: i8) -> Coordinate {
    Coordinate::new(x, y).unwrap()
}

#[test]
fn test_negation() {
    assert_eq!(-Displacement::new(1, -1), Displacement::new(-1, 1));
    for dx in -8..=8 {
        for dy in -8..=8 {
            let d = Displacement::new(dx, dy);
            assert_eq!(-(-d), d);
        }
    }
}

#[test]
fn test_negation_at_integer_limits() {
    for d in [
        Displacement::new(i8::MIN, 0),
        Displacement::new(0, i8::MIN),
        Displacement::new(i8::MIN, i8::MAX),
    ] {
        assert_eq!(-(-d), d);
        assert_eq!((-d).dx(), -d.dx());
        assert_eq!((-d).dy(), -d.dy());
    }
    assert_eq!((-Displacement::new(i8::MIN, 0)).dx(), 128);
}

#[test]
fn test_construction_bounds() {
    assert!(Coordinate::new(0, 0).is_ok());
    assert!(Coordinate::new(7, 7).is_ok());
    assert_eq!(
        Coordinate::new(8, 0),
        Err(ChessError::OutOfRange { x: 8, y: 0 })
    );
    assert!(Coordinate::new(0, -1).is_err());
    assert!(Coordinate::new(i8::MIN, i8::MAX).is_err());
}

#[test]
fn test_equality() {
    assert_eq!(c(1, 2), c(1, 2));
    assert_ne!(c(1, 2), c(2, 1));
}

#[test]
fn test_can_add() {
    assert!(c(0, 0).can_add(Displacement::new(1, 0)));
    assert!(!c(0, 0).can_add(Displacement::new(-1, 0)));
    assert!(!c(7, 3).can_add(Displacement::new(1, 0)));
    assert!(!c(3, 6).can_add(Displacement::new(0, 2)));
}

#[test]
fn test_add_fails_exactly_when_can_add_is_false() {
    for start in Coordinate::all() {
        for dx in -9..=9 {
            for dy in -9..=9 {
                let d = Displacement::new(dx, dy);
                let in_bounds = (0..8).contains(&(start.x() + dx)) && (0..8).contains(&(start.y() + dy));
                assert_eq!(start.can_add(d), in_bounds);
                assert_eq!(start.checked_add(d).is_ok(), in_bounds);
            }
        }
    }
}

#[test]
fn test_add_near_integer_limits_does_not_wrap() {
    assert!(!c(7, 7).can_add(Displacement::new(i8::MAX, 0)));
    assert!(c(0, 0).checked_add(Displacement::new(i8::MIN, i8::MIN)).is_err());
}

#[test]
fn test_add() {
    assert_eq!(c(1, 2).checked_add(Displacement::new(3, 4)), Ok(c(4, 6)));
}

#[test]
fn test_subtract() {
    assert_eq!(c(3, 4).checked_sub(Displacement::new(2, 1)), Ok(c(1, 3)));
    assert!(c(0, 0).checked_sub(Displacement::new(1, 0)).is_err());
}

#[test]
fn test_subtract_extreme_displacements_fails_cleanly() {
    assert_eq!(
        c(0, 0).checked_sub(Displacement::new(i8::MIN, 0)),
        Err(ChessError::OutOfRange { x: 128, y: 0 })
    );
    assert_eq!(
        c(7, 7).checked_sub(Displacement::new(0, i8::MIN)),
        Err(ChessError::OutOfRange { x: 7, y: 135 })
    );
    assert!(c(0, 0).checked_sub(Displacement::new(i8::MAX, i8::MAX)).is_err());
}

#[test]
fn test_subtract_is_add_of_negation() {
    for start in Coordinate::all() {
        for dx in -9..=9 {
            for dy in -9..=9 {
                let d = Displacement::new(dx, dy);
                assert_eq!(start.checked_sub(d), start.checked_add(-d));
            }
        }
    }
}

#[test]
fn test_index_round_trip_covers_board() {
    let all: Vec<Coordinate> = Coordinate::all().collect();
    assert_eq!(all.len(), 64);
    assert_eq!(all[0], c(0, 0));
    assert_eq!(all[9], c(1, 1));
    assert_eq!(c(4, 3).index(), 28);
    assert_eq!(Coordinate::from_index(64), None);
}
