use super::{Column, Location};

#[test]
fn column_arithmetic() {
    assert_eq!(Column(5) + Column(3), Column(8));
    assert_eq!(Column(5) - Column(3), Column(2));
}

#[test]
fn column_assign_arithmetic() {
    let mut c = Column(5);
    c += Column(3);
    assert_eq!(c, Column(8));
    c -= Column(2);
    assert_eq!(c, Column(6));
}

#[test]
fn column_conversions() {
    assert_eq!(Column::from(42_usize), Column(42));
    assert_eq!(usize::from(Column(42)), 42);
}

#[test]
fn column_display() {
    assert_eq!(format!("{}", Column(7)), "7");
}

#[test]
fn location_equality_and_ordering() {
    let a = Location::new(0, 5);
    let b = Location::new(1, 0);
    let c = Location::new(0, 10);

    assert_eq!(a, Location::new(0, 5));
    assert!(a < b);
    assert!(a < c);
}

#[test]
fn location_default_is_origin() {
    assert_eq!(Location::default(), Location::new(0, 0));
}
