//! Tests for `#[derive(Vacancy)]`.
//!
//! - structs are vacant when every field is vacant
//! - enums are vacant on the unit variant marked `#[vacant]`

#![cfg(feature = "derive")]

use faultline::{Maybe, Vacancy};
use rstest::rstest;

// =============================================================================
// Test Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Vacancy)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, PartialEq, Vacancy)]
struct Label(String);

#[derive(Debug, Clone, PartialEq, Vacancy)]
struct Marker;

#[derive(Debug, Clone, PartialEq, Vacancy)]
struct Wrapper<T> {
    inner: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Vacancy)]
enum Status {
    #[vacant]
    Unknown,
    Active,
    Suspended,
}

#[derive(Debug, Clone, PartialEq, Vacancy)]
enum Shape {
    Circle(f64),
    Square { side: f64 },
}

// =============================================================================
// Structs
// =============================================================================

#[rstest]
#[case(Point { x: 0, y: 0 }, true)]
#[case(Point { x: 1, y: 0 }, false)]
#[case(Point { x: 0, y: -2 }, false)]
fn struct_vacant_when_every_field_is(#[case] point: Point, #[case] expected: bool) {
    assert_eq!(point.is_vacant(), expected);
    assert_eq!(Maybe::some(point).is_none(), expected);
}

#[rstest]
fn struct_with_non_vacant_field_is_never_vacant() {
    assert!(!Label(String::new()).is_vacant());
}

#[rstest]
fn unit_struct_is_vacant() {
    assert!(Marker.is_vacant());
}

#[rstest]
fn generic_struct_delegates_to_parameter() {
    assert!(Wrapper { inner: 0_u8 }.is_vacant());
    assert!(!Wrapper { inner: 'a' }.is_vacant());
    assert!(!Wrapper { inner: "".to_string() }.is_vacant());
}

// =============================================================================
// Enums
// =============================================================================

#[rstest]
#[case(Status::Unknown, true)]
#[case(Status::Active, false)]
#[case(Status::Suspended, false)]
fn enum_vacant_on_marked_variant(#[case] status: Status, #[case] expected: bool) {
    assert_eq!(status.is_vacant(), expected);
    assert_eq!(Maybe::some(status).is_none(), expected);
}

#[rstest]
fn enum_without_marker_is_never_vacant() {
    assert!(!Shape::Circle(0.0).is_vacant());
    assert!(!Shape::Square { side: 0.0 }.is_vacant());
}
