//! Tests for point ↔ position hit testing (§4.3.5).

use super::*;
use crate::layout::{create_text_format, create_text_layout, FontStyle, FontWeight};
use crate::layout::Factory;

fn layout_for(text: &str) -> TextLayout {
    let format = create_text_format("Consolas", 16.0, FontWeight::Regular, FontStyle::Normal).unwrap();
    create_text_layout(text, Some(&format), 800.0, 600.0).unwrap()
}

#[test]
fn hit_test_point_at_origin_hits_first_character() {
    let _factory = Factory::new().unwrap();
    let layout = layout_for("ABCDEFGHIJ");
    let result = layout.hit_test_point(0.0, 0.0).unwrap();
    assert_eq!(result.position, 0);
    assert!(!result.is_trailing);
    assert!(result.is_inside);
}

#[test]
fn hit_test_point_past_last_character_snaps_to_edge() {
    let _factory = Factory::new().unwrap();
    let layout = layout_for("ABCDEFGHIJ");
    let result = layout.hit_test_point(10_000.0, 0.0).unwrap();
    assert!(!result.is_inside);
    assert!(result.is_trailing);
}

#[test]
fn hit_test_point_before_start_snaps_to_edge() {
    let _factory = Factory::new().unwrap();
    let layout = layout_for("ABCDEFGHIJ");
    let result = layout.hit_test_point(-50.0, 0.0).unwrap();
    assert_eq!(result.position, 0);
    assert!(!result.is_inside);
    assert!(!result.is_trailing);
}

#[test]
fn hit_test_position_round_trips_into_hit_test_point() {
    let _factory = Factory::new().unwrap();
    let layout = layout_for("ABCDEFGHIJ");
    let (x, y, _metrics) = layout.hit_test_position(9, true).unwrap();
    let (x0, _y0, _m0) = layout.hit_test_position(0, false).unwrap();
    assert!(x > x0, "trailing edge of last char must be right of leading edge of first");
    assert_eq!(y, 0.0);
}

#[test]
fn hit_test_position_beyond_length_errors() {
    let _factory = Factory::new().unwrap();
    let layout = layout_for("abc");
    let total = layout.total_units();
    assert!(layout.hit_test_position(total + 1, false).is_err());
}

#[test]
fn non_finite_point_errors() {
    let _factory = Factory::new().unwrap();
    let layout = layout_for("abc");
    assert!(layout.hit_test_point(f32::NAN, 0.0).is_err());
}

#[test]
fn empty_layout_hit_test_point_is_never_inside() {
    let _factory = Factory::new().unwrap();
    let layout = layout_for("");
    let result = layout.hit_test_point(5.0, 5.0).unwrap();
    assert!(!result.is_inside);
    assert_eq!(result.position, 0);
}

#[test]
fn sub_pixel_line_height_does_not_panic() {
    // `size = 0.5` is a valid DIP size (§3: TextFormat places no lower
    // bound on it) and drives `line_height` below 1.0, which must not
    // make the internal y-clamp bound negative and panic.
    let _factory = Factory::new().unwrap();
    let format = create_text_format("Arial", 0.5, FontWeight::Regular, FontStyle::Normal).unwrap();
    let layout = create_text_layout("AB", Some(&format), 800.0, 600.0).unwrap();
    let result = layout.hit_test_point(0.0, 0.0).unwrap();
    assert_eq!(result.position, 0);
    let result = layout.hit_test_point(0.0, 100.0).unwrap();
    assert!(!result.is_inside);
}
