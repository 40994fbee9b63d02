//! Assertion utilities for layout tests
//!
//! Geometry comes out of float arithmetic, so comparisons take a tolerance.

use chatkit_foundation::CellFrames;
use chatkit_ui_graphics::{Rect, Size};

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that `inner` lies inside `outer`, edges included.
pub fn assert_rect_within(inner: Rect, outer: Rect, msg: &str) {
    assert!(
        outer.contains_rect(&inner),
        "{}: {:?} is not inside {:?}",
        msg,
        inner,
        outer
    );
}

/// Assert that every non-empty frame of a cell fits inside the cell.
pub fn assert_frames_within(frames: &CellFrames, cell: Size, msg: &str) {
    let bounds = Rect::from_size(cell);
    let parts = [
        ("avatar", frames.avatar),
        ("bubble", frames.bubble),
        ("cell top label", frames.cell_top_label),
        ("bubble top label", frames.bubble_top_label),
        ("bubble bottom label", frames.bubble_bottom_label),
        ("cell bottom label", frames.cell_bottom_label),
        ("accessory", frames.accessory),
    ];
    for (name, rect) in parts {
        if rect.size().is_empty() {
            continue;
        }
        assert_rect_within(rect, bounds, &format!("{} - {}", msg, name));
    }
}

/// Assert that two frames do not overlap.
pub fn assert_disjoint(a: Rect, b: Rect, msg: &str) {
    assert!(
        !a.intersects(&b),
        "{}: {:?} overlaps {:?}",
        msg,
        a,
        b
    );
}
