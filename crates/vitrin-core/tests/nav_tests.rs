use vitrin_core::nav::{anchor_scroll_top, nav_style, NavStyle};

#[test]
fn nav_elevates_strictly_past_the_threshold() {
    assert_eq!(nav_style(0.0), NavStyle::Flat);
    assert_eq!(nav_style(100.0), NavStyle::Flat, "the boundary itself stays flat");
    assert_eq!(nav_style(100.5), NavStyle::Elevated);
    assert_eq!(nav_style(2500.0), NavStyle::Elevated);
}

#[test]
fn anchor_scroll_leaves_room_for_the_fixed_bar() {
    assert_eq!(anchor_scroll_top(500.0), 430.0);
    assert_eq!(anchor_scroll_top(70.0), 0.0);
}
