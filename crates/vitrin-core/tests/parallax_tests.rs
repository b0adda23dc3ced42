use vitrin_core::parallax::{pointer_offset, scroll_offset};

#[test]
fn pointer_parallax_scales_viewport_ratios() {
    assert_eq!(pointer_offset(0.0, 0.0), (0.0, 0.0));
    assert_eq!(pointer_offset(0.5, 0.5), (10.0, 10.0));
    assert_eq!(pointer_offset(1.0, 0.25), (20.0, 5.0));
}

#[test]
fn scroll_parallax_moves_at_half_speed() {
    assert_eq!(scroll_offset(0.0), 0.0);
    assert_eq!(scroll_offset(300.0), 150.0);
}
