//! Hero backdrop parallax arithmetic.

use crate::constants::{POINTER_PARALLAX_RANGE_PX, SCROLL_PARALLAX_FACTOR};

/// Backdrop offset for a pointer at the given viewport ratios, where 0.0 is
/// the left or top edge and 1.0 the opposite one.
pub fn pointer_offset(x_ratio: f64, y_ratio: f64) -> (f64, f64) {
    (x_ratio * POINTER_PARALLAX_RANGE_PX, y_ratio * POINTER_PARALLAX_RANGE_PX)
}

/// Backdrop vertical offset for a page scroll position. Less than one, so
/// the hero appears to recede as the page moves.
pub fn scroll_offset(scroll_y: f64) -> f64 {
    scroll_y * SCROLL_PARALLAX_FACTOR
}
