//! Navigation bar styling and anchor scroll arithmetic.

use crate::constants::{NAV_ELEVATE_SCROLL_Y, NAV_FIXED_HEIGHT_PX};

/// Visual treatment of the fixed navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavStyle {
    /// Scrolled past the hero: denser background plus a drop shadow.
    Elevated,
    /// At or near the top: the translucent default, no shadow.
    Flat,
}

/// Style the bar should carry at the given vertical scroll offset. The
/// threshold is strict, so sitting exactly on it keeps the flat look.
pub fn nav_style(scroll_y: f64) -> NavStyle {
    if scroll_y > NAV_ELEVATE_SCROLL_Y {
        NavStyle::Elevated
    } else {
        NavStyle::Flat
    }
}

/// Document offset an anchor scroll should land on: the target's own top
/// minus the room the fixed bar occupies, so headings are not hidden under
/// it.
pub fn anchor_scroll_top(target_top: f64) -> f64 {
    target_top - NAV_FIXED_HEIGHT_PX
}
