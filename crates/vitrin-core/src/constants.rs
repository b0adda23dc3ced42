//! Tunable values shared by the controllers and the DOM layer.

use std::time::Duration;

// Carousel timing
pub const SLIDER_AUTO_PERIOD: Duration = Duration::from_millis(4000); // horizontal image slider
pub const VSLIDER_AUTO_PERIOD: Duration = Duration::from_millis(3000); // vertical portrait slider
pub const SCROLL_SETTLE_QUIET: Duration = Duration::from_millis(100); // manual scroll debounce

// Visibility gates
pub const VIDEO_VISIBLE_RATIO: f64 = 0.5; // playback wants more than half the element in view
pub const REVEAL_VISIBLE_RATIO: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px"; // reveal fires a little above the fold

// Navigation chrome
pub const NAV_ELEVATE_SCROLL_Y: f64 = 100.0; // px scrolled before the bar picks up a shadow
pub const NAV_FIXED_HEIGHT_PX: f64 = 70.0; // anchor scrolls stop short by this much
pub const NAV_BG_ELEVATED: &str = "rgba(255, 255, 255, 0.98)";
pub const NAV_BG_FLAT: &str = "rgba(255, 255, 255, 0.95)";
pub const NAV_SHADOW_ELEVATED: &str = "0 4px 20px rgba(0, 0, 0, 0.1)";

// Contact form feedback
pub const FORM_FAKE_LATENCY: Duration = Duration::from_millis(1500);
pub const FORM_CONFIRM_HOLD: Duration = Duration::from_millis(2000);
pub const FORM_LABEL_SENDING: &str = "Gönderiliyor...";
pub const FORM_LABEL_SENT: &str = "Gönderildi ✓";
pub const FORM_CONFIRM_BACKGROUND: &str = "#10b981";

// Hero parallax
pub const POINTER_PARALLAX_RANGE_PX: f64 = 20.0; // full pointer sweep moves the backdrop this far
pub const SCROLL_PARALLAX_FACTOR: f64 = 0.5; // backdrop scrolls at half speed

// Portrait video
pub const PORTRAIT_VIDEO_SRC: &str = "video.mp4"; // relative to the served page
