//! Pure controller state for the vitrin page behaviors.
//!
//! Everything here is host-testable: no DOM types, no wall clock. Timers are
//! modelled as state machines advanced by explicit `tick(dt)` calls, so the
//! web layer can drive them all from a single animation-frame loop and tests
//! can drive them with made-up durations.

pub mod carousel;
pub mod constants;
pub mod form;
pub mod media;
pub mod nav;
pub mod parallax;

pub use carousel::*;
pub use form::*;
pub use media::*;
pub use nav::*;
pub use parallax::*;
