//! Analog clock-face renderer for small fixed-size displays.
//!
//! The host platform supplies a drawable surface, a wall-clock reading, and a
//! once-per-second tick; this crate turns a time of day into hour markers and
//! three hands via fixed-point angle projection.

pub mod cli;
pub mod clock;
pub mod error;
pub mod face;
pub mod prelude;
pub mod surface;
pub mod trig;
