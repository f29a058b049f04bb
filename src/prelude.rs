pub use crate::clock::ClockReading;
pub use crate::error::FaceError;
pub use crate::face::{ColorMode, FaceConfig, Shape};
pub use crate::surface::{Bounds, BufferSurface, Color, Surface, SystemClock, TimeSource};
pub use crate::trig::{project, AngleUnit, Point};

pub use clap::Parser;
pub use log::*;
