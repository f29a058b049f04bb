use clap::{Parser, ValueEnum};

use crate::clock::ClockReading;
use crate::error::FaceError;
use crate::face::{ColorMode, Shape};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ShapeArg {
    Rectangular,
    Circular,
}

impl From<ShapeArg> for Shape {
    fn from(value: ShapeArg) -> Self {
        match value {
            ShapeArg::Rectangular => Shape::Rectangular,
            ShapeArg::Circular => Shape::Circular,
        }
    }
}

#[derive(Parser, Debug)]
pub struct Cli {
    #[clap(long, default_value_t = false)]
    pub debug: bool,

    /// Display outline.
    #[clap(long, value_enum, default_value_t = ShapeArg::Rectangular, env = "CLOCK_FACE_SHAPE")]
    pub shape: ShapeArg,

    /// Render gray levels instead of colored hands.
    #[clap(long, default_value_t = false)]
    pub monochrome: bool,

    /// Render a single frame at a fixed HH:MM:SS instead of the wall clock.
    #[clap(long)]
    pub at: Option<String>,

    /// Render one frame and exit.
    #[clap(long, default_value_t = false)]
    pub once: bool,
}

impl Cli {
    pub fn color_mode(&self) -> ColorMode {
        if self.monochrome {
            ColorMode::Monochrome
        } else {
            ColorMode::Color
        }
    }
}

/// Parses "HH:MM:SS" into a reading, rejecting out-of-range fields.
pub fn parse_reading(value: &str) -> Result<ClockReading, FaceError> {
    let invalid = || FaceError::ConfigError(format!("expected HH:MM:SS, got {:?}", value));

    let fields: Vec<&str> = value.split(':').collect();
    let [hour, minute, second] = fields[..] else {
        return Err(invalid());
    };

    let hour: u8 = hour.parse().map_err(|_| invalid())?;
    let minute: u8 = minute.parse().map_err(|_| invalid())?;
    let second: u8 = second.parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 || second > 59 {
        return Err(invalid());
    }
    Ok(ClockReading::new(hour, minute, second))
}
