//! The two-pass face renderer: static hour markers, then the three hands and
//! the hub dot. Everything is recomputed from the current reading on every
//! tick; there is no cross-frame state.

use crate::clock::ClockReading;
use crate::error::FaceError;
use crate::surface::{Color, Surface, TimeSource};
use crate::trig::{project, AngleUnit, Point};

/// Physical outline of the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Rectangular,
    Circular,
}

/// Whether the display can show color or only gray levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Color,
    Monochrome,
}

#[derive(Clone, Copy, Debug)]
pub struct HandSpec {
    pub length: i32,
    pub stroke_width: u32,
    pub color: Color,
}

/// Concentric radii between which a tick mark is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerSpec {
    pub outer: i32,
    pub inner: i32,
}

const MARKER_COUNT: u32 = 12;
const HUB_RADIUS: i32 = 3;

/// Immutable per-face geometry and colors, selected once at startup from the
/// display's shape and color capability.
pub struct FaceConfig {
    shape: Shape,
    second: HandSpec,
    minute: HandSpec,
    hour: HandSpec,
    long_marker: MarkerSpec,
    short_marker: MarkerSpec,
    marker_stroke_width: u32,
    marker_color: Color,
    hub_color: Color,
}

impl FaceConfig {
    pub fn new(shape: Shape, mode: ColorMode) -> Self {
        // Rectangular faces are 144x168 and slightly off-center; circular
        // faces are 180x180. The radii compensate accordingly.
        let (hand_length, hour_length, marker_outer, marker_long_inner, marker_short_inner) =
            match shape {
                Shape::Rectangular => (66, 36, 72, 69, 71),
                Shape::Circular => (80, 46, 90, 86, 88),
            };

        let (second_color, minute_color, hour_color) = match mode {
            ColorMode::Color => (Color::YELLOW, Color::BLUE, Color::RED),
            ColorMode::Monochrome => (Color::WHITE, Color::LIGHT_GRAY, Color::DARK_GRAY),
        };

        let marker_stroke_width = match mode {
            ColorMode::Color => 2,
            ColorMode::Monochrome => 1,
        };

        FaceConfig {
            shape,
            second: HandSpec {
                length: hand_length,
                stroke_width: 2,
                color: second_color,
            },
            minute: HandSpec {
                length: hand_length,
                stroke_width: 6,
                color: minute_color,
            },
            hour: HandSpec {
                length: hour_length,
                stroke_width: 6,
                color: hour_color,
            },
            long_marker: MarkerSpec {
                outer: marker_outer,
                inner: marker_long_inner,
            },
            short_marker: MarkerSpec {
                outer: marker_outer,
                inner: marker_short_inner,
            },
            marker_stroke_width,
            marker_color: Color::WHITE,
            hub_color: Color::WHITE,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The cardinal positions (12, 3, 6, 9) get the longer mark.
    pub fn marker(&self, index: u32) -> MarkerSpec {
        if index % 3 == 0 {
            self.long_marker
        } else {
            self.short_marker
        }
    }

    /// Redraws the 12 hour markers. Invoked every tick; the host redraws the
    /// whole surface on every dirty mark, so nothing is diffed.
    pub fn draw_background<S: Surface>(&self, surface: &mut S) {
        let center = surface.bounds().center();

        for index in 0..MARKER_COUNT {
            let angle = AngleUnit::from_fraction(index, MARKER_COUNT);
            let spec = self.marker(index);

            // On rectangular faces the 12 and 6 o'clock marks use literal
            // coordinates tuned to the non-square 144x168 panel.
            let (outer, inner) = match (self.shape, index) {
                (Shape::Rectangular, 0) => (Point::new(72, 0), Point::new(72, 3)),
                (Shape::Rectangular, 6) => (Point::new(72, 168), Point::new(72, 165)),
                _ => (
                    project(center, angle, spec.outer),
                    project(center, angle, spec.inner),
                ),
            };

            surface.draw_line(outer, inner, self.marker_stroke_width, self.marker_color);
        }
    }

    /// Draws the hands for `reading`, then the hub dot on top so the hands
    /// terminate at a clean center instead of a jagged intersection.
    pub fn draw_hands<S: Surface>(&self, surface: &mut S, reading: ClockReading) {
        let center = surface.bounds().center();

        let passes = [
            (self.second, reading.second_angle()),
            (self.minute, reading.minute_angle()),
            (self.hour, reading.hour_angle()),
        ];

        for (spec, angle) in passes {
            let tip = project(center, angle, spec.length);
            surface.draw_line(center, tip, spec.stroke_width, spec.color);
        }

        surface.fill_circle(center, HUB_RADIUS, self.hub_color);
    }

    /// One full frame: read the clock, then both passes. A failed time read
    /// skips the frame, leaving the previous frame's content in place.
    pub fn render<S: Surface, T: TimeSource>(
        &self,
        surface: &mut S,
        clock: &T,
    ) -> Result<ClockReading, FaceError> {
        let reading = clock.now()?;
        self.draw_background(surface);
        self.draw_hands(surface, reading);
        Ok(reading)
    }
}
