use clock_face::clock::ClockReading;
use clock_face::error::FaceError;
use clock_face::face::{ColorMode, FaceConfig, Shape};
use clock_face::surface::{Bounds, Color, Surface, TimeSource};
use clock_face::trig::{project, AngleUnit, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DrawCall {
    Line {
        a: Point,
        b: Point,
        stroke_width: u32,
        color: Color,
    },
    Circle {
        center: Point,
        radius: i32,
        color: Color,
    },
}

/// Records draw calls in order instead of rasterizing them.
struct RecordingSurface {
    bounds: Bounds,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    fn new(width: u32, height: u32) -> Self {
        RecordingSurface {
            bounds: Bounds::new(width, height),
            calls: Vec::new(),
        }
    }

    fn lines(&self) -> Vec<DrawCall> {
        self.calls
            .iter()
            .copied()
            .filter(|call| matches!(call, DrawCall::Line { .. }))
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn draw_line(&mut self, a: Point, b: Point, stroke_width: u32, color: Color) {
        self.calls.push(DrawCall::Line {
            a,
            b,
            stroke_width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }
}

struct FixedClock(ClockReading);

impl TimeSource for FixedClock {
    fn now(&self) -> Result<ClockReading, FaceError> {
        Ok(self.0)
    }
}

struct BrokenClock;

impl TimeSource for BrokenClock {
    fn now(&self) -> Result<ClockReading, FaceError> {
        Err(FaceError::NoTimeAvailable)
    }
}

fn rect_mono() -> FaceConfig {
    FaceConfig::new(Shape::Rectangular, ColorMode::Monochrome)
}

#[test]
fn background_draws_exactly_twelve_markers() {
    let mut surface = RecordingSurface::new(144, 168);
    rect_mono().draw_background(&mut surface);
    assert_eq!(surface.calls.len(), 12);
    assert!(surface
        .calls
        .iter()
        .all(|call| matches!(call, DrawCall::Line { .. })));
}

#[test]
fn rectangular_twelve_and_six_markers_use_literal_coordinates() {
    let mut surface = RecordingSurface::new(144, 168);
    rect_mono().draw_background(&mut surface);

    assert_eq!(
        surface.calls[0],
        DrawCall::Line {
            a: Point::new(72, 0),
            b: Point::new(72, 3),
            stroke_width: 1,
            color: Color::WHITE,
        }
    );
    assert_eq!(
        surface.calls[6],
        DrawCall::Line {
            a: Point::new(72, 168),
            b: Point::new(72, 165),
            stroke_width: 1,
            color: Color::WHITE,
        }
    );
}

#[test]
fn circular_markers_are_all_projected() {
    let mut surface = RecordingSurface::new(180, 180);
    let config = FaceConfig::new(Shape::Circular, ColorMode::Monochrome);
    config.draw_background(&mut surface);

    let center = Point::new(90, 90);
    for (index, call) in surface.calls.iter().enumerate() {
        let angle = AngleUnit::from_fraction(index as u32, 12);
        let spec = config.marker(index as u32);
        assert_eq!(
            *call,
            DrawCall::Line {
                a: project(center, angle, spec.outer),
                b: project(center, angle, spec.inner),
                stroke_width: 1,
                color: Color::WHITE,
            }
        );
    }
}

#[test]
fn cardinal_markers_are_longer_than_the_rest() {
    let config = rect_mono();
    for index in 0..12u32 {
        let spec = config.marker(index);
        let length = spec.outer - spec.inner;
        if index % 3 == 0 {
            assert_eq!(length, 3, "marker {} should be long", index);
        } else {
            assert_eq!(length, 1, "marker {} should be short", index);
        }
    }
}

#[test]
fn hands_draw_in_fixed_z_order_with_hub_on_top() {
    let mut surface = RecordingSurface::new(144, 168);
    rect_mono().draw_hands(&mut surface, ClockReading::new(10, 10, 42));

    assert_eq!(surface.calls.len(), 4);
    let colors: Vec<Color> = surface
        .calls
        .iter()
        .map(|call| match call {
            DrawCall::Line { color, .. } => *color,
            DrawCall::Circle { color, .. } => *color,
        })
        .collect();
    assert_eq!(
        colors,
        vec![
            Color::WHITE,      // second
            Color::LIGHT_GRAY, // minute
            Color::DARK_GRAY,  // hour
            Color::WHITE,      // hub
        ]
    );
    assert_eq!(
        surface.calls[3],
        DrawCall::Circle {
            center: Point::new(72, 84),
            radius: 3,
            color: Color::WHITE,
        }
    );
}

#[test]
fn all_hands_start_at_the_center() {
    let mut surface = RecordingSurface::new(144, 168);
    rect_mono().draw_hands(&mut surface, ClockReading::new(7, 23, 51));

    let center = Point::new(72, 84);
    for call in surface.lines() {
        let DrawCall::Line { a, .. } = call else {
            unreachable!()
        };
        assert_eq!(a, center);
    }
}

#[test]
fn six_thirty_points_minute_and_hour_hands_down() {
    let mut surface = RecordingSurface::new(144, 168);
    let clock = FixedClock(ClockReading::new(6, 30, 0));
    let reading = rect_mono().render(&mut surface, &clock).unwrap();
    assert_eq!(reading, ClockReading::new(6, 30, 0));

    // 12 markers, then second, minute, hour, hub.
    assert_eq!(surface.calls.len(), 16);

    let DrawCall::Line { b: minute_tip, .. } = surface.calls[13] else {
        panic!("expected the minute hand");
    };
    let DrawCall::Line { b: hour_tip, .. } = surface.calls[14] else {
        panic!("expected the hour hand");
    };
    assert_eq!(minute_tip, Point::new(72, 150));
    assert_eq!(hour_tip, Point::new(72, 120));
}

#[test]
fn second_hand_sweeps_the_full_minute_radius() {
    let center = Point::new(72, 84);
    for second in 0..60u8 {
        let mut surface = RecordingSurface::new(144, 168);
        rect_mono().draw_hands(&mut surface, ClockReading::new(0, 0, second));
        let DrawCall::Line { b: tip, .. } = surface.calls[0] else {
            panic!("expected the second hand");
        };
        let dx = (tip.x - center.x) as f64;
        let dy = (tip.y - center.y) as f64;
        let dist = (dx * dx + dy * dy).sqrt();
        assert!(dist <= 67.0 && dist >= 64.0, "second {} at {}", second, dist);
    }
}

#[test]
fn hand_stroke_widths_match_the_face_style() {
    let mut surface = RecordingSurface::new(144, 168);
    rect_mono().draw_hands(&mut surface, ClockReading::new(3, 0, 15));

    let widths: Vec<u32> = surface
        .lines()
        .iter()
        .map(|call| match call {
            DrawCall::Line { stroke_width, .. } => *stroke_width,
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(widths, vec![2, 6, 6]);
}

#[test]
fn failed_time_read_skips_the_frame() {
    let mut surface = RecordingSurface::new(144, 168);
    let result = rect_mono().render(&mut surface, &BrokenClock);
    assert_eq!(result, Err(FaceError::NoTimeAvailable));
    assert!(surface.calls.is_empty());
}
