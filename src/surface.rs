//! The capability seam between the renderer and its host platform.
//!
//! The core only ever talks to a [`Surface`] (two draw primitives plus
//! bounds) and a [`TimeSource`]. `BufferSurface` and `SystemClock` are the
//! concrete host implementations used by the demo binary; tests substitute
//! their own.

use time::OffsetDateTime;

use crate::clock::ClockReading;
use crate::error::FaceError;
use crate::trig::Point;

/// 24-bit RGB. Monochrome surfaces simply get gray levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const LIGHT_GRAY: Color = Color::rgb(170, 170, 170);
    pub const DARK_GRAY: Color = Color::rgb(85, 85, 85);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Perceptual brightness, 0–255.
    pub fn luma(self) -> u8 {
        ((self.r as u32 * 299 + self.g as u32 * 587 + self.b as u32 * 114) / 1000) as u8
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Bounds { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width as i32 / 2, self.height as i32 / 2)
    }
}

/// Drawable surface provided by the host platform.
pub trait Surface {
    fn bounds(&self) -> Bounds;
    fn draw_line(&mut self, a: Point, b: Point, stroke_width: u32, color: Color);
    fn fill_circle(&mut self, center: Point, radius: i32, color: Color);
}

/// Wall-clock reading provided by the host platform.
pub trait TimeSource {
    fn now(&self) -> Result<ClockReading, FaceError>;
}

/// Local wall clock backed by the `time` crate.
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Result<ClockReading, FaceError> {
        let now = OffsetDateTime::now_local()?;
        Ok(ClockReading::new(now.hour(), now.minute(), now.second()))
    }
}

/// In-memory RGB pixel grid, row-major.
pub struct BufferSurface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl BufferSurface {
    pub fn new(width: u32, height: u32) -> Self {
        BufferSurface {
            width,
            height,
            pixels: vec![Color::BLACK; (width * height) as usize],
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.pixels[(y as u32 * self.width + x as u32) as usize] = color;
    }

    // Square pen stamped at every line pixel; plenty for hand strokes.
    fn stamp(&mut self, x: i32, y: i32, stroke_width: u32, color: Color) {
        let half = stroke_width as i32 / 2;
        for dy in -half..=(stroke_width as i32 - 1 - half) {
            for dx in -half..=(stroke_width as i32 - 1 - half) {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }
}

impl Surface for BufferSurface {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    // Bresenham.
    fn draw_line(&mut self, a: Point, b: Point, stroke_width: u32, color: Color) {
        let dx = (b.x - a.x).abs();
        let dy = -(b.y - a.y).abs();
        let sx = if a.x < b.x { 1 } else { -1 };
        let sy = if a.y < b.y { 1 } else { -1 };
        let mut err = dx + dy;
        let mut x = a.x;
        let mut y = a.y;

        loop {
            self.stamp(x, y, stroke_width.max(1), color);
            if x == b.x && y == b.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.set_pixel(center.x + dx, center.y + dy, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_center_truncates_like_the_display() {
        assert_eq!(Bounds::new(144, 168).center(), Point::new(72, 84));
        assert_eq!(Bounds::new(180, 180).center(), Point::new(90, 90));
    }

    #[test]
    fn line_touches_both_endpoints() {
        let mut surface = BufferSurface::new(32, 32);
        surface.draw_line(Point::new(2, 3), Point::new(20, 17), 1, Color::WHITE);
        assert_eq!(surface.pixel(2, 3), Color::WHITE);
        assert_eq!(surface.pixel(20, 17), Color::WHITE);
    }

    #[test]
    fn filled_circle_covers_center_and_respects_radius() {
        let mut surface = BufferSurface::new(32, 32);
        surface.fill_circle(Point::new(16, 16), 3, Color::RED);
        assert_eq!(surface.pixel(16, 16), Color::RED);
        assert_eq!(surface.pixel(16, 13), Color::RED);
        assert_eq!(surface.pixel(16, 12), Color::BLACK);
    }

    #[test]
    fn drawing_clips_at_the_surface_edge() {
        let mut surface = BufferSurface::new(8, 8);
        surface.draw_line(Point::new(-4, 4), Point::new(12, 4), 1, Color::WHITE);
        assert_eq!(surface.pixel(0, 4), Color::WHITE);
        assert_eq!(surface.pixel(7, 4), Color::WHITE);
    }
}
