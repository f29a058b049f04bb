//! Fixed-point angle projection.
//!
//! All angles are raw ticks of a full revolution (`FULL_TURN` ticks per turn),
//! and sine/cosine come from a scaled quarter-wave lookup table, matching the
//! precision of embedded graphics stacks. No floating point anywhere.

/// Raw angle ticks in one full revolution.
pub const FULL_TURN: i32 = 0x10000;

/// Amplitude of the lookup table: `sin(quarter turn) == TRIG_SCALE`.
pub const TRIG_SCALE: i32 = 0x10000;

/// Integer point in surface-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// A fraction of a full revolution, stored as raw ticks in `[0, FULL_TURN)`.
///
/// 0 points "up" (12 o'clock) and increasing values sweep clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AngleUnit(i32);

impl AngleUnit {
    pub const ZERO: AngleUnit = AngleUnit(0);

    /// `numerator / period` of a full turn, wrapped modulo one revolution.
    pub fn from_fraction(numerator: u32, period: u32) -> Self {
        let wrapped = (numerator % period) as u64;
        AngleUnit((wrapped * FULL_TURN as u64 / period as u64) as i32)
    }

    pub fn raw(self) -> i32 {
        self.0
    }
}

// Quarter-wave sine, 65 entries at FULL_TURN/256 tick steps, scaled by
// TRIG_SCALE. Entry 64 is exactly TRIG_SCALE so the quadrant boundaries
// come out exact.
static SIN_QUARTER: [i32; 65] = [
    0, 1608, 3216, 4821, 6424, 8022, 9616, 11204,
    12785, 14359, 15924, 17479, 19024, 20557, 22078, 23586,
    25080, 26558, 28020, 29466, 30893, 32303, 33692, 35062,
    36410, 37736, 39040, 40320, 41576, 42806, 44011, 45190,
    46341, 47464, 48559, 49624, 50660, 51665, 52639, 53581,
    54491, 55368, 56212, 57022, 57798, 58538, 59244, 59914,
    60547, 61145, 61705, 62228, 62714, 63162, 63572, 63944,
    64277, 64571, 64827, 65043, 65220, 65358, 65457, 65516,
    65536,
];

const QUARTER: i32 = FULL_TURN / 4;
const STEP: i32 = FULL_TURN / 256;

// Linear interpolation within the first quadrant, 0 <= ticks <= QUARTER.
fn sin_first_quadrant(ticks: i32) -> i32 {
    let index = (ticks / STEP) as usize;
    let frac = ticks % STEP;
    let lo = SIN_QUARTER[index];
    if frac == 0 {
        return lo;
    }
    let hi = SIN_QUARTER[index + 1];
    lo + (hi - lo) * frac / STEP
}

/// Sine of a raw angle, scaled by `TRIG_SCALE`.
pub fn sin_lookup(angle: i32) -> i32 {
    let ticks = angle.rem_euclid(FULL_TURN);
    match ticks / QUARTER {
        0 => sin_first_quadrant(ticks),
        1 => sin_first_quadrant(FULL_TURN / 2 - ticks),
        2 => -sin_first_quadrant(ticks - FULL_TURN / 2),
        _ => -sin_first_quadrant(FULL_TURN - ticks),
    }
}

/// Cosine of a raw angle, scaled by `TRIG_SCALE`.
pub fn cos_lookup(angle: i32) -> i32 {
    sin_lookup(angle + QUARTER)
}

/// Maps an angle and radius to a point relative to `center`.
///
/// Negative cosine on the y axis so that angle 0 lands directly above the
/// center and increasing angles sweep clockwise. Division truncates toward
/// zero; sub-pixel precision is not needed on these displays.
pub fn project(center: Point, angle: AngleUnit, radius: i32) -> Point {
    Point {
        x: center.x + sin_lookup(angle.raw()) * radius / TRIG_SCALE,
        y: center.y - cos_lookup(angle.raw()) * radius / TRIG_SCALE,
    }
}
