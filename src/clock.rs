use crate::trig::AngleUnit;

/// A wall-clock time of day, read once per redraw and discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockReading {
    /// 0–23
    pub hour: u8,
    /// 0–59
    pub minute: u8,
    /// 0–59
    pub second: u8,
}

impl ClockReading {
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        ClockReading {
            hour,
            minute,
            second,
        }
    }

    /// Hour-hand angle on a 12-hour face.
    pub fn hour_angle(&self) -> AngleUnit {
        AngleUnit::from_fraction(self.hour as u32 % 12, 12)
    }

    pub fn minute_angle(&self) -> AngleUnit {
        AngleUnit::from_fraction(self.minute as u32, 60)
    }

    pub fn second_angle(&self) -> AngleUnit {
        AngleUnit::from_fraction(self.second as u32, 60)
    }
}
