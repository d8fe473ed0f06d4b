use embedded_graphics::geometry::Point;
use minmins_common::*;

/// Pixels every dial position is lifted by.
pub const PLACEMENT_SHIFT: i32 = 6;

const fn dial(x: i32, y: i32) -> Point {
    Point::new(x, y - PLACEMENT_SHIFT)
}

/// Top-left corner of the minute surface for clock positions 1..=12.
const DIAL_POSITIONS: [Point; 12] = [
    dial(84, 24),
    dial(105, 48),
    dial(113, 72),
    dial(105, 96),
    dial(84, 120),
    dial(59, 131),
    dial(34, 120),
    dial(13, 96),
    dial(5, 72),
    dial(12, 48),
    dial(34, 24),
    dial(59, 13),
];

/// Clock position (1..=12) for a 24h hour, `None` outside 0..=23.
pub fn clock_position(hour: u8) -> Option<u8> {
    if hour > 23 {
        return None;
    }
    match hour % 12 {
        0 => Some(12),
        h => Some(h),
    }
}

/// Where the minute surface sits for `hour`.
pub fn place(hour: u8) -> Option<Point> {
    clock_position(hour).map(|pos| DIAL_POSITIONS[usize::from(pos - 1)])
}

/// Keeps the last valid placement across bad samples.
pub struct RadialMapper {
    current: Point,
}

impl RadialMapper {
    pub fn new() -> Self {
        Self {
            current: DIAL_POSITIONS[11],
        }
    }

    pub fn update(&mut self, hour: u8) -> Point {
        match place(hour) {
            Some(point) => self.current = point,
            None => warn!("Hour {} out of range, keeping previous placement", hour),
        }
        self.current
    }

    pub fn current(&self) -> Point {
        self.current
    }
}

impl Default for RadialMapper {
    fn default() -> Self {
        Self::new()
    }
}
