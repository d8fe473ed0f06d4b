use embedded_graphics::{
    geometry::{Point, Size},
    pixelcolor::Rgb888,
    primitives::Rectangle,
};
use enumset::{EnumSet, EnumSetType};

/// Independently invalidated parts of the face.
#[derive(EnumSetType, Debug)]
pub enum Surface {
    Background,
    Dial,
    Minute,
    Date,
    Weather,
    Bluetooth,
}

/// Surfaces waiting for a redraw.
pub type DirtySurfaces = EnumSet<Surface>;

pub struct LayoutConfig;

impl LayoutConfig {
    pub const DISPLAY_WIDTH: u32 = 144;
    pub const DISPLAY_HEIGHT: u32 = 168;

    // 区域定义
    pub const MINUTE_SIZE: Size = Size::new(24, 24);

    pub const DATE_REGION: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(144, 14));

    pub const WEATHER_REGION: Rectangle =
        Rectangle::new(Point::new(0, 152), Size::new(144, 14));

    pub const BLUETOOTH_REGION: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(30, 30));

    /// Dots at 12, 3, 6 and 9 o'clock.
    pub const TICK_MARKS: [Rectangle; 4] = [
        Rectangle::new(Point::new(70, 37), Size::new(3, 3)),
        Rectangle::new(Point::new(109, 82), Size::new(4, 4)),
        Rectangle::new(Point::new(70, 128), Size::new(3, 3)),
        Rectangle::new(Point::new(30, 82), Size::new(4, 4)),
    ];

    /// Outline of the "disconnected" glyph, drawn as one polyline.
    pub const BLUETOOTH_GLYPH: [Point; 9] = [
        Point::new(3, 26),
        Point::new(26, 3),
        Point::new(14, 15),
        Point::new(14, 26),
        Point::new(20, 20),
        Point::new(9, 9),
        Point::new(14, 14),
        Point::new(14, 3),
        Point::new(20, 9),
    ];
    pub const BLUETOOTH_STROKE: u32 = 3;
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceView<'a> {
    pub background: Rgb888,
    pub foreground: Rgb888,
    /// Top-left corner of the minute surface
    pub placement: Point,
    pub minute_text: &'a str,
    pub date_text: &'a str,
    pub weather_text: &'a str,
    pub bluetooth_visible: bool,
}

impl FaceView<'_> {
    pub fn minute_frame(&self) -> Rectangle {
        Rectangle::new(self.placement, LayoutConfig::MINUTE_SIZE)
    }
}
