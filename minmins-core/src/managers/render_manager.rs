//! 表盘渲染
//!
//! Draws a `FaceView` onto any RGB draw target. A frame is either a full
//! redraw or a repaint of the weather line and the glyph corner.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        iso_8859_1::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Polyline, PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use minmins_common::*;

/// Gap between right-aligned text and the display edge.
const TEXT_MARGIN: i32 = 2;

pub struct FaceRenderer;

impl FaceRenderer {
    /// Repaint what `dirty` names. Returns whether anything was drawn.
    pub fn draw<D>(view: &FaceView<'_>, dirty: DirtySurfaces, target: &mut D) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        if dirty.is_empty() {
            return Ok(false);
        }

        let full = Surface::Background | Surface::Dial | Surface::Minute | Surface::Date;
        if !dirty.is_disjoint(full) {
            Self::draw_full(view, target)?;
            return Ok(true);
        }

        if dirty.contains(Surface::Weather) {
            target.fill_solid(&LayoutConfig::WEATHER_REGION, view.background)?;
            Self::draw_weather(view, target)?;
        }
        if dirty.contains(Surface::Bluetooth) {
            target.fill_solid(&LayoutConfig::BLUETOOTH_REGION, view.background)?;
            Self::draw_glyph(view, target)?;
        }
        Ok(true)
    }

    pub fn draw_full<D>(view: &FaceView<'_>, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        target.clear(view.background)?;

        for mark in LayoutConfig::TICK_MARKS.iter() {
            target.fill_solid(mark, view.foreground)?;
        }

        Self::draw_minute(view, target)?;
        Self::draw_date(view, target)?;
        Self::draw_weather(view, target)?;
        Self::draw_glyph(view, target)?;
        Ok(())
    }

    fn draw_minute<D>(view: &FaceView<'_>, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let frame = view.minute_frame();
        let anchor = frame.top_left + Point::new(frame.size.width as i32 / 2, 2);
        let style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Top)
            .build();
        Text::with_text_style(
            view.minute_text,
            anchor,
            MonoTextStyle::new(&FONT_10X20, view.foreground),
            style,
        )
        .draw(target)?;
        Ok(())
    }

    fn draw_date<D>(view: &FaceView<'_>, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        Self::draw_right_aligned(view.date_text, LayoutConfig::DATE_REGION, view.foreground, target)
    }

    fn draw_weather<D>(view: &FaceView<'_>, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        Self::draw_right_aligned(
            view.weather_text,
            LayoutConfig::WEATHER_REGION,
            view.foreground,
            target,
        )
    }

    fn draw_glyph<D>(view: &FaceView<'_>, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        if !view.bluetooth_visible {
            return Ok(());
        }
        Polyline::new(&LayoutConfig::BLUETOOTH_GLYPH)
            .into_styled(PrimitiveStyle::with_stroke(
                view.foreground,
                LayoutConfig::BLUETOOTH_STROKE,
            ))
            .draw(target)
    }

    fn draw_right_aligned<D>(
        text: &str,
        region: Rectangle,
        color: Rgb888,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let anchor = Point::new(
            region.top_left.x + region.size.width as i32 - TEXT_MARGIN,
            region.top_left.y + TEXT_MARGIN,
        );
        let style = TextStyleBuilder::new()
            .alignment(Alignment::Right)
            .baseline(Baseline::Top)
            .build();
        Text::with_text_style(text, anchor, MonoTextStyle::new(&FONT_6X10, color), style)
            .draw(target)?;
        Ok(())
    }
}
