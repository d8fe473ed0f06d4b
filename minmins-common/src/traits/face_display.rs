use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb888};

/// Drawable surface of the watch. `flush` is called once after each frame.
pub trait FaceDisplay: DrawTarget<Color = Rgb888, Error: core::fmt::Debug> {
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
