use std::fs;
use std::path::PathBuf;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use minmins_common::{FaceDisplay, LayoutConfig, debug};

const WIDTH: usize = LayoutConfig::DISPLAY_WIDTH as usize;
const HEIGHT: usize = LayoutConfig::DISPLAY_HEIGHT as usize;

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),
}

/// 144x168 frame buffer. Each flush dumps the frame as a binary PPM.
pub struct FrameBuffer {
    pixels: Vec<Rgb888>,
    path: Option<PathBuf>,
    frames: usize,
}

impl FrameBuffer {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            pixels: vec![Rgb888::BLACK; WIDTH * HEIGHT],
            path,
            frames: 0,
        }
    }

    pub fn to_ppm(&self) -> Vec<u8> {
        let mut out = format!("P6\n{} {}\n255\n", WIDTH, HEIGHT).into_bytes();
        out.reserve(self.pixels.len() * 3);
        for p in &self.pixels {
            out.extend_from_slice(&[p.r(), p.g(), p.b()]);
        }
        out
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb888;
    type Error = FrameError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) {
                if x < WIDTH && y < HEIGHT {
                    self.pixels[y * WIDTH + x] = color;
                }
            }
        }
        Ok(())
    }
}

impl FaceDisplay for FrameBuffer {
    fn flush(&mut self) -> Result<(), Self::Error> {
        self.frames += 1;
        if let Some(path) = &self.path {
            fs::write(path, self.to_ppm())?;
            debug!("Frame {} written to {}", self.frames, path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::Rectangle;

    fn pixel(frame: &FrameBuffer, x: usize, y: usize) -> Option<Rgb888> {
        (x < WIDTH && y < HEIGHT).then(|| frame.pixels[y * WIDTH + x])
    }

    #[test]
    fn test_clipped_drawing() {
        let mut frame = FrameBuffer::new(None);
        frame
            .fill_solid(
                &Rectangle::new(Point::new(140, 160), Size::new(10, 10)),
                Rgb888::RED,
            )
            .unwrap();
        assert_eq!(pixel(&frame, 143, 167), Some(Rgb888::RED));
        assert_eq!(pixel(&frame, 139, 167), Some(Rgb888::BLACK));
        assert_eq!(pixel(&frame, 144, 0), None);
    }

    #[test]
    fn test_ppm_layout() {
        let mut frame = FrameBuffer::new(None);
        frame.clear(Rgb888::WHITE).unwrap();
        frame.flush().unwrap();

        let ppm = frame.to_ppm();
        let header = b"P6\n144 168\n255\n";
        assert!(ppm.starts_with(header));
        assert_eq!(ppm.len(), header.len() + WIDTH * HEIGHT * 3);
        assert!(ppm[header.len()..].iter().all(|b| *b == 255));
        assert_eq!(frame.frames, 1);
    }
}
