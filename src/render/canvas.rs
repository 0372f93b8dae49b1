use crate::foundation::core::Rgb;
use crate::foundation::error::{TilepaintError, TilepaintResult};

/// Fixed-size framebuffer of linear [`Rgb`] accumulators, row-major.
///
/// One canvas is exclusively owned by one [`crate::Renderer`]. It is reset to
/// opaque black at the start of every render invocation so repeated renders
/// of the same scene are independent and reproducible.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Canvas {
    /// Allocate a canvas with every pixel at the background color.
    pub fn new(width: u32, height: u32) -> TilepaintResult<Self> {
        if width == 0 || height == 0 {
            return Err(TilepaintError::validation(format!(
                "canvas dimensions must be > 0, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read one pixel. Panics if `(x, y)` is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Raw row-major pixel data, for persistence collaborators.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Reset every pixel to the opaque black background.
    pub(crate) fn clear(&mut self) {
        self.pixels.fill(Rgb::BLACK);
    }

    /// Export the canvas as an 8-bit RGB image.
    ///
    /// Channels are clamped to `[0, 1]` and quantized; no file IO happens
    /// here, encoding is the caller's concern.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        let mut img = image::RgbImage::new(self.width, self.height);
        for (i, px) in self.pixels.iter().enumerate() {
            let x = (i % self.width as usize) as u32;
            let y = (i / self.width as usize) as u32;
            img.put_pixel(x, y, image::Rgb([quantize(px.r), quantize(px.g), quantize(px.b)]));
        }
        img
    }
}

fn quantize(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
