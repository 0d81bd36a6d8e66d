use image::{Rgb, RgbImage};

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb(color.to_array())
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self { r, g, b }
    }
}

/// Fixed-size RGB raster that every drawing step paints into.
///
/// Writes outside the canvas are clipped silently.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
    background: Color,
}

impl Canvas {
    /// Creates a canvas with every pixel set to `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background.into()),
            background,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.contains(x, y)
            .then(|| Color::from(*self.image.get_pixel(x as u32, y as u32)))
    }

    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.contains(x, y) {
            self.image.put_pixel(x as u32, y as u32, color.into());
        }
    }

    /// Composites `color` over the pixel at `(x, y)` with an 8-bit coverage.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: u8) {
        if coverage == 0 || !self.contains(x, y) {
            return;
        }
        if coverage == u8::MAX {
            self.image.put_pixel(x as u32, y as u32, color.into());
            return;
        }

        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        let sa = u16::from(coverage);
        let inv = 255 - sa;
        let src = color.to_array();
        for (dst, src) in pixel.0.iter_mut().zip(src) {
            let dc = u16::from(*dst);
            *dst = ((u16::from(src) * sa + dc * inv + 127) / 255) as u8;
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub(crate) fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::rgb(15, 23, 42);

    #[test]
    fn new_canvas_is_filled_with_background() {
        let canvas = Canvas::new(240, 240, BG);
        assert_eq!(canvas.width(), 240);
        assert_eq!(canvas.height(), 240);
        assert!(canvas.image().pixels().all(|p| Color::from(*p) == BG));
    }

    #[test]
    fn writes_outside_are_clipped() {
        let mut canvas = Canvas::new(4, 4, BG);
        canvas.put_pixel(-1, 0, Color::rgb(255, 0, 0));
        canvas.put_pixel(4, 4, Color::rgb(255, 0, 0));
        canvas.blend_pixel(10, 1, Color::rgb(255, 0, 0), 128);
        assert!(canvas.image().pixels().all(|p| Color::from(*p) == BG));
        assert_eq!(canvas.pixel(-1, 0), None);
    }

    #[test]
    fn blend_interpolates_between_colors() {
        let mut canvas = Canvas::new(1, 1, Color::rgb(0, 0, 0));
        canvas.blend_pixel(0, 0, Color::rgb(255, 255, 255), 128);
        assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(128, 128, 128)));

        canvas.blend_pixel(0, 0, Color::rgb(10, 20, 30), 255);
        assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(10, 20, 30)));
    }
}
