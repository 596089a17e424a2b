use egui::ColorImage;
use image::RgbaImage;

use crate::color::Color;
use crate::geometry::Point;

/// Fixed-size RGBA pixel buffer.
///
/// Reads and writes outside `[0, width) x [0, height)` are tolerated: writes are
/// dropped and reads return [`Color::TRANSPARENT`]. Rasterizers rely on this so
/// they never have to clip their own output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    pub fn from_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width: width as usize,
            height: height as usize,
            pixels: image.pixels().map(|p| Color::from(*p)).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Color {
        self.index(x, y)
            .map(|idx| self.pixels[idx])
            .unwrap_or(Color::TRANSPARENT)
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    pub fn get(&self, p: Point) -> Color {
        self.get_pixel(p.x, p.y)
    }

    pub fn set(&mut self, p: Point, color: Color) {
        self.set_pixel(p.x, p.y, color);
    }

    /// Write `color` at every point, skipping the ones that fall outside.
    pub fn plot<I>(&mut self, points: I, color: Color)
    where
        I: IntoIterator<Item = Point>,
    {
        for p in points {
            self.set(p, color);
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Copy every pixel of `source` onto this canvas with its top-left corner at `at`.
    pub fn blit(&mut self, source: &Canvas, at: Point) {
        for sy in 0..source.height {
            for sx in 0..source.width {
                let color = source.pixels[sy * source.width + sx];
                self.set_pixel(at.x + sx as i32, at.y + sy as i32, color);
            }
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Contiguous row-major RGBA bytes, four per pixel.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }

    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            self.get_pixel(x as i32, y as i32).into()
        })
    }

    /// Snapshot suitable for uploading as an egui texture.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied([self.width, self.height], &self.to_rgba_bytes())
    }
}
