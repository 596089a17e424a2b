use egui::Color32;
use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) RGBA color with 8-bit channels.
///
/// Alpha 0 marks a pixel that has not been painted yet, or has been erased.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<[u8; 4]> for Color {
    fn from(channels: [u8; 4]) -> Self {
        Self::from_array(channels)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(pixel: image::Rgba<u8>) -> Self {
        Self::from_array(pixel.0)
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        image::Rgba(color.to_array())
    }
}

// egui stores premultiplied colors, so these conversions can lose precision
// for translucent values.
impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

impl From<Color32> for Color {
    fn from(color: Color32) -> Self {
        Self::from_array(color.to_srgba_unmultiplied())
    }
}

/// The fixed palette offered by the toolbox when no configuration overrides it.
pub fn default_palette() -> Vec<Color> {
    vec![
        Color::rgb(0, 0, 0),
        Color::rgb(29, 43, 83),
        Color::rgb(126, 37, 83),
        Color::rgb(0, 135, 81),
        Color::rgb(171, 82, 54),
        Color::rgb(95, 87, 79),
        Color::rgb(194, 195, 199),
        Color::rgb(255, 241, 232),
        Color::rgb(255, 0, 77),
        Color::rgb(255, 163, 0),
        Color::rgb(255, 236, 39),
        Color::rgb(0, 228, 54),
        Color::rgb(41, 173, 255),
        Color::rgb(131, 118, 156),
        Color::rgb(255, 119, 168),
        Color::rgb(255, 204, 170),
    ]
}
