use image::Rgb;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// HSL → 8-bit RGB
// ---------------------------------------------------------------------------

/// Convert an HSL triple (hue in degrees, saturation/lightness in 0..=1).
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Rgb<u8> {
    let hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = hsl.into_color();
    Rgb([
        (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    ])
}

// ---------------------------------------------------------------------------
// Plot colour scheme
// ---------------------------------------------------------------------------

/// Colours used by the spectrum plot, all derived from one series hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotColors {
    pub background: Rgb<u8>,
    pub grid: Rgb<u8>,
    pub axis: Rgb<u8>,
    pub line: Rgb<u8>,
    pub marker: Rgb<u8>,
}

impl PlotColors {
    pub fn from_hue(hue: f32) -> Self {
        PlotColors {
            background: Rgb([255, 255, 255]),
            grid: hsl_to_rgb(0.0, 0.0, 0.88),
            axis: hsl_to_rgb(0.0, 0.0, 0.15),
            line: hsl_to_rgb(hue, 0.75, 0.55),
            marker: hsl_to_rgb(hue, 0.75, 0.35),
        }
    }
}
