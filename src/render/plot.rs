use std::path::Path;

use anyhow::{Context, Result};
use image::RgbImage;
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use log::debug;
use serde::Deserialize;

use super::text::{draw_text, draw_text_vertical, text_width, GLYPH_SIZE};
use crate::color::PlotColors;
use crate::data::model::SpectrumTable;

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    /// Border around the plotting area; holds title, tick labels and axis labels.
    pub margin: u32,
    /// Hue (degrees) of the spectrum line and markers.
    pub series_hue: f32,
    pub marker_radius: u32,
    /// Number of grid divisions along each axis.
    pub grid_divisions: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for PlotStyle {
    fn default() -> Self {
        // 8x6 inches at 100 dpi
        Self {
            width: 800,
            height: 600,
            margin: 70,
            series_hue: 210.0,
            marker_radius: 4,
            grid_divisions: 10,
            title: "WMAP 5-year CMB Temperature Power Spectrum".to_string(),
            x_label: "Multipole l".to_string(),
            y_label: "l(l+1)C_l/(2π) [μK²]".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Data → pixel mapping
// ---------------------------------------------------------------------------

/// Linear mapping from (ℓ, D_ℓ) to pixel coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Frame {
    pub fn fit(points: &[(f64, f64)], style: &PlotStyle) -> Self {
        let (x_min, x_max) = padded_range(points.iter().map(|p| p.0));
        let (y_min, y_max) = padded_range(points.iter().map(|p| p.1));
        let m = style.margin as f64;
        Frame {
            x_min,
            x_max,
            y_min,
            y_max,
            left: m,
            right: (style.width as f64 - 1.0 - m).max(m + 1.0),
            top: m,
            bottom: (style.height as f64 - 1.0 - m).max(m + 1.0),
        }
    }

    pub fn to_pixel(&self, x: f64, y: f64) -> (i32, i32) {
        let fx = (x - self.x_min) / (self.x_max - self.x_min);
        let fy = (y - self.y_min) / (self.y_max - self.y_min);
        let px = self.left + fx * (self.right - self.left);
        let py = self.bottom - fy * (self.bottom - self.top);
        (px.round() as i32, py.round() as i32)
    }

    /// Plotting area as (left, top, right, bottom) pixels.
    pub fn area(&self) -> (i32, i32, i32, i32) {
        (
            self.left as i32,
            self.top as i32,
            self.right as i32,
            self.bottom as i32,
        )
    }

    /// Evenly spaced (value, pixel) ticks on each axis, ends included.
    fn ticks(&self, divisions: u32) -> (Vec<(f64, i32)>, Vec<(f64, i32)>) {
        let n = divisions.max(1);
        let xs = (0..=n)
            .map(|i| {
                let v = self.x_min + (self.x_max - self.x_min) * i as f64 / n as f64;
                (v, self.to_pixel(v, self.y_min).0)
            })
            .collect();
        let ys = (0..=n)
            .map(|i| {
                let v = self.y_min + (self.y_max - self.y_min) * i as f64 / n as f64;
                (v, self.to_pixel(self.x_min, v).1)
            })
            .collect();
        (xs, ys)
    }
}

/// Data range with 5% head-room; a flat series gets a unit window.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let range = max - min;
    if range.abs() < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        (min - 0.05 * range, max + 0.05 * range)
    }
}

fn tick_label(v: f64) -> String {
    if v.abs() >= 100.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

// ---------------------------------------------------------------------------
// Power-spectrum plot
// ---------------------------------------------------------------------------

/// Rasterise ℓ(ℓ+1)C_ℓ/(2π) against ℓ: grid, tick labels, axis labels,
/// title, a line through the points and circular markers.
pub fn render_power_spectrum(table: &SpectrumTable, style: &PlotStyle) -> RgbImage {
    let colors = PlotColors::from_hue(style.series_hue);
    let points = table.band_powers();
    let frame = Frame::fit(&points, style);
    let mut img = RgbImage::from_pixel(style.width, style.height, colors.background);
    let (left, top, right, bottom) = frame.area();
    let glyph = GLYPH_SIZE as i32;

    let (x_ticks, y_ticks) = frame.ticks(style.grid_divisions);
    let last = x_ticks.len() - 1;
    for (i, &(value, px)) in x_ticks.iter().enumerate() {
        if i != 0 && i != last {
            draw_line_segment_mut(
                &mut img,
                (px as f32, top as f32),
                (px as f32, bottom as f32),
                colors.grid,
            );
        }
        let label = tick_label(value);
        let w = text_width(&label, 1) as i32;
        draw_text(&mut img, (px - w / 2, bottom + 6), 1, &label, colors.axis);
    }
    for (i, &(value, py)) in y_ticks.iter().enumerate() {
        if i != 0 && i != last {
            draw_line_segment_mut(
                &mut img,
                (left as f32, py as f32),
                (right as f32, py as f32),
                colors.grid,
            );
        }
        let label = tick_label(value);
        let w = text_width(&label, 1) as i32;
        draw_text(&mut img, (left - 6 - w, py - glyph / 2), 1, &label, colors.axis);
    }

    draw_hollow_rect_mut(
        &mut img,
        Rect::at(left, top).of_size((right - left + 1) as u32, (bottom - top + 1) as u32),
        colors.axis,
    );

    let title_w = text_width(&style.title, 2) as i32;
    let title_y = (top - 2 * glyph) / 2;
    draw_text(
        &mut img,
        ((left + right - title_w) / 2, title_y),
        2,
        &style.title,
        colors.axis,
    );

    let x_label_w = text_width(&style.x_label, 1) as i32;
    draw_text(
        &mut img,
        ((left + right - x_label_w) / 2, bottom + 6 + glyph + 10),
        1,
        &style.x_label,
        colors.axis,
    );

    let y_label_h = text_width(&style.y_label, 1) as i32;
    draw_text_vertical(
        &mut img,
        (6, (top + bottom + y_label_h) / 2),
        1,
        &style.y_label,
        colors.axis,
    );

    let pixels: Vec<(i32, i32)> = points
        .iter()
        .map(|&(x, y)| frame.to_pixel(x, y))
        .collect();

    for pair in pixels.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        for (ox, oy) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)] {
            draw_line_segment_mut(
                &mut img,
                (a.0 as f32 + ox, a.1 as f32 + oy),
                (b.0 as f32 + ox, b.1 as f32 + oy),
                colors.line,
            );
        }
    }
    for &p in &pixels {
        draw_filled_circle_mut(&mut img, p, style.marker_radius as i32, colors.marker);
    }

    img
}

/// Render and write the plot as PNG, creating parent directories.
pub fn save_power_spectrum(table: &SpectrumTable, style: &PlotStyle, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let img = render_power_spectrum(table, style);
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("writing plot {}", path.display()))?;
    debug!("Plot {}x{} written to {}", img.width(), img.height(), path.display());
    Ok(())
}
