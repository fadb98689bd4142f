use font8x8::{UnicodeFonts, BASIC_FONTS, GREEK_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

// ---------------------------------------------------------------------------
// 8x8 bitmap text for axis labels and titles
// ---------------------------------------------------------------------------

/// Glyph edge length before scaling.
pub const GLYPH_SIZE: u32 = 8;

/// Bitmap for `c`; characters outside ASCII, Latin-1 and Greek render as `?`.
pub fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| GREEK_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_SIZE * scale
}

/// Lit pixels of `c` as (column, row) in glyph space. Bit 0 is the leftmost column.
fn lit_pixels(c: char) -> impl Iterator<Item = (i32, i32)> {
    let rows = glyph(c);
    (0..8).flat_map(move |row| {
        (0..8)
            .filter(move |col| rows[row as usize] & (1 << col) != 0)
            .map(move |col| (col, row))
    })
}

fn dot(img: &mut RgbImage, x: i32, y: i32, scale: u32, color: Rgb<u8>) {
    draw_filled_rect_mut(img, Rect::at(x, y).of_size(scale, scale), color);
}

/// Horizontal text with its top-left corner at `origin`.
pub fn draw_text(img: &mut RgbImage, origin: (i32, i32), scale: u32, text: &str, color: Rgb<u8>) {
    let s = scale.max(1);
    let advance = (GLYPH_SIZE * s) as i32;
    for (i, c) in text.chars().enumerate() {
        let x0 = origin.0 + i as i32 * advance;
        for (col, row) in lit_pixels(c) {
            dot(img, x0 + col * s as i32, origin.1 + row * s as i32, s, color);
        }
    }
}

/// Text rotated a quarter turn counter-clockwise, read bottom to top.
/// `origin` is the bottom-left corner of the rotated run.
pub fn draw_text_vertical(
    img: &mut RgbImage,
    origin: (i32, i32),
    scale: u32,
    text: &str,
    color: Rgb<u8>,
) {
    let s = scale.max(1) as i32;
    let advance = GLYPH_SIZE as i32 * s;
    for (i, c) in text.chars().enumerate() {
        let along = i as i32 * advance;
        for (col, row) in lit_pixels(c) {
            let x = origin.0 + row * s;
            let y = origin.1 - along - (col + 1) * s;
            dot(img, x, y, s as u32, color);
        }
    }
}
