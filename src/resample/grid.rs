//! Raster-to-character-grid downsampling.

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::{
    foundation::core::{CharacterGrid, RasterFrame},
    foundation::error::{GlyphcastError, GlyphcastResult},
    quantize::luma::glyph_for_pixel,
};

/// Character rows for a given source aspect ratio and output width.
///
/// The 0.5 factor compensates for terminal glyphs being roughly twice as tall
/// as they are wide. Degenerate inputs floor to one row/column.
pub fn grid_height(src_width: u32, src_height: u32, output_width: u32) -> u32 {
    let output_width = output_width.max(1);
    if src_width == 0 || src_height == 0 {
        return 1;
    }
    let h = (f64::from(src_height) / f64::from(src_width)) * f64::from(output_width) * 0.5;
    (h.round() as u32).max(1)
}

/// Downsample a raster to `output_width` columns and quantize every pixel to
/// a glyph.
///
/// Scaling uses a fixed linear filter, so the same raster and width always
/// produce a byte-identical grid. Rows are joined left-to-right, top-to-
/// bottom: `grid_height` strings of `output_width` glyphs each.
pub fn resample_to_grid(
    frame: &RasterFrame,
    output_width: u32,
    alpha_threshold: u8,
) -> GlyphcastResult<CharacterGrid> {
    let output_width = output_width.max(1);
    let output_height = grid_height(frame.width(), frame.height(), output_width);

    if frame.is_empty() {
        let blank = " ".repeat(output_width as usize);
        return Ok(CharacterGrid::from_rows(vec![
            blank;
            output_height as usize
        ]));
    }

    let src = RgbaImage::from_raw(frame.width(), frame.height(), frame.rgba8().to_vec())
        .ok_or_else(|| GlyphcastError::validation("raster buffer does not match its dimensions"))?;
    let scaled = imageops::resize(&src, output_width, output_height, FilterType::Triangle);

    let mut rows = Vec::with_capacity(output_height as usize);
    for y in 0..output_height {
        let mut row = String::with_capacity(output_width as usize);
        for x in 0..output_width {
            row.push(glyph_for_pixel(scaled.get_pixel(x, y).0, alpha_threshold));
        }
        rows.push(row);
    }
    Ok(CharacterGrid::from_rows(rows))
}

#[cfg(test)]
#[path = "../../tests/unit/resample/grid.rs"]
mod tests;
