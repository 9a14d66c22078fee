//! Pixel-to-glyph quantization.
//!
//! Luminance follows the Rec.709 weighting; the glyph ramp is a fixed
//! constant of the system and runs dark to light, so low luminance selects
//! the densest glyph. Near-transparent pixels short-circuit to a blank before
//! any luminance math.

/// Fixed ordered glyph ramp, darkest to lightest. Index 0 is the densest
/// glyph; the last index is blank.
pub const GLYPH_RAMP: &str = "@%#*+=-:. ";

/// Alpha threshold below which a pixel maps to a blank glyph.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 16;

/// Rec.709 relative luminance of an RGB8 triple, normalized to `[0, 1]`.
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f32 {
    (0.2126 * f32::from(r) + 0.7152 * f32::from(g) + 0.0722 * f32::from(b)) / 255.0
}

/// Map a normalized luminance to an index into [`GLYPH_RAMP`].
///
/// Out-of-range inputs clamp to the nearest ramp end.
pub fn glyph_index(luma: f32) -> usize {
    let max = GLYPH_RAMP.len() - 1;
    let idx = (luma.clamp(0.0, 1.0) * max as f32).round() as usize;
    idx.min(max)
}

/// Quantize one straight-alpha RGBA8 pixel to a glyph.
///
/// Pixels with alpha below `alpha_threshold` become a space regardless of
/// color.
pub fn glyph_for_pixel(px: [u8; 4], alpha_threshold: u8) -> char {
    if px[3] < alpha_threshold {
        return ' ';
    }
    let idx = glyph_index(relative_luminance(px[0], px[1], px[2]));
    // The ramp is pure ASCII, so byte indexing is char indexing.
    GLYPH_RAMP.as_bytes()[idx] as char
}

#[cfg(test)]
#[path = "../../tests/unit/quantize/luma.rs"]
mod tests;
