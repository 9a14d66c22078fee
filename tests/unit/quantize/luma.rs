use super::*;

#[test]
fn ramp_runs_dark_to_light() {
    assert_eq!(GLYPH_RAMP.len(), 10);
    assert_eq!(GLYPH_RAMP.as_bytes()[0], b'@');
    assert_eq!(GLYPH_RAMP.as_bytes()[GLYPH_RAMP.len() - 1], b' ');
}

#[test]
fn transparent_pixel_is_blank_regardless_of_color() {
    for rgb in [[0u8, 0, 0], [255, 255, 255], [255, 0, 0], [12, 200, 99]] {
        for alpha in [0u8, 1, 15] {
            let px = [rgb[0], rgb[1], rgb[2], alpha];
            assert_eq!(glyph_for_pixel(px, DEFAULT_ALPHA_THRESHOLD), ' ');
        }
    }
}

#[test]
fn alpha_at_threshold_is_not_blanked() {
    assert_eq!(glyph_for_pixel([0, 0, 0, 16], DEFAULT_ALPHA_THRESHOLD), '@');
}

#[test]
fn zero_threshold_never_blanks() {
    assert_eq!(glyph_for_pixel([0, 0, 0, 0], 0), '@');
}

#[test]
fn black_maps_to_densest_glyph_and_white_to_blank() {
    assert_eq!(glyph_for_pixel([0, 0, 0, 255], DEFAULT_ALPHA_THRESHOLD), '@');
    assert_eq!(
        glyph_for_pixel([255, 255, 255, 255], DEFAULT_ALPHA_THRESHOLD),
        ' '
    );
}

#[test]
fn glyph_index_is_monotone_in_luminance() {
    let mut last = 0usize;
    for gray in 0u8..=255 {
        let idx = glyph_index(relative_luminance(gray, gray, gray));
        assert!(idx >= last, "index regressed at gray={gray}");
        last = idx;
    }
    assert_eq!(last, GLYPH_RAMP.len() - 1);
}

#[test]
fn glyph_index_clamps_out_of_range() {
    assert_eq!(glyph_index(-0.5), 0);
    assert_eq!(glyph_index(1.5), GLYPH_RAMP.len() - 1);
}

#[test]
fn rec709_channel_weights() {
    assert!((relative_luminance(255, 0, 0) - 0.2126).abs() < 1e-3);
    assert!((relative_luminance(0, 255, 0) - 0.7152).abs() < 1e-3);
    assert!((relative_luminance(0, 0, 255) - 0.0722).abs() < 1e-3);
    assert!((relative_luminance(255, 255, 255) - 1.0).abs() < 1e-3);
}

#[test]
fn midtone_gray_lands_mid_ramp() {
    let idx = glyph_index(relative_luminance(128, 128, 128));
    assert!(idx > 0 && idx < GLYPH_RAMP.len() - 1);
}
