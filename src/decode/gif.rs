//! Adapter from the external GIF bitstream decoder to the core input
//! contract.
//!
//! LZW decompression and block parsing live in the `gif` crate; this module
//! only translates its per-frame output (pixel patch, placement offset,
//! disposal tag, delay) into [`PatchFrame`]s.

use anyhow::Context;
use gif::{ColorOutput, DecodeOptions, DisposalMethod};

use crate::{
    foundation::core::{AnimationSequence, Canvas, DisposalPolicy, PatchFrame, RasterFrame},
    foundation::error::GlyphcastResult,
    pipeline::convert::{ConvertOptions, convert},
};

/// A decoded animation: the declared logical canvas size plus the ordered
/// patch list.
#[derive(Clone, Debug)]
pub struct DecodedAnimation {
    /// Logical canvas dimensions declared by the stream.
    pub canvas: Canvas,
    /// Decoded patch frames in source order.
    pub patches: Vec<PatchFrame>,
}

/// Decode a complete GIF byte stream into patch frames.
///
/// Frame buffers are requested as straight-alpha RGBA, so each patch is
/// exactly the raster the compositor consumes. GIF delays are reported in
/// 10 ms units; a zero delay is treated as unspecified.
pub fn decode_gif(bytes: &[u8]) -> GlyphcastResult<DecodedAnimation> {
    let mut options = DecodeOptions::new();
    options.set_color_output(ColorOutput::RGBA);
    let mut reader = options
        .read_info(std::io::Cursor::new(bytes))
        .context("read gif stream info")?;

    let canvas = Canvas::new(u32::from(reader.width()), u32::from(reader.height()));
    let mut patches = Vec::new();
    while let Some(frame) = reader.read_next_frame().context("decode gif frame")? {
        let raster = RasterFrame::from_rgba8(
            u32::from(frame.width),
            u32::from(frame.height),
            frame.buffer.to_vec(),
        )?;
        patches.push(PatchFrame {
            raster,
            offset_x: u32::from(frame.left),
            offset_y: u32::from(frame.top),
            disposal: map_disposal(frame.dispose),
            delay_ms: (frame.delay != 0).then(|| u32::from(frame.delay) * 10),
        });
    }

    Ok(DecodedAnimation { canvas, patches })
}

/// Decode a GIF byte stream and convert it to a glyph animation in one call.
pub fn convert_gif(bytes: &[u8], opts: &ConvertOptions) -> GlyphcastResult<AnimationSequence> {
    let decoded = decode_gif(bytes)?;
    convert(&decoded.patches, decoded.canvas, opts)
}

fn map_disposal(dispose: DisposalMethod) -> DisposalPolicy {
    match dispose {
        DisposalMethod::Background => DisposalPolicy::RestoreBackground,
        DisposalMethod::Previous => DisposalPolicy::RestorePrevious,
        DisposalMethod::Any | DisposalMethod::Keep => DisposalPolicy::Keep,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/decode/gif.rs"]
mod tests;
