//! The one-pass conversion pipeline: composite, resample, quantize, collect.

use rayon::prelude::*;

use crate::{
    composite::canvas::{LogicalCanvas, composite_patch},
    foundation::core::{AnimationSequence, Canvas, PatchFrame, RasterFrame},
    foundation::error::{GlyphcastError, GlyphcastResult},
    quantize::luma::DEFAULT_ALPHA_THRESHOLD,
    resample::grid::resample_to_grid,
};

/// Output shaping options for [`convert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Output character-grid width; clamped to at least one column.
    pub output_width: u32,
    /// Pixels with alpha below this value map to a blank glyph.
    pub alpha_threshold: u8,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output_width: 80,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
        }
    }
}

/// Threading configuration for [`convert_with_threading`].
///
/// Compositing is inherently sequential (the canvas is a stateful
/// accumulator); only the per-snapshot resample/quantize stage parallelizes,
/// and it preserves frame order, so output is byte-identical to the
/// sequential path.
#[derive(Clone, Debug, Default)]
pub struct ConvertThreading {
    /// Resample and quantize snapshots on a rayon pool.
    pub parallel: bool,
    /// Worker count; `None` uses rayon's default.
    pub threads: Option<usize>,
}

/// Convert decoded patch frames into a glyph animation in one synchronous
/// pass.
///
/// Patches are composited strictly in source order onto a canvas of the
/// declared logical size; every reconstructed frame is downsampled to
/// `opts.output_width` columns and quantized. No reordering, no frame
/// dropping; an empty patch list yields an empty (valid) sequence.
#[tracing::instrument(skip(patches), fields(frames = patches.len()))]
pub fn convert(
    patches: &[PatchFrame],
    canvas: Canvas,
    opts: &ConvertOptions,
) -> GlyphcastResult<AnimationSequence> {
    let mut logical = LogicalCanvas::new(canvas);
    let mut frames = Vec::with_capacity(patches.len());
    for patch in patches {
        let (next, snapshot) = composite_patch(logical, patch);
        logical = next;
        frames.push(resample_to_grid(
            &snapshot,
            opts.output_width,
            opts.alpha_threshold,
        )?);
    }
    Ok(AnimationSequence::new(frames))
}

/// [`convert`] with an optional parallel resample stage.
#[tracing::instrument(skip(patches, threading), fields(frames = patches.len()))]
pub fn convert_with_threading(
    patches: &[PatchFrame],
    canvas: Canvas,
    opts: &ConvertOptions,
    threading: &ConvertThreading,
) -> GlyphcastResult<AnimationSequence> {
    if !threading.parallel {
        return convert(patches, canvas, opts);
    }

    let pool = build_thread_pool(threading.threads)?;
    let snapshots = composite_all(patches, canvas);
    let frames = pool.install(|| {
        snapshots
            .par_iter()
            .map(|snapshot| resample_to_grid(snapshot, opts.output_width, opts.alpha_threshold))
            .collect::<GlyphcastResult<Vec<_>>>()
    })?;
    Ok(AnimationSequence::new(frames))
}

fn composite_all(patches: &[PatchFrame], canvas: Canvas) -> Vec<RasterFrame> {
    let mut logical = LogicalCanvas::new(canvas);
    let mut snapshots = Vec::with_capacity(patches.len());
    for patch in patches {
        let (next, snapshot) = composite_patch(logical, patch);
        logical = next;
        snapshots.push(snapshot);
    }
    snapshots
}

fn build_thread_pool(threads: Option<usize>) -> GlyphcastResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(GlyphcastError::validation(
            "convert threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| GlyphcastError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/convert.rs"]
mod tests;
