//! Frame reconstruction onto the persistent logical canvas.
//!
//! GIF-style animation is incremental: each decoded patch covers only the
//! rectangle that changed, and a disposal policy says what happens to that
//! rectangle afterwards. The canvas accumulates patches in source order and
//! hands full-frame snapshots to the downstream stages.

use crate::foundation::core::{Canvas, DisposalPolicy, PatchFrame, RasterFrame};

/// The persistent full-size raster that accumulates composited patches.
///
/// Owned exclusively by the conversion pass and threaded through it by value;
/// downstream stages only ever see owned [`RasterFrame`] snapshots.
#[derive(Clone, Debug)]
pub struct LogicalCanvas {
    width: u32,
    height: u32,
    rgba8: Vec<u8>,
}

impl LogicalCanvas {
    /// Fully transparent canvas at the animation's logical size.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            rgba8: vec![0u8; canvas.pixel_count() * 4],
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Overwrite the patch rectangle with the patch pixels.
    ///
    /// The write is a direct overwrite, not a blend; pixels outside the
    /// rectangle are untouched. The rectangle is clipped against the canvas
    /// bounds, so an out-of-bounds or empty patch never panics.
    pub fn blit_patch(&mut self, patch: &PatchFrame) {
        let Some(clip) = self.clip_rect(patch) else {
            return;
        };
        let patch_width = patch.raster.width() as usize;
        for row in 0..clip.rows {
            let src_start = row * patch_width * 4;
            let dst_start = ((clip.dst_y + row) * (self.width as usize) + clip.dst_x) * 4;
            let n = clip.cols * 4;
            self.rgba8[dst_start..dst_start + n]
                .copy_from_slice(&patch.raster.rgba8()[src_start..src_start + n]);
        }
    }

    /// Snapshot the entire canvas as an owned raster.
    pub fn snapshot(&self) -> RasterFrame {
        RasterFrame::from_parts(self.width, self.height, self.rgba8.clone())
    }

    /// Apply the patch's disposal policy in preparation for the next frame.
    ///
    /// `RestorePrevious` is composited as `RestoreBackground`: the rectangle
    /// is cleared, not restored to its pre-patch contents, so frames that
    /// follow a restore-to-previous patch see the cleared region.
    pub fn apply_disposal(&mut self, patch: &PatchFrame) {
        match patch.disposal {
            DisposalPolicy::Keep => {}
            DisposalPolicy::RestoreBackground | DisposalPolicy::RestorePrevious => {
                let Some(clip) = self.clip_rect(patch) else {
                    return;
                };
                for row in 0..clip.rows {
                    let dst_start = ((clip.dst_y + row) * (self.width as usize) + clip.dst_x) * 4;
                    self.rgba8[dst_start..dst_start + clip.cols * 4].fill(0);
                }
            }
        }
    }

    fn clip_rect(&self, patch: &PatchFrame) -> Option<ClipRect> {
        if patch.offset_x >= self.width || patch.offset_y >= self.height {
            return None;
        }
        let dst_x = patch.offset_x as usize;
        let dst_y = patch.offset_y as usize;
        let cols = (patch.raster.width() as usize).min(self.width as usize - dst_x);
        let rows = (patch.raster.height() as usize).min(self.height as usize - dst_y);
        if cols == 0 || rows == 0 {
            return None;
        }
        Some(ClipRect {
            dst_x,
            dst_y,
            cols,
            rows,
        })
    }
}

/// Patch rectangle clipped to the canvas bounds. Offsets are unsigned, so
/// only the right/bottom edges ever clip.
#[derive(Clone, Copy, Debug)]
struct ClipRect {
    dst_x: usize,
    dst_y: usize,
    cols: usize,
    rows: usize,
}

/// Composite one patch: blit, snapshot the full canvas, then apply disposal.
///
/// The snapshot is taken before disposal, which only affects subsequent
/// frames. Takes the canvas by value and returns it alongside the snapshot so
/// the caller keeps exclusive ownership across the frame loop.
pub fn composite_patch(mut canvas: LogicalCanvas, patch: &PatchFrame) -> (LogicalCanvas, RasterFrame) {
    canvas.blit_patch(patch);
    let snapshot = canvas.snapshot();
    canvas.apply_disposal(patch);
    (canvas, snapshot)
}

#[cfg(test)]
#[path = "../../tests/unit/composite/canvas.rs"]
mod tests;
