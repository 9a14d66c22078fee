//! Glyphcast turns animated images into terminal-style glyph animations.
//!
//! The core is a frame reconstruction + luminance-quantization pipeline that
//! converts a sequence of delta-encoded pixel patches into character grids:
//!
//! 1. **Composite**: patches are written onto a persistent [`LogicalCanvas`]
//!    in source order, honoring each frame's [`DisposalPolicy`].
//! 2. **Resample**: every reconstructed [`RasterFrame`] is downsampled to a
//!    fixed-width grid ([`resample_to_grid`]).
//! 3. **Quantize**: pixel luminance maps onto the fixed [`GLYPH_RAMP`]
//!    ([`glyph_for_pixel`]).
//! 4. **Assemble**: [`convert`] collects one [`CharacterGrid`] per source
//!    frame into an [`AnimationSequence`]; a [`PlaybackClock`] indexes into
//!    it for display.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same patches and options always produce
//!   byte-identical grids, sequentially or in parallel.
//! - **No IO in the pipeline**: inputs are fully materialized before
//!   conversion starts; the optional `gif` feature front-loads decoding of a
//!   complete byte stream into patch frames.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod composite;
#[cfg(feature = "gif")]
mod decode;
mod foundation;
mod pipeline;
mod playback;
mod quantize;
mod resample;

pub use composite::canvas::{LogicalCanvas, composite_patch};
#[cfg(feature = "gif")]
pub use decode::gif::{DecodedAnimation, convert_gif, decode_gif};
pub use foundation::core::{
    AnimationSequence, Canvas, CharacterGrid, DisposalPolicy, PatchFrame, RasterFrame,
};
pub use foundation::error::{GlyphcastError, GlyphcastResult};
pub use pipeline::convert::{ConvertOptions, ConvertThreading, convert, convert_with_threading};
pub use playback::clock::{DEFAULT_FPS, PlaybackClock};
pub use quantize::luma::{
    DEFAULT_ALPHA_THRESHOLD, GLYPH_RAMP, glyph_for_pixel, glyph_index, relative_luminance,
};
pub use resample::grid::{grid_height, resample_to_grid};
