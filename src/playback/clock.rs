//! Host-driven playback over a finished animation sequence.
//!
//! Timing is fps-based: the host calls [`PlaybackClock::update`] at its own
//! display cadence and the clock advances one frame each time a full period
//! has elapsed. There is no timer thread; stopping clears the running flag,
//! so no later update can move the index.

use std::time::{Duration, Instant};

use crate::foundation::core::{AnimationSequence, CharacterGrid};

/// Default playback rate in frames per second.
pub const DEFAULT_FPS: f64 = 12.0;

/// Frame-index clock over an [`AnimationSequence`].
///
/// Seeks move the index by one modulo the sequence length regardless of the
/// running state. Replacing the sequence resets the index to 0 and stops
/// playback in the same call, so a stale period can never index past the end
/// of a shorter, newly loaded sequence.
#[derive(Clone, Debug)]
pub struct PlaybackClock {
    sequence: AnimationSequence,
    index: usize,
    running: bool,
    fps: f64,
    last_tick: Option<Instant>,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackClock {
    /// Clock over an empty sequence at the default rate.
    pub fn new() -> Self {
        Self::with_sequence(AnimationSequence::default())
    }

    /// Clock over `sequence`, stopped at frame 0.
    pub fn with_sequence(sequence: AnimationSequence) -> Self {
        Self {
            sequence,
            index: 0,
            running: false,
            fps: DEFAULT_FPS,
            last_tick: None,
        }
    }

    /// Replace the active sequence; resets the index to 0 and stops playback.
    pub fn set_sequence(&mut self, sequence: AnimationSequence) {
        self.sequence = sequence;
        self.index = 0;
        self.running = false;
        self.last_tick = None;
    }

    /// Active sequence.
    pub fn sequence(&self) -> &AnimationSequence {
        &self.sequence
    }

    /// Currently indexed frame, if the sequence is non-empty.
    pub fn current_frame(&self) -> Option<&CharacterGrid> {
        self.sequence.get(self.index)
    }

    /// Current frame index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the clock is advancing.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Target playback rate in frames per second.
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Set the target rate; non-finite or non-positive values fall back to
    /// [`DEFAULT_FPS`].
    pub fn set_fps(&mut self, fps: f64) {
        self.fps = if fps.is_finite() && fps > 0.0 {
            fps
        } else {
            DEFAULT_FPS
        };
    }

    /// Advance period derived from the target rate, never below one
    /// millisecond.
    pub fn period(&self) -> Duration {
        let ms = (1000.0 / self.fps).round().max(1.0);
        Duration::from_millis(ms as u64)
    }

    /// Start advancing. Refuses to start over an empty sequence.
    pub fn play(&mut self) {
        if self.sequence.is_empty() {
            return;
        }
        self.running = true;
        self.last_tick = None;
    }

    /// Halt advancement without resetting the index.
    pub fn stop(&mut self) {
        self.running = false;
        self.last_tick = None;
    }

    /// Step forward one frame, wrapping at the end; independent of the
    /// running state.
    pub fn seek_forward(&mut self) {
        let len = self.sequence.len();
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
    }

    /// Step back one frame, wrapping at the start; independent of the running
    /// state.
    pub fn seek_backward(&mut self) {
        let len = self.sequence.len();
        if len == 0 {
            return;
        }
        self.index = (self.index + len - 1) % len;
    }

    /// Advance using the wall clock; call at the host's display cadence.
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    /// Advance using an explicit notion of "now".
    ///
    /// The first call after [`play`](Self::play) arms the timer; later calls
    /// advance one frame modulo the sequence length each time a full period
    /// has elapsed.
    pub fn update_at(&mut self, now: Instant) {
        if !self.running || self.sequence.is_empty() {
            return;
        }
        match self.last_tick {
            None => self.last_tick = Some(now),
            Some(last) => {
                if now.duration_since(last) >= self.period() {
                    self.index = (self.index + 1) % self.sequence.len();
                    self.last_tick = Some(now);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/clock.rs"]
mod tests;
