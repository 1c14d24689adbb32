use crate::foundation::error::{CycloramaError, CycloramaResult};

/// Advances a continuous accumulator through a fixed frame range on wall-clock
/// time, quantizing it to an integer frame index.
///
/// The accumulator lives in `[start_index, start_index + num_images)` and
/// moves at `num_images / duration` frames per second. Fractional progress is
/// preserved across irregular tick intervals. When the range is exhausted the
/// cycle restarts abruptly at `start_index`: the fractional overshoot is
/// dropped, producing a hard loop rather than a smooth wrap.
#[derive(Clone, Debug)]
pub struct FrameCycler {
    start_index: u32,
    num_images: u32,
    duration_sec: f64,
    value: f64,
}

impl FrameCycler {
    /// Create a cycler over `num_images` frames starting at `start_index`,
    /// traversing the full range once per `duration_sec` seconds.
    pub fn new(start_index: u32, num_images: u32, duration_sec: f64) -> CycloramaResult<Self> {
        if num_images < 1 {
            return Err(CycloramaError::validation("num_images must be >= 1"));
        }
        if start_index.checked_add(num_images).is_none() {
            return Err(CycloramaError::validation(
                "start_index + num_images overflows the frame index space",
            ));
        }
        if !(duration_sec.is_finite() && duration_sec > 0.0) {
            return Err(CycloramaError::validation(
                "duration must be finite and > 0 seconds",
            ));
        }
        Ok(Self {
            start_index,
            num_images,
            duration_sec,
            value: f64::from(start_index),
        })
    }

    /// First frame of the cyclic range.
    pub fn start_index(&self) -> u32 {
        self.start_index
    }

    /// Number of frames in the cyclic range.
    pub fn num_images(&self) -> u32 {
        self.num_images
    }

    /// Seconds to traverse the full range once.
    pub fn duration_sec(&self) -> f64 {
        self.duration_sec
    }

    /// Playback rate in frames per second.
    pub fn rate_fps(&self) -> f64 {
        f64::from(self.num_images) / self.duration_sec
    }

    fn last_frame(&self) -> u32 {
        self.start_index + self.num_images - 1
    }

    /// Advance by `dt_sec` of elapsed time and return the frame to show.
    ///
    /// Non-positive `dt_sec` leaves the accumulator unchanged, so a zero tick
    /// can be used to re-read the current frame.
    pub fn tick(&mut self, dt_sec: f64) -> u32 {
        if dt_sec > 0.0 {
            self.value += dt_sec * self.rate_fps();
        }
        let end = f64::from(self.start_index) + f64::from(self.num_images);
        if self.value >= end {
            // Abrupt loop: drop the fractional overshoot.
            self.value = f64::from(self.start_index);
        }
        self.frame()
    }

    /// Quantize the accumulator to the frame index to display.
    ///
    /// Rounds to the nearest integer; a rounded value past the last frame of
    /// the range emits `start_index`, never a clamped or modulo-wrapped
    /// intermediate.
    pub fn frame(&self) -> u32 {
        let rounded = self.value.round();
        if rounded > f64::from(self.last_frame()) {
            self.start_index
        } else {
            rounded as u32
        }
    }

    /// Rewind the accumulator to `start_index`.
    pub fn reset(&mut self) {
        self.value = f64::from(self.start_index);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/cycler.rs"]
mod tests;
