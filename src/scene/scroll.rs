//! Reference scroll transform, without smoothing.
//!
//! A direct accumulator standing in for the host's smooth-scroll engine in
//! tests and demos: deltas add up immediately, the position is clamped to the
//! document range, and each surface's offset is `position * coefficient`. A
//! production host keeps its own engine and feeds the composer through
//! [`SceneComposer::on_scroll`](crate::SceneComposer::on_scroll).

use crate::foundation::core::Vec2;
use crate::foundation::error::{CycloramaError, CycloramaResult};

/// Direct (unsmoothed) scroll position accumulator.
#[derive(Clone, Debug)]
pub struct ScrollEngine {
    position: f64,
    limit: f64,
}

impl ScrollEngine {
    /// Create an engine at position zero with the given scroll limit.
    pub fn new(limit: f64) -> CycloramaResult<Self> {
        if !(limit.is_finite() && limit >= 0.0) {
            return Err(CycloramaError::validation(
                "scroll limit must be finite and >= 0",
            ));
        }
        Ok(Self {
            position: 0.0,
            limit,
        })
    }

    /// Apply a scroll delta, clamping the position to `[0, limit]`.
    ///
    /// Returns the position after the delta. Non-finite deltas are ignored.
    pub fn scroll_by(&mut self, delta: f64) -> f64 {
        if delta.is_finite() {
            self.position = (self.position + delta).clamp(0.0, self.limit);
        }
        self.position
    }

    /// Jump to an absolute position, clamped to `[0, limit]`.
    pub fn scroll_to(&mut self, position: f64) -> f64 {
        if position.is_finite() {
            self.position = position.clamp(0.0, self.limit);
        }
        self.position
    }

    /// Replace the scroll limit, re-clamping the current position.
    pub fn set_limit(&mut self, limit: f64) -> CycloramaResult<()> {
        if !(limit.is_finite() && limit >= 0.0) {
            return Err(CycloramaError::validation(
                "scroll limit must be finite and >= 0",
            ));
        }
        self.limit = limit;
        self.position = self.position.clamp(0.0, self.limit);
        Ok(())
    }

    /// Current scroll position.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current scroll limit.
    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Translation for a surface with the given scroll-speed coefficient.
    pub fn offset_for(&self, coefficient: f64) -> Vec2 {
        Vec2::new(0.0, self.position * coefficient)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/scroll.rs"]
mod tests;
