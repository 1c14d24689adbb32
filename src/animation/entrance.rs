use crate::animation::ease::Ease;

/// Length of the mount transition in seconds.
pub const ENTRANCE_DURATION_SEC: f64 = 0.8;

const FROM_SCALE: f64 = 0.7;

/// One-shot fade/scale-in transition played when a surface mounts.
///
/// Runs from `(opacity 0, scale 0.7)` to `(opacity 1, scale 1)` over
/// [`ENTRANCE_DURATION_SEC`] with a quadratic ease-in/out curve, independent
/// of the frame cycle. Once complete it stays at its end state.
#[derive(Clone, Debug, Default)]
pub struct EntranceTransition {
    elapsed_sec: f64,
}

impl EntranceTransition {
    /// Create a transition at its start state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the transition by `dt_sec` of elapsed time.
    pub fn tick(&mut self, dt_sec: f64) {
        if dt_sec > 0.0 {
            self.elapsed_sec = (self.elapsed_sec + dt_sec).min(ENTRANCE_DURATION_SEC);
        }
    }

    fn progress(&self) -> f64 {
        Ease::InOutQuad.apply(self.elapsed_sec / ENTRANCE_DURATION_SEC)
    }

    /// Current opacity in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.progress()
    }

    /// Current scale in `[0.7, 1]`.
    pub fn scale(&self) -> f64 {
        FROM_SCALE + (1.0 - FROM_SCALE) * self.progress()
    }

    /// Whether the transition has reached its end state.
    pub fn is_complete(&self) -> bool {
        self.elapsed_sec >= ENTRANCE_DURATION_SEC
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/entrance.rs"]
mod tests;
