use crate::consts;
use std::time::Duration;

/// Gameplay tuning.  The defaults come from [`consts`]; there is no way to
/// change them at runtime, but tests construct games with other values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Options {
    /// Tick interval after a reset
    pub(crate) initial_tick: Duration,

    /// Floor for the tick interval
    pub(crate) min_tick: Duration,

    /// Amount by which each speed-up shortens the tick interval
    pub(crate) tick_step: Duration,

    /// Speed up whenever the score becomes a multiple of this
    pub(crate) speedup_score: u32,

    /// Points per food eaten
    pub(crate) food_points: u32,
}

impl Options {
    /// Return the tick interval that follows `tick` when the score has just
    /// become `score`.  The interval never increases and never goes below
    /// `min_tick`.
    pub(crate) fn next_tick(&self, tick: Duration, score: u32) -> Duration {
        if self.speedup_score != 0 && score % self.speedup_score == 0 {
            tick.saturating_sub(self.tick_step)
                .max(self.min_tick)
                .min(tick)
        } else {
            tick
        }
    }
}

impl Default for Options {
    fn default() -> Options {
        Options {
            initial_tick: consts::INITIAL_TICK_INTERVAL,
            min_tick: consts::MIN_TICK_INTERVAL,
            tick_step: consts::TICK_INTERVAL_STEP,
            speedup_score: consts::SPEEDUP_SCORE,
            food_points: consts::FOOD_POINTS,
        }
    }
}
