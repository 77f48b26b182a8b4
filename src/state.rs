use crate::filters::{EmaFilter, RunningAverage};

pub struct ReaderState {
    /// Smoothed raw value, only advanced by in-range samples
    pub ema: EmaFilter,

    /// Consecutive out-of-range samples
    pub error_streak: u8,

    /// Recent smoothed values for the long-window average
    pub history: RunningAverage,
}

impl ReaderState {
    pub fn new(window_size: usize) -> Self {
        Self {
            ema: EmaFilter::new(),
            error_streak: 0,
            history: RunningAverage::new(window_size),
        }
    }

    pub fn reset(&mut self) {
        self.ema.reset();
        self.error_streak = 0;
        self.history.reset();
    }
}
