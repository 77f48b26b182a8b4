/// Exponential Moving Average filter state
///
/// Output is truncated to whole ADC counts after every step, so the state
/// never carries a fractional part.
#[derive(Debug, Clone, Copy)]
pub struct EmaFilter {
    previous: f32,
}

impl EmaFilter {
    /// Create new EMA filter starting from zero
    pub const fn new() -> Self {
        Self { previous: 0.0 }
    }

    /// Apply EMA filter: output = trunc(alpha * input + (1 - alpha) * previous)
    ///
    /// The first call blends against the initial zero state rather than
    /// seeding the filter with the input.
    pub fn apply(&mut self, input: f32, alpha: f32) -> f32 {
        debug_assert!(
            alpha > 0.0 && alpha <= 1.0,
            "EMA alpha must be in range (0.0, 1.0], got {}",
            alpha
        );

        let output = libm::truncf(alpha * input + (1.0 - alpha) * self.previous);
        self.previous = output;
        output
    }

    /// Current smoothed value
    pub fn value(&self) -> f32 {
        self.previous
    }

    /// Reset filter state
    pub fn reset(&mut self) {
        self.previous = 0.0;
    }
}

impl Default for EmaFilter {
    fn default() -> Self {
        Self::new()
    }
}
