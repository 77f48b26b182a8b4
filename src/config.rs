/// Largest history window the running average can hold.
pub const MAX_WINDOW_SIZE: usize = 32;

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    InvalidSensorRange,
    InvalidAlpha,
    InvalidErrorStreak,
    InvalidWindowSize,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidSensorRange => write!(f, "sensor_low must be less than sensor_high"),
            ConfigError::InvalidAlpha => write!(f, "alpha must be in range (0.0, 1.0]"),
            ConfigError::InvalidErrorStreak => {
                write!(f, "max_error_streak must be less than {}", u8::MAX)
            }
            ConfigError::InvalidWindowSize => {
                write!(f, "window_size must be in range 1..={}", MAX_WINDOW_SIZE)
            }
        }
    }
}

/// Calibration of a resistive soil moisture probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Lowest raw ADC value considered a valid reading (maps to 0%)
    pub sensor_low: u16,
    /// Highest raw ADC value considered a valid reading (maps to 100%)
    pub sensor_high: u16,
    /// EMA smoothing factor, lower = more smoothing
    pub alpha: f32,
    /// Consecutive out-of-range samples tolerated before a fault is reported.
    /// Must stay below `u8::MAX`, the streak counter saturates there.
    pub max_error_streak: u8,
    /// Number of smoothed values kept for the running average
    pub window_size: usize,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            sensor_low: 200,
            sensor_high: 850,
            alpha: 0.1,
            max_error_streak: 3,
            window_size: 10,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sensor_low >= self.sensor_high {
            return Err(ConfigError::InvalidSensorRange);
        }

        // NaN fails both comparisons
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(ConfigError::InvalidAlpha);
        }

        if self.max_error_streak == u8::MAX {
            return Err(ConfigError::InvalidErrorStreak);
        }

        if self.window_size == 0 || self.window_size > MAX_WINDOW_SIZE {
            return Err(ConfigError::InvalidWindowSize);
        }

        Ok(())
    }

    /// Whether a raw sample lies inside the calibrated range (inclusive).
    pub fn in_range(&self, raw: i32) -> bool {
        raw >= self.sensor_low as i32 && raw <= self.sensor_high as i32
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
