//! Container fill level from an ultrasonic distance sensor.
//!
//! A single sample is taken at face value: no smoothing, no fault counting.

/// Distance sensor measuring from the lid down to the water surface.
pub trait DistanceSensor {
    /// Distance in sensor units, `0` when no echo was received.
    fn read_distance(&mut self) -> u16;
}

/// Distance thresholds for the fill level decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelConfig {
    /// Readings above this are treated as invalid
    pub max_range: u16,
    /// Surface closer than this means the container is full
    pub full_below: u16,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            max_range: 300,
            full_below: 20,
        }
    }
}

pub struct ContainerLevel<S> {
    sensor: S,
    config: LevelConfig,
}

impl<S: DistanceSensor> ContainerLevel<S> {
    pub fn new(sensor: S) -> Self {
        Self::with_config(sensor, LevelConfig::default())
    }

    pub fn with_config(sensor: S, config: LevelConfig) -> Self {
        Self { sensor, config }
    }

    /// `true` if the container is adequately full.
    ///
    /// No echo or an overlong reading counts as not full.
    pub fn container_status(&mut self) -> bool {
        let distance = self.sensor.read_distance();

        if distance == 0 || distance > self.config.max_range {
            log::debug!("container level: invalid distance {}", distance);
            return false;
        }

        distance < self.config.full_below
    }

    pub fn release(self) -> S {
        self.sensor
    }
}
