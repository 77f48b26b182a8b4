use crate::config::{Config, ConfigError};
use crate::mapping::to_percent;
use crate::probe::MoistureProbe;
use crate::reading::Reading;
use crate::state::ReaderState;

/// Soil moisture reader: range validation, fault counting, EMA smoothing and
/// a long-window running average on top of a [`MoistureProbe`].
pub struct MoistureReader<P> {
    probe: P,
    config: Config,
    state: ReaderState,
}

impl<P: MoistureProbe> MoistureReader<P> {
    pub fn new(probe: P, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            probe,
            state: ReaderState::new(config.window_size),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Take one sample and return the smoothed moisture percentage.
    ///
    /// An out-of-range sample (or a failed acquisition) leaves the EMA
    /// untouched but still pushes the current EMA into the history. Once more
    /// than `max_error_streak` bad samples arrive back to back, `Fault` is
    /// returned and the history is left alone.
    pub fn read_instant(&mut self) -> Reading {
        let raw = self.probe.sample().ok().filter(|&r| self.config.in_range(r as i32));

        match raw {
            Some(raw) => {
                self.state.error_streak = 0;
                self.state.ema.apply(raw as f32, self.config.alpha);
            }
            None => {
                self.state.error_streak = self.state.error_streak.saturating_add(1);
                if self.state.error_streak > self.config.max_error_streak {
                    return Reading::Fault;
                }
            }
        }

        let ema = self.ema();
        self.state.history.push(ema);

        Reading::Percent(self.percent(ema))
    }

    /// Moisture percentage of the running average. No hardware access.
    ///
    /// `Fault` if the average lies outside the calibrated range, which is
    /// also the case while the history is still ramping up from zero.
    pub fn read_average(&self) -> Reading {
        let average = self.state.history.average();
        if !self.config.in_range(average) {
            return Reading::Fault;
        }
        Reading::Percent(self.percent(average))
    }

    /// Smoothed raw value (ADC counts)
    pub fn ema(&self) -> i32 {
        self.state.ema.value() as i32
    }

    pub fn error_streak(&self) -> u8 {
        self.state.error_streak
    }

    /// Running average of the history (ADC counts)
    pub fn running_average(&self) -> i32 {
        self.state.history.average()
    }

    /// Smoothed values currently held in the history, storage order
    pub fn history(&self) -> &[i32] {
        self.state.history.values()
    }

    /// Return to the power-on state: EMA and history zeroed, no errors.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn probe_mut(&mut self) -> &mut P {
        &mut self.probe
    }

    pub fn release(self) -> P {
        self.probe
    }

    fn percent(&self, value: i32) -> i32 {
        to_percent(value, self.config.sensor_low, self.config.sensor_high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of samples, then repeats the last one.
    struct Replay<'a> {
        samples: &'a [u16],
        pos: usize,
    }

    impl<'a> Replay<'a> {
        fn new(samples: &'a [u16]) -> Self {
            Self { samples, pos: 0 }
        }
    }

    impl MoistureProbe for Replay<'_> {
        type Error = ();

        fn sample(&mut self) -> Result<u16, ()> {
            let i = self.pos.min(self.samples.len() - 1);
            self.pos += 1;
            Ok(self.samples[i])
        }
    }

    #[test]
    fn first_reading_ramps_from_zero() {
        let mut reader = MoistureReader::new(Replay::new(&[500]), Config::default()).unwrap();

        assert_eq!(reader.read_instant(), Reading::Percent(-23));
        assert_eq!(reader.ema(), 50);
        assert_eq!(reader.error_streak(), 0);
    }

    #[test]
    fn error_path_pushes_stale_ema() {
        let mut reader =
            MoistureReader::new(Replay::new(&[500, 500, 500, 1000]), Config::default()).unwrap();

        for _ in 0..3 {
            reader.read_instant();
        }
        let ema = reader.ema();
        assert_eq!(ema, 135);

        let reading = reader.read_instant();
        assert_eq!(reading, Reading::Percent(-10));
        assert_eq!(reader.error_streak(), 1);
        assert_eq!(reader.ema(), ema);
        assert_eq!(reader.history()[3], ema);
    }

    #[test]
    fn rejected_config() {
        let config = Config {
            window_size: 0,
            ..Config::default()
        };
        assert!(matches!(
            MoistureReader::new(Replay::new(&[500]), config),
            Err(ConfigError::InvalidWindowSize)
        ));
    }
}
