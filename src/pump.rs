//! Water pump driven through a single GPIO.

use embedded_hal::digital::OutputPin;

pub struct Pump<P> {
    pin: P,
    running: bool,
}

impl<P: OutputPin> Pump<P> {
    /// Wrap the pump control pin. The pin state is not touched.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            running: false,
        }
    }

    /// Drive the pump output high.
    ///
    /// The pump runs until [`Pump::stop`] is called; `duration_ms` is
    /// accepted for interface compatibility and is not enforced.
    pub fn start(&mut self, duration_ms: u32) -> Result<(), P::Error> {
        self.pin.set_high()?;
        self.running = true;
        log::debug!("pump started (requested {} ms, not enforced)", duration_ms);
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), P::Error> {
        self.pin.set_low()?;
        self.running = false;
        log::debug!("pump stopped");
        Ok(())
    }

    /// Last successfully commanded state
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn release(self) -> P {
        self.pin
    }
}
