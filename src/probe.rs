//! Raw sample acquisition.
//!
//! The moisture reader only needs "give me one raw sample". [`PowerGatedProbe`]
//! is the hardware implementation: it energizes the probe only for the
//! duration of a single conversion, which limits electrolytic corrosion of the
//! probe tines.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Settling time between powering the probe and sampling it.
pub const STABILIZE_MS: u32 = 10;

/// Source of raw moisture samples (ADC counts).
pub trait MoistureProbe {
    type Error;

    fn sample(&mut self) -> Result<u16, Self::Error>;
}

/// Single analog input channel.
///
/// `embedded-hal` 1.0 has no ADC abstraction, so HAL channels are adapted
/// to this trait by the board support code.
pub trait AnalogInput {
    type Error;

    fn read(&mut self) -> Result<u16, Self::Error>;
}

impl<T: MoistureProbe + ?Sized> MoistureProbe for &mut T {
    type Error = T::Error;

    fn sample(&mut self) -> Result<u16, Self::Error> {
        (**self).sample()
    }
}

#[derive(Debug, PartialEq)]
pub enum ProbeError<P, A> {
    /// Switching the probe supply failed
    Power(P),
    /// ADC conversion failed
    Adc(A),
}

impl<P: core::fmt::Debug, A: core::fmt::Debug> core::fmt::Display for ProbeError<P, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProbeError::Power(e) => write!(f, "probe power pin error: {:?}", e),
            ProbeError::Adc(e) => write!(f, "probe ADC error: {:?}", e),
        }
    }
}

/// Moisture probe whose supply is switched through a GPIO.
pub struct PowerGatedProbe<P, A, D> {
    power: P,
    adc: A,
    delay: D,
}

impl<P, A, D> PowerGatedProbe<P, A, D>
where
    P: OutputPin,
    A: AnalogInput,
    D: DelayNs,
{
    /// Take ownership of the pins and make sure the probe starts unpowered.
    pub fn new(mut power: P, adc: A, delay: D) -> Result<Self, P::Error> {
        power.set_low()?;
        Ok(Self { power, adc, delay })
    }

    pub fn release(self) -> (P, A, D) {
        (self.power, self.adc, self.delay)
    }
}

impl<P, A, D> MoistureProbe for PowerGatedProbe<P, A, D>
where
    P: OutputPin,
    A: AnalogInput,
    A::Error: core::fmt::Debug,
    D: DelayNs,
{
    type Error = ProbeError<P::Error, A::Error>;

    fn sample(&mut self) -> Result<u16, Self::Error> {
        self.power.set_high().map_err(ProbeError::Power)?;
        self.delay.delay_ms(STABILIZE_MS);
        let raw = self.adc.read();

        // Power off even if the conversion failed
        self.power.set_low().map_err(ProbeError::Power)?;

        raw.map_err(|e| {
            log::warn!("moisture probe conversion failed: {:?}", e);
            ProbeError::Adc(e)
        })
    }
}
