/// Noise filtering implementations
///
/// Both filters work on raw ADC counts. The EMA smooths individual samples,
/// the running average smooths the EMA output over a longer window.
mod ema;
mod running_avg;

pub use ema::EmaFilter;
pub use running_avg::RunningAverage;
