#![no_std]

mod config;
mod state;
mod moisture;
mod reading;
pub mod filters;
pub mod mapping;
pub mod probe;

#[cfg(feature = "pump")]
pub mod pump;
#[cfg(feature = "container-level")]
pub mod level;
#[cfg(feature = "status-display")]
pub mod display;

pub use config::{Config, ConfigError, MAX_WINDOW_SIZE};
pub use moisture::MoistureReader;
pub use reading::Reading;
pub use probe::{AnalogInput, MoistureProbe, PowerGatedProbe, ProbeError};

#[cfg(feature = "pump")]
pub use pump::Pump;
#[cfg(feature = "container-level")]
pub use level::{ContainerLevel, DistanceSensor, LevelConfig};
#[cfg(feature = "status-display")]
pub use display::{CharacterDisplay, StatusScreen};
