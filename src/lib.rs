pub mod bike;
pub mod config;
pub mod logging;

pub use bike::Bike;
pub use config::{CliArgs, RideConfig};
pub use logging::{LogFormat, LoggingConfig, init_logging};
