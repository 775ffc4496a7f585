use autos::{Bike, CliArgs, LoggingConfig, RideConfig, init_logging};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let logging_config = LoggingConfig::from_env();
    init_logging(logging_config)?;

    let cli = CliArgs::parse();
    let config = RideConfig::from_args(cli);

    let bike = Bike::new(config.name);
    tracing::info!(bike = %bike.name(), road = %config.road, "starting ride");
    bike.ride(&config.road);

    Ok(())
}
