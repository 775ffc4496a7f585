use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "autos", about = "Ride a named bike on a road", version)]
pub struct CliArgs {
    #[arg(
        long,
        env = "AUTOS_NAME",
        value_name = "NAME",
        help = "Name of the bike to construct"
    )]
    pub name: String,

    #[arg(
        long,
        env = "AUTOS_ROAD",
        value_name = "ROAD",
        help = "Road to ride on"
    )]
    pub road: String,
}

#[derive(Debug, Clone)]
pub struct RideConfig {
    pub name: String,
    pub road: String,
}

impl RideConfig {
    pub fn from_args(args: CliArgs) -> Self {
        let CliArgs { name, road } = args;
        Self { name, road }
    }
}
