use autos::{CliArgs, RideConfig};
use clap::Parser;

#[test]
fn resolves_name_and_road_from_cli() {
    let args = CliArgs::parse_from(["autos", "--name", "Trek", "--road", "Main Street"]);
    let config = RideConfig::from_args(args);
    assert_eq!(config.name, "Trek");
    assert_eq!(config.road, "Main Street");
}

#[test]
fn empty_values_are_not_rejected() {
    let args = CliArgs::parse_from(["autos", "--name", "", "--road", ""]);
    let config = RideConfig::from_args(args);
    assert_eq!(config.name, "");
    assert_eq!(config.road, "");
}

#[test]
fn missing_name_is_a_usage_error() {
    let result = CliArgs::try_parse_from(["autos", "--road", "Hill"]);
    assert!(result.is_err());
}
