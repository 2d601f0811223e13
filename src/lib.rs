pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};
pub use config::toml_config::TomlConfig;

pub use core::{engine::ReportEngine, pipeline::CsvPipeline};
pub use domain::{Driver, DriverStatus, Fleet, Passenger, PassengerRef, Trip};
pub use report::FleetReport;
pub use utils::error::{Result, RideError};
