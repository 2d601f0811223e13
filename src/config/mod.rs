#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::report::OUTPUT_FORMATS;
#[cfg(feature = "cli")]
use crate::utils::error::{Result, RideError};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_file_extensions, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ride-report")]
#[command(about = "Builds driver statistics reports from ride-share CSV data")]
pub struct CliConfig {
    #[arg(long, default_value = "./data/drivers.csv")]
    pub drivers_file: String,

    #[arg(long, default_value = "./data/passengers.csv")]
    pub passengers_file: String,

    #[arg(long, default_value = "./data/trips.csv")]
    pub trips_file: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "text")]
    pub output_formats: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn drivers_file(&self) -> &str {
        &self.drivers_file
    }

    fn passengers_file(&self) -> &str {
        &self.passengers_file
    }

    fn trips_file(&self) -> &str {
        &self.trips_file
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let input_files = [
            self.drivers_file.clone(),
            self.passengers_file.clone(),
            self.trips_file.clone(),
        ];

        validate_path("drivers_file", &self.drivers_file)?;
        validate_path("passengers_file", &self.passengers_file)?;
        validate_path("trips_file", &self.trips_file)?;
        validate_path("output_path", &self.output_path)?;
        validate_file_extensions("input_files", &input_files, &["csv"])?;

        for format in &self.output_formats {
            if !OUTPUT_FORMATS.contains(&format.as_str()) {
                return Err(RideError::InvalidConfigValueError {
                    field: "output_formats".to_string(),
                    value: format.clone(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        OUTPUT_FORMATS.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }
}
