use crate::core::ConfigProvider;
use crate::report::OUTPUT_FORMATS;
use crate::utils::error::{Result, RideError};
use crate::utils::validation::{validate_file_extensions, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub report: ReportConfig,
    pub source: SourceConfig,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub drivers_file: String,
    pub passengers_file: String,
    pub trips_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RideError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RideError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with the environment value;
    /// unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn drivers_file(&self) -> &str {
        &self.source.drivers_file
    }

    fn passengers_file(&self) -> &str {
        &self.source.passengers_file
    }

    fn trips_file(&self) -> &str {
        &self.source.trips_file
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let input_files = [
            self.source.drivers_file.clone(),
            self.source.passengers_file.clone(),
            self.source.trips_file.clone(),
        ];

        validate_path("source.drivers_file", &self.source.drivers_file)?;
        validate_path("source.passengers_file", &self.source.passengers_file)?;
        validate_path("source.trips_file", &self.source.trips_file)?;
        validate_path("load.output_path", &self.load.output_path)?;
        validate_file_extensions("source", &input_files, &["csv"])?;

        for format in &self.load.output_formats {
            if !OUTPUT_FORMATS.contains(&format.as_str()) {
                return Err(RideError::InvalidConfigValueError {
                    field: "load.output_formats".to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[report]
name = "weekly-drivers"
description = "Weekly driver statistics"

[source]
drivers_file = "./data/drivers.csv"
passengers_file = "./data/passengers.csv"
trips_file = "./data/trips.csv"

[load]
output_path = "./output"
output_formats = ["text", "csv"]
"#;

    #[test]
    fn test_parses_sample_config() {
        let config = TomlConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.report.name, "weekly-drivers");
        assert_eq!(config.drivers_file(), "./data/drivers.csv");
        assert_eq!(config.output_formats(), ["text", "csv"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("RIDE_REPORT_TEST_OUT", "/tmp/reports");
        let content = SAMPLE.replace("./output", "${RIDE_REPORT_TEST_OUT}");

        let config = TomlConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.output_path(), "/tmp/reports");
    }

    #[test]
    fn test_unset_env_placeholder_is_left_alone() {
        let content = SAMPLE.replace("./output", "${RIDE_REPORT_UNSET_VAR}");

        let config = TomlConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.output_path(), "${RIDE_REPORT_UNSET_VAR}");
    }

    #[test]
    fn test_rejects_unknown_output_format() {
        let content = SAMPLE.replace("\"csv\"", "\"xml\"");

        let config = TomlConfig::from_toml_str(&content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(TomlConfig::from_toml_str("not = [valid").is_err());
    }
}
