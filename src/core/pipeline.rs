use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::fleet::Fleet;
use crate::domain::records::{DriverRecord, PassengerRecord, RawRecords, TripRecord};
use crate::report::{FleetReport, OUTPUT_FORMATS};
use crate::utils::error::{Result, RideError};
use serde::de::DeserializeOwned;

pub struct CsvPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn read_records<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        tracing::debug!("Reading records from: {}", path);
        let bytes = self.storage.read_file(path)?;

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CsvPipeline<S, C> {
    fn extract(&self) -> Result<RawRecords> {
        let drivers: Vec<DriverRecord> = self.read_records(self.config.drivers_file())?;
        let passengers: Vec<PassengerRecord> = self.read_records(self.config.passengers_file())?;
        let trips: Vec<TripRecord> = self.read_records(self.config.trips_file())?;

        tracing::debug!(
            "Parsed {} driver rows, {} passenger rows, {} trip rows",
            drivers.len(),
            passengers.len(),
            trips.len()
        );

        Ok(RawRecords {
            drivers,
            passengers,
            trips,
        })
    }

    fn build(&self, raw: RawRecords) -> Result<Fleet> {
        Fleet::assemble(raw)
    }

    fn report(&self, fleet: Fleet) -> Result<String> {
        let report = FleetReport::from_fleet(&fleet);
        let mut primary_path: Option<String> = None;

        for format in self.config.output_formats() {
            let (filename, content) = match format.as_str() {
                "text" => ("report.txt", report.render_text()),
                "csv" => ("report.csv", report.render_csv()?),
                "json" => ("report.json", report.render_json()?),
                other => {
                    return Err(RideError::InvalidConfigValueError {
                        field: "output_formats".to_string(),
                        value: other.to_string(),
                        reason: format!(
                            "Unsupported format. Valid formats: {}",
                            OUTPUT_FORMATS.join(", ")
                        ),
                    })
                }
            };

            let output_path = format!("{}/{}", self.config.output_path(), filename);
            tracing::debug!("Writing {} report to: {}", format, output_path);
            self.storage.write_file(&output_path, content.as_bytes())?;

            if primary_path.is_none() {
                primary_path = Some(output_path);
            }
        }

        primary_path.ok_or_else(|| RideError::MissingConfigError {
            field: "output_formats".to_string(),
        })
    }
}
