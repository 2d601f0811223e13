use crate::domain::fleet::Fleet;
use crate::utils::error::{Result, RideError};
use serde::Serialize;

pub const OUTPUT_FORMATS: [&str; 3] = ["text", "csv", "json"];

#[derive(Debug, Clone, Serialize)]
pub struct DriverSummary {
    pub driver_id: u64,
    pub name: String,
    pub status: String,
    pub trip_count: usize,
    pub completed_trip_count: usize,
    pub average_rating: f64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FleetReport {
    pub drivers: Vec<DriverSummary>,
    pub passenger_count: usize,
    pub trip_count: usize,
    pub completed_trip_count: usize,
    pub total_revenue: f64,
}

impl FleetReport {
    pub fn from_fleet(fleet: &Fleet) -> FleetReport {
        let drivers: Vec<DriverSummary> = fleet
            .drivers()
            .iter()
            .map(|driver| DriverSummary {
                driver_id: driver.id,
                name: driver.name.clone(),
                status: driver.status().to_string(),
                trip_count: driver.trips().len(),
                completed_trip_count: driver
                    .trips()
                    .iter()
                    .filter(|trip| trip.is_completed())
                    .count(),
                average_rating: driver.average_rating(),
                total_revenue: driver.total_revenue(),
            })
            .collect();

        FleetReport {
            passenger_count: fleet.passengers().len(),
            trip_count: drivers.iter().map(|d| d.trip_count).sum(),
            completed_trip_count: drivers.iter().map(|d| d.completed_trip_count).sum(),
            total_revenue: drivers.iter().map(|d| d.total_revenue).sum(),
            drivers,
        }
    }

    pub fn render_text(&self) -> String {
        let mut lines = vec![
            "Driver report".to_string(),
            "=============".to_string(),
            format!(
                "{:>6}  {:<24} {:<12} {:>5} {:>5} {:>7} {:>9}",
                "id", "name", "status", "trips", "done", "rating", "revenue"
            ),
        ];

        for driver in &self.drivers {
            lines.push(format!(
                "{:>6}  {:<24} {:<12} {:>5} {:>5} {:>7.2} {:>9.2}",
                driver.driver_id,
                driver.name,
                driver.status,
                driver.trip_count,
                driver.completed_trip_count,
                driver.average_rating,
                driver.total_revenue,
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "{} drivers, {} passengers, {} trips ({} completed)",
            self.drivers.len(),
            self.passenger_count,
            self.trip_count,
            self.completed_trip_count,
        ));
        lines.push(format!("Total revenue: {:.2}", self.total_revenue));

        lines.join("\n")
    }

    pub fn render_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for driver in &self.drivers {
            writer.serialize(driver)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| RideError::ProcessingError {
                message: format!("CSV writer error: {}", e),
            })?;
        String::from_utf8(bytes).map_err(|e| RideError::ProcessingError {
            message: format!("CSV output was not valid UTF-8: {}", e),
        })
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
