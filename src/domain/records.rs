use crate::domain::driver::{Driver, DriverStatus};
use crate::domain::passenger::Passenger;
use crate::domain::trip::{PassengerRef, Trip};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_id, validate_rating};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::str::FromStr;

/// Raw CSV rows. Optional columns deserialize from empty fields as `None`;
/// all range and format checks happen when a row becomes an entity.
#[derive(Debug, Clone, Deserialize)]
pub struct DriverRecord {
    pub id: u64,
    pub name: String,
    pub vin: String,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PassengerRecord {
    pub id: u64,
    pub name: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TripRecord {
    pub id: u64,
    pub driver_id: u64,
    pub passenger_id: u64,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub cost: Option<f64>,
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct RawRecords {
    pub drivers: Vec<DriverRecord>,
    pub passengers: Vec<PassengerRecord>,
    pub trips: Vec<TripRecord>,
}

impl DriverRecord {
    pub fn into_driver(self) -> Result<Driver> {
        match self.status {
            Some(status) => {
                let status = DriverStatus::from_str(&status)?;
                Driver::with_status(self.id, &self.name, &self.vin, status)
            }
            None => Driver::new(self.id, &self.name, &self.vin),
        }
    }
}

impl PassengerRecord {
    pub fn into_passenger(self) -> Result<Passenger> {
        Passenger::new(self.id, &self.name, &self.phone_number)
    }
}

impl TripRecord {
    /// Converts the row, resolving the rider to a full record when the
    /// roster supplies one and falling back to the bare id otherwise.
    pub fn into_trip(self, passenger: Option<&Passenger>) -> Result<Trip> {
        validate_positive_id("trip.id", self.id)?;
        validate_positive_id("trip.driver_id", self.driver_id)?;
        validate_positive_id("trip.passenger_id", self.passenger_id)?;
        if let Some(rating) = self.rating {
            validate_rating("trip.rating", rating)?;
        }

        let passenger = match passenger {
            Some(record) => PassengerRef::Record(record.clone()),
            None => PassengerRef::Id(self.passenger_id),
        };

        Ok(Trip::new(
            self.id,
            self.driver_id,
            passenger,
            self.start_time,
            self.end_time,
            self.cost,
            self.rating,
        ))
    }
}
