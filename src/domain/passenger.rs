use crate::domain::trip::Trip;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_id};

#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    pub id: u64,
    pub name: String,
    pub phone_number: String,
    trips: Vec<Trip>,
}

impl Passenger {
    pub fn new(id: u64, name: &str, phone_number: &str) -> Result<Self> {
        validate_positive_id("passenger.id", id)?;
        validate_non_empty_string("passenger.name", name)?;
        validate_non_empty_string("passenger.phone_number", phone_number)?;

        Ok(Self {
            id,
            name: name.to_string(),
            phone_number: phone_number.to_string(),
            trips: Vec::new(),
        })
    }

    pub fn add_trip(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }
}
