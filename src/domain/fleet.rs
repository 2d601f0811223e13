use crate::domain::driver::Driver;
use crate::domain::passenger::Passenger;
use crate::domain::records::RawRecords;
use crate::utils::error::{Result, RideError};

/// Fully linked in-memory state: every trip attached to its driver and, when
/// the roster knows the rider, to the passenger as well.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    drivers: Vec<Driver>,
    passengers: Vec<Passenger>,
}

impl Fleet {
    pub fn assemble(raw: RawRecords) -> Result<Fleet> {
        let mut passengers = raw
            .passengers
            .into_iter()
            .map(|record| record.into_passenger())
            .collect::<Result<Vec<_>>>()?;

        let mut drivers = raw
            .drivers
            .into_iter()
            .map(|record| record.into_driver())
            .collect::<Result<Vec<_>>>()?;

        for record in raw.trips {
            let passenger_idx = passengers.iter().position(|p| p.id == record.passenger_id);
            let trip = record.into_trip(passenger_idx.map(|idx| &passengers[idx]))?;

            let driver = drivers
                .iter_mut()
                .find(|d| d.id == trip.driver_id)
                .ok_or_else(|| RideError::ProcessingError {
                    message: format!(
                        "Trip {} references unknown driver {}",
                        trip.id, trip.driver_id
                    ),
                })?;
            driver.add_trip(trip.clone());

            if let Some(idx) = passenger_idx {
                passengers[idx].add_trip(trip);
            }
        }

        Ok(Fleet {
            drivers,
            passengers,
        })
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }
}
