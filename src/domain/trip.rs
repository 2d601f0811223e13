use crate::domain::passenger::Passenger;
use chrono::{DateTime, Utc};

/// Rider attached to a trip: the resolved record when the roster knows the
/// id, otherwise just the bare identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum PassengerRef {
    Record(Passenger),
    Id(u64),
}

impl PassengerRef {
    pub fn id(&self) -> u64 {
        match self {
            PassengerRef::Record(passenger) => passenger.id,
            PassengerRef::Id(id) => *id,
        }
    }

    pub fn record(&self) -> Option<&Passenger> {
        match self {
            PassengerRef::Record(passenger) => Some(passenger),
            PassengerRef::Id(_) => None,
        }
    }
}

/// A single ride. `end_time`, `cost` and `rating` are each optional; their
/// absence is the only thing that marks a trip as still in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: u64,
    pub driver_id: u64,
    pub passenger: PassengerRef,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub cost: Option<f64>,
    pub rating: Option<u8>,
}

impl Trip {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        driver_id: u64,
        passenger: PassengerRef,
        start_time: DateTime<Utc>,
        end_time: Option<DateTime<Utc>>,
        cost: Option<f64>,
        rating: Option<u8>,
    ) -> Self {
        Self {
            id,
            driver_id,
            passenger,
            start_time,
            end_time,
            cost,
            rating,
        }
    }

    /// A trip counts as completed once it has both an end time and a rating.
    /// Every aggregation goes through this predicate.
    pub fn is_completed(&self) -> bool {
        self.end_time.is_some() && self.rating.is_some()
    }

    pub fn is_in_progress(&self) -> bool {
        !self.is_completed()
    }
}
