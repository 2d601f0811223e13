use crate::domain::trip::Trip;
use crate::utils::error::{Result, RideError};
use crate::utils::validation::{validate_non_empty_string, validate_positive_id, validate_status, validate_vin};
use std::fmt;
use std::str::FromStr;

/// Flat per-trip deduction taken before the driver is credited.
pub const DRIVER_FEE: f64 = 1.65;
/// Share of the post-fee amount the driver keeps.
pub const DRIVER_TAKE_RATE: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverStatus {
    #[default]
    Available,
    Unavailable,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Available => "AVAILABLE",
            DriverStatus::Unavailable => "UNAVAILABLE",
        }
    }

    pub fn toggled(&self) -> DriverStatus {
        match self {
            DriverStatus::Available => DriverStatus::Unavailable,
            DriverStatus::Unavailable => DriverStatus::Available,
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DriverStatus {
    type Err = RideError;

    fn from_str(s: &str) -> Result<Self> {
        validate_status("driver.status", s)?;
        if s.eq_ignore_ascii_case("AVAILABLE") {
            Ok(DriverStatus::Available)
        } else {
            Ok(DriverStatus::Unavailable)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: u64,
    pub name: String,
    pub vin: String,
    status: DriverStatus,
    trips: Vec<Trip>,
}

impl Driver {
    /// Builds a driver with the default `AVAILABLE` status and no trips.
    /// Construction is atomic: any invalid field fails before a value exists.
    pub fn new(id: u64, name: &str, vin: &str) -> Result<Self> {
        Self::with_status(id, name, vin, DriverStatus::default())
    }

    pub fn with_status(id: u64, name: &str, vin: &str, status: DriverStatus) -> Result<Self> {
        validate_positive_id("driver.id", id)?;
        validate_non_empty_string("driver.name", name)?;
        validate_vin("driver.vin", vin)?;

        Ok(Self {
            id,
            name: name.to_string(),
            vin: vin.to_string(),
            status,
            trips: Vec::new(),
        })
    }

    pub fn status(&self) -> DriverStatus {
        self.status
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Appends in call order. Duplicates are permitted and the trip content
    /// is taken as-is.
    pub fn add_trip(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    /// Mean rating over completed trips, or exactly `0.0` when none exist.
    pub fn average_rating(&self) -> f64 {
        let ratings: Vec<f64> = self
            .trips
            .iter()
            .filter(|trip| trip.is_completed())
            .filter_map(|trip| trip.rating)
            .map(f64::from)
            .collect();

        if ratings.is_empty() {
            return 0.0;
        }

        ratings.iter().sum::<f64>() / ratings.len() as f64
    }

    /// Sum of per-trip earnings over completed trips that carry a cost.
    /// Each trip credits `max(cost - DRIVER_FEE, 0) * DRIVER_TAKE_RATE`, so a
    /// fare at or below the fee contributes nothing rather than going
    /// negative. In-progress trips contribute zero.
    pub fn total_revenue(&self) -> f64 {
        self.trips
            .iter()
            .filter(|trip| trip.is_completed())
            .filter_map(|trip| trip.cost)
            .map(|cost| (cost - DRIVER_FEE).max(0.0) * DRIVER_TAKE_RATE)
            .sum()
    }

    /// Two-state toggle between `AVAILABLE` and `UNAVAILABLE`; returns the
    /// new status.
    pub fn change_status(&mut self) -> DriverStatus {
        self.status = self.status.toggled();
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::passenger::Passenger;
    use crate::domain::trip::PassengerRef;
    use chrono::{DateTime, TimeZone, Utc};

    fn time(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn completed_trip(id: u64, driver_id: u64, cost: Option<f64>, rating: u8) -> Trip {
        Trip::new(
            id,
            driver_id,
            PassengerRef::Id(3),
            time(2016, 8, 8),
            Some(time(2016, 8, 9)),
            cost,
            Some(rating),
        )
    }

    fn in_progress_trip(id: u64, driver_id: u64) -> Trip {
        let passenger = Passenger::new(9, "Merl Glover III", "1-602-620-2330 x3723").unwrap();
        Trip::new(
            id,
            driver_id,
            PassengerRef::Record(passenger),
            time(2018, 5, 25),
            None,
            None,
            None,
        )
    }

    #[test]
    fn test_valid_construction() {
        let driver =
            Driver::with_status(54, "Test Driver", "12345678901234567", DriverStatus::Available)
                .unwrap();
        assert_eq!(driver.id, 54);
        assert_eq!(driver.name, "Test Driver");
        assert_eq!(driver.vin, "12345678901234567");
        assert_eq!(driver.status(), DriverStatus::Available);
        assert!(driver.trips().is_empty());
    }

    #[test]
    fn test_rejects_bad_id() {
        let err = Driver::new(0, "George", "33133313331333133").unwrap_err();
        assert!(matches!(err, RideError::InvalidArgument { .. }));
    }

    #[test]
    fn test_rejects_bad_vin() {
        assert!(Driver::new(100, "George", "").is_err());
        assert!(Driver::new(100, "George", "33133313331333133extranums").is_err());
    }

    #[test]
    fn test_default_status_is_available() {
        let driver = Driver::new(100, "George", "12345678901234567").unwrap();
        assert_eq!(driver.status(), DriverStatus::Available);
    }

    #[test]
    fn test_rejects_unrecognized_status_text() {
        let err = "BOOP".parse::<DriverStatus>().unwrap_err();
        assert!(matches!(err, RideError::InvalidArgument { .. }));

        assert_eq!("AVAILABLE".parse::<DriverStatus>().unwrap(), DriverStatus::Available);
        assert_eq!("unavailable".parse::<DriverStatus>().unwrap(), DriverStatus::Unavailable);
    }

    #[test]
    fn test_add_trip_appends_in_order() {
        let mut driver = Driver::new(3, "Test Driver", "12345678912345678").unwrap();
        let first = completed_trip(8, 3, None, 5);
        let second = in_progress_trip(25, 3);

        driver.add_trip(first.clone());
        driver.add_trip(second.clone());

        assert_eq!(driver.trips().len(), 2);
        assert_eq!(driver.trips()[0], first);
        assert_eq!(driver.trips()[1], second);
    }

    #[test]
    fn test_add_trip_permits_duplicates() {
        let mut driver = Driver::new(3, "Test Driver", "12345678912345678").unwrap();
        let trip = completed_trip(8, 3, None, 5);

        driver.add_trip(trip.clone());
        driver.add_trip(trip);

        assert_eq!(driver.trips().len(), 2);
    }

    #[test]
    fn test_average_rating_in_range() {
        let mut driver = Driver::new(54, "Rogers Bartell IV", "1C9EVBRM0YBC564DZ").unwrap();
        driver.add_trip(completed_trip(8, 54, None, 5));

        let average = driver.average_rating();
        assert!(average >= 1.0);
        assert!(average <= 5.0);
    }

    #[test]
    fn test_average_rating_zero_without_trips() {
        let driver = Driver::new(54, "Rogers Bartell IV", "1C9EVBRM0YBC564DZ").unwrap();
        assert_eq!(driver.average_rating(), 0.0);
    }

    #[test]
    fn test_average_rating_over_two_trips() {
        let mut driver = Driver::new(54, "Rogers Bartell IV", "1C9EVBRM0YBC564DZ").unwrap();
        driver.add_trip(completed_trip(8, 54, None, 5));
        driver.add_trip(completed_trip(9, 54, None, 1));

        assert!((driver.average_rating() - 3.0).abs() < 0.01);
    }

    #[test]
    fn test_average_rating_ignores_in_progress_trips() {
        let mut driver = Driver::new(54, "Rogers Bartell IV", "1C9EVBRM0YBC564DZ").unwrap();
        driver.add_trip(completed_trip(8, 54, None, 5));
        driver.add_trip(in_progress_trip(25, 54));

        assert_eq!(driver.average_rating(), 5.0);
    }

    #[test]
    fn test_revenue_floors_cheap_trip_at_zero() {
        let mut driver = Driver::new(54, "Rogers Bartell IV", "1C9EVBRM0YBC564DZ").unwrap();
        driver.add_trip(completed_trip(8, 54, Some(1.0), 5));

        assert_eq!(driver.total_revenue(), 0.0);
    }

    #[test]
    fn test_revenue_over_two_trips() {
        let mut driver = Driver::new(54, "Rogers Bartell IV", "1C9EVBRM0YBC564DZ").unwrap();
        driver.add_trip(completed_trip(8, 54, Some(15.0), 5));
        driver.add_trip(completed_trip(9, 54, Some(10.0), 5));

        assert!((driver.total_revenue() - 17.36).abs() < 0.01);
    }

    #[test]
    fn test_revenue_zero_without_trips() {
        let driver = Driver::new(54, "Rogers Bartell IV", "1C9EVBRM0YBC564DZ").unwrap();
        assert_eq!(driver.total_revenue(), 0.0);
    }

    #[test]
    fn test_revenue_ignores_in_progress_trips() {
        let mut driver = Driver::new(54, "Rogers Bartell IV", "1C9EVBRM0YBC564DZ").unwrap();
        driver.add_trip(completed_trip(8, 54, Some(15.0), 5));
        driver.add_trip(in_progress_trip(25, 54));

        assert!((driver.total_revenue() - 10.68).abs() < 0.1);
    }

    #[test]
    fn test_change_status_toggles_both_ways() {
        let mut driver =
            Driver::with_status(60, "Rogers Bartell IV", "1C9EVBRM0YBC564DZ", DriverStatus::Available)
                .unwrap();
        assert_eq!(driver.status(), DriverStatus::Available);

        assert_eq!(driver.change_status(), DriverStatus::Unavailable);
        assert_eq!(driver.status(), DriverStatus::Unavailable);

        assert_eq!(driver.change_status(), DriverStatus::Available);
    }
}
