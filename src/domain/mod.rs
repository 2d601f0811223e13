// Domain layer: entities, raw record types and ports (interfaces).

pub mod driver;
pub mod fleet;
pub mod passenger;
pub mod ports;
pub mod records;
pub mod trip;

pub use driver::{Driver, DriverStatus, DRIVER_FEE, DRIVER_TAKE_RATE};
pub use fleet::Fleet;
pub use passenger::Passenger;
pub use records::{DriverRecord, PassengerRecord, RawRecords, TripRecord};
pub use trip::{PassengerRef, Trip};
