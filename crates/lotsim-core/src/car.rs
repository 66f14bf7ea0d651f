//! Cars and occupancy records.

use std::fmt;

use crate::id::TickId;
use crate::kind::CarType;

/// A car, identified solely by its category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Car {
    kind: CarType,
}

impl Car {
    /// Create a car of the given category.
    pub const fn new(kind: CarType) -> Self {
        Self { kind }
    }

    /// The car's category.
    pub fn kind(&self) -> CarType {
        self.kind
    }
}

impl From<CarType> for Car {
    fn from(kind: CarType) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// An occupancy record: a car plus a timestamp.
///
/// While the record sits in the occupancy grid, the timestamp is the
/// entry tick. When the car leaves, the record is moved out of the grid,
/// its timestamp is overwritten with the exit tick, and it is queued for
/// reporting. `Spot` is not `Clone`: exactly one container
/// owns a given record at any time.
#[derive(Debug, PartialEq, Eq)]
pub struct Spot {
    car: Car,
    timestamp: TickId,
}

impl Spot {
    /// Create a record for `car` stamped at `timestamp`.
    pub fn new(car: Car, timestamp: TickId) -> Self {
        Self { car, timestamp }
    }

    /// The car held by this record.
    pub fn car(&self) -> Car {
        self.car
    }

    /// Entry tick while parked, exit tick once removed.
    pub fn timestamp(&self) -> TickId {
        self.timestamp
    }

    /// Overwrite the timestamp (used to stamp the exit tick).
    pub fn set_timestamp(&mut self, timestamp: TickId) {
        self.timestamp = timestamp;
    }
}

impl fmt::Display for Spot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, timestamp: {}", self.car, self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_stamp_overwrites_entry() {
        let mut spot = Spot::new(Car::new(CarType::Small), TickId(12));
        assert_eq!(spot.timestamp(), TickId(12));
        spot.set_timestamp(TickId(40));
        assert_eq!(spot.timestamp(), TickId(40));
        assert_eq!(spot.car().kind(), CarType::Small);
    }

    #[test]
    fn display() {
        let spot = Spot::new(Car::new(CarType::Large), TickId(3));
        assert_eq!(spot.to_string(), "LARGE, timestamp: 3");
    }
}
