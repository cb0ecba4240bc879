use serde::{Deserialize, Serialize};

/// Room number, the unique key of a room in a hotel's inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(u32);

impl RoomNumber {
    /// Creates a room number.
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the underlying number.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RoomNumber {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u32> for RoomNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl From<RoomNumber> for u32 {
    fn from(number: RoomNumber) -> Self {
        number.0
    }
}

/// Sequential booking identifier.
///
/// Identifiers are handed out by the hotel that owns the reservation,
/// starting at 1 and increasing by one per booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(u64);

impl BookingId {
    /// The identifier given to the first booking.
    pub fn first() -> Self {
        Self(1)
    }

    /// Creates a booking ID from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying value.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BookingId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
