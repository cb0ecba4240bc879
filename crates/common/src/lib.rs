//! Shared identifier types for the hotel reservation desk.

pub mod types;

pub use types::{BookingId, RoomNumber};
