//! Hotel aggregate and related types.

mod aggregate;
mod commands;
mod events;
mod meals;
mod pricing;
mod reservation;
mod stay;
mod value_objects;

pub use aggregate::{Hotel, MAX_PRICE_PER_NIGHT_RUPEES, RateCardEntry};
pub use commands::MakeReservation;
pub use events::{HotelEvent, ReservationCreatedData};
pub use meals::{MealChoice, MealPlan, MealSlot};
pub use pricing::{BookingConfirmation, CheckoutSummary, PriceBreakdown};
pub use reservation::Reservation;
pub use stay::{StayDates, StayError, is_well_formed_date, parse_date};
pub use value_objects::{
    Customer, Money, PaymentMethod, Room, RoomPreference, RoomType, UnknownPaymentMethod,
};

use common::{BookingId, RoomNumber};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when booking a room.
#[derive(Debug, Error)]
pub enum ReservationError {
    /// No room with this number exists in the inventory.
    #[error("Room {room_number} not found")]
    RoomNotFound { room_number: RoomNumber },

    /// The room has already been booked.
    #[error("Room {room_number} is not available")]
    RoomUnavailable { room_number: RoomNumber },

    /// The room is not one of the rooms offered for the customer's preference.
    #[error("Room {room_number} does not match the requested {room_type} room preference")]
    PreferenceMismatch {
        room_number: RoomNumber,
        room_type: RoomType,
    },

    /// Guest count must be positive.
    #[error("Invalid guest count: {guests} (must be greater than 0)")]
    InvalidGuestCount { guests: u32 },

    /// No reservation carries this booking ID.
    #[error("Booking {booking_id} not found")]
    BookingNotFound { booking_id: BookingId },
}

impl ReservationError {
    /// Short label used for metrics and logs.
    pub fn reason(&self) -> &'static str {
        match self {
            ReservationError::RoomNotFound { .. } => "room_not_found",
            ReservationError::RoomUnavailable { .. } => "room_unavailable",
            ReservationError::PreferenceMismatch { .. } => "preference_mismatch",
            ReservationError::InvalidGuestCount { .. } => "invalid_guest_count",
            ReservationError::BookingNotFound { .. } => "booking_not_found",
        }
    }
}

/// Errors that can occur while assembling a hotel's room inventory.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Two rooms share a number.
    #[error("Duplicate room number: {room_number}")]
    DuplicateRoomNumber { room_number: RoomNumber },

    /// Nightly price must be positive and at most [`MAX_PRICE_PER_NIGHT_RUPEES`].
    #[error(
        "Invalid price for room {room_number}: {price} (must be greater than 0 and at most Rs {max})",
        max = MAX_PRICE_PER_NIGHT_RUPEES
    )]
    InvalidPrice { room_number: RoomNumber, price: Money },

    /// Nightly price has digits below one paisa.
    #[error("Invalid price for room {room_number}: {amount} (at most 2 decimal places)")]
    FractionalPaise { room_number: RoomNumber, amount: Decimal },

    /// Room type label is blank.
    #[error("Room {room_number} has an empty room type")]
    EmptyRoomType { room_number: RoomNumber },
}
