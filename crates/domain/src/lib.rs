//! Domain layer for the hotel reservation desk.
//!
//! This crate provides:
//! - Aggregate and DomainEvent traits
//! - The Hotel aggregate with its room inventory and reservation log
//! - Value objects for rooms, customers, money, stays and meals
//! - Pricing with an exact 50/50 advance split

pub mod aggregate;
pub mod error;
pub mod hotel;

pub use aggregate::{Aggregate, DomainEvent};
pub use error::DomainError;
pub use hotel::{
    BookingConfirmation, CheckoutSummary, Customer, Hotel, HotelEvent, InventoryError,
    MAX_PRICE_PER_NIGHT_RUPEES, MakeReservation, MealChoice, MealPlan, MealSlot, Money,
    PaymentMethod, PriceBreakdown, RateCardEntry, Reservation, ReservationCreatedData,
    ReservationError, Room, RoomPreference, RoomType, StayDates, StayError,
    UnknownPaymentMethod, is_well_formed_date, parse_date,
};
