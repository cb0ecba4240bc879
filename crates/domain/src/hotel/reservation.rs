//! Reservation record.

use chrono::{DateTime, Utc};
use common::{BookingId, RoomNumber};
use serde::{Deserialize, Serialize};

use super::{Customer, MealPlan, Money, PriceBreakdown, Room, StayDates};

/// A confirmed booking of one room by one customer.
///
/// The room is referenced by number; prices are resolved through the hotel's
/// room table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    booking_id: BookingId,
    customer: Customer,
    room_number: RoomNumber,
    stay: StayDates,
    guests: u32,
    meals: MealPlan,
    booked_at: DateTime<Utc>,
}

impl Reservation {
    pub(crate) fn new(
        booking_id: BookingId,
        customer: Customer,
        room_number: RoomNumber,
        stay: StayDates,
        guests: u32,
        meals: MealPlan,
    ) -> Self {
        Self {
            booking_id,
            customer,
            room_number,
            stay,
            guests,
            meals,
            booked_at: Utc::now(),
        }
    }

    pub fn booking_id(&self) -> BookingId {
        self.booking_id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn room_number(&self) -> RoomNumber {
        self.room_number
    }

    pub fn stay(&self) -> &StayDates {
        &self.stay
    }

    pub fn nights(&self) -> u32 {
        self.stay.nights()
    }

    pub fn guests(&self) -> u32 {
        self.guests
    }

    pub fn meals(&self) -> &MealPlan {
        &self.meals
    }

    pub fn meal_cost(&self) -> Money {
        self.meals.cost()
    }

    pub fn booked_at(&self) -> DateTime<Utc> {
        self.booked_at
    }

    /// Prices this reservation against the room it references.
    pub fn price_with(&self, room: &Room) -> PriceBreakdown {
        PriceBreakdown::compute(room.price_per_night(), self.nights(), self.meal_cost())
    }
}
