//! Hotel commands.

use common::RoomNumber;

use super::{Customer, MealPlan, RoomPreference, StayDates};

/// Command to book a room.
///
/// Carries the preference the customer filtered with, so the hotel can
/// re-check that the room is one it would have offered.
#[derive(Debug, Clone)]
pub struct MakeReservation {
    /// Who is booking.
    pub customer: Customer,

    /// The room picked from the available listing.
    pub room_number: RoomNumber,

    /// The preference the listing was produced from.
    pub preference: RoomPreference,

    /// Check-in and check-out dates.
    pub stay: StayDates,

    /// Number of guests, at least one.
    pub guests: u32,

    /// Meals selected for the stay.
    pub meals: MealPlan,
}

impl MakeReservation {
    /// Creates a booking for one guest with no meals.
    pub fn new(
        customer: Customer,
        room_number: impl Into<RoomNumber>,
        preference: RoomPreference,
        stay: StayDates,
    ) -> Self {
        Self {
            customer,
            room_number: room_number.into(),
            preference,
            stay,
            guests: 1,
            meals: MealPlan::none(),
        }
    }

    pub fn with_guests(mut self, guests: u32) -> Self {
        self.guests = guests;
        self
    }

    pub fn with_meals(mut self, meals: MealPlan) -> Self {
        self.meals = meals;
        self
    }
}
