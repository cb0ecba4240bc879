//! Stay pricing and the 50/50 payment split.

use common::{BookingId, RoomNumber};
use serde::{Deserialize, Serialize};

use super::{Money, PaymentMethod};

/// Price of a stay, broken down.
///
/// Built only through [`PriceBreakdown::compute`], so
/// `advance + remaining == total` and `advance == total / 2` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    nightly_rate: Money,
    nights: u32,
    room_charge: Money,
    meal_cost: Money,
    total: Money,
    advance: Money,
    remaining: Money,
}

impl PriceBreakdown {
    /// Total is `nightly_rate * nights + meal_cost`; the advance is half of it.
    pub fn compute(nightly_rate: Money, nights: u32, meal_cost: Money) -> Self {
        let room_charge = nightly_rate.multiply(nights);
        let total = room_charge + meal_cost;
        let advance = total.half();

        Self {
            nightly_rate,
            nights,
            room_charge,
            meal_cost,
            total,
            advance,
            remaining: total - advance,
        }
    }

    pub fn nightly_rate(&self) -> Money {
        self.nightly_rate
    }

    pub fn nights(&self) -> u32 {
        self.nights
    }

    pub fn room_charge(&self) -> Money {
        self.room_charge
    }

    pub fn meal_cost(&self) -> Money {
        self.meal_cost
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// Amount collected at booking time.
    pub fn advance(&self) -> Money {
        self.advance
    }

    /// Amount due at checkout.
    pub fn remaining(&self) -> Money {
        self.remaining
    }
}

/// Result of a successful booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub booking_id: BookingId,
    pub room_number: RoomNumber,
    pub pricing: PriceBreakdown,
}

/// What the guest sees when checking out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub booking_id: BookingId,
    pub customer_name: String,
    pub payment_method: PaymentMethod,
    pub total: Money,
    pub advance_paid: Money,
    pub remaining_due: Money,
}
