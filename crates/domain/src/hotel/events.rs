//! Hotel domain events.

use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;

use super::{PriceBreakdown, Reservation};

/// Events that can occur on a hotel aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum HotelEvent {
    /// A room was booked.
    ReservationCreated(ReservationCreatedData),
}

impl DomainEvent for HotelEvent {
    fn event_type(&self) -> &'static str {
        match self {
            HotelEvent::ReservationCreated(_) => "ReservationCreated",
        }
    }
}

/// Data for ReservationCreated event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreatedData {
    /// The new reservation.
    pub reservation: Reservation,

    /// Price of the stay at booking time.
    pub pricing: PriceBreakdown,
}
