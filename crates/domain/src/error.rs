//! Domain error types.

use thiserror::Error;

use crate::hotel::{InventoryError, ReservationError, StayError, UnknownPaymentMethod};

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A booking was rejected by the hotel aggregate.
    #[error("Reservation error: {0}")]
    Reservation(#[from] ReservationError),

    /// The room inventory could not be assembled.
    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    /// Stay dates were malformed or out of order.
    #[error("Stay error: {0}")]
    Stay(#[from] StayError),

    /// Payment method outside the accepted set.
    #[error(transparent)]
    PaymentMethod(#[from] UnknownPaymentMethod),
}
