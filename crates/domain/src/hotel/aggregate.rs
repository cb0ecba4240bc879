//! Hotel aggregate implementation.

use std::collections::HashMap;

use common::{BookingId, RoomNumber};

use crate::aggregate::Aggregate;

use super::{
    BookingConfirmation, CheckoutSummary, HotelEvent, InventoryError, MakeReservation, Money,
    PriceBreakdown, Reservation, ReservationError, Room, RoomPreference, RoomType,
    events::ReservationCreatedData,
};

/// Highest nightly price, in whole rupees, a room may carry.
///
/// Keeps every stay total and its half representable exactly.
pub const MAX_PRICE_PER_NIGHT_RUPEES: i64 = 10_000_000;

/// One line of the rate card: a room category and its lowest nightly price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateCardEntry {
    pub room_type: RoomType,
    pub has_ac: bool,
    pub non_smoking: bool,
    pub price_per_night: Money,
}

/// Hotel aggregate root.
///
/// Owns the room inventory, fixed at construction, and the append-only
/// reservation log. A room is unavailable exactly when one reservation
/// references it.
///
/// Booking needs `&mut self`; callers sharing a hotel across threads must
/// serialize access themselves.
#[derive(Debug, Clone)]
pub struct Hotel {
    name: String,
    location: String,

    /// Rooms in inventory order.
    rooms: Vec<Room>,

    /// Room number to position in `rooms`.
    index: HashMap<RoomNumber, usize>,

    reservations: Vec<Reservation>,

    /// ID handed to the next booking.
    next_booking_id: BookingId,

    /// Number of events applied.
    version: u64,
}

impl Aggregate for Hotel {
    type Event = HotelEvent;
    type Error = ReservationError;

    fn aggregate_type() -> &'static str {
        "Hotel"
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: Self::Event) {
        match event {
            HotelEvent::ReservationCreated(data) => self.apply_reservation_created(data),
        }
        self.version += 1;
    }
}

impl Hotel {
    /// Builds a hotel from its room inventory.
    ///
    /// Every room starts available. Room numbers must be unique, room types
    /// non-blank, and prices positive, whole paise and at most
    /// [`MAX_PRICE_PER_NIGHT_RUPEES`].
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        rooms: Vec<Room>,
    ) -> Result<Self, InventoryError> {
        let mut index = HashMap::with_capacity(rooms.len());

        for (position, room) in rooms.iter().enumerate() {
            let room_number = room.number();
            if room.room_type().is_empty() {
                return Err(InventoryError::EmptyRoomType { room_number });
            }
            let price = room.price_per_night();
            if !price.is_positive() || price > Money::from_rupees(MAX_PRICE_PER_NIGHT_RUPEES) {
                return Err(InventoryError::InvalidPrice { room_number, price });
            }
            if !price.is_whole_paise() {
                return Err(InventoryError::FractionalPaise {
                    room_number,
                    amount: price.amount(),
                });
            }
            if index.insert(room_number, position).is_some() {
                return Err(InventoryError::DuplicateRoomNumber { room_number });
            }
        }

        Ok(Self {
            name: name.into(),
            location: location.into(),
            rooms,
            index,
            reservations: Vec::new(),
            next_booking_id: BookingId::first(),
            version: 0,
        })
    }
}

// Query methods
impl Hotel {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns all rooms in inventory order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Returns a room by number.
    pub fn room(&self, room_number: RoomNumber) -> Option<&Room> {
        self.index
            .get(&room_number)
            .and_then(|position| self.rooms.get(*position))
    }

    /// Returns the available rooms matching the preference, in inventory order.
    ///
    /// An empty result means nothing matches; it is not an error.
    pub fn available_rooms(&self, preference: &RoomPreference) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|room| room.is_available() && room.matches(preference))
            .collect()
    }

    /// Returns all reservations in booking order.
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Returns a reservation by booking ID.
    pub fn reservation(&self, booking_id: BookingId) -> Option<&Reservation> {
        self.reservations
            .iter()
            .find(|reservation| reservation.booking_id() == booking_id)
    }

    /// Returns the ID the next booking will receive.
    pub fn next_booking_id(&self) -> BookingId {
        self.next_booking_id
    }

    /// Summarizes the inventory as one entry per (AC, smoking, type)
    /// combination with its lowest nightly price, in first-seen order.
    pub fn rate_card(&self) -> Vec<RateCardEntry> {
        let mut entries: Vec<RateCardEntry> = Vec::new();

        for room in &self.rooms {
            let existing = entries.iter_mut().find(|entry| {
                entry.room_type == *room.room_type()
                    && entry.has_ac == room.has_ac()
                    && entry.non_smoking == room.is_non_smoking()
            });

            match existing {
                Some(entry) => {
                    entry.price_per_night = entry.price_per_night.min(room.price_per_night());
                }
                None => entries.push(RateCardEntry {
                    room_type: room.room_type().clone(),
                    has_ac: room.has_ac(),
                    non_smoking: room.is_non_smoking(),
                    price_per_night: room.price_per_night(),
                }),
            }
        }

        entries
    }

    /// Prices a reservation through the room it references.
    pub fn pricing(&self, reservation: &Reservation) -> Result<PriceBreakdown, ReservationError> {
        let room = self
            .room(reservation.room_number())
            .ok_or(ReservationError::RoomNotFound {
                room_number: reservation.room_number(),
            })?;
        Ok(reservation.price_with(room))
    }

    /// Builds the checkout summary for a booking. Read-only.
    pub fn checkout(&self, booking_id: BookingId) -> Result<CheckoutSummary, ReservationError> {
        let reservation = self
            .reservation(booking_id)
            .ok_or(ReservationError::BookingNotFound { booking_id })?;
        let pricing = self.pricing(reservation)?;

        Ok(CheckoutSummary {
            booking_id,
            customer_name: reservation.customer().name().to_string(),
            payment_method: reservation.customer().payment_method(),
            total: pricing.total(),
            advance_paid: pricing.advance(),
            remaining_due: pricing.remaining(),
        })
    }
}

// Command methods
impl Hotel {
    /// Decides a booking without changing state.
    ///
    /// Every precondition is checked against the current inventory, not
    /// against an earlier availability listing.
    pub fn make_reservation(
        &self,
        cmd: MakeReservation,
    ) -> Result<Vec<HotelEvent>, ReservationError> {
        let data = self.decide_reservation(cmd)?;
        Ok(vec![HotelEvent::ReservationCreated(data)])
    }

    /// Books a room: either the room flips to unavailable and one
    /// reservation is appended, or nothing changes.
    #[tracing::instrument(skip(self, cmd), fields(room_number = %cmd.room_number))]
    pub fn book(&mut self, cmd: MakeReservation) -> Result<BookingConfirmation, ReservationError> {
        let data = match self.decide_reservation(cmd) {
            Ok(data) => data,
            Err(err) => {
                metrics::counter!("hotel_reservation_rejections_total", "reason" => err.reason())
                    .increment(1);
                tracing::warn!(error = %err, reason = err.reason(), "reservation rejected");
                return Err(err);
            }
        };

        let confirmation = BookingConfirmation {
            booking_id: data.reservation.booking_id(),
            room_number: data.reservation.room_number(),
            pricing: data.pricing,
        };

        self.apply(HotelEvent::ReservationCreated(data));

        metrics::counter!("hotel_reservations_total").increment(1);
        tracing::info!(
            booking_id = %confirmation.booking_id,
            nights = confirmation.pricing.nights(),
            total = %confirmation.pricing.total(),
            "reservation created"
        );

        Ok(confirmation)
    }

    fn decide_reservation(
        &self,
        cmd: MakeReservation,
    ) -> Result<ReservationCreatedData, ReservationError> {
        let room = self
            .room(cmd.room_number)
            .ok_or(ReservationError::RoomNotFound {
                room_number: cmd.room_number,
            })?;

        if !room.matches(&cmd.preference) {
            return Err(ReservationError::PreferenceMismatch {
                room_number: cmd.room_number,
                room_type: cmd.preference.room_type,
            });
        }

        if !room.is_available() {
            return Err(ReservationError::RoomUnavailable {
                room_number: cmd.room_number,
            });
        }

        if cmd.guests == 0 {
            return Err(ReservationError::InvalidGuestCount { guests: cmd.guests });
        }

        let reservation = Reservation::new(
            self.next_booking_id,
            cmd.customer,
            cmd.room_number,
            cmd.stay,
            cmd.guests,
            cmd.meals,
        );
        let pricing = reservation.price_with(room);

        Ok(ReservationCreatedData {
            reservation,
            pricing,
        })
    }
}

// Apply event helpers
impl Hotel {
    fn apply_reservation_created(&mut self, data: ReservationCreatedData) {
        let reservation = data.reservation;
        let room_number = reservation.room_number();

        let Some(room) = self
            .index
            .get(&room_number)
            .copied()
            .and_then(|position| self.rooms.get_mut(position))
            .filter(|room| room.is_available())
        else {
            tracing::warn!(
                booking_id = %reservation.booking_id(),
                %room_number,
                "skipping reservation for a missing or already booked room"
            );
            return;
        };
        room.mark_booked();

        self.next_booking_id = self.next_booking_id.max(reservation.booking_id().next());
        self.reservations.push(reservation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::DomainEvent;
    use crate::hotel::{Customer, MealChoice, MealPlan, PaymentMethod, StayDates};
    use rust_decimal::Decimal;

    fn sample_hotel() -> Hotel {
        Hotel::new(
            "Test Hotel",
            "Pune",
            vec![
                Room::new(101, "Double", true, true, Money::from_rupees(7000)),
                Room::new(102, "Double", true, true, Money::from_rupees(7000)),
                Room::new(106, "Double", false, false, Money::from_rupees(6000)),
                Room::new(201, "Suite", true, true, Money::from_rupees(10000)),
            ],
        )
        .unwrap()
    }

    fn customer() -> Customer {
        Customer::new("Asha", "9876543210", PaymentMethod::Upi)
    }

    fn double_ac() -> RoomPreference {
        RoomPreference::new("Double", true, true)
    }

    fn stay() -> StayDates {
        StayDates::parse("2024-01-10", "2024-01-15").unwrap()
    }

    #[test]
    fn test_new_hotel_starts_empty() {
        let hotel = sample_hotel();
        assert_eq!(hotel.rooms().len(), 4);
        assert!(hotel.reservations().is_empty());
        assert_eq!(hotel.next_booking_id(), BookingId::first());
        assert_eq!(hotel.version(), 0);
        assert!(hotel.rooms().iter().all(Room::is_available));
    }

    #[test]
    fn test_duplicate_room_numbers_rejected() {
        let result = Hotel::new(
            "Test Hotel",
            "Pune",
            vec![
                Room::new(1, "Single", true, true, Money::from_rupees(4000)),
                Room::new(1, "Suite", true, true, Money::from_rupees(9000)),
            ],
        );
        assert!(matches!(
            result,
            Err(InventoryError::DuplicateRoomNumber { room_number }) if room_number.get() == 1
        ));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let result = Hotel::new(
            "Test Hotel",
            "Pune",
            vec![Room::new(1, "Single", true, true, Money::zero())],
        );
        assert!(matches!(result, Err(InventoryError::InvalidPrice { .. })));
    }

    #[test]
    fn test_price_above_maximum_rejected() {
        let at_max = Money::from_rupees(MAX_PRICE_PER_NIGHT_RUPEES);
        assert!(
            Hotel::new(
                "Test Hotel",
                "Pune",
                vec![Room::new(1, "Single", true, true, at_max)]
            )
            .is_ok()
        );

        let result = Hotel::new(
            "Test Hotel",
            "Pune",
            vec![Room::new(
                1,
                "Single",
                true,
                true,
                at_max + Money::from_paise(1),
            )],
        );
        assert!(matches!(result, Err(InventoryError::InvalidPrice { .. })));

        let result = Hotel::new(
            "Test Hotel",
            "Pune",
            vec![Room::new(1, "Single", true, true, Money::new(Decimal::MAX))],
        );
        assert!(matches!(result, Err(InventoryError::InvalidPrice { .. })));
    }

    #[test]
    fn test_sub_paise_price_rejected() {
        let result = Hotel::new(
            "Test Hotel",
            "Pune",
            vec![Room::new(
                1,
                "Single",
                true,
                true,
                Money::new(Decimal::new(1001, 3)),
            )],
        );
        assert!(matches!(
            result,
            Err(InventoryError::FractionalPaise { amount, .. }) if amount == Decimal::new(1001, 3)
        ));

        let trailing_zeros = Money::new(Decimal::new(4_000_000, 3));
        assert!(
            Hotel::new(
                "Test Hotel",
                "Pune",
                vec![Room::new(1, "Single", true, true, trailing_zeros)]
            )
            .is_ok()
        );
    }

    #[test]
    fn test_long_stay_at_maximum_price_splits_exactly() {
        let mut hotel = Hotel::new(
            "Test Hotel",
            "Pune",
            vec![Room::new(
                1,
                "Suite",
                true,
                true,
                Money::from_rupees(MAX_PRICE_PER_NIGHT_RUPEES) - Money::from_paise(1),
            )],
        )
        .unwrap();
        let cmd = MakeReservation::new(
            customer(),
            1,
            RoomPreference::new("Suite", true, true),
            StayDates::parse("0001-01-01", "9999-12-31").unwrap(),
        )
        .with_meals(MealPlan::new(
            MealChoice::NonVeg,
            MealChoice::NonVeg,
            MealChoice::Veg,
        ));

        let pricing = hotel.book(cmd).unwrap().pricing;

        assert_eq!(pricing.advance(), pricing.remaining());
        assert_eq!(pricing.advance() + pricing.remaining(), pricing.total());
    }

    #[test]
    fn test_blank_room_type_rejected() {
        let result = Hotel::new(
            "Test Hotel",
            "Pune",
            vec![Room::new(1, "  ", true, true, Money::from_rupees(4000))],
        );
        assert!(matches!(result, Err(InventoryError::EmptyRoomType { .. })));
    }

    #[test]
    fn test_available_rooms_filters_exactly() {
        let hotel = sample_hotel();
        let numbers: Vec<u32> = hotel
            .available_rooms(&double_ac())
            .iter()
            .map(|room| room.number().get())
            .collect();
        assert_eq!(numbers, vec![101, 102]);

        assert!(
            hotel
                .available_rooms(&RoomPreference::new("Single", true, true))
                .is_empty()
        );
    }

    #[test]
    fn test_make_reservation_does_not_mutate() {
        let hotel = sample_hotel();
        let cmd = MakeReservation::new(customer(), 101, double_ac(), stay());

        let events = hotel.make_reservation(cmd).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "ReservationCreated");
        assert!(hotel.room(RoomNumber::new(101)).unwrap().is_available());
        assert!(hotel.reservations().is_empty());
    }

    #[test]
    fn test_apply_marks_room_and_appends() {
        let mut hotel = sample_hotel();
        let cmd = MakeReservation::new(customer(), 101, double_ac(), stay());

        let events = hotel.make_reservation(cmd).unwrap();
        hotel.apply_events(events);

        assert!(!hotel.room(RoomNumber::new(101)).unwrap().is_available());
        assert_eq!(hotel.reservations().len(), 1);
        assert_eq!(hotel.next_booking_id(), BookingId::new(2));
        assert_eq!(hotel.version(), 1);
    }

    #[test]
    fn test_apply_skips_event_for_booked_or_missing_room() {
        let mut hotel = sample_hotel();
        let first = hotel
            .make_reservation(MakeReservation::new(customer(), 101, double_ac(), stay()))
            .unwrap();
        let stale = hotel
            .make_reservation(MakeReservation::new(customer(), 101, double_ac(), stay()))
            .unwrap();

        hotel.apply_events(first);
        hotel.apply_events(stale);

        assert_eq!(hotel.reservations().len(), 1);
        assert_eq!(hotel.next_booking_id(), BookingId::new(2));

        let mut elsewhere = Hotel::new(
            "Other Hotel",
            "Goa",
            vec![Room::new(1, "Single", true, true, Money::from_rupees(4000))],
        )
        .unwrap();
        let events = sample_hotel()
            .make_reservation(MakeReservation::new(customer(), 101, double_ac(), stay()))
            .unwrap();
        elsewhere.apply_events(events);

        assert!(elsewhere.reservations().is_empty());
        assert_eq!(elsewhere.next_booking_id(), BookingId::first());
        assert!(elsewhere.rooms().iter().all(Room::is_available));
    }

    #[test]
    fn test_book_returns_pricing() {
        let mut hotel = sample_hotel();
        let meals = MealPlan::new(MealChoice::Veg, MealChoice::Skip, MealChoice::NonVeg);
        let cmd = MakeReservation::new(customer(), 101, double_ac(), stay())
            .with_guests(2)
            .with_meals(meals);

        let confirmation = hotel.book(cmd).unwrap();

        assert_eq!(confirmation.booking_id, BookingId::first());
        assert_eq!(confirmation.room_number, RoomNumber::new(101));
        assert_eq!(confirmation.pricing.nights(), 5);
        assert_eq!(confirmation.pricing.meal_cost(), Money::from_rupees(600));
        assert_eq!(confirmation.pricing.total(), Money::from_rupees(35600));
        assert_eq!(confirmation.pricing.advance(), Money::from_rupees(17800));
    }

    #[test]
    fn test_booking_same_room_twice_is_rejected_without_changes() {
        let mut hotel = sample_hotel();
        hotel
            .book(MakeReservation::new(customer(), 101, double_ac(), stay()))
            .unwrap();

        let result = hotel.book(MakeReservation::new(customer(), 101, double_ac(), stay()));

        assert!(matches!(
            result,
            Err(ReservationError::RoomUnavailable { .. })
        ));
        assert_eq!(hotel.reservations().len(), 1);
        assert_eq!(hotel.next_booking_id(), BookingId::new(2));
        assert_eq!(hotel.version(), 1);
    }

    #[test]
    fn test_unknown_room_is_rejected() {
        let mut hotel = sample_hotel();
        let result = hotel.book(MakeReservation::new(customer(), 999, double_ac(), stay()));
        assert!(matches!(result, Err(ReservationError::RoomNotFound { .. })));
        assert!(hotel.reservations().is_empty());
    }

    #[test]
    fn test_room_outside_preference_is_rejected() {
        let mut hotel = sample_hotel();
        let result = hotel.book(MakeReservation::new(customer(), 106, double_ac(), stay()));
        assert!(matches!(
            result,
            Err(ReservationError::PreferenceMismatch { .. })
        ));
        assert!(hotel.room(RoomNumber::new(106)).unwrap().is_available());
    }

    #[test]
    fn test_zero_guests_rejected() {
        let mut hotel = sample_hotel();
        let cmd = MakeReservation::new(customer(), 101, double_ac(), stay()).with_guests(0);
        assert!(matches!(
            hotel.book(cmd),
            Err(ReservationError::InvalidGuestCount { guests: 0 })
        ));
        assert!(hotel.room(RoomNumber::new(101)).unwrap().is_available());
    }

    #[test]
    fn test_booking_ids_are_sequential() {
        let mut hotel = sample_hotel();
        let first = hotel
            .book(MakeReservation::new(customer(), 102, double_ac(), stay()))
            .unwrap();
        let suite = RoomPreference::new("Suite", true, true);
        let second = hotel
            .book(MakeReservation::new(
                Customer::new("Ravi", "9000000000", PaymentMethod::CreditCard),
                201,
                suite,
                stay(),
            ))
            .unwrap();

        assert_eq!(first.booking_id, BookingId::new(1));
        assert_eq!(second.booking_id, BookingId::new(2));
    }

    #[test]
    fn test_checkout_reports_split() {
        let mut hotel = sample_hotel();
        let confirmation = hotel
            .book(MakeReservation::new(customer(), 101, double_ac(), stay()))
            .unwrap();

        let summary = hotel.checkout(confirmation.booking_id).unwrap();

        assert_eq!(summary.customer_name, "Asha");
        assert_eq!(summary.payment_method, PaymentMethod::Upi);
        assert_eq!(summary.total, Money::from_rupees(35000));
        assert_eq!(summary.advance_paid + summary.remaining_due, summary.total);
    }

    #[test]
    fn test_checkout_unknown_booking() {
        let hotel = sample_hotel();
        assert!(matches!(
            hotel.checkout(BookingId::new(7)),
            Err(ReservationError::BookingNotFound { .. })
        ));
    }

    #[test]
    fn test_rate_card_keeps_lowest_price_per_category() {
        let hotel = Hotel::new(
            "Test Hotel",
            "Pune",
            vec![
                Room::new(1, "Single", true, true, Money::from_rupees(4200)),
                Room::new(2, "Single", true, true, Money::from_rupees(4000)),
                Room::new(3, "Suite", false, false, Money::from_rupees(7000)),
            ],
        )
        .unwrap();

        let card = hotel.rate_card();

        assert_eq!(card.len(), 2);
        assert_eq!(card[0].room_type.as_str(), "Single");
        assert_eq!(card[0].price_per_night, Money::from_rupees(4000));
        assert_eq!(card[1].room_type.as_str(), "Suite");
        assert!(!card[1].has_ac);
    }
}
