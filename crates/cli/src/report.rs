//! Text reports printed during a session.

use std::io::{self, Write};

use domain::{
    BookingConfirmation, CheckoutSummary, Hotel, MealChoice, MealSlot, RateCardEntry,
    Reservation, Room, RoomPreference,
};

fn ac_label(has_ac: bool) -> &'static str {
    if has_ac { "AC" } else { "Non-AC" }
}

fn smoking_label(non_smoking: bool) -> &'static str {
    if non_smoking { "Non-Smoking" } else { "Smoking" }
}

/// Greeting plus the rate card.
pub fn write_welcome(out: &mut impl Write, hotel: &Hotel) -> io::Result<()> {
    writeln!(out, "\nWelcome to {} in {}", hotel.name(), hotel.location())?;
    writeln!(
        out,
        "\nPlease read the room charges below carefully before check-in\n"
    )?;
    write_rate_card(out, &hotel.rate_card())
}

/// Rate card grouped by AC/smoking combination, in first-seen order.
pub fn write_rate_card(out: &mut impl Write, entries: &[RateCardEntry]) -> io::Result<()> {
    let mut groups: Vec<(bool, bool)> = Vec::new();
    for entry in entries {
        let key = (entry.has_ac, entry.non_smoking);
        if !groups.contains(&key) {
            groups.push(key);
        }
    }

    let width = entries
        .iter()
        .map(|entry| entry.room_type.as_str().len())
        .max()
        .unwrap_or(0);

    for (has_ac, non_smoking) in groups {
        writeln!(out, "{} & {} -", ac_label(has_ac), smoking_label(non_smoking))?;
        for entry in entries
            .iter()
            .filter(|entry| entry.has_ac == has_ac && entry.non_smoking == non_smoking)
        {
            writeln!(
                out,
                "{:<width$} : {} per night",
                entry.room_type.as_str(),
                entry.price_per_night
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// One room, as shown in listings.
pub fn write_room(out: &mut impl Write, room: &Room) -> io::Result<()> {
    writeln!(
        out,
        "Room {} ({}) - {}, {} - {} - {} per night",
        room.number(),
        room.room_type(),
        if room.has_ac() { "With AC" } else { "Without AC" },
        smoking_label(room.is_non_smoking()),
        if room.is_available() { "Available" } else { "Booked" },
        room.price_per_night()
    )
}

/// Rooms offered for a preference.
pub fn write_available_rooms(
    out: &mut impl Write,
    preference: &RoomPreference,
    rooms: &[&Room],
) -> io::Result<()> {
    writeln!(
        out,
        "Available {} rooms with {} and {} preference:",
        preference.room_type,
        if preference.has_ac { "AC" } else { "No AC" },
        smoking_label(preference.non_smoking)
    )?;
    for room in rooms {
        write_room(out, room)?;
    }
    Ok(())
}

pub fn write_meal_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Meal Options:")?;
    for (position, slot) in MealSlot::ALL.into_iter().enumerate() {
        writeln!(
            out,
            "{}. {} (Veg - {}, Non-Veg - {})",
            position + 1,
            slot,
            slot.price(MealChoice::Veg),
            slot.price(MealChoice::NonVeg)
        )?;
    }
    Ok(())
}

pub fn write_confirmation(
    out: &mut impl Write,
    confirmation: &BookingConfirmation,
) -> io::Result<()> {
    let pricing = &confirmation.pricing;
    writeln!(
        out,
        "\n\nReservation successful! Booking ID: {}",
        confirmation.booking_id
    )?;
    writeln!(
        out,
        "Room {}: {} x {} night(s) = {}",
        confirmation.room_number,
        pricing.nightly_rate(),
        pricing.nights(),
        pricing.room_charge()
    )?;
    writeln!(out, "Meals: {}", pricing.meal_cost())?;
    writeln!(out, "Total Price for Stay: {}", pricing.total())?;
    writeln!(out, "Advance Payment (50%): {}", pricing.advance())?;
    writeln!(out, "Please pay the advance now.")
}

pub fn write_reservation(out: &mut impl Write, reservation: &Reservation) -> io::Result<()> {
    let customer = reservation.customer();
    writeln!(out, "\nBooking ID: {}", reservation.booking_id())?;
    writeln!(out, "Customer: {}", customer.name())?;
    writeln!(out, "Mobile No: +91 {}", customer.phone())?;
    writeln!(out, "Payment Type: {}", customer.payment_method())?;
    writeln!(out, "Room: {}", reservation.room_number())?;
    writeln!(out, "Guests: {}", reservation.guests())?;
    writeln!(out, "Check-in: {}", reservation.stay().check_in())?;
    writeln!(out, "Check-out: {}", reservation.stay().check_out())?;
    writeln!(out, "Nights: {}", reservation.nights())?;
    writeln!(out, "Meal Cost: {}", reservation.meal_cost())
}

/// Every reservation made so far.
pub fn write_reservation_log(out: &mut impl Write, hotel: &Hotel) -> io::Result<()> {
    if hotel.reservations().is_empty() {
        return writeln!(out, "No reservations available.");
    }

    write!(out, "\n\nAll Reservations:")?;
    for reservation in hotel.reservations() {
        write_reservation(out, reservation)?;
    }
    Ok(())
}

pub fn write_checkout(out: &mut impl Write, summary: &CheckoutSummary) -> io::Result<()> {
    writeln!(
        out,
        "\nThank you for staying with us! Your booking ID: {}",
        summary.booking_id
    )?;
    writeln!(out, "Total Amount: {}", summary.total)?;
    writeln!(
        out,
        "Advance Payment is done via {} : {}",
        summary.payment_method, summary.advance_paid
    )?;
    writeln!(out, "Remaining Amount: {}", summary.remaining_due)?;
    writeln!(out, "Please pay the remaining amount at the time of checkout.")
}
