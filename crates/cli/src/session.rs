//! The interactive booking session.

use std::io::{BufRead, Write};

use common::{BookingId, RoomNumber};
use domain::{
    Customer, DomainError, Hotel, MakeReservation, MealChoice, MealPlan, MealSlot, PaymentMethod,
    ReservationError, RoomPreference, RoomType, StayDates, StayError, parse_date,
};

use crate::error::CliError;
use crate::prompt::{Prompter, non_empty};
use crate::report;

/// How a session ended.
#[derive(Debug)]
pub enum SessionOutcome {
    /// A room was booked.
    Booked(BookingId),

    /// Nothing matched the customer's preferences.
    NoMatchingRooms,

    /// The hotel refused the booking at the last moment.
    Rejected(ReservationError),
}

/// Text shown when the hotel refuses a booking.
fn rejection_message(err: &ReservationError) -> String {
    match err {
        ReservationError::RoomUnavailable { .. } | ReservationError::RoomNotFound { .. } => {
            "Selected room is not available.".to_string()
        }
        other => format!("Booking failed: {other}."),
    }
}

/// Walks one customer through a booking against a hotel.
pub struct Session<'h, R, W> {
    hotel: &'h mut Hotel,
    prompter: Prompter<R, W>,
}

impl<'h, R: BufRead, W: Write> Session<'h, R, W> {
    pub fn new(hotel: &'h mut Hotel, input: R, output: W) -> Self {
        Self {
            hotel,
            prompter: Prompter::new(input, output),
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Runs the session to completion.
    ///
    /// Invalid answers are re-asked; only I/O failures and end of input end
    /// the session with an error.
    #[tracing::instrument(skip_all, fields(hotel = %self.hotel.name()))]
    pub fn run(&mut self) -> Result<SessionOutcome, CliError> {
        let customer = self.ask_customer()?;

        report::write_welcome(self.prompter.output(), self.hotel)?;
        let preference = self.ask_preference()?;

        let offered: Vec<RoomNumber> = {
            let rooms = self.hotel.available_rooms(&preference);
            report::write_available_rooms(self.prompter.output(), &preference, &rooms)?;
            rooms.iter().map(|room| room.number()).collect()
        };

        if offered.is_empty() {
            tracing::info!(room_type = %preference.room_type, "no rooms match preference");
            self.prompter
                .say("\nNo rooms available matching your preferences.")?;
            return Ok(SessionOutcome::NoMatchingRooms);
        }

        let room_number = self.ask_room(&offered)?;
        let stay = self.ask_stay()?;
        let guests = self.ask_guests()?;
        let meals = self.ask_meals()?;

        let cmd = MakeReservation::new(customer, room_number, preference, stay)
            .with_guests(guests)
            .with_meals(meals);

        let confirmation = match self.hotel.book(cmd) {
            Ok(confirmation) => confirmation,
            Err(err) => {
                self.prompter.say(rejection_message(&err))?;
                return Ok(SessionOutcome::Rejected(err));
            }
        };

        report::write_confirmation(self.prompter.output(), &confirmation)?;
        report::write_reservation_log(self.prompter.output(), self.hotel)?;

        let summary = self
            .hotel
            .checkout(confirmation.booking_id)
            .map_err(DomainError::from)?;
        report::write_checkout(self.prompter.output(), &summary)?;

        Ok(SessionOutcome::Booked(confirmation.booking_id))
    }

    fn ask_customer(&mut self) -> Result<Customer, CliError> {
        let name = self
            .prompter
            .ask("Enter your name: ", non_empty("Name"))?;
        let phone = self
            .prompter
            .ask("Enter your mobile number: +91 ", non_empty("Mobile number"))?;

        let labels: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.as_str()).collect();
        let prompt = format!("Enter your payment type ({}): ", labels.join(", "));
        let payment_method = self.prompter.ask(&prompt, |answer| {
            answer.parse::<PaymentMethod>().map_err(|_| {
                "Invalid payment type! Please enter a valid payment type.".to_string()
            })
        })?;

        Ok(Customer::new(name, phone, payment_method))
    }

    fn ask_preference(&mut self) -> Result<RoomPreference, CliError> {
        let mut types: Vec<&str> = Vec::new();
        for room in self.hotel.rooms() {
            if !types.contains(&room.room_type().as_str()) {
                types.push(room.room_type().as_str());
            }
        }
        let prompt = format!(
            "Enter your preferences: Room Type ({}): ",
            types.join("/")
        );

        let room_type = self.prompter.ask(&prompt, |answer| {
            let room_type = RoomType::new(answer);
            if room_type.is_empty() {
                Err("Room type cannot be empty! Please try again.".to_string())
            } else {
                Ok(room_type)
            }
        })?;
        let has_ac = self.prompter.ask_flag("AC? (1 for Yes, 0 for No): ")?;
        let non_smoking = self
            .prompter
            .ask_flag("Non-Smoking? (1 for Yes, 0 for No): ")?;

        Ok(RoomPreference::new(room_type, has_ac, non_smoking))
    }

    fn ask_room(&mut self, offered: &[RoomNumber]) -> Result<RoomNumber, CliError> {
        let listing = offered
            .iter()
            .map(RoomNumber::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        self.prompter
            .ask("Select your room by entering the room number: ", |answer| {
                let room_number: RoomNumber = answer
                    .parse()
                    .map_err(|_| "Invalid input! Please enter a numeric room number.".to_string())?;
                if offered.contains(&room_number) {
                    Ok(room_number)
                } else {
                    Err(format!(
                        "Invalid room number! Available rooms: {listing}\nPlease select a valid room number."
                    ))
                }
            })
    }

    fn ask_date(&mut self, prompt: &str) -> Result<chrono::NaiveDate, CliError> {
        self.prompter.ask(prompt, |answer| {
            parse_date(answer).map_err(|err| match err {
                StayError::InvalidFormat { .. } => {
                    "Invalid date format! Please try again.".to_string()
                }
                other => format!("{other}! Please try again."),
            })
        })
    }

    fn ask_stay(&mut self) -> Result<StayDates, CliError> {
        loop {
            let check_in = self.ask_date("\nEnter check-in date (YYYY-MM-DD): ")?;
            let check_out = self.ask_date("Enter check-out date (YYYY-MM-DD): ")?;

            match StayDates::new(check_in, check_out) {
                Ok(stay) => return Ok(stay),
                Err(err) => {
                    tracing::debug!(error = %err, "stay dates rejected");
                    self.prompter.say(
                        "Check-out date must be after check-in date! Please enter valid dates.",
                    )?;
                }
            }
        }
    }

    fn ask_guests(&mut self) -> Result<u32, CliError> {
        self.prompter.ask("Number of guests: ", |answer| {
            match answer.parse::<u32>() {
                Ok(guests) if guests > 0 => Ok(guests),
                _ => Err("Invalid input! Please enter a positive number of guests.".to_string()),
            }
        })
    }

    fn ask_meals(&mut self) -> Result<MealPlan, CliError> {
        let wants_meals = self
            .prompter
            .ask_flag("\nWould you like any meals during your stay? (1 for Yes, 0 for No): ")?;
        if !wants_meals {
            return Ok(MealPlan::none());
        }

        report::write_meal_menu(self.prompter.output())?;

        let mut plan = MealPlan::none();
        for slot in MealSlot::ALL {
            let prompt = format!("Would you like {slot}? (1 for Veg, 2 for Non-Veg, 0 for No): ");
            let choice = self.prompter.ask(&prompt, |answer| {
                answer
                    .parse::<u8>()
                    .ok()
                    .and_then(MealChoice::from_code)
                    .ok_or_else(|| "Invalid choice! Please enter 0, 1 or 2.".to_string())
            })?;
            plan = plan.with(slot, choice);
        }
        Ok(plan)
    }
}
