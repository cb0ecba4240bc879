//! Stay dates and length-of-stay calculation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accepted date layout, `YYYY-MM-DD`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors that can occur when entering stay dates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StayError {
    /// Input is not shaped like `YYYY-MM-DD`.
    #[error("Invalid date format: {input:?} (expected YYYY-MM-DD)")]
    InvalidFormat { input: String },

    /// Input is shaped correctly but names no real day, e.g. `2024-02-30`.
    #[error("Invalid calendar date: {input}")]
    InvalidCalendarDate { input: String },

    /// Check-out must fall on a later day than check-in.
    #[error("Check-out date {check_out} must be after check-in date {check_in}")]
    CheckOutNotAfterCheckIn {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

/// Returns true if `input` has the `YYYY-MM-DD` shape: ten characters, hyphens
/// at positions 4 and 7, digits everywhere else.
///
/// Only the shape is checked; `2024-13-40` passes.
pub fn is_well_formed_date(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parses a `YYYY-MM-DD` date, checking shape first and then the calendar.
pub fn parse_date(input: &str) -> Result<NaiveDate, StayError> {
    let input = input.trim();
    if !is_well_formed_date(input) {
        return Err(StayError::InvalidFormat {
            input: input.to_string(),
        });
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| StayError::InvalidCalendarDate {
        input: input.to_string(),
    })
}

/// Check-in and check-out dates of a stay, check-out strictly after check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StayRecord")]
pub struct StayDates {
    check_in: NaiveDate,
    check_out: NaiveDate,
    nights: u32,
}

#[derive(Deserialize)]
struct StayRecord {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl TryFrom<StayRecord> for StayDates {
    type Error = StayError;

    fn try_from(record: StayRecord) -> Result<Self, Self::Error> {
        StayDates::new(record.check_in, record.check_out)
    }
}

impl StayDates {
    /// Creates a stay. Nights are the calendar-day difference between the
    /// dates; no time of day is involved, so DST and timezones cannot skew it.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, StayError> {
        let days = check_out.signed_duration_since(check_in).num_days();
        let nights = u32::try_from(days)
            .ok()
            .filter(|nights| *nights > 0)
            .ok_or(StayError::CheckOutNotAfterCheckIn {
                check_in,
                check_out,
            })?;

        Ok(Self {
            check_in,
            check_out,
            nights,
        })
    }

    /// Parses both dates and builds the stay.
    pub fn parse(check_in: &str, check_out: &str) -> Result<Self, StayError> {
        Self::new(parse_date(check_in)?, parse_date(check_out)?)
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights, always at least one.
    pub fn nights(&self) -> u32 {
        self.nights
    }
}
