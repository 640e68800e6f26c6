use std::fmt;

use thiserror::Error;

use crate::models::booking::Booking;

/// Failures talking to the scheduling provider. The display text is what the
/// model reads as the tool result, so it embeds status codes and raw bodies.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SchedulingError {
    #[error("Invalid start time '{start}': {reason}")]
    InvalidStart { start: String, reason: String },

    #[error("Failed to {action}. Status code: {status}, Error: {body}")]
    HttpError {
        action: &'static str,
        status: u16,
        body: String,
    },

    #[error("Failed to list events: {0}")]
    Unsuccessful(String),

    #[error("Scheduling provider unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to parse scheduling provider response: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for SchedulingError {
    fn from(e: reqwest::Error) -> Self {
        SchedulingError::Unavailable(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingConfirmation {
    pub booking_id: String,
}

impl fmt::Display for BookingConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event booked successfully. Booking ID: {}.",
            self.booking_id
        )
    }
}

/// The provider's current bookings, in the order it returned them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingList(pub Vec<Booking>);

impl BookingList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First booking starting at exactly `event_time` (string equality, no
    /// time parsing) that involves `email`.
    pub fn find_match(&self, event_time: &str, email: &str) -> Option<&Booking> {
        self.0
            .iter()
            .find(|booking| booking.start == event_time && booking.involves(email))
    }
}

impl fmt::Display for BookingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("No events found.");
        }
        let json = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CancelOutcome {
    Cancelled { event_time: String },
    NotFound { event_time: String, email: String },
}

impl fmt::Display for CancelOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelOutcome::Cancelled { event_time } => {
                write!(f, "Event at {event_time} canceled successfully.")
            }
            CancelOutcome::NotFound { event_time, email } => {
                write!(f, "No event found at {event_time} for {email}.")
            }
        }
    }
}
