use serde_json::Value;
use tracing::debug;

use super::types::{BookingConfirmation, BookingList, SchedulingError};
use crate::models::booking::Booking;

fn parse_json(body: &str) -> Result<Value, SchedulingError> {
    serde_json::from_str(body).map_err(|e| SchedulingError::ParseError(e.to_string()))
}

/// Parse the provider's reply to a booking creation request.
pub fn parse_create_response(
    status: u16,
    body: &str,
) -> Result<BookingConfirmation, SchedulingError> {
    if !matches!(status, 200 | 201) {
        return Err(SchedulingError::HttpError {
            action: "book event",
            status,
            body: body.to_string(),
        });
    }

    let value = parse_json(body)?;
    let booking_id = match value.get("id") {
        None | Some(Value::Null) => "unknown".to_string(),
        Some(Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
    };

    debug!(booking_id = %booking_id, "Parsed booking creation response");
    Ok(BookingConfirmation { booking_id })
}

/// Parse the provider's bookings listing (`{"status": "success", "data": [...]}`).
pub fn parse_list_response(status: u16, body: &str) -> Result<BookingList, SchedulingError> {
    if status != 200 {
        return Err(SchedulingError::HttpError {
            action: "list events",
            status,
            body: body.to_string(),
        });
    }

    let value = parse_json(body)?;
    if value.get("status").and_then(Value::as_str) != Some("success") {
        return Err(SchedulingError::Unsuccessful(body.to_string()));
    }

    let bookings = match value.get("data") {
        None | Some(Value::Null) => Vec::new(),
        Some(data) => serde_json::from_value::<Vec<Booking>>(data.clone())
            .map_err(|e| SchedulingError::ParseError(e.to_string()))?,
    };

    debug!(count = bookings.len(), "Parsed bookings listing");
    Ok(BookingList(bookings))
}

/// Parse the provider's reply to a cancellation request.
pub fn parse_cancel_response(status: u16, body: &str) -> Result<(), SchedulingError> {
    if matches!(status, 200 | 204) {
        Ok(())
    } else {
        Err(SchedulingError::HttpError {
            action: "cancel event",
            status,
            body: body.to_string(),
        })
    }
}
