pub mod cal;
pub mod response_parser;
pub mod types;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::models::booking::BookingResponses;

pub use self::cal::CalClient;
pub use self::types::{BookingConfirmation, BookingList, CancelOutcome, SchedulingError};

/// Operations the booking tools perform against the scheduling provider.
///
/// Each call is a single request with no retry; the provider's state is the
/// only source of truth.
#[async_trait]
pub trait SchedulingClient: Send + Sync {
    async fn create(
        &self,
        start: &str,
        responses: BookingResponses,
        time_zone: &str,
        language: &str,
    ) -> Result<BookingConfirmation, SchedulingError>;

    async fn list(&self) -> Result<BookingList, SchedulingError>;

    async fn cancel_booking(&self, booking_id: i64) -> Result<(), SchedulingError>;

    /// Cancels the booking starting at exactly `event_time` that involves
    /// `email`, re-reading the provider's bookings first.
    async fn cancel(&self, event_time: &str, email: &str) -> Result<CancelOutcome, SchedulingError> {
        let bookings = self.list().await?;
        debug!(count = bookings.len(), event_time, "Scanning bookings for cancellation");

        let Some(target) = bookings.find_match(event_time, email) else {
            info!(event_time, "No booking matched cancellation request");
            return Ok(CancelOutcome::NotFound {
                event_time: event_time.to_string(),
                email: email.to_string(),
            });
        };

        self.cancel_booking(target.id).await?;
        info!(booking_id = target.id, "Booking cancelled");
        Ok(CancelOutcome::Cancelled {
            event_time: event_time.to_string(),
        })
    }
}
