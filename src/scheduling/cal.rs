use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::json;
use tracing::{debug, info};

use super::SchedulingClient;
use super::response_parser::{parse_cancel_response, parse_create_response, parse_list_response};
use super::types::{BookingConfirmation, BookingList, SchedulingError};
use crate::config::constants::BOOKING_DURATION_MINUTES;
use crate::config::models::SchedulingConfig;
use crate::models::booking::BookingResponses;

/// HTTP client for the Cal.com bookings API.
///
/// Creation (`/v1/bookings`) and cancellation (`/bookings/{id}/cancel`)
/// authenticate with an `apiKey` query parameter; listing (`/v2/bookings`)
/// uses the raw key in `Authorization` plus the `cal-api-version` header.
pub struct CalClient {
    http_client: reqwest::Client,
    config: SchedulingConfig,
}

impl CalClient {
    pub fn new(config: &SchedulingConfig, timeout: Duration) -> Result<Self, SchedulingError> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

/// Normalises an RFC 3339 start time to UTC and derives the booking's end.
fn booking_window(start: &str) -> Result<(String, String), SchedulingError> {
    let start_dt = DateTime::parse_from_rfc3339(start)
        .map_err(|e| SchedulingError::InvalidStart {
            start: start.to_string(),
            reason: e.to_string(),
        })?
        .with_timezone(&Utc);
    let end_dt = start_dt + chrono::Duration::minutes(BOOKING_DURATION_MINUTES);

    Ok((
        start_dt.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        end_dt.to_rfc3339_opts(SecondsFormat::AutoSi, true),
    ))
}

#[async_trait]
impl SchedulingClient for CalClient {
    async fn create(
        &self,
        start: &str,
        mut responses: BookingResponses,
        time_zone: &str,
        language: &str,
    ) -> Result<BookingConfirmation, SchedulingError> {
        let (start, end) = booking_window(start)?;
        responses.normalize_sms_reminder();

        let body = json!({
            "eventTypeId": self.config.event_type_id,
            "start": start,
            "end": end,
            "responses": responses,
            "timeZone": time_zone,
            "language": language,
            "metadata": {},
        });

        info!(start = %start, end = %end, "Creating booking");
        let response = self
            .http_client
            .post(self.url("/v1/bookings"))
            .query(&[("apiKey", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let response_body = response.text().await?;
        parse_create_response(status, &response_body)
    }

    async fn list(&self) -> Result<BookingList, SchedulingError> {
        let response = self
            .http_client
            .get(self.url("/v2/bookings"))
            .header("cal-api-version", &self.config.api_version)
            .header("Authorization", &self.config.api_key)
            .send()
            .await?;

        let status = response.status().as_u16();
        let response_body = response.text().await?;
        debug!(status, "Bookings listing returned");
        parse_list_response(status, &response_body)
    }

    async fn cancel_booking(&self, booking_id: i64) -> Result<(), SchedulingError> {
        let response = self
            .http_client
            .delete(self.url(&format!("/bookings/{booking_id}/cancel")))
            .query(&[("apiKey", self.config.api_key.as_str())])
            .send()
            .await?;

        let status = response.status().as_u16();
        let response_body = response.text().await?;
        parse_cancel_response(status, &response_body)
    }
}
