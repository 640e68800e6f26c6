use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A booking as returned by the provider's bookings listing.
///
/// Only the fields the assistant reasons about are typed; everything else the
/// provider sends is kept in `extra` so the model sees the full record.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<Participant>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<Participant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_fields_responses: Option<BookingFieldsResponses>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct Participant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct BookingFieldsResponses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Booking {
    /// Every non-empty email tied to the booking: the submitted booking form,
    /// the attendees and the hosts.
    pub fn contact_emails(&self) -> impl Iterator<Item = &str> {
        let form_email = self
            .booking_fields_responses
            .as_ref()
            .and_then(|responses| responses.email.as_deref());

        form_email
            .into_iter()
            .chain(self.attendees.iter().filter_map(|a| a.email.as_deref()))
            .chain(self.hosts.iter().filter_map(|h| h.email.as_deref()))
            .filter(|email| !email.is_empty())
    }

    pub fn involves(&self, email: &str) -> bool {
        let wanted = email.to_lowercase();
        self.contact_emails()
            .any(|candidate| candidate.to_lowercase() == wanted)
    }
}

/// Attendee details submitted when creating a booking.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponses {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub sms_reminder_number: Option<Value>,
    pub location: BookingLocation,
}

impl BookingResponses {
    /// The provider expects the reminder number as a string and rejects null.
    pub fn normalize_sms_reminder(&mut self) {
        let normalized = match self.sms_reminder_number.take() {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(number)) => number,
            Some(other) => other.to_string(),
        };
        self.sms_reminder_number = Some(Value::String(normalized));
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingLocation {
    pub value: String,
    pub option_value: String,
}
