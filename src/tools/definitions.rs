use serde_json::{Value, json};

use super::ToolName;
use crate::models::tool_definition::ToolDefinition;

fn book_event_parameters() -> Value {
    json!({
        "type": "object",
        "properties": {
            "start": {
                "type": "string",
                "description": "Start time of the event in UTC ISO 8601 format, e.g. 2025-05-24T13:00:00Z."
            },
            "responses": {
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Attendee full name."
                    },
                    "email": {
                        "type": "string",
                        "description": "Attendee email address."
                    },
                    "smsReminderNumber": {
                        "type": ["number", "null"],
                        "description": "SMS reminder number (or null if not applicable)."
                    },
                    "location": {
                        "type": "object",
                        "properties": {
                            "value": {
                                "type": "string",
                                "description": "The meeting URL, phone number, or address."
                            },
                            "optionValue": {
                                "type": "string",
                                "description": "Optional value for the location."
                            }
                        },
                        "required": ["value", "optionValue"],
                        "additionalProperties": false
                    }
                },
                "required": ["name", "email", "smsReminderNumber", "location"],
                "additionalProperties": false
            },
            "timeZone": {
                "type": "string",
                "description": "Time zone of the attendee, e.g. 'Europe/London'."
            },
            "language": {
                "type": "string",
                "description": "Language of the attendee, e.g. 'en'."
            }
        },
        "required": ["start", "responses", "timeZone", "language"],
        "additionalProperties": false
    })
}

fn list_events_parameters() -> Value {
    json!({
        "type": "object",
        "properties": {},
        "additionalProperties": false
    })
}

fn cancel_event_parameters() -> Value {
    json!({
        "type": "object",
        "properties": {
            "event_time": {
                "type": "string",
                "description": "Start time of the event to cancel, copied exactly as list_events reports it, e.g. 2025-03-25T13:00:00.000Z."
            },
            "email": {
                "type": "string",
                "description": "The user's email address."
            }
        },
        "required": ["event_time", "email"],
        "additionalProperties": false
    })
}

impl ToolName {
    pub fn description(self) -> &'static str {
        match self {
            ToolName::BookEvent => {
                "Book a new 15 minute event. Requires start, responses (with attendee details), timeZone and language."
            }
            ToolName::ListEvents => "List all scheduled events.",
            ToolName::CancelEvent => {
                "Cancel an event that starts at the specified time for the user."
            }
        }
    }

    pub fn parameters(self) -> Value {
        match self {
            ToolName::BookEvent => book_event_parameters(),
            ToolName::ListEvents => list_events_parameters(),
            ToolName::CancelEvent => cancel_event_parameters(),
        }
    }

    pub fn definition(self) -> ToolDefinition {
        ToolDefinition::strict_function(self.as_str(), self.description(), self.parameters())
    }
}

/// The fixed tool set declared to the model on every request.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    ToolName::ALL.iter().map(|tool| tool.definition()).collect()
}
