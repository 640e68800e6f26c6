pub mod definitions;
pub mod dispatcher;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::scheduling::SchedulingError;

pub use self::definitions::tool_definitions;
pub use self::dispatcher::ToolDispatcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    BookEvent,
    ListEvents,
    CancelEvent,
}

impl ToolName {
    pub const ALL: [ToolName; 3] = [
        ToolName::BookEvent,
        ToolName::ListEvents,
        ToolName::CancelEvent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::BookEvent => "book_event",
            ToolName::ListEvents => "list_events",
            ToolName::CancelEvent => "cancel_event",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| ToolError::NotFound(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum ToolError {
    /// Rendered verbatim as the tool result for a name outside the declared set.
    #[error("Function not found.")]
    NotFound(String),

    #[error("Error in function {tool}: {message}")]
    InvalidArguments { tool: ToolName, message: String },

    #[error(transparent)]
    Scheduling(#[from] SchedulingError),
}

/// What a tool call produced. Both arms carry the text handed back to the
/// model; the split lets callers log or count failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    Success(String),
    Failure(String),
}

impl ToolOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ToolOutcome::Success(_))
    }

    pub fn text(&self) -> &str {
        match self {
            ToolOutcome::Success(text) | ToolOutcome::Failure(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            ToolOutcome::Success(text) | ToolOutcome::Failure(text) => text,
        }
    }
}

impl fmt::Display for ToolOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
