pub mod booking;
pub mod chat;
pub mod content;
pub mod tool_calls;
pub mod tool_definition;
pub mod usage;
