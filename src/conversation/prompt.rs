use crate::models::content::{ChatCompletionMessage, Role};

pub fn default_system_prompt(year: i32) -> String {
    format!(
        "Please reply in plain text only. Do not include any formatting, markdown, or code blocks \
         in your output. It is the year {year}. Clarify timezone with users, convert to UTC for \
         use with tools."
    )
}

/// Prepends the default system instruction unless the transcript already
/// opens with a system message. Returns whether one was inserted.
pub fn ensure_system_prompt(transcript: &mut Vec<ChatCompletionMessage>, year: i32) -> bool {
    if transcript.first().map(|m| m.role) == Some(Role::System) {
        return false;
    }
    transcript.insert(0, ChatCompletionMessage::system(default_system_prompt(year)));
    true
}
