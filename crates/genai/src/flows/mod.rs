//! Named prompt flows against the hosted generation endpoint.
//!
//! Every flow takes its backend as `&dyn TextGenerator`, builds one request
//! from a fixed template, and parses the reply into its fixed output shape.
//! History-carrying flows are stateless: the caller appends the new turn to
//! the transcript before the next call.

pub mod advisor;
pub mod assistant;
pub mod lesson;
pub mod suggest;
pub mod summarize;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::client::{Message, Role};
use crate::error::GenAiError;

/// One prior turn of a conversation transcript, as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

/// Convert caller-supplied history into endpoint messages.
pub(crate) fn history_messages(history: &[ChatTurn]) -> Vec<Message> {
    history
        .iter()
        .map(|turn| Message::text(turn.role, turn.content.clone()))
        .collect()
}

/// Parse a JSON-mode reply into the flow's output type.
///
/// Tolerates a markdown code fence around the payload, which some models
/// emit even in JSON mode.
pub(crate) fn parse_json_output<T: DeserializeOwned>(text: &str) -> Result<T, GenAiError> {
    let trimmed = text.trim();
    let payload = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .unwrap_or(trimmed);

    serde_json::from_str(payload.trim())
        .map_err(|e| GenAiError::MalformedOutput(format!("{e}: {payload}")))
}
