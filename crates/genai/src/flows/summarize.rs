//! Free-text summarization for community project ideas.

use crate::client::{GenerateRequest, Message, Role, TextGenerator};
use crate::error::GenAiError;

/// Summarize `text` into a shorter free-text summary.
pub async fn summarize(backend: &dyn TextGenerator, text: &str) -> Result<String, GenAiError> {
    let prompt = format!(
        "Summarize the following eco-project idea in a concise and informative way:\n\n{text}"
    );

    let request = GenerateRequest {
        system: None,
        messages: vec![Message::text(Role::User, prompt)],
        json_output: false,
    };

    let response = backend.generate(request).await?;
    if response.text.trim().is_empty() {
        return Err(GenAiError::MalformedOutput("empty summary".into()));
    }
    Ok(response.text)
}
