//! Eco-advisor flows: image-based environmental analysis and advisor chat.

use serde::{Deserialize, Serialize};

use crate::client::{GenerateRequest, Message, Part, Role, TextGenerator};
use crate::error::GenAiError;
use crate::flows::{history_messages, parse_json_output, ChatTurn};

/// Structured verdict for one analyzed photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorAnalysis {
    /// Identified category, e.g. `plastic_waste`, `tree`, `water_leak`.
    pub category: String,
    /// `positive` or `negative`.
    pub verdict: String,
    /// What the student can do today.
    pub immediate_action: String,
    /// What they can do in the next few days or weeks.
    pub short_term_action: String,
    /// A sustainable habit to adopt.
    pub long_term_action: String,
}

const ANALYZE_PROMPT: &str = "\
You are an expert environmental advisor.

A student has uploaded a photo of a real-world environmental situation. Your task is to:

1. Identify and classify what is in the photo (e.g., plastic waste, tree, water leak, pollution, solar panel, litter).
2. Determine whether the situation is eco-friendly or harmful.
3. Provide actionable guidance for the student in three steps: an immediate action for today, a short-term action for the next few days or weeks, and a long-term sustainable habit.
4. Include encouragement and explanation so the student learns from the feedback.

Respond with a single JSON object with exactly these keys:
{\"category\": string, \"verdict\": \"positive\" or \"negative\", \"immediate_action\": string, \"short_term_action\": string, \"long_term_action\": string}";

const CHAT_SYSTEM_PROMPT: &str = "\
You are an expert environmental advisor helping a student live more sustainably. \
Answer their questions with practical, encouraging, and educational advice.";

/// Analyze one photo of a real-world environmental situation.
///
/// `photo_data_uri` must be a base64 `data:` URI. A provider error or
/// unparseable output propagates as a rejected call; nothing is retried.
pub async fn analyze_image(
    backend: &dyn TextGenerator,
    photo_data_uri: &str,
) -> Result<AdvisorAnalysis, GenAiError> {
    let request = GenerateRequest {
        system: None,
        messages: vec![Message {
            role: Role::User,
            parts: vec![
                Part::Text(ANALYZE_PROMPT.to_string()),
                Part::ImageDataUri(photo_data_uri.to_string()),
            ],
        }],
        json_output: true,
    };

    let response = backend.generate(request).await?;
    parse_json_output(&response.text)
}

/// One turn of free-text advisor chat. The caller owns the transcript.
pub async fn chat(
    backend: &dyn TextGenerator,
    message: &str,
    history: &[ChatTurn],
) -> Result<String, GenAiError> {
    let mut messages = history_messages(history);
    messages.push(Message::text(Role::User, message));

    let request = GenerateRequest {
        system: Some(CHAT_SYSTEM_PROMPT.to_string()),
        messages,
        json_output: false,
    };

    Ok(backend.generate(request).await?.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::test_support::{CannedGenerator, FailingGenerator};

    #[tokio::test]
    async fn analysis_parses_structured_output() {
        let canned = CannedGenerator(
            r#"{"category": "plastic_waste", "verdict": "negative",
                "immediate_action": "Pick up the litter.",
                "short_term_action": "Organize a cleanup.",
                "long_term_action": "Carry a reusable bag."}"#
                .to_string(),
        );

        let analysis = analyze_image(&canned, "data:image/png;base64,AAAA")
            .await
            .unwrap();
        assert_eq!(analysis.category, "plastic_waste");
        assert_eq!(analysis.verdict, "negative");
        assert!(!analysis.immediate_action.is_empty());
    }

    #[tokio::test]
    async fn malformed_analysis_output_is_rejected() {
        let canned = CannedGenerator("not json at all".to_string());

        let err = analyze_image(&canned, "data:image/png;base64,AAAA")
            .await
            .unwrap_err();
        assert!(matches!(err, GenAiError::MalformedOutput(_)));
    }

    #[tokio::test]
    async fn provider_error_propagates_unretried() {
        let err = chat(&FailingGenerator, "hello", &[]).await.unwrap_err();
        assert!(matches!(err, GenAiError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn chat_returns_reply_text() {
        let canned = CannedGenerator("Plant a tree!".to_string());
        let reply = chat(&canned, "What can I do today?", &[]).await.unwrap();
        assert_eq!(reply, "Plant a tree!");
    }
}
