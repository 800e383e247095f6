//! Personalized lesson suggestions from quiz performance. Purely advisory:
//! the output never mutates progress.

use serde::{Deserialize, Serialize};

use crate::client::{GenerateRequest, Message, Role, TextGenerator};
use crate::error::GenAiError;
use crate::flows::parse_json_output;

/// One quiz result supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResult {
    pub lesson_id: String,
    pub score: u32,
    pub total_questions: u32,
}

/// A lesson the model may suggest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableLesson {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// One suggested lesson with a free-text rationale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedLesson {
    pub id: String,
    pub title: String,
    pub reason: String,
}

#[derive(Deserialize)]
struct SuggestionOutput {
    suggested_lessons: Vec<SuggestedLesson>,
}

/// Suggest lessons the student should focus on, ranked by the model.
pub async fn suggest(
    backend: &dyn TextGenerator,
    quiz_results: &[QuizResult],
    available_lessons: &[AvailableLesson],
) -> Result<Vec<SuggestedLesson>, GenAiError> {
    let mut prompt = String::from(
        "You are an AI assistant designed to provide personalized lesson suggestions to \
         students based on their quiz performance.\n\n\
         Given the following quiz results and available lessons, suggest lessons that the \
         student should focus on to improve their understanding of the material.\n\n\
         Quiz Results:\n",
    );
    for result in quiz_results {
        prompt.push_str(&format!(
            "- Lesson ID: {}, Score: {}/{}\n",
            result.lesson_id, result.score, result.total_questions
        ));
    }
    prompt.push_str("\nAvailable Lessons:\n");
    for lesson in available_lessons {
        prompt.push_str(&format!(
            "- ID: {}, Title: {}, Description: {}\n",
            lesson.id, lesson.title, lesson.description
        ));
    }
    prompt.push_str(
        "\nConsider the following when suggesting lessons:\n\
         - Lessons with low scores should be prioritized.\n\
         - Lessons that cover foundational concepts for other lessons should also be considered.\n\
         - Provide a brief reason for each suggested lesson.\n\n\
         Respond with a single JSON object of this shape:\n\
         {\"suggested_lessons\": [{\"id\": string, \"title\": string, \"reason\": string}]}\n",
    );

    let request = GenerateRequest {
        system: None,
        messages: vec![Message::text(Role::User, prompt)],
        json_output: true,
    };

    let response = backend.generate(request).await?;
    let output: SuggestionOutput = parse_json_output(&response.text)?;
    Ok(output.suggested_lessons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::test_support::CannedGenerator;

    #[tokio::test]
    async fn parses_ranked_suggestions() {
        let canned = CannedGenerator(
            r#"{"suggested_lessons": [
                {"id": "1", "title": "The Carbon Cycle and Climate Change",
                 "reason": "Your quiz score of 1/3 suggests reviewing the fundamentals."}]}"#
                .to_string(),
        );

        let results = vec![QuizResult {
            lesson_id: "1".into(),
            score: 1,
            total_questions: 3,
        }];
        let available = vec![AvailableLesson {
            id: "1".into(),
            title: "The Carbon Cycle and Climate Change".into(),
            description: "Carbon and climate.".into(),
        }];

        let suggestions = suggest(&canned, &results, &available).await.unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].id, "1");
        assert!(!suggestions[0].reason.is_empty());
    }
}
