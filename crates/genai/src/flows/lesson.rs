//! Lesson content generation: topic in, multi-chapter lesson out.

use serde::{Deserialize, Serialize};

use crate::client::{GenerateRequest, Message, Role, TextGenerator};
use crate::error::GenAiError;
use crate::flows::parse_json_output;

/// One generated chapter. Option count and index range are trusted to the
/// generation output and not validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedChapter {
    pub title: String,
    /// Markdown body, several paragraphs long.
    pub content: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
}

/// A complete generated lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedLesson {
    pub title: String,
    pub description: String,
    /// Total eco-points for completing the lesson (50-100 per the prompt).
    pub eco_points: i64,
    /// 3-5 chapters.
    pub chapters: Vec<GeneratedChapter>,
}

const PROMPT_PREFIX: &str = "\
You are an expert curriculum developer specializing in environmental science for high school students.

Your task is to generate a complete, engaging, and informative lesson on a given topic. The lesson should be broken down into 3 to 5 distinct chapters.

For each chapter, you must provide:
1. A clear and concise title.
2. Detailed educational content in Markdown format. The content should be well-structured, easy to understand, and several paragraphs long. Use headings, lists, and bold text to improve readability.
3. A single multiple-choice question that assesses the key takeaway from that specific chapter.
4. Four distinct options for the multiple-choice question.
5. The 0-based index of the correct answer.

The overall lesson should have a main title, a short one-sentence description, and a total number of eco-points (between 50 and 100) for completing all chapters.

Respond with a single JSON object of this shape:
{\"title\": string, \"description\": string, \"eco_points\": number, \"chapters\": [{\"title\": string, \"content\": string, \"question\": string, \"options\": [string, string, string, string], \"correct_answer_index\": number}]}

Generate a lesson for the following topic: ";

/// Generate a lesson on `topic`.
pub async fn generate(
    backend: &dyn TextGenerator,
    topic: &str,
) -> Result<GeneratedLesson, GenAiError> {
    let request = GenerateRequest {
        system: None,
        messages: vec![Message::text(Role::User, format!("{PROMPT_PREFIX}{topic}"))],
        json_output: true,
    };

    let response = backend.generate(request).await?;
    parse_json_output(&response.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::test_support::CannedGenerator;

    #[tokio::test]
    async fn parses_generated_lesson() {
        let canned = CannedGenerator(
            r###"{"title": "Ocean Plastics", "description": "Where marine plastic comes from.",
                "eco_points": 70,
                "chapters": [{"title": "Sources", "content": "## Sources\n\nMost ocean plastic...",
                              "question": "Where does most ocean plastic originate?",
                              "options": ["Ships", "Rivers and coastlines", "Airplanes", "Rain"],
                              "correct_answer_index": 1}]}"###
                .to_string(),
        );

        let lesson = generate(&canned, "ocean plastics").await.unwrap();
        assert_eq!(lesson.title, "Ocean Plastics");
        assert_eq!(lesson.eco_points, 70);
        assert_eq!(lesson.chapters.len(), 1);
        assert_eq!(lesson.chapters[0].correct_answer_index, 1);
    }

    #[tokio::test]
    async fn fenced_json_is_tolerated() {
        let canned = CannedGenerator(
            "```json\n{\"title\": \"T\", \"description\": \"D\", \"eco_points\": 50, \"chapters\": []}\n```"
                .to_string(),
        );

        let lesson = generate(&canned, "anything").await.unwrap();
        assert_eq!(lesson.title, "T");
    }
}
