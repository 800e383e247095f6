//! The unified "EcoBuddy" assistant: one chat flow serving both students
//! (environmental advice, optional photo analysis) and teachers (progress
//! insight over the bundled performance data).

use crate::client::{GenerateRequest, Message, Part, Role, TextGenerator};
use crate::error::GenAiError;
use crate::flows::{history_messages, ChatTurn};

/// Mock student performance data embedded in the assistant's system prompt.
/// Real per-class data is a future integration; the assistant answers
/// teacher questions against this fixture until then.
const STUDENT_DATA: &str = "\
- Student Performance Data:
  - Isha Gupta (Grade 9): Top performer. Score: 95%. Completed all lessons. Excels in practical challenges.
  - Arjun Sharma (Grade 10): Score: 82%. Struggles with 'Waste Management' (Quiz score: 40%). Participates actively in community discussions.
  - Priya Singh (Grade 8): Score: 75%. Good quiz scores but low challenge participation.
  - Rohan Mehta (Grade 9): New user. Score: 60%. Completed only the 'Introduction to Climate Change' lesson.
  - Anika Desai (Grade 10): Score: 88%. Strong in renewable energy topics.
  - Kabir Shah (Grade 7): Score: 65%. Completed 5 of 12 lessons. Struggles with 'The Carbon Cycle' (Quiz score: 50%).
  - Mira Prasad (Grade 9): Score: 92%. Excellent quiz-taker.
  - Advik Reddy (Grade 8): Score: 70%. Good at challenges, but quiz scores are average.
  - Zara Khan (Grade 10): Score: 85%. Has great ideas in the community forum.
  - Vihaan Joshi (Grade 7): Score: 55%. Seems disengaged. Has only completed 2 lessons.
  - Samaira Patel (Grade 9): Score: 78%. Consistent performer.
  - Dhruv Kumar (Grade 10): Score: 81%. Strong performer in team challenges.

- Class-wide Trends:
  - Average quiz score: 79%
  - Most popular lesson: 'Renewable Energy Sources'
  - Most difficult lesson: 'The Carbon Cycle' (Avg. score: 62%)";

/// Build the EcoBuddy system prompt, embedding the performance data.
fn system_prompt() -> String {
    format!(
        "You are \"EcoBuddy,\" an AI assistant for the EcoChallenge platform. Your goal is to \
         be a helpful, friendly, and knowledgeable guide for both students and teachers.\n\n\
         You have two primary roles:\n\n\
         1. Student Eco Advisor:\n\
            - Analyze Images: if a user uploads a photo, analyze it for environmental \
              situations (e.g., plastic waste, a healthy tree, a water leak, a solar panel).\n\
            - Provide Actionable Advice: based on the image, give a verdict (positive or \
              negative) and three levels of advice: an immediate action, a short-term goal, \
              and a long-term habit.\n\
            - Answer General Questions: answer questions about environmental topics, \
              sustainability, and greener living. Be encouraging and educational.\n\n\
         2. Teacher/Eco-Club Assistant:\n\
            - Suggest Ideas: provide creative ideas for new eco-challenges, lesson plans, and \
              school-wide environmental events.\n\
            - Analyze Student Progress: you have access to the following student performance \
              data. Use it to answer teacher questions about rankings, quiz scores, and \
              participation, and to identify students who are excelling or struggling.\n\
              {STUDENT_DATA}\n\
            - Recommend Guidance: based on the performance data, suggest specific lessons or \
              actions for the whole class or for specific students.\n\n\
         Maintain a friendly and supportive tone. Your name is EcoBuddy. Adapt your response \
         to the user's query, switching seamlessly between your student advisor and teacher \
         assistant roles. If an image is provided, focus your analysis on it first."
    )
}

/// One turn of EcoBuddy chat, with an optional attached photo.
pub async fn chat(
    backend: &dyn TextGenerator,
    message: &str,
    image_data_uri: Option<&str>,
    history: &[ChatTurn],
) -> Result<String, GenAiError> {
    let mut parts = Vec::new();
    if let Some(uri) = image_data_uri {
        parts.push(Part::ImageDataUri(uri.to_string()));
    }
    parts.push(Part::Text(message.to_string()));

    let mut messages = history_messages(history);
    messages.push(Message {
        role: Role::User,
        parts,
    });

    let request = GenerateRequest {
        system: Some(system_prompt()),
        messages,
        json_output: false,
    };

    Ok(backend.generate(request).await?.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::test_support::CannedGenerator;

    #[tokio::test]
    async fn chat_with_history_returns_reply() {
        let canned = CannedGenerator("Hello again! EcoBuddy here.".to_string());
        let history = vec![
            ChatTurn {
                role: Role::User,
                content: "Hi!".into(),
            },
            ChatTurn {
                role: Role::Model,
                content: "Hello! How can I help?".into(),
            },
        ];

        let reply = chat(&canned, "Remind me who you are?", None, &history)
            .await
            .unwrap();
        assert!(reply.contains("EcoBuddy"));
    }

    #[test]
    fn system_prompt_embeds_performance_data() {
        let prompt = system_prompt();
        assert!(prompt.contains("Isha Gupta"));
        assert!(prompt.contains("Average quiz score: 79%"));
    }
}
