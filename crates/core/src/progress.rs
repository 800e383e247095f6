//! Pure progress logic: quiz grading and point distribution.
//!
//! No I/O here -- the API layer feeds these results into the progress
//! command service, which persists them through the profile store.

use serde::Serialize;

use crate::catalog::Lesson;
use crate::error::CoreError;

/// The result of grading one chapter quiz answer.
#[derive(Debug, Clone, Serialize)]
pub struct QuizOutcome {
    /// Whether the submitted option was the correct one.
    pub correct: bool,
    /// Points earned for this answer (the lesson's per-chapter share, or 0).
    pub points_awarded: i64,
    /// True when this answer correctly finishes the lesson's final chapter.
    pub completes_lesson: bool,
}

/// Grade a submitted answer for one chapter of a lesson.
///
/// A correct answer earns the lesson's per-chapter point share. A correct
/// answer on the final chapter additionally marks the lesson as completed;
/// inserting the lesson id into the completed set stays idempotent at the
/// store level, so re-answering a finished lesson awards no duplicate
/// completion.
pub fn grade_chapter_quiz(
    lesson: &Lesson,
    chapter_id: &str,
    answer_index: usize,
) -> Result<QuizOutcome, CoreError> {
    let chapter = lesson
        .chapter(chapter_id)
        .ok_or_else(|| CoreError::not_found("chapter", chapter_id))?;

    if answer_index >= chapter.question.options.len() {
        return Err(CoreError::Validation(format!(
            "Answer index {answer_index} out of range (question has {} options)",
            chapter.question.options.len()
        )));
    }

    let correct = answer_index == chapter.question.correct_answer_index;
    Ok(QuizOutcome {
        correct,
        points_awarded: if correct { lesson.chapter_points() } else { 0 },
        completes_lesson: correct && lesson.is_final_chapter(chapter_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn correct_answer_awards_chapter_share() {
        let catalog = seed::catalog();
        let lesson = catalog.lesson("1").unwrap();

        let outcome = grade_chapter_quiz(lesson, "1-1", 3).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.points_awarded, 27);
        assert!(!outcome.completes_lesson);
    }

    #[test]
    fn wrong_answer_awards_nothing() {
        let catalog = seed::catalog();
        let lesson = catalog.lesson("1").unwrap();

        let outcome = grade_chapter_quiz(lesson, "1-1", 0).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.points_awarded, 0);
        assert!(!outcome.completes_lesson);
    }

    #[test]
    fn correct_final_chapter_completes_lesson() {
        let catalog = seed::catalog();
        let lesson = catalog.lesson("1").unwrap();

        let outcome = grade_chapter_quiz(lesson, "1-3", 2).unwrap();
        assert!(outcome.correct);
        assert!(outcome.completes_lesson);
    }

    #[test]
    fn unknown_chapter_is_not_found() {
        let catalog = seed::catalog();
        let lesson = catalog.lesson("1").unwrap();

        let err = grade_chapter_quiz(lesson, "9-9", 0).unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn out_of_range_answer_is_rejected() {
        let catalog = seed::catalog();
        let lesson = catalog.lesson("1").unwrap();

        let err = grade_chapter_quiz(lesson, "1-1", 4).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
