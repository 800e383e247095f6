//! Read-only content catalog: lessons, challenges, badges, rewards,
//! leaderboard standings, and the seed community posts.
//!
//! The catalog is built once at startup from [`seed`](crate::seed) data and
//! never mutated. Lookups by id go through hash indexes rather than linear
//! scans.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::Timestamp;

/// A single multiple-choice question attached to a chapter.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub prompt: String,
    /// Answer options, in display order. Seed content always has 4.
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub correct_answer_index: usize,
}

/// One chapter of a lesson: markdown body plus a comprehension question.
#[derive(Debug, Clone, Serialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    /// Markdown content shown to the student.
    pub content: String,
    pub question: Question,
}

/// An immutable seed lesson.
#[derive(Debug, Clone, Serialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Total eco-points for completing every chapter of the lesson.
    pub eco_points: i64,
    pub chapters: Vec<Chapter>,
}

impl Lesson {
    /// Points awarded per chapter: the lesson total split equally across
    /// chapters, rounded to the nearest integer (an 80-point lesson with
    /// 3 chapters awards 27 per chapter).
    pub fn chapter_points(&self) -> i64 {
        (self.eco_points as f64 / self.chapters.len() as f64).round() as i64
    }

    /// Find a chapter by id.
    pub fn chapter(&self, chapter_id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == chapter_id)
    }

    /// Whether `chapter_id` is the last chapter of this lesson.
    pub fn is_final_chapter(&self, chapter_id: &str) -> bool {
        self.chapters
            .last()
            .is_some_and(|c| c.id == chapter_id)
    }
}

/// An achievement marker, earned once and retained permanently.
#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display icon reference (icon name, resolved by the client).
    pub icon: String,
}

/// A real-world challenge submission opportunity.
#[derive(Debug, Clone, Serialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub eco_points: i64,
    pub image_url: String,
}

/// A reward redeemable for eco-points.
#[derive(Debug, Clone, Serialize)]
pub struct Reward {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: i64,
    pub icon: String,
}

/// A display-only leaderboard row.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub team: String,
    pub school: String,
    pub points: i64,
    pub avatar_url: String,
}

/// A community forum post. Seed posts are part of the catalog; the live
/// board (including like counts) is session state owned by the API layer.
#[derive(Debug, Clone, Serialize)]
pub struct CommunityPost {
    pub id: String,
    pub author: String,
    pub author_avatar_url: String,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub likes: u32,
}

/// The full read-only catalog with id-keyed lookup indexes.
///
/// Entity order is preserved for list endpoints; the `*_index` maps give
/// O(1) lookup by id.
#[derive(Debug)]
pub struct Catalog {
    lessons: Vec<Lesson>,
    lesson_index: HashMap<String, usize>,
    badges: Vec<Badge>,
    badge_index: HashMap<String, usize>,
    challenges: Vec<Challenge>,
    challenge_index: HashMap<String, usize>,
    rewards: Vec<Reward>,
    reward_index: HashMap<String, usize>,
    leaderboard: Vec<LeaderboardEntry>,
    seed_posts: Vec<CommunityPost>,
}

impl Catalog {
    /// Build a catalog from already-ordered entity lists.
    ///
    /// Debug-asserts the seed invariants: every lesson has at least one
    /// chapter, and every question has an in-range correct answer index.
    pub fn new(
        lessons: Vec<Lesson>,
        badges: Vec<Badge>,
        challenges: Vec<Challenge>,
        rewards: Vec<Reward>,
        leaderboard: Vec<LeaderboardEntry>,
        seed_posts: Vec<CommunityPost>,
    ) -> Self {
        for lesson in &lessons {
            debug_assert!(!lesson.chapters.is_empty(), "lesson without chapters");
            for chapter in &lesson.chapters {
                debug_assert!(
                    chapter.question.correct_answer_index < chapter.question.options.len(),
                    "correct answer index out of range"
                );
            }
        }

        let lesson_index = index_by(&lessons, |l| l.id.clone());
        let badge_index = index_by(&badges, |b| b.id.clone());
        let challenge_index = index_by(&challenges, |c| c.id.clone());
        let reward_index = index_by(&rewards, |r| r.id.clone());

        Self {
            lessons,
            lesson_index,
            badges,
            badge_index,
            challenges,
            challenge_index,
            rewards,
            reward_index,
            leaderboard,
            seed_posts,
        }
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    pub fn leaderboard(&self) -> &[LeaderboardEntry] {
        &self.leaderboard
    }

    pub fn seed_posts(&self) -> &[CommunityPost] {
        &self.seed_posts
    }

    /// Look up a lesson by id, or return a `NotFound` error.
    pub fn lesson(&self, id: &str) -> Result<&Lesson, CoreError> {
        self.lesson_index
            .get(id)
            .map(|&i| &self.lessons[i])
            .ok_or_else(|| CoreError::not_found("lesson", id))
    }

    /// Look up a badge by id, or return a `NotFound` error.
    pub fn badge(&self, id: &str) -> Result<&Badge, CoreError> {
        self.badge_index
            .get(id)
            .map(|&i| &self.badges[i])
            .ok_or_else(|| CoreError::not_found("badge", id))
    }

    /// Look up a challenge by id, or return a `NotFound` error.
    pub fn challenge(&self, id: &str) -> Result<&Challenge, CoreError> {
        self.challenge_index
            .get(id)
            .map(|&i| &self.challenges[i])
            .ok_or_else(|| CoreError::not_found("challenge", id))
    }

    /// Look up a reward by id, or return a `NotFound` error.
    pub fn reward(&self, id: &str) -> Result<&Reward, CoreError> {
        self.reward_index
            .get(id)
            .map(|&i| &self.rewards[i])
            .ok_or_else(|| CoreError::not_found("reward", id))
    }
}

/// Build an id -> position index for an entity slice.
fn index_by<T>(items: &[T], key: impl Fn(&T) -> String) -> HashMap<String, usize> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| (key(item), i))
        .collect()
}
