//! The profile store: the single persistence interface for gamification
//! state, with Postgres as its one concrete adapter.
//!
//! Every mutation is atomic at the SQL level and returns the persisted row,
//! so callers only ever observe state the database has acknowledged
//! (write-then-confirm). Insufficient-balance checks live here rather than
//! at call sites: no code path can drive a stored balance negative.

use async_trait::async_trait;
use sqlx::PgPool;

use eco_core::types::DbId;

use crate::models::profile::{NewProfile, Profile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, display_name, avatar_url, password_hash, eco_points, \
                       completed_lessons, badges, created_at, updated_at";

/// Errors from the profile store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No profile with the given id exists.
    #[error("Profile {0} not found")]
    ProfileNotFound(DbId),

    /// A point deduction would drive the balance negative.
    #[error("Insufficient balance: have {balance}, need {required}")]
    InsufficientBalance { balance: i64, required: i64 },

    /// An underlying database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Abstract persistence interface for profiles.
///
/// All mutations are atomic per call and idempotent where the operation is
/// a set insert (`complete_lesson`, `award_badge`).
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load a profile by id.
    async fn fetch(&self, id: DbId) -> Result<Option<Profile>, StoreError>;

    /// Load a profile by email (used by login and signup uniqueness checks).
    async fn fetch_by_email(&self, email: &str) -> Result<Option<Profile>, StoreError>;

    /// Insert a new profile with zero points and empty lesson/badge sets.
    async fn create(&self, input: &NewProfile) -> Result<Profile, StoreError>;

    /// Add `delta` (may be negative) to the profile's point total.
    ///
    /// Fails with [`StoreError::InsufficientBalance`] when the result would
    /// be negative; the stored balance is unchanged in that case.
    async fn adjust_points(&self, id: DbId, delta: i64) -> Result<Profile, StoreError>;

    /// Idempotently insert `lesson_id` into the completed-lesson set.
    async fn complete_lesson(&self, id: DbId, lesson_id: &str) -> Result<Profile, StoreError>;

    /// Idempotently insert `badge_id` into the earned-badge set.
    async fn award_badge(&self, id: DbId, badge_id: &str) -> Result<Profile, StoreError>;
}

/// Postgres adapter for [`ProfileStore`].
#[derive(Debug, Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn fetch(&self, id: DbId) -> Result<Option<Profile>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        Ok(sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn fetch_by_email(&self, email: &str) -> Result<Option<Profile>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE email = $1");
        Ok(sqlx::query_as::<_, Profile>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create(&self, input: &NewProfile) -> Result<Profile, StoreError> {
        let query = format!(
            "INSERT INTO profiles (email, display_name, avatar_url, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Profile>(&query)
            .bind(&input.email)
            .bind(&input.display_name)
            .bind(&input.avatar_url)
            .bind(&input.password_hash)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn adjust_points(&self, id: DbId, delta: i64) -> Result<Profile, StoreError> {
        // The balance guard is in the WHERE clause so concurrent deductions
        // cannot race past the check.
        let query = format!(
            "UPDATE profiles
             SET eco_points = eco_points + $2, updated_at = NOW()
             WHERE id = $1 AND eco_points + $2 >= 0
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(delta)
            .fetch_optional(&self.pool)
            .await?;

        match updated {
            Some(profile) => Ok(profile),
            // Either the row is missing or the guard rejected the delta;
            // refetch to tell the two apart.
            None => match self.fetch(id).await? {
                Some(profile) => Err(StoreError::InsufficientBalance {
                    balance: profile.eco_points,
                    required: -delta,
                }),
                None => Err(StoreError::ProfileNotFound(id)),
            },
        }
    }

    async fn complete_lesson(&self, id: DbId, lesson_id: &str) -> Result<Profile, StoreError> {
        let query = format!(
            "UPDATE profiles
             SET completed_lessons = CASE
                     WHEN $2 = ANY(completed_lessons) THEN completed_lessons
                     ELSE array_append(completed_lessons, $2)
                 END,
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(lesson_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::ProfileNotFound(id))
    }

    async fn award_badge(&self, id: DbId, badge_id: &str) -> Result<Profile, StoreError> {
        let query = format!(
            "UPDATE profiles
             SET badges = CASE
                     WHEN $2 = ANY(badges) THEN badges
                     ELSE array_append(badges, $2)
                 END,
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(badge_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::ProfileNotFound(id))
    }
}
