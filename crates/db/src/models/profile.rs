//! Profile entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use eco_core::types::{DbId, Timestamp};

/// Full profile row from the `profiles` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`ProfileResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: DbId,
    pub email: String,
    pub display_name: String,
    pub avatar_url: String,
    pub password_hash: String,
    pub eco_points: i64,
    pub completed_lessons: Vec<String>,
    pub badges: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe profile representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: DbId,
    pub email: String,
    pub display_name: String,
    pub avatar_url: String,
    pub eco_points: i64,
    pub completed_lessons: Vec<String>,
    pub badges: Vec<String>,
    pub created_at: Timestamp,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            email: p.email,
            display_name: p.display_name,
            avatar_url: p.avatar_url,
            eco_points: p.eco_points,
            completed_lessons: p.completed_lessons,
            badges: p.badges,
            created_at: p.created_at,
        }
    }
}

/// DTO for creating a new profile. Points and the completed/badge sets
/// start empty.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub email: String,
    pub display_name: String,
    pub avatar_url: String,
    pub password_hash: String,
}
