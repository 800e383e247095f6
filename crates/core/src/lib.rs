//! EcoChallenge domain core.
//!
//! Pure domain types and logic with no I/O: the static content catalog
//! (lessons, challenges, badges, rewards, leaderboard, community posts),
//! quiz grading, point distribution, and the shared error type.

pub mod catalog;
pub mod error;
pub mod progress;
pub mod seed;
pub mod types;
