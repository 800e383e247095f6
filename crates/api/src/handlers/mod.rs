pub mod ai;
pub mod auth;
pub mod catalog;
pub mod community;
pub mod profile;
pub mod progress;
