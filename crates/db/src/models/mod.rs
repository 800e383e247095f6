pub mod profile;
pub mod session;

pub use profile::{NewProfile, Profile, ProfileResponse};
pub use session::{CreateSession, Session};
