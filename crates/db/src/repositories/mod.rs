pub mod profile_store;
pub mod session_repo;

pub use profile_store::{PgProfileStore, ProfileStore, StoreError};
pub use session_repo::SessionRepo;
