//! Single-writer progress mutation service.
//!
//! All eco-point and progress mutations for all profiles flow through one
//! worker task, serialized over an mpsc channel. Handlers submit a
//! [`ProgressCommand`] and await the persisted [`Profile`] on a oneshot
//! reply channel, so a response is only sent after the row has been written
//! and read back. Concurrent awards from different requests can never
//! interleave partial updates.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info};

use eco_core::types::DbId;
use eco_db::models::Profile;
use eco_db::repositories::{ProfileStore, StoreError};

/// Buffered command queue depth. Submissions beyond this apply backpressure
/// to the handler rather than dropping commands.
const COMMAND_BUFFER: usize = 256;

/// Errors surfaced to callers of [`ProgressService`].
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    /// The underlying store rejected or failed the mutation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The worker task has shut down and can no longer accept commands.
    #[error("Progress service is unavailable")]
    Unavailable,
}

type Reply = oneshot::Sender<Result<Profile, StoreError>>;

/// A progress mutation, paired with the channel the persisted result is
/// confirmed on.
enum ProgressCommand {
    /// Add (or with a negative delta, deduct) eco-points.
    AdjustPoints {
        profile_id: DbId,
        delta: i64,
        reply: Reply,
    },
    /// Record a lesson as completed. Idempotent.
    CompleteLesson {
        profile_id: DbId,
        lesson_id: String,
        reply: Reply,
    },
    /// Award a badge. Idempotent.
    AwardBadge {
        profile_id: DbId,
        badge_id: String,
        reply: Reply,
    },
}

/// Handle for submitting progress mutations to the worker task.
///
/// Cloning is cheap; all clones feed the same queue.
#[derive(Clone)]
pub struct ProgressService {
    tx: mpsc::Sender<ProgressCommand>,
}

impl ProgressService {
    /// Spawn the worker task and return a handle to it.
    ///
    /// The worker runs until every handle is dropped.
    pub fn start(store: Arc<dyn ProfileStore>) -> Self {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        tokio::spawn(run_worker(store, rx));
        Self { tx }
    }

    /// Award `points` eco-points to a profile. `points` must be non-negative;
    /// deductions go through [`redeem`](Self::redeem).
    pub async fn award_points(&self, profile_id: DbId, points: i64) -> Result<Profile, ProgressError> {
        debug_assert!(points >= 0);
        self.submit(|reply| ProgressCommand::AdjustPoints {
            profile_id,
            delta: points,
            reply,
        })
        .await
    }

    /// Deduct `cost` eco-points for a reward redemption.
    ///
    /// Fails with [`StoreError::InsufficientBalance`] when the profile's
    /// balance would go negative; the balance is left untouched in that case.
    pub async fn redeem(&self, profile_id: DbId, cost: i64) -> Result<Profile, ProgressError> {
        debug_assert!(cost >= 0);
        self.submit(|reply| ProgressCommand::AdjustPoints {
            profile_id,
            delta: -cost,
            reply,
        })
        .await
    }

    /// Mark a lesson as completed. Repeat completions are no-ops.
    pub async fn complete_lesson(
        &self,
        profile_id: DbId,
        lesson_id: &str,
    ) -> Result<Profile, ProgressError> {
        let lesson_id = lesson_id.to_string();
        self.submit(|reply| ProgressCommand::CompleteLesson {
            profile_id,
            lesson_id,
            reply,
        })
        .await
    }

    /// Award a badge. Repeat awards are no-ops.
    pub async fn award_badge(
        &self,
        profile_id: DbId,
        badge_id: &str,
    ) -> Result<Profile, ProgressError> {
        let badge_id = badge_id.to_string();
        self.submit(|reply| ProgressCommand::AwardBadge {
            profile_id,
            badge_id,
            reply,
        })
        .await
    }

    async fn submit<F>(&self, make: F) -> Result<Profile, ProgressError>
    where
        F: FnOnce(Reply) -> ProgressCommand,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(make(reply_tx))
            .await
            .map_err(|_| ProgressError::Unavailable)?;
        let persisted = reply_rx.await.map_err(|_| ProgressError::Unavailable)??;
        Ok(persisted)
    }
}

/// Worker loop. Applies commands one at a time against the store and confirms
/// each with the persisted profile row.
async fn run_worker(store: Arc<dyn ProfileStore>, mut rx: mpsc::Receiver<ProgressCommand>) {
    info!("Progress worker started");

    while let Some(command) = rx.recv().await {
        match command {
            ProgressCommand::AdjustPoints {
                profile_id,
                delta,
                reply,
            } => {
                let result = store.adjust_points(profile_id, delta).await;
                if let Err(e) = &result {
                    debug!(profile_id, delta, error = %e, "Point adjustment rejected");
                }
                let _ = reply.send(result);
            }
            ProgressCommand::CompleteLesson {
                profile_id,
                lesson_id,
                reply,
            } => {
                let result = store.complete_lesson(profile_id, &lesson_id).await;
                if let Err(e) = &result {
                    error!(profile_id, lesson_id, error = %e, "Lesson completion failed");
                }
                let _ = reply.send(result);
            }
            ProgressCommand::AwardBadge {
                profile_id,
                badge_id,
                reply,
            } => {
                let result = store.award_badge(profile_id, &badge_id).await;
                if let Err(e) = &result {
                    error!(profile_id, badge_id, error = %e, "Badge award failed");
                }
                let _ = reply.send(result);
            }
        }
    }

    info!("Progress worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use eco_db::models::NewProfile;

    /// In-memory stand-in for the Postgres store, mirroring its semantics:
    /// mutations return the updated row, array fields are set-like, and a
    /// balance is never allowed to go negative.
    #[derive(Default)]
    struct MemoryStore {
        profiles: Mutex<HashMap<DbId, Profile>>,
    }

    impl MemoryStore {
        fn with_profile(id: DbId, eco_points: i64) -> Arc<Self> {
            let store = Self::default();
            let now = chrono::Utc::now();
            store.profiles.lock().unwrap().insert(
                id,
                Profile {
                    id,
                    email: format!("user{id}@example.com"),
                    display_name: format!("User {id}"),
                    avatar_url: String::new(),
                    password_hash: String::new(),
                    eco_points,
                    completed_lessons: vec![],
                    badges: vec![],
                    created_at: now,
                    updated_at: now,
                },
            );
            Arc::new(store)
        }
    }

    #[async_trait]
    impl ProfileStore for MemoryStore {
        async fn fetch(&self, id: DbId) -> Result<Option<Profile>, StoreError> {
            Ok(self.profiles.lock().unwrap().get(&id).cloned())
        }

        async fn fetch_by_email(&self, email: &str) -> Result<Option<Profile>, StoreError> {
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .values()
                .find(|p| p.email == email)
                .cloned())
        }

        async fn create(&self, input: &NewProfile) -> Result<Profile, StoreError> {
            let mut profiles = self.profiles.lock().unwrap();
            let id = profiles.keys().max().copied().unwrap_or(0) + 1;
            let now = chrono::Utc::now();
            let profile = Profile {
                id,
                email: input.email.clone(),
                display_name: input.display_name.clone(),
                avatar_url: input.avatar_url.clone(),
                password_hash: input.password_hash.clone(),
                eco_points: 0,
                completed_lessons: vec![],
                badges: vec![],
                created_at: now,
                updated_at: now,
            };
            profiles.insert(id, profile.clone());
            Ok(profile)
        }

        async fn adjust_points(&self, id: DbId, delta: i64) -> Result<Profile, StoreError> {
            let mut profiles = self.profiles.lock().unwrap();
            let profile = profiles
                .get_mut(&id)
                .ok_or(StoreError::ProfileNotFound(id))?;
            if profile.eco_points + delta < 0 {
                return Err(StoreError::InsufficientBalance {
                    balance: profile.eco_points,
                    required: -delta,
                });
            }
            profile.eco_points += delta;
            Ok(profile.clone())
        }

        async fn complete_lesson(&self, id: DbId, lesson_id: &str) -> Result<Profile, StoreError> {
            let mut profiles = self.profiles.lock().unwrap();
            let profile = profiles
                .get_mut(&id)
                .ok_or(StoreError::ProfileNotFound(id))?;
            if !profile.completed_lessons.iter().any(|l| l == lesson_id) {
                profile.completed_lessons.push(lesson_id.to_string());
            }
            Ok(profile.clone())
        }

        async fn award_badge(&self, id: DbId, badge_id: &str) -> Result<Profile, StoreError> {
            let mut profiles = self.profiles.lock().unwrap();
            let profile = profiles
                .get_mut(&id)
                .ok_or(StoreError::ProfileNotFound(id))?;
            if !profile.badges.iter().any(|b| b == badge_id) {
                profile.badges.push(badge_id.to_string());
            }
            Ok(profile.clone())
        }
    }

    #[tokio::test]
    async fn sequential_awards_sum() {
        let service = ProgressService::start(MemoryStore::with_profile(1, 0));

        service.award_points(1, 10).await.unwrap();
        service.award_points(1, 25).await.unwrap();
        let profile = service.award_points(1, 5).await.unwrap();

        assert_eq!(profile.eco_points, 40);
    }

    #[tokio::test]
    async fn concurrent_awards_all_land() {
        let service = ProgressService::start(MemoryStore::with_profile(1, 0));

        let mut handles = Vec::new();
        for _ in 0..20 {
            let service = service.clone();
            handles.push(tokio::spawn(
                async move { service.award_points(1, 5).await },
            ));
        }
        let mut last = None;
        for handle in handles {
            last = Some(handle.await.unwrap().unwrap());
        }

        // Every command is serialized through the worker, so no increment
        // can be lost.
        assert_eq!(last.unwrap().eco_points, 100);
    }

    #[tokio::test]
    async fn redeem_rejects_insufficient_balance() {
        let service = ProgressService::start(MemoryStore::with_profile(1, 100));

        let err = service.redeem(1, 150).await.unwrap_err();
        match err {
            ProgressError::Store(StoreError::InsufficientBalance { balance, required }) => {
                assert_eq!(balance, 100);
                assert_eq!(required, 150);
            }
            other => panic!("expected InsufficientBalance, got {other:?}"),
        }

        // Balance unchanged after a rejected redemption.
        let profile = service.award_points(1, 0).await.unwrap();
        assert_eq!(profile.eco_points, 100);
    }

    #[tokio::test]
    async fn redeem_deducts_cost() {
        let service = ProgressService::start(MemoryStore::with_profile(1, 200));

        let profile = service.redeem(1, 150).await.unwrap();
        assert_eq!(profile.eco_points, 50);
    }

    #[tokio::test]
    async fn complete_lesson_is_idempotent() {
        let service = ProgressService::start(MemoryStore::with_profile(1, 0));

        let first = service.complete_lesson(1, "1").await.unwrap();
        assert_eq!(first.completed_lessons, vec!["1"]);

        let second = service.complete_lesson(1, "1").await.unwrap();
        assert_eq!(second.completed_lessons, vec!["1"]);
    }

    #[tokio::test]
    async fn award_badge_is_idempotent() {
        let service = ProgressService::start(MemoryStore::with_profile(1, 0));

        service.award_badge(1, "5").await.unwrap();
        let profile = service.award_badge(1, "5").await.unwrap();
        assert_eq!(profile.badges, vec!["5"]);
    }

    #[tokio::test]
    async fn unknown_profile_reports_not_found() {
        let service = ProgressService::start(MemoryStore::with_profile(1, 0));

        let err = service.award_points(99, 10).await.unwrap_err();
        assert!(matches!(
            err,
            ProgressError::Store(StoreError::ProfileNotFound(99))
        ));
    }
}
