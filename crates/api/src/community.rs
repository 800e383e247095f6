//! In-memory community board.
//!
//! Posts live only for the lifetime of the server process; the board is
//! seeded from the catalog's starter posts at startup. A `RwLock` is enough
//! here since posts are small and contention is low.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use eco_core::catalog::CommunityPost;

/// Session-lifetime post storage, newest first.
pub struct CommunityBoard {
    posts: RwLock<Vec<CommunityPost>>,
    next_id: AtomicU64,
}

impl CommunityBoard {
    /// Build a board pre-populated with seed posts.
    pub fn new(seed_posts: &[CommunityPost]) -> Self {
        let max_id = seed_posts
            .iter()
            .filter_map(|p| p.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            posts: RwLock::new(seed_posts.to_vec()),
            next_id: AtomicU64::new(max_id + 1),
        }
    }

    /// All posts, newest first.
    pub fn list(&self) -> Vec<CommunityPost> {
        let posts = self.posts.read().expect("community board lock poisoned");
        let mut out = posts.clone();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out
    }

    /// Add a post authored by `author` and return it.
    pub fn create(
        &self,
        author: &str,
        author_avatar_url: &str,
        title: &str,
        content: &str,
    ) -> CommunityPost {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let post = CommunityPost {
            id: id.to_string(),
            author: author.to_string(),
            author_avatar_url: author_avatar_url.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            likes: 0,
            created_at: chrono::Utc::now(),
        };
        self.posts
            .write()
            .expect("community board lock poisoned")
            .push(post.clone());
        post
    }

    /// Increment a post's like counter, returning the updated post.
    pub fn like(&self, post_id: &str) -> Option<CommunityPost> {
        let mut posts = self.posts.write().expect("community board lock poisoned");
        let post = posts.iter_mut().find(|p| p.id == post_id)?;
        post.likes += 1;
        Some(post.clone())
    }
}
