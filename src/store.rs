//! Storage collaborator interface.
//!
//! Persistence of review items belongs to the embedding application; the
//! scheduler only needs to load the state it previously returned and save
//! the one it just computed. Read-modify-write races between concurrent
//! submissions for the same item are likewise the host's to resolve
//! (compare-and-swap, transactions, a per-user lock) — the scheduler itself
//! is pure and makes no ordering guarantee.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::{ReviewItemState, ReviewStatus};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Persisted record for one (user, problem) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoredReview {
    pub state: ReviewItemState,
    pub next_review_date: NaiveDate,
    pub status: ReviewStatus,
}

pub trait ReviewStore {
    /// Load the scheduling record for a (user, problem) pair, if one exists.
    fn load_review(&self, user_id: &str, problem_id: u32)
        -> Result<Option<StoredReview>, StoreError>;

    /// Overwrite the scheduling record for a (user, problem) pair.
    fn save_review(
        &self,
        user_id: &str,
        problem_id: u32,
        review: &StoredReview,
    ) -> Result<(), StoreError>;
}

/// In-memory store used by the test suite and by embedders that keep their
/// own persistence outside this crate.
#[derive(Debug, Default)]
pub struct MemoryStore {
    reviews: RwLock<HashMap<(String, u32), StoredReview>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReviewStore for MemoryStore {
    fn load_review(
        &self,
        user_id: &str,
        problem_id: u32,
    ) -> Result<Option<StoredReview>, StoreError> {
        let reviews = self
            .reviews
            .read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(reviews.get(&(user_id.to_string(), problem_id)).copied())
    }

    fn save_review(
        &self,
        user_id: &str,
        problem_id: u32,
        review: &StoredReview,
    ) -> Result<(), StoreError> {
        let mut reviews = self
            .reviews
            .write()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        reviews.insert((user_id.to_string(), problem_id), *review);
        Ok(())
    }
}
