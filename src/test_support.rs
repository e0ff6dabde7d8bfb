// Test support utilities for both unit and integration tests

use crate::models::User;
use crate::user_source::{FetchError, UserSource};
use reqwest::StatusCode;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock user source for testing
///
/// Serves a fixed set of users, or fails with a fixed status,
/// and counts how many times it was asked.
pub struct MockUserSource {
    users: Vec<User>,
    failure: Option<StatusCode>,
    calls: AtomicUsize,
}

impl MockUserSource {
    /// Source that returns `users` on every fetch
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Source that fails every fetch with `status`
    pub fn failing(status: StatusCode) -> Self {
        Self {
            users: Vec::new(),
            failure: Some(status),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl UserSource for MockUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure {
            Some(status) => Err(FetchError::Status(status)),
            None => Ok(self.users.clone()),
        }
    }
}
