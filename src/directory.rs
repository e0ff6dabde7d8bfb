use crate::models::User;
use crate::user_source::{FetchError, UserSource};
use std::time::Duration;
use tracing::{info, warn};

/// Number of records the directory keeps from a response
pub const MAX_RECORDS: usize = 5;

/// The list is only derived and shown once more than this many records are loaded
const LIST_THRESHOLD: usize = 1;

/// State owned by the user directory view
#[derive(Debug, Default)]
pub struct DirectoryState {
    users: Vec<User>,
    error: Option<FetchError>,
    is_loading: bool,
    search_term: String,
}

impl DirectoryState {
    pub fn begin_fetch(&mut self) {
        self.is_loading = true;
    }

    /// Record the outcome of a fetch. Loading ends either way.
    pub fn finish_fetch(&mut self, result: Result<Vec<User>, FetchError>) {
        match result {
            Ok(users) => {
                self.users = users;
                self.error = None;
            }
            Err(e) => {
                warn!("Failed to load users: {}", e);
                self.users.clear();
                self.error = Some(e);
            }
        }
        self.is_loading = false;
    }

    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn search_disabled(&self) -> bool {
        self.is_loading
    }

    pub fn shows_spinner(&self) -> bool {
        self.is_loading
    }

    pub fn shows_list(&self) -> bool {
        self.users.len() > LIST_THRESHOLD
    }

    /// Records matching the current search term, in fetched order
    pub fn visible_users(&self) -> Vec<User> {
        if !self.shows_list() {
            return Vec::new();
        }
        filter_by_name_prefix(&self.users, &self.search_term)
    }
}

/// Case-insensitive prefix match. An empty term matches every name.
pub fn matches_prefix(name: &str, term: &str) -> bool {
    name.to_lowercase().starts_with(&term.to_lowercase())
}

pub fn filter_by_name_prefix(users: &[User], term: &str) -> Vec<User> {
    users
        .iter()
        .filter(|user| matches_prefix(&user.name, term))
        .cloned()
        .collect()
}

/// Wait out the artificial delay, fetch, and keep the first `limit` records
pub async fn load_users(
    source: &dyn UserSource,
    delay: Duration,
    limit: usize,
) -> Result<Vec<User>, FetchError> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let mut users = source.fetch_users().await?;
    let fetched = users.len();
    users.truncate(limit);

    info!("Loaded {} of {} users", users.len(), fetched);
    Ok(users)
}
