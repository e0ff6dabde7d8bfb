use crate::models::User;
use reqwest::{header, Client, Error as ReqwestError, StatusCode};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Public endpoint the directory reads from unless configured otherwise
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

const USER_AGENT: &str = concat!("roster/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Failed to fetch data: server returned {0}")]
    Status(StatusCode),
    #[error("Failed to decode users: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of user records (allows mocking for tests)
#[async_trait::async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError>;
}

/// Reads the user collection with a single GET against a JSON endpoint
#[derive(Clone)]
pub struct HttpUserSource {
    client: Client,
    endpoint: String,
}

impl HttpUserSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        debug!("Users API request: {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let users: Vec<User> = serde_json::from_str(&body)?;

        debug!("Users API returned {} records", users.len());
        Ok(users)
    }
}

/// User source handle that can live in Dioxus context
#[derive(Clone)]
pub struct SharedUserSource {
    inner: Arc<dyn UserSource>,
}

impl SharedUserSource {
    pub fn new(source: impl UserSource + 'static) -> Self {
        Self {
            inner: Arc::new(source),
        }
    }

    pub fn from_arc(source: Arc<dyn UserSource>) -> Self {
        Self { inner: source }
    }

    pub fn source(&self) -> &dyn UserSource {
        self.inner.as_ref()
    }
}

impl PartialEq for SharedUserSource {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
