#![allow(dead_code)]

pub mod users_server;

pub use users_server::*;

use roster::models::User;

/// Seven users in jsonplaceholder's shape
pub const USERS_FIXTURE: &str = include_str!("../fixtures/users.json");

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn fixture_users() -> Vec<User> {
    serde_json::from_str(USERS_FIXTURE).expect("users fixture should decode")
}

pub fn names(users: &[User]) -> Vec<&str> {
    users.iter().map(|u| u.name.as_str()).collect()
}
