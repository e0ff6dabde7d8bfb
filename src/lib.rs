// Library exports for integration tests and reusable components

pub mod config;
pub mod directory;
pub mod models;
pub mod ui;
pub mod user_source;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;

// Test support (only available with test-utils feature)
#[cfg(feature = "test-utils")]
pub mod test_support;
