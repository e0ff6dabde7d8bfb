#![cfg(feature = "test-utils")]

mod support;

use std::time::{Duration, Instant};

use crate::support::{fixture_users, names, spawn_users_server, tracing_init};
use reqwest::StatusCode;
use roster::directory::{load_users, DirectoryState, MAX_RECORDS};
use roster::test_support::MockUserSource;
use roster::user_source::{FetchError, HttpUserSource, SharedUserSource};

#[tokio::test]
async fn test_keeps_first_five_in_order() {
    tracing_init();
    let source = MockUserSource::with_users(fixture_users());

    let users = load_users(&source, Duration::ZERO, MAX_RECORDS)
        .await
        .unwrap();

    assert_eq!(
        names(&users),
        vec![
            "Leanne Graham",
            "Ervin Howell",
            "Clementine Bauch",
            "Patricia Lebsack",
            "Chelsey Dietrich",
        ]
    );
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_keeps_all_when_fewer_than_five() {
    tracing_init();
    let few: Vec<_> = fixture_users().into_iter().take(3).collect();
    let source = MockUserSource::with_users(few.clone());

    let users = load_users(&source, Duration::ZERO, MAX_RECORDS)
        .await
        .unwrap();

    assert_eq!(users, few);
}

#[tokio::test]
async fn test_waits_for_delay_before_fetching() {
    tracing_init();
    let source = MockUserSource::with_users(fixture_users());
    let delay = Duration::from_millis(50);

    let started = Instant::now();
    load_users(&source, delay, MAX_RECORDS).await.unwrap();

    assert!(started.elapsed() >= delay);
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_failed_fetch_leaves_directory_empty() {
    tracing_init();
    let source = MockUserSource::failing(StatusCode::SERVICE_UNAVAILABLE);
    let mut state = DirectoryState::default();

    state.begin_fetch();
    assert!(state.shows_spinner());
    assert!(state.search_disabled());

    let result = load_users(&source, Duration::ZERO, MAX_RECORDS).await;
    state.finish_fetch(result);

    assert!(!state.is_loading());
    assert!(!state.search_disabled());
    assert!(state.visible_users().is_empty());
    assert!(matches!(
        state.error(),
        Some(FetchError::Status(StatusCode::SERVICE_UNAVAILABLE))
    ));
}

#[tokio::test]
async fn test_search_narrows_loaded_directory() {
    tracing_init();
    let source = MockUserSource::with_users(fixture_users());
    let mut state = DirectoryState::default();

    state.begin_fetch();
    let result = load_users(&source, Duration::ZERO, MAX_RECORDS).await;
    state.finish_fetch(result);

    assert!(!state.is_loading());
    assert_eq!(state.visible_users().len(), 5);

    state.set_search_term("le".to_string());
    assert_eq!(names(&state.visible_users()), vec!["Leanne Graham"]);

    state.set_search_term("ERV".to_string());
    assert_eq!(names(&state.visible_users()), vec!["Ervin Howell"]);

    // Kurtis was truncated away, so nothing matches
    state.set_search_term("Kurtis".to_string());
    assert!(state.visible_users().is_empty());

    state.set_search_term(String::new());
    assert_eq!(state.visible_users().len(), 5);
}

#[tokio::test]
async fn test_load_through_shared_http_source() {
    tracing_init();
    let addr = spawn_users_server().await;
    let shared =
        SharedUserSource::new(HttpUserSource::new(format!("http://{addr}/users")).unwrap());

    let users = load_users(shared.source(), Duration::ZERO, MAX_RECORDS)
        .await
        .unwrap();

    assert_eq!(users.len(), 5);
    assert_eq!(users[4].name, "Chelsey Dietrich");
}
