use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use super::USERS_FIXTURE;

/// Local stand-in for the users API
///
/// - `/users` serves the fixture
/// - `/broken` answers 500
/// - `/not-json` answers 200 with an HTML body
/// - anything else is a 404
pub async fn spawn_users_server() -> SocketAddr {
    let router = Router::new()
        .route(
            "/users",
            get(|| async { ([(header::CONTENT_TYPE, "application/json")], USERS_FIXTURE) }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
        )
        .route(
            "/not-json",
            get(|| async { "<html><body>maintenance</body></html>" }),
        );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read test server address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server failed");
    });

    addr
}

/// Address nothing is listening on
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read probe address");
    drop(listener);
    addr
}
