//! Integration test harness for the Santalena site.
//!
//! Drives the full router in-process with `tower::ServiceExt::oneshot`
//! against an in-memory `SQLite` database, so the tests exercise routing,
//! extractors, sessions, and persistence without binding a socket.
//!
//! ```bash
//! cargo test -p santalena-integration-tests
//! ```

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::missing_panics_doc)]

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use secrecy::SecretString;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

use santalena_site::config::{AdminSeedConfig, SiteConfig};
use santalena_site::state::AppState;
use santalena_site::{app, db, middleware};

/// Username seeded into every test database.
pub const TEST_ADMIN_USERNAME: &str = "admin";
/// Password seeded into every test database.
pub const TEST_ADMIN_PASSWORD: &str = "integration-test-password";

/// A fully migrated in-memory application instance.
pub struct TestContext {
    state: AppState,
    pool: SqlitePool,
    uploads_dir: PathBuf,
}

impl TestContext {
    /// Create a fresh context: in-memory database, migrations applied,
    /// admin account seeded, uploads directed at a unique temp dir.
    pub async fn new() -> Self {
        // A single connection that never expires; every connection to
        // sqlite::memory: is its own database otherwise.
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("valid sqlite url")
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await
            .expect("connect to in-memory sqlite");

        db::MIGRATOR.run(&pool).await.expect("run migrations");
        middleware::migrate_session_store(&pool)
            .await
            .expect("migrate session store");

        let uploads_dir = std::env::temp_dir().join(format!("santalena-test-{}", uuid::Uuid::new_v4()));

        let config = SiteConfig {
            database_url: SecretString::from("sqlite::memory:"),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            base_url: "http://localhost:3000".to_string(),
            session_secret: SecretString::from("kJ8#mP2$vN5@qR9!xT4&wY7*zB3^cF6%"),
            uploads_dir: uploads_dir.clone(),
            admin: AdminSeedConfig {
                username: TEST_ADMIN_USERNAME.to_string(),
                password: SecretString::from(TEST_ADMIN_PASSWORD),
            },
            email: None,
        };

        let state = AppState::new(config, pool.clone(), None).expect("build state");
        state
            .auth()
            .seed_admin(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD)
            .await
            .expect("seed admin");

        Self {
            state,
            pool,
            uploads_dir,
        }
    }

    /// Build a fresh router over the shared state. Sessions persist across
    /// routers because the store lives in the shared pool.
    #[must_use]
    pub fn app(&self) -> Router {
        app(self.state.clone())
    }

    /// Direct pool access for test assertions.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// The temp directory uploads land in.
    #[must_use]
    pub fn uploads_dir(&self) -> &PathBuf {
        &self.uploads_dir
    }

    /// Send a request without a body.
    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    /// Send a JSON request.
    pub async fn send_json(
        &self,
        method: &str,
        uri: &str,
        body: &Value,
        cookie: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();
        self.send(request).await
    }

    /// Send a request with a session cookie and no body.
    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response<Body> {
        self.send(
            Request::get(uri)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Send an arbitrary request through the router.
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app().oneshot(request).await.expect("infallible service")
    }

    /// Log in with the seeded credentials and return the session cookie.
    pub async fn login(&self) -> String {
        let response = self
            .send_json(
                "POST",
                "/api/admin/login",
                &json!({
                    "username": TEST_ADMIN_USERNAME,
                    "password": TEST_ADMIN_PASSWORD,
                }),
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK, "login should succeed");
        session_cookie(&response).expect("login sets a session cookie")
    }
}

/// Extract the session cookie (name=value) from a response.
#[must_use]
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    let set_cookie = response.headers().get(header::SET_COOKIE)?;
    let value = set_cookie.to_str().ok()?;
    value.split(';').next().map(str::to_string)
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("body is json")
}
