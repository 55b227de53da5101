//! Shared test helpers for in-memory HTTP integration tests.

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use mockable::DefaultClock;
use postdesk::{
    posts::{adapters::StaticPostsSource, services::PostsGateway},
    session::domain::SESSION_KEY,
    user::{adapters::memory::InMemoryUserDirectory, services::AccountService},
    web::{AppState, router},
};
use rstest::fixture;
use std::sync::Arc;
use tower::ServiceExt;

/// Router plus handles on its in-memory collaborators.
pub struct TestApp {
    /// Router under test.
    pub router: Router,
    /// Posts source answering upstream fetches.
    pub source: StaticPostsSource,
    /// Directory shared with the account service.
    pub directory: Arc<InMemoryUserDirectory>,
}

impl TestApp {
    /// Sends one request through a clone of the router.
    ///
    /// # Panics
    ///
    /// Panics if the router fails to produce a response.
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond")
    }
}

/// Provides an app wired to a seeded directory and an empty posts source.
#[fixture]
pub fn app() -> TestApp {
    let clock = Arc::new(DefaultClock);
    let directory = Arc::new(InMemoryUserDirectory::seeded(&*clock));
    let source = StaticPostsSource::new();
    let state = AppState::new(
        AccountService::new(Arc::clone(&directory), clock),
        PostsGateway::new(Arc::new(source.clone())),
    )
    .expect("templates should compile");
    TestApp {
        router: router(state),
        source,
        directory,
    }
}

/// Builds a `GET` request.
///
/// # Panics
///
/// Panics if `uri` is not a valid request target.
pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri)
        .body(Body::empty())
        .expect("valid GET request")
}

/// Builds a `GET` request carrying a signed-in session cookie.
///
/// # Panics
///
/// Panics if `uri` is not a valid request target.
pub fn get_signed_in(uri: &str, username: &str) -> Request<Body> {
    Request::get(uri)
        .header(header::COOKIE, session_cookie(username))
        .body(Body::empty())
        .expect("valid GET request")
}

/// Builds a url-encoded form `POST`.
///
/// # Panics
///
/// Panics if `uri` is not a valid request target.
pub fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_owned()))
        .expect("valid POST request")
}

/// Builds a `Cookie` header value for a signed-in `username`.
pub fn session_cookie(username: &str) -> String {
    let stored = serde_json::json!({ "username": username }).to_string();
    format!("{SESSION_KEY}={}", urlencoding::encode(&stored))
}

/// Reads a response body as UTF-8 text.
///
/// # Panics
///
/// Panics if the body cannot be read or is not UTF-8.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

/// Collects every `Set-Cookie` value of a response.
pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_owned)
        .collect()
}
