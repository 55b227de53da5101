//! Login page guard over HTTP.

use super::helpers::{TestApp, app, body_text, get, get_signed_in, session_cookie};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn anonymous_client_sees_login_form(app: TestApp) {
    let response = app.send(get("/user/login")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("<form method=\"post\""));
}

#[rstest]
#[tokio::test]
async fn signed_in_client_is_redirected_away_from_login(app: TestApp) {
    let response = app.send(get_signed_in("/user/login", "dan")).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).map(|v| v.as_bytes()),
        Some(b"/user".as_slice())
    );
}

#[rstest]
#[tokio::test]
async fn signed_in_client_cannot_post_login(app: TestApp) {
    let request = Request::post("/user/login")
        .header(header::COOKIE, session_cookie("dan"))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("username=dan&password=password"))
        .expect("valid POST request");

    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[rstest]
#[case("user=null")]
#[case("user=not-json")]
#[case("other=1")]
#[tokio::test]
async fn unusable_session_cookie_counts_as_anonymous(app: TestApp, #[case] cookie: &str) {
    let request = Request::get("/user/login")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .expect("valid GET request");

    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::OK);
}
