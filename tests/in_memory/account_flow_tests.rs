//! Registration, login, and account page over HTTP.

use super::helpers::{TestApp, app, body_text, get, get_signed_in, post_form, set_cookies};
use axum::http::StatusCode;
use postdesk::user::ports::UserDirectory;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn seeded_user_can_log_in(app: TestApp) {
    let response = app
        .send(post_form("/user/login", "username=dan&password=password"))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 1);
    let cookie = cookies.first().expect("one session cookie");
    assert!(cookie.starts_with("user=%7B%22username%22%3A%22dan%22%7D"));
    assert!(cookie.contains("HttpOnly"));
    assert!(body_text(response).await.contains("Welcome back, dan."));
}

#[rstest]
#[case("username=dan&password=wrong")]
#[case("username=nobody&password=password")]
#[case("")]
#[tokio::test]
async fn bad_credentials_render_inline_error(app: TestApp, #[case] form: &str) {
    let response = app.send(post_form("/user/login", form)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(set_cookies(&response).is_empty());
    assert!(
        body_text(response)
            .await
            .contains("Invalid username or password.")
    );
}

#[rstest]
#[tokio::test]
async fn registration_adds_user_without_signing_in(app: TestApp) {
    let response = app
        .send(post_form(
            "/user/registration",
            "username=alice&password%5B%5D=hunter2&password%5B%5D=hunter2",
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookies(&response).is_empty());
    assert!(body_text(response).await.contains("Account alice created."));

    let users = app.directory.list().expect("directory should list");
    assert!(users.iter().any(|user| user.username() == "alice"));

    let login = app
        .send(post_form("/user/login", "username=alice&password=hunter2"))
        .await;
    assert_eq!(login.status(), StatusCode::OK);
}

#[rstest]
#[case(
    "username=alice&password%5B%5D=abc&password%5B%5D=abc",
    "Password is too weak."
)]
#[case(
    "username=alice&password%5B%5D=hunter2&password%5B%5D=hunter3",
    "Passwords mismatch."
)]
#[case(
    "username=bob&password%5B%5D=hunter2&password%5B%5D=hunter2",
    "Username is invalid."
)]
#[case(
    "username=alice&password%5B%5D=hunter2",
    "Passwords mismatch."
)]
#[tokio::test]
async fn invalid_registration_renders_reason(
    app: TestApp,
    #[case] form: &str,
    #[case] message: &str,
) {
    let response = app.send(post_form("/user/registration", form)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains(message));
    let users = app.directory.list().expect("directory should list");
    assert_eq!(users.len(), 1);
}

#[rstest]
#[tokio::test]
async fn duplicate_registration_is_rejected(app: TestApp) {
    let form = "username=carol&password%5B%5D=secret&password%5B%5D=secret";
    let first = app.send(post_form("/user/registration", form)).await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.send(post_form("/user/registration", form)).await;

    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert!(
        body_text(second)
            .await
            .contains("Username is already in use.")
    );
}

#[rstest]
#[tokio::test]
async fn account_page_reflects_the_session_cookie(app: TestApp) {
    let anonymous = app.send(get("/user")).await;
    assert_eq!(anonymous.status(), StatusCode::OK);
    assert!(body_text(anonymous).await.contains("You are not signed in."));

    let signed_in = app.send(get_signed_in("/user", "dan")).await;
    assert_eq!(signed_in.status(), StatusCode::OK);
    assert!(body_text(signed_in).await.contains("Signed in as dan."));
}
