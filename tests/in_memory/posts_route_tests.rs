//! Posts routes over HTTP.

use super::helpers::{TestApp, app, body_text, get};
use axum::http::{StatusCode, header};
use postdesk::posts::{domain::PostId, ports::UpstreamResponse};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test]
async fn root_redirects_to_posts(app: TestApp) {
    let response = app.send(get("/")).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).map(|v| v.as_bytes()),
        Some(b"/posts".as_slice())
    );
}

#[rstest]
#[tokio::test]
async fn posts_list_renders_upstream_posts(app: TestApp) {
    let body = json!([
        { "id": 1, "title": "first post", "body": "hello" },
        { "id": 2, "title": "second post", "body": "again" }
    ]);
    app.source
        .set_collection(UpstreamResponse::new(200, body.to_string()))
        .expect("configure collection");

    let response = app.send(get("/posts")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<a href=\"/posts/1\">first post</a>"));
    assert!(html.contains("<a href=\"/posts/2\">second post</a>"));
}

#[rstest]
#[tokio::test]
async fn missing_collection_renders_empty_list(app: TestApp) {
    let response = app.send(get("/posts")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No posts yet."));
}

#[rstest]
#[tokio::test]
async fn upstream_failure_renders_error_page(app: TestApp) {
    app.source
        .set_collection(UpstreamResponse::status_only(503))
        .expect("configure collection");

    let response = app.send(get("/posts")).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(body_text(response).await.contains("Error retrieving posts."));
}

#[rstest]
#[tokio::test]
async fn single_post_renders_upstream_post(app: TestApp) {
    let body = json!({ "id": 7, "title": "lucky", "body": "seven" });
    app.source
        .set_post(PostId::new(7), UpstreamResponse::new(200, body.to_string()))
        .expect("configure post");

    let response = app.send(get("/posts/7")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<h1>lucky</h1>"));
    assert!(html.contains("seven"));
}

#[rstest]
#[tokio::test]
async fn unknown_post_renders_not_found(app: TestApp) {
    let response = app.send(get("/posts/42")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("No such post."));
}

#[rstest]
#[case("/posts/abc")]
#[case("/posts/-1")]
#[case("/posts/1.5")]
#[tokio::test]
async fn non_numeric_post_id_is_not_found_without_upstream_call(
    app: TestApp,
    #[case] uri: &str,
) {
    let response = app.send(get(uri)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.source.request_count().expect("count"), 0);
}

#[rstest]
#[tokio::test]
async fn unknown_route_renders_not_found(app: TestApp) {
    let response = app.send(get("/nowhere")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("<h1>404</h1>"));
}
