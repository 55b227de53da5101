//! Router and request handlers.

use super::{
    AppState, WebError,
    form::FormFields,
    guard::{GuardOutcome, login_page_guard},
    pages::PageRenderer,
};
use crate::posts::domain::{LoadError, PostId};
use crate::session::{
    adapters::CookieJarStore,
    services::{ClientUserSession, SessionError},
};
use crate::user::{
    domain::{ActionOutcome, UserSummary},
    services::{AccountServiceError, AccountServiceResult, LoginForm, RegistrationForm},
};
use axum::{
    Router,
    body::Bytes,
    extract::{Path, Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    middleware::{self, Next},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use minijinja::context;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

const NOT_FOUND_MESSAGE: &str = "Not Found";

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/posts", get(posts_index))
        .route("/posts/{id}", get(post_detail))
        .route("/user", get(account_page))
        .route("/user/login", get(login_page).post(login_action))
        .route(
            "/user/registration",
            get(registration_page).post(registration_action),
        )
        .fallback(not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();
    let response = next.run(request).await;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms,
        "request handled"
    );
    response
}

async fn home() -> Redirect {
    Redirect::to("/posts")
}

async fn posts_index(State(state): State<AppState>) -> Result<Response, WebError> {
    match state.posts().list_posts().await {
        Ok(page) => Ok(html(
            StatusCode::OK,
            state.pages().render("posts.html", &page)?,
        )),
        Err(err) => load_error_page(state.pages(), err),
    }
}

async fn post_detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, WebError> {
    let Ok(id) = raw_id.parse::<PostId>() else {
        debug!(%raw_id, "non-numeric post id");
        return error_page(state.pages(), StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE);
    };
    match state.posts().get_post(id).await {
        Ok(page) => Ok(html(StatusCode::OK, state.pages().render("post.html", &page)?)),
        Err(err) => load_error_page(state.pages(), err),
    }
}

async fn account_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    let (_, session) = client_session(&headers)?;
    let current = session.current()?;
    let body = state
        .pages()
        .render("user.html", context! { user => current.user() })?;
    Ok(html(StatusCode::OK, body))
}

async fn login_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    let (_, session) = client_session(&headers)?;
    if let GuardOutcome::Redirect { location } = login_page_guard(&session)? {
        return Ok(found(location));
    }
    Ok(html(
        StatusCode::OK,
        state.pages().render("login.html", context! {})?,
    ))
}

async fn login_action(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, WebError> {
    let (jar, session) = client_session(&headers)?;
    if let GuardOutcome::Redirect { location } = login_page_guard(&session)? {
        return Ok(found(location));
    }

    let fields = FormFields::parse(&body);
    let form = LoginForm::new(fields.first("username"), fields.first("password"));
    let outcome = action_outcome(state.accounts().login(&form))?;
    if let ActionOutcome::Success { user, .. } = &outcome {
        session.sign_in(user.clone())?;
    }

    let response = action_page(state.pages(), "login.html", &outcome)?;
    with_cookies(response, &jar)
}

async fn registration_page(State(state): State<AppState>) -> Result<Response, WebError> {
    Ok(html(
        StatusCode::OK,
        state.pages().render("registration.html", context! {})?,
    ))
}

async fn registration_action(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, WebError> {
    let fields = FormFields::parse(&body);
    let form = RegistrationForm::new(fields.first("username"), fields.all("password[]"));
    let outcome = action_outcome(state.accounts().register(&form))?;
    action_page(state.pages(), "registration.html", &outcome)
}

async fn not_found(State(state): State<AppState>) -> Result<Response, WebError> {
    error_page(state.pages(), StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}

fn client_session(
    headers: &HeaderMap,
) -> Result<(Arc<CookieJarStore>, ClientUserSession<CookieJarStore>), WebError> {
    let cookie_header = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok());
    let jar = Arc::new(CookieJarStore::from_header(cookie_header));
    let session = ClientUserSession::load(Arc::clone(&jar))?;
    Ok((jar, session))
}

fn action_outcome(result: AccountServiceResult<UserSummary>) -> Result<ActionOutcome, WebError> {
    match result {
        Ok(user) => Ok(ActionOutcome::success(user)),
        Err(AccountServiceError::Rejected(failure)) => {
            debug!(%failure, "form action rejected");
            Ok(ActionOutcome::from(failure))
        }
        Err(AccountServiceError::Directory(err)) => Err(err.into()),
    }
}

fn action_page(
    pages: &PageRenderer,
    template: &str,
    outcome: &ActionOutcome,
) -> Result<Response, WebError> {
    let status = StatusCode::from_u16(outcome.status()).unwrap_or(StatusCode::BAD_REQUEST);
    let body = pages.render(template, context! { outcome })?;
    Ok(html(status, body))
}

fn load_error_page(pages: &PageRenderer, err: LoadError) -> Result<Response, WebError> {
    error_page(pages, page_status(err.status()), &err.to_string())
}

/// Maps an upstream status onto a status an error page may carry.
///
/// Only 4xx and 5xx codes pass through; anything else becomes 502.
fn page_status(status: u16) -> StatusCode {
    match StatusCode::from_u16(status) {
        Ok(code) if code.is_client_error() || code.is_server_error() => code,
        _ => StatusCode::BAD_GATEWAY,
    }
}

fn error_page(
    pages: &PageRenderer,
    status: StatusCode,
    message: &str,
) -> Result<Response, WebError> {
    let body = pages.render(
        "error.html",
        context! { status => status.as_u16(), message },
    )?;
    Ok(html(status, body))
}

fn with_cookies(mut response: Response, jar: &CookieJarStore) -> Result<Response, WebError> {
    for cookie in jar.set_cookie_headers().map_err(SessionError::from)? {
        response
            .headers_mut()
            .append(header::SET_COOKIE, HeaderValue::from_str(&cookie)?);
    }
    Ok(response)
}

fn html(status: StatusCode, body: String) -> Response {
    (status, Html(body)).into_response()
}

fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
