//! HTTP surface of postdesk.
//!
//! Routes are served with `axum`. Handlers decode forms, load the
//! per-request [`ClientUserSession`](crate::session::services::ClientUserSession)
//! from cookies, call the account and posts services, and render pages with
//! `minijinja`.
//!
//! | route                  | handler                                    |
//! |------------------------|--------------------------------------------|
//! | `GET /`                | redirect to `/posts`                       |
//! | `GET /posts`           | posts list loader                          |
//! | `GET /posts/{id}`      | single post loader (digits only)           |
//! | `GET /user`            | current session                            |
//! | `GET, POST /user/login`| login form and action, behind the guard    |
//! | `GET, POST /user/registration` | registration form and action       |

mod error;
pub mod form;
pub mod guard;
pub mod pages;
mod routes;
mod state;

pub use error::WebError;
pub use routes::router;
pub use state::{Accounts, AppState, StartupError};
