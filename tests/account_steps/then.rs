//! Then steps for account BDD scenarios.

use super::world::AccountWorld;
use eyre::WrapErr;
use postdesk::user::{domain::ActionOutcome, ports::UserDirectory};
use rstest_bdd_macros::then;

#[then(r#"the action succeeds for "{username}""#)]
fn action_succeeds(world: &AccountWorld, username: String) -> Result<(), eyre::Report> {
    match &world.last_outcome {
        Some(ActionOutcome::Success { user, .. }) if user.username == username => Ok(()),
        other => Err(eyre::eyre!("expected success for '{username}', got {other:?}")),
    }
}

#[then(r#"the action fails with "{message}""#)]
fn action_fails(world: &AccountWorld, message: String) -> Result<(), eyre::Report> {
    match &world.last_outcome {
        Some(ActionOutcome::Failure {
            status: 400,
            message: actual,
        }) if *actual == message => Ok(()),
        other => Err(eyre::eyre!("expected failure '{message}', got {other:?}")),
    }
}

#[then("the client is anonymous")]
fn client_is_anonymous(world: &AccountWorld) -> Result<(), eyre::Report> {
    let current = world.session.current().wrap_err("read session")?;
    if current.is_authenticated() {
        return Err(eyre::eyre!("expected anonymous client, got {current:?}"));
    }
    Ok(())
}

#[then(r#"the client is signed in as "{username}""#)]
fn client_is_signed_in(world: &AccountWorld, username: String) -> Result<(), eyre::Report> {
    let current = world.session.current().wrap_err("read session")?;
    match current.user() {
        Some(user) if user.username == username => Ok(()),
        _ => Err(eyre::eyre!("expected '{username}' signed in, got {current:?}")),
    }
}

#[then("the directory holds {count:usize} users")]
fn directory_holds(world: &AccountWorld, count: usize) -> Result<(), eyre::Report> {
    let users = world
        .service
        .directory()
        .list()
        .wrap_err("list directory")?;
    if users.len() != count {
        return Err(eyre::eyre!("expected {count} users, found {}", users.len()));
    }
    Ok(())
}
