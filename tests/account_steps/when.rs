//! When steps for account BDD scenarios.

use super::world::AccountWorld;
use eyre::WrapErr;
use postdesk::user::{
    domain::ActionOutcome,
    services::{LoginForm, RegistrationForm},
};
use rstest_bdd_macros::when;

#[when(r#""{username}" registers with password "{password}" confirmed as "{confirmation}""#)]
fn user_registers(
    world: &mut AccountWorld,
    username: String,
    password: String,
    confirmation: String,
) -> Result<(), eyre::Report> {
    let form = RegistrationForm::with_confirmation(username, password, confirmation);
    let result = world.service.register(&form);
    world.record(result)
}

#[when(r#""{username}" logs in with password "{password}""#)]
fn user_logs_in(
    world: &mut AccountWorld,
    username: String,
    password: String,
) -> Result<(), eyre::Report> {
    let result = world.service.login(&LoginForm::new(username, password));
    world.record(result)?;
    if let Some(ActionOutcome::Success { user, .. }) = &world.last_outcome {
        world
            .session
            .sign_in(user.clone())
            .wrap_err("store signed-in user")?;
    }
    Ok(())
}

#[when("the client signs out")]
fn client_signs_out(world: &mut AccountWorld) -> Result<(), eyre::Report> {
    world.session.clear().wrap_err("clear session")
}
