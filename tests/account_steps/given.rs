//! Given steps for account BDD scenarios.

use super::world::AccountWorld;
use eyre::WrapErr;
use postdesk::user::{domain::UserSummary, services::RegistrationForm};
use rstest_bdd_macros::given;

#[given("an anonymous client")]
fn an_anonymous_client(world: &mut AccountWorld) -> Result<(), eyre::Report> {
    if world.session.exists().wrap_err("read session")? {
        return Err(eyre::eyre!("expected a fresh client to be anonymous"));
    }
    Ok(())
}

#[given(r#"a registered user "{username}" with password "{password}""#)]
fn a_registered_user(
    world: &mut AccountWorld,
    username: String,
    password: String,
) -> Result<(), eyre::Report> {
    let form = RegistrationForm::with_confirmation(username, password.clone(), password);
    world
        .service
        .register(&form)
        .wrap_err("register user for scenario")?;
    Ok(())
}

#[given(r#"a client signed in as "{username}""#)]
fn a_signed_in_client(world: &mut AccountWorld, username: String) -> Result<(), eyre::Report> {
    world
        .session
        .sign_in(UserSummary::new(username))
        .wrap_err("sign in scenario client")
}
