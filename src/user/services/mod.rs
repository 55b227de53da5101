//! Application services for login and registration.

mod accounts;

pub use accounts::{
    AccountService, AccountServiceError, AccountServiceResult, LoginForm, MIN_PASSWORD_LENGTH,
    MIN_USERNAME_LENGTH, RegistrationForm,
};
