//! Step definitions for account BDD scenarios.

pub mod world;

mod given;
mod then;
mod when;
