//! Request handlers.

pub mod activities;
pub mod coach;
pub mod health;
pub mod relay;
