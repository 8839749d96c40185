//! Test factories for serenity model types.

pub mod user;

pub use user::create_test_user;
