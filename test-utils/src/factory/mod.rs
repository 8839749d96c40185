//! Entity factories for seeding test databases.

pub mod connection;
pub mod helpers;

pub use connection::{create_connection, ConnectionFactory};
