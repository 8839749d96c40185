//! Domain models shared across the connection, API, and command layers.
//!
//! The storage layer converts SeaORM entity rows into these types so the
//! rest of the bot never handles raw column values.

pub mod connection;
pub mod integration;

pub use connection::Connection;
pub use integration::IntegrationData;
