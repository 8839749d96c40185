//! Nameless-Link Test Utils
//!
//! Shared testing utilities for the nameless-link workspace. Provides a
//! builder for test contexts backed by an in-memory SQLite database, entity
//! factories for seeding connections, and serde-based factories for serenity
//! model types that cannot be constructed directly.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database
//! tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Connection;
//!
//! #[tokio::test]
//! async fn test_connection_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Connection)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
