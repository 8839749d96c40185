pub use super::connection::Entity as Connection;
