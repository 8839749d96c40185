//! Background services.

pub mod role_sync;
