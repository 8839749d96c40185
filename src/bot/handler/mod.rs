pub mod interaction;
pub mod message;
pub mod ready;
