//! Application layer

pub mod chat;
pub mod commands;
pub mod dto;
pub mod handler;
pub mod queries;

pub use chat::*;
pub use commands::*;
pub use dto::*;
pub use handler::ServiceHandler;
pub use queries::*;
