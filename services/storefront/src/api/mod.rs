//! API 层

pub mod http;

pub use http::{not_found, router};
