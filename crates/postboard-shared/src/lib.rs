//! # Postboard Shared
//!
//! Wire types shared by the server and its tests: HTML form bodies and the
//! JSON health payload.

pub mod dto;
pub mod response;

pub use dto::{FormError, MethodOverride};
pub use response::HealthResponse;
