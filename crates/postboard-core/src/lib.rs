//! # Postboard Core
//!
//! The domain layer of Postboard.
//! This crate contains the post/user model, the ports infrastructure must
//! implement, and the startup bootstrap sequence. It has zero infrastructure
//! dependencies.

pub mod bootstrap;
pub mod domain;
pub mod error;
pub mod ports;

pub use error::{BootstrapError, DomainError, RepoError, Unreachable};
