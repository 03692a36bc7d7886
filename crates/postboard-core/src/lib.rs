//! # Postboard Core
//!
//! The domain layer of Postboard.
//! This crate contains the user/post model and the repository ports, with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
