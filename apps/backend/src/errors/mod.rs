//! Error types shared across the crate.

pub mod domain;

pub use domain::{DomainError, InfraErrorKind, NotFoundKind};
