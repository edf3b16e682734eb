//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data
//! access operations following the Repository pattern. These traits are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - [`Repository`] defines the generic CRUD / paging / predicate contract
//! - [`CustomerRepository`] adds customer-specific derived lookups
//! - Implementations live in `crate::infrastructure::persistence`
//! - A mock implementation is available with `cfg(test)`
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod customer_repository;
pub mod repository;

pub use customer_repository::CustomerRepository;
pub use repository::Repository;

#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
