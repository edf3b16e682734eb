//! Core domain entities representing the customer data model.
//!
//! # Entity Types
//!
//! - [`Customer`] - A directory entry with identity, names, and an optional email
//! - [`EmailAddress`] - A validated, normalized email value object
//!
//! # Design Pattern
//!
//! Customers are constructed transient and receive their [`CustomerId`] from
//! the storage backend on first save; the identity never changes afterwards.

pub mod customer;
pub mod email_address;

pub use customer::{Customer, CustomerId};
pub use email_address::{EmailAddress, EmailAddressError};
