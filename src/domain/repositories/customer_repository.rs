//! Repository trait for customer data access.

use crate::domain::entities::{Customer, CustomerId, EmailAddress};
use crate::domain::repositories::Repository;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing customers.
///
/// Extends the generic [`Repository`] contract with lookups derived from
/// customer fields. Derived lookups are equality predicates on the named
/// field, spelled out as methods instead of being synthesized from method
/// names at runtime.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCustomerRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryCustomerRepository`] - in-process store
///
/// # Examples
///
/// See integration tests: `tests/repository_customer.rs`
#[async_trait]
pub trait CustomerRepository: Repository<Customer, CustomerId> {
    /// Finds the customer with the given email address.
    ///
    /// Stored email addresses are unique (enforced by both backends), so at
    /// most one match exists.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Customer))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn find_by_email_address(
        &self,
        email_address: &EmailAddress,
    ) -> Result<Option<Customer>, AppError>;
}

#[cfg(test)]
mockall::mock! {
    pub CustomerRepository {}

    #[async_trait]
    impl Repository<Customer, CustomerId> for CustomerRepository {
        async fn find_one(&self, id: CustomerId) -> Result<Option<Customer>, AppError>;
        async fn save(&self, entity: Customer) -> Result<Customer, AppError>;
        async fn find_all(&self) -> Result<Vec<Customer>, AppError>;
        async fn find_page(
            &self,
            request: crate::domain::page::PageRequest,
        ) -> Result<crate::domain::page::Page<Customer>, AppError>;
        async fn find_matching(
            &self,
            predicate: crate::domain::query::Predicate,
        ) -> Result<Vec<Customer>, AppError>;
        async fn delete(&self, id: CustomerId) -> Result<(), AppError>;
    }

    #[async_trait]
    impl CustomerRepository for CustomerRepository {
        async fn find_by_email_address(
            &self,
            email_address: &EmailAddress,
        ) -> Result<Option<Customer>, AppError>;
    }
}
