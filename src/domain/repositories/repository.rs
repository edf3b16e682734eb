//! Generic repository trait for entity data access.

use crate::domain::page::{Page, PageRequest};
use crate::domain::query::Predicate;
use crate::error::AppError;
use async_trait::async_trait;

/// Generic data-access interface over an entity type `E` and identifier
/// type `Id`.
///
/// Implementations receive their storage handle at construction time; there
/// is no container wiring. All operations are single logical requests that
/// may block on backend I/O; error translation stops at the [`AppError`]
/// taxonomy and backends are never retried here.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCustomerRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryCustomerRepository`] - in-process store
#[async_trait]
pub trait Repository<E, Id>: Send + Sync {
    /// Finds the entity with the given identity.
    ///
    /// Absence is not an error: returns `Ok(None)` when no entity with that
    /// identity exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn find_one(&self, id: Id) -> Result<Option<E>, AppError>;

    /// Saves an entity: inserts when its identity is unset, updates by
    /// identity otherwise. Returns the persisted entity with the identity
    /// populated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when updating an identity that no
    /// longer exists.
    /// Returns [`AppError::Conflict`] on backend unique-constraint
    /// violations.
    /// Returns [`AppError::Internal`] on backend errors.
    async fn save(&self, entity: E) -> Result<E, AppError>;

    /// Returns all entities, ordered by identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn find_all(&self) -> Result<Vec<E>, AppError>;

    /// Returns one bounded window of the result set.
    ///
    /// An out-of-range page index yields an empty page carrying the true
    /// total, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn find_page(&self, request: PageRequest) -> Result<Page<E>, AppError>;

    /// Returns all entities satisfying the predicate.
    ///
    /// The expression tree is evaluated by the storage backend; an `Or`
    /// yields the union by identity with no duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the predicate references an
    /// unknown field.
    /// Returns [`AppError::Internal`] on backend errors.
    async fn find_matching(&self, predicate: Predicate) -> Result<Vec<E>, AppError>;

    /// Deletes the entity with the given identity.
    ///
    /// Idempotent: deleting an absent identity is `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn delete(&self, id: Id) -> Result<(), AppError>;
}
