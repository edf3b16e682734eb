//! In-memory implementation of the customer repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use crate::domain::entities::{Customer, CustomerId, EmailAddress};
use crate::domain::page::{Page, PageRequest};
use crate::domain::query::{CompareOp, FieldRef, Predicate};
use crate::domain::repositories::{CustomerRepository, Repository};
use crate::error::AppError;

/// A self-contained customer store backed by process memory.
///
/// Implements the full storage contract: identity assignment on insert,
/// windowed scans with total counts, unique email enforcement, and its own
/// predicate evaluator. Rows are kept ordered by identity, so scans and
/// pages are deterministic.
///
/// # Use Cases
///
/// - Hermetic integration tests without a database
/// - Development environments without PostgreSQL
pub struct InMemoryCustomerRepository {
    store: RwLock<Store>,
}

struct Store {
    rows: BTreeMap<i64, Customer>,
    next_id: i64,
}

impl InMemoryCustomerRepository {
    /// Creates an empty store; the first inserted customer receives id 1.
    pub fn new() -> Self {
        debug!("Using InMemoryCustomerRepository");
        Self {
            store: RwLock::new(Store {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Store> {
        match self.store.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store> {
        match self.store.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Rejects a save that would duplicate another row's email address.
    fn check_email_unique(
        &self,
        candidate: &Customer,
        own_id: Option<CustomerId>,
    ) -> Result<(), AppError> {
        let Some(email) = candidate.email_address.as_ref() else {
            return Ok(());
        };

        let taken = self
            .rows
            .values()
            .any(|other| other.id() != own_id && other.email_address.as_ref() == Some(email));

        if taken {
            return Err(AppError::conflict(
                "Email address already in use",
                json!({ "email_address": email.as_str() }),
            ));
        }

        Ok(())
    }
}

/// Resolves a predicate field to the customer's text value.
///
/// `None` means the field exists but holds no value (unset email); every
/// comparison against it is false, mirroring SQL NULL semantics.
fn field_text(customer: &Customer, field: FieldRef) -> Result<Option<&str>, AppError> {
    match field.as_str() {
        "firstname" => Ok(Some(&customer.firstname)),
        "lastname" => Ok(Some(&customer.lastname)),
        "email_address" => Ok(customer.email_address.as_ref().map(EmailAddress::as_str)),
        other => Err(AppError::bad_request(
            "Unknown predicate field",
            json!({ "field": other }),
        )),
    }
}

fn matches(customer: &Customer, predicate: &Predicate) -> Result<bool, AppError> {
    match predicate {
        Predicate::And(left, right) => {
            Ok(matches(customer, left)? && matches(customer, right)?)
        }
        Predicate::Or(left, right) => Ok(matches(customer, left)? || matches(customer, right)?),
        Predicate::Compare(comparison) => {
            let Some(actual) = field_text(customer, comparison.field)? else {
                return Ok(false);
            };

            Ok(match comparison.op {
                CompareOp::Eq => actual == comparison.value,
                CompareOp::StartsWith => actual.starts_with(&comparison.value),
                CompareOp::Contains => actual.contains(&comparison.value),
            })
        }
    }
}

#[async_trait]
impl Repository<Customer, CustomerId> for InMemoryCustomerRepository {
    async fn find_one(&self, id: CustomerId) -> Result<Option<Customer>, AppError> {
        Ok(self.read().rows.get(&id.value()).cloned())
    }

    async fn save(&self, entity: Customer) -> Result<Customer, AppError> {
        let mut store = self.write();

        match entity.id() {
            None => {
                store.check_email_unique(&entity, None)?;

                let id = CustomerId::new(store.next_id);
                store.next_id += 1;

                let persisted = Customer::persisted(
                    id,
                    entity.firstname,
                    entity.lastname,
                    entity.email_address,
                );
                store.rows.insert(id.value(), persisted.clone());
                Ok(persisted)
            }
            Some(id) => {
                if !store.rows.contains_key(&id.value()) {
                    return Err(AppError::not_found(
                        "Customer does not exist",
                        json!({ "id": id.value() }),
                    ));
                }

                store.check_email_unique(&entity, Some(id))?;
                store.rows.insert(id.value(), entity.clone());
                Ok(entity)
            }
        }
    }

    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.read().rows.values().cloned().collect())
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Customer>, AppError> {
        let store = self.read();
        let total = store.rows.len() as u64;

        let items = store
            .rows
            .values()
            .skip(request.offset() as usize)
            .take(request.limit() as usize)
            .cloned()
            .collect();

        Ok(Page::new(items, request, total))
    }

    async fn find_matching(&self, predicate: Predicate) -> Result<Vec<Customer>, AppError> {
        let store = self.read();

        let mut found = Vec::new();
        for customer in store.rows.values() {
            if matches(customer, &predicate)? {
                found.push(customer.clone());
            }
        }

        Ok(found)
    }

    async fn delete(&self, id: CustomerId) -> Result<(), AppError> {
        if self.write().rows.remove(&id.value()).is_none() {
            debug!(id = id.value(), "delete of absent customer, nothing to do");
        }

        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_email_address(
        &self,
        email_address: &EmailAddress,
    ) -> Result<Option<Customer>, AppError> {
        let store = self.read();

        Ok(store
            .rows
            .values()
            .find(|customer| customer.email_address.as_ref() == Some(email_address))
            .cloned())
    }
}
