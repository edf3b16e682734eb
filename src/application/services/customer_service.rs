//! Customer management service.

use crate::domain::entities::{Customer, CustomerId, EmailAddress};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing directory customers.
///
/// Validates caller input before it reaches the repository: names must not
/// be blank, and email addresses arrive pre-validated as [`EmailAddress`]
/// value objects.
pub struct CustomerService<R: CustomerRepository> {
    repository: Arc<R>,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Creates a new customer service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a new customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when either name is blank.
    /// Returns [`AppError::Conflict`] when the email address is taken.
    /// Returns [`AppError::Internal`] on backend errors.
    pub async fn register(
        &self,
        firstname: String,
        lastname: String,
        email_address: Option<EmailAddress>,
    ) -> Result<Customer, AppError> {
        validate_name("firstname", &firstname)?;
        validate_name("lastname", &lastname)?;

        let mut customer = Customer::new(firstname.trim(), lastname.trim());
        if let Some(email_address) = email_address {
            customer = customer.with_email_address(email_address);
        }

        self.repository.save(customer).await
    }

    /// Replaces a customer's email address; `None` clears it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no customer has that identity.
    /// Returns [`AppError::Conflict`] when the email address is taken.
    /// Returns [`AppError::Internal`] on backend errors.
    pub async fn change_email_address(
        &self,
        id: CustomerId,
        email_address: Option<EmailAddress>,
    ) -> Result<Customer, AppError> {
        let Some(mut customer) = self.repository.find_one(id).await? else {
            return Err(AppError::not_found(
                "Customer does not exist",
                json!({ "id": id.value() }),
            ));
        };

        customer.email_address = email_address;
        self.repository.save(customer).await
    }

    /// Removes a customer; removing an unknown identity is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    pub async fn remove(&self, id: CustomerId) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}

fn validate_name(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(
            "Name must not be blank",
            json!({ "field": field }),
        ));
    }

    Ok(())
}
