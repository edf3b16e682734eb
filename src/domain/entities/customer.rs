//! Customer entity and its identifier.

use crate::domain::entities::EmailAddress;
use crate::domain::query::FieldRef;
use crate::error::AppError;
use serde_json::json;

/// Identifier of a persisted customer.
///
/// Identifiers are assigned by the storage backend on first save and are
/// positive. Parsing via [`std::str::FromStr`] rejects malformed or
/// non-positive input.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Wraps a raw identifier value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CustomerId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .parse()
            .map_err(|_| AppError::bad_request("Malformed customer id", json!({ "input": s })))?;

        if raw < 1 {
            return Err(AppError::bad_request(
                "Customer id must be positive",
                json!({ "input": s }),
            ));
        }

        Ok(Self(raw))
    }
}

/// A customer of the directory.
///
/// Customers start out transient (no identity); the backend assigns the
/// identity on first save and it never changes afterwards. `firstname` and
/// `lastname` are required, the email address is optional.
///
/// Equality follows identity: two persisted customers are equal iff their
/// ids match. A transient customer is never equal to anything, itself
/// included, which is why [`Eq`] is deliberately not implemented.
#[derive(Clone, Debug)]
pub struct Customer {
    id: Option<CustomerId>,
    pub firstname: String,
    pub lastname: String,
    pub email_address: Option<EmailAddress>,
}

impl Customer {
    /// Creates a transient customer with no identity assigned.
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            id: None,
            firstname: firstname.into(),
            lastname: lastname.into(),
            email_address: None,
        }
    }

    /// Sets the email address, consuming and returning the customer.
    pub fn with_email_address(mut self, email_address: EmailAddress) -> Self {
        self.email_address = Some(email_address);
        self
    }

    /// Returns the identity, or `None` while the customer is transient.
    pub fn id(&self) -> Option<CustomerId> {
        self.id
    }

    /// Returns true once the backend has assigned an identity.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Rebuilds a persisted customer from backend storage.
    pub(crate) fn persisted(
        id: CustomerId,
        firstname: String,
        lastname: String,
        email_address: Option<EmailAddress>,
    ) -> Self {
        Self {
            id: Some(id),
            firstname,
            lastname,
            email_address,
        }
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }
}

/// Field references for building customer predicates.
///
/// ```
/// use customer_registry::domain::entities::customer::fields;
///
/// let predicate = fields::FIRSTNAME
///     .starts_with("Da")
///     .or(fields::LASTNAME.contains("eau"));
/// ```
pub mod fields {
    use super::FieldRef;

    pub const FIRSTNAME: FieldRef = FieldRef::new("firstname");
    pub const LASTNAME: FieldRef = FieldRef::new("lastname");
    pub const EMAIL_ADDRESS: FieldRef = FieldRef::new("email_address");
}
