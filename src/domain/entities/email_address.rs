//! Email address value object.

use validator::ValidateEmail;

/// Errors that can occur when parsing an email address.
#[derive(Debug, thiserror::Error)]
pub enum EmailAddressError {
    #[error("Invalid email address: {0}")]
    Invalid(String),
}

/// An immutable, validated email address.
///
/// The wrapped string is normalized (trimmed, ASCII-lowercased) on
/// construction, so two addresses that differ only in case or surrounding
/// whitespace compare equal and hash identically.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and normalizes an email address.
    ///
    /// # Errors
    ///
    /// Returns [`EmailAddressError::Invalid`] if the normalized value is not
    /// a syntactically valid email address.
    pub fn new(value: impl AsRef<str>) -> Result<Self, EmailAddressError> {
        let normalized = value.as_ref().trim().to_ascii_lowercase();

        if !normalized.validate_email() {
            return Err(EmailAddressError::Invalid(value.as_ref().to_string()));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value object, returning the normalized string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for EmailAddress {
    type Err = EmailAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_address() {
        let email = EmailAddress::new("dave@dmband.com").unwrap();
        assert_eq!(email.as_str(), "dave@dmband.com");
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let email = EmailAddress::new("  Dave@DMBand.COM ").unwrap();
        assert_eq!(email.as_str(), "dave@dmband.com");
    }

    #[test]
    fn test_equality_by_normalized_value() {
        let a = EmailAddress::new("Carter@dmband.com").unwrap();
        let b = EmailAddress::new("carter@DMBAND.com").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(EmailAddress::new("not-an-email").is_err());
        assert!(EmailAddress::new("@dmband.com").is_err());
        assert!(EmailAddress::new("").is_err());
    }

    #[test]
    fn test_from_str_round_trip() {
        let email: EmailAddress = "boyd@dmband.com".parse().unwrap();
        assert_eq!(email.to_string(), "boyd@dmband.com");
    }
}
