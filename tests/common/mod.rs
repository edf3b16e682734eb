#![allow(dead_code)]

use customer_registry::prelude::*;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs a fmt subscriber once for the whole test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn email(raw: &str) -> EmailAddress {
    EmailAddress::new(raw).unwrap()
}

/// Seeds the canonical three-customer fixture and returns them in insertion
/// order: Dave Matthews (id 1 on a fresh store), Carter Beauford, Boyd
/// Tinsley.
pub async fn seed_band(repository: &InMemoryCustomerRepository) -> Vec<Customer> {
    let mut seeded = Vec::new();

    for (firstname, lastname, address) in [
        ("Dave", "Matthews", "dave@dmband.com"),
        ("Carter", "Beauford", "carter@dmband.com"),
        ("Boyd", "Tinsley", "boyd@dmband.com"),
    ] {
        let customer = Customer::new(firstname, lastname).with_email_address(email(address));
        seeded.push(repository.save(customer).await.unwrap());
    }

    seeded
}
