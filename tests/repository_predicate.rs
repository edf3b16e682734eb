mod common;

use customer_registry::domain::entities::customer::fields;
use customer_registry::prelude::*;

#[tokio::test]
async fn test_executes_composed_predicate() {
    common::init_tracing();
    let repository = InMemoryCustomerRepository::new();
    common::seed_band(&repository).await;

    let dave = repository
        .find_by_email_address(&common::email("dave@dmband.com"))
        .await
        .unwrap()
        .unwrap();
    let carter = repository
        .find_by_email_address(&common::email("carter@dmband.com"))
        .await
        .unwrap()
        .unwrap();

    let firstname_starts_with_da = fields::FIRSTNAME.starts_with("Da");
    let lastname_contains_eau = fields::LASTNAME.contains("eau");

    let result = repository
        .find_matching(firstname_starts_with_da.or(lastname_contains_eau))
        .await
        .unwrap();

    assert_eq!(result.len(), 2);
    assert!(result.contains(&dave));
    assert!(result.contains(&carter));
}

#[tokio::test]
async fn test_or_is_a_union_without_duplicates() {
    let repository = InMemoryCustomerRepository::new();
    common::seed_band(&repository).await;

    // Both branches match Dave; he must still appear only once.
    let result = repository
        .find_matching(
            fields::FIRSTNAME
                .starts_with("Da")
                .or(fields::LASTNAME.equals("Matthews")),
        )
        .await
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].firstname, "Dave");
}

#[tokio::test]
async fn test_and_narrows_the_match() {
    let repository = InMemoryCustomerRepository::new();
    common::seed_band(&repository).await;

    let result = repository
        .find_matching(
            fields::FIRSTNAME
                .starts_with("Da")
                .and(fields::LASTNAME.equals("Beauford")),
        )
        .await
        .unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_equality_on_email_field() {
    let repository = InMemoryCustomerRepository::new();
    common::seed_band(&repository).await;

    let result = repository
        .find_matching(fields::EMAIL_ADDRESS.equals("boyd@dmband.com"))
        .await
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].firstname, "Boyd");
}

#[tokio::test]
async fn test_missing_email_never_matches() {
    let repository = InMemoryCustomerRepository::new();
    repository
        .save(Customer::new("LeRoi", "Moore"))
        .await
        .unwrap();

    let result = repository
        .find_matching(fields::EMAIL_ADDRESS.contains("dmband"))
        .await
        .unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_matching_is_case_sensitive() {
    let repository = InMemoryCustomerRepository::new();
    common::seed_band(&repository).await;

    let result = repository
        .find_matching(fields::FIRSTNAME.starts_with("da"))
        .await
        .unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_unknown_field_is_a_validation_error() {
    let repository = InMemoryCustomerRepository::new();
    common::seed_band(&repository).await;

    let err = repository
        .find_matching(FieldRef::new("shoe_size").equals("42"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation { .. }));
}

#[tokio::test]
async fn test_building_a_predicate_touches_no_storage() {
    let repository = InMemoryCustomerRepository::new();
    common::seed_band(&repository).await;

    // Built but never executed; the store stays untouched.
    let _unused = fields::FIRSTNAME
        .equals("Dave")
        .and(fields::LASTNAME.equals("Matthews"));

    assert_eq!(repository.find_all().await.unwrap().len(), 3);
}
