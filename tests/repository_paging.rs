mod common;

use customer_registry::prelude::*;

#[tokio::test]
async fn test_accesses_customers_page_by_page() {
    common::init_tracing();
    let repository = InMemoryCustomerRepository::new();
    common::seed_band(&repository).await;

    let result = repository
        .find_page(PageRequest::new(1, 1).unwrap())
        .await
        .unwrap();

    assert_eq!(result.number_of_elements(), 1);
    assert!(!result.is_first_page());
    assert!(!result.is_last_page());
}

#[tokio::test]
async fn test_first_and_last_pages_are_flagged() {
    let repository = InMemoryCustomerRepository::new();
    common::seed_band(&repository).await;

    let first = repository
        .find_page(PageRequest::new(0, 1).unwrap())
        .await
        .unwrap();
    assert!(first.is_first_page());
    assert!(!first.is_last_page());

    let last = repository
        .find_page(PageRequest::new(2, 1).unwrap())
        .await
        .unwrap();
    assert!(!last.is_first_page());
    assert!(last.is_last_page());
}

#[tokio::test]
async fn test_page_elements_sum_to_total() {
    let repository = InMemoryCustomerRepository::new();
    common::seed_band(&repository).await;

    let mut seen = 0;
    for index in 0..2 {
        let page = repository
            .find_page(PageRequest::new(index, 2).unwrap())
            .await
            .unwrap();
        assert_eq!(page.total_pages(), 2);
        seen += page.number_of_elements();
    }

    assert_eq!(seen, 3);
}

#[tokio::test]
async fn test_pages_tile_the_result_set_without_overlap() {
    let repository = InMemoryCustomerRepository::new();
    common::seed_band(&repository).await;

    let mut firstnames = Vec::new();
    for index in 0..3 {
        let page = repository
            .find_page(PageRequest::new(index, 1).unwrap())
            .await
            .unwrap();
        firstnames.extend(page.into_items().into_iter().map(|c| c.firstname));
    }

    assert_eq!(firstnames, vec!["Dave", "Carter", "Boyd"]);
}

#[tokio::test]
async fn test_out_of_range_page_is_empty_not_an_error() {
    let repository = InMemoryCustomerRepository::new();
    common::seed_band(&repository).await;

    let page = repository
        .find_page(PageRequest::new(5, 2).unwrap())
        .await
        .unwrap();

    assert_eq!(page.number_of_elements(), 0);
    assert_eq!(page.total_elements(), 3);
    assert!(page.is_last_page());
}

#[tokio::test]
async fn test_zero_page_size_is_rejected_before_the_backend() {
    let err = PageRequest::new(0, 0).unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
}

#[tokio::test]
async fn test_paging_an_empty_store() {
    let repository = InMemoryCustomerRepository::new();

    let page = repository
        .find_page(PageRequest::new(0, 10).unwrap())
        .await
        .unwrap();

    assert_eq!(page.number_of_elements(), 0);
    assert_eq!(page.total_elements(), 0);
    assert!(page.is_first_page());
    assert!(page.is_last_page());
}
