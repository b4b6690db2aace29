//! Unit tests for the product service

use std::sync::Arc;

use ps_shared::types::PageParams;

use crate::domain::entities::product::NewProduct;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::InMemoryProductRepository;
use crate::services::product::ProductService;

fn service() -> (Arc<InMemoryProductRepository>, ProductService<InMemoryProductRepository>) {
    let repo = Arc::new(InMemoryProductRepository::new());
    (repo.clone(), ProductService::new(repo))
}

#[tokio::test]
async fn test_create_assigns_id_and_round_trips() {
    let (_, service) = service();

    let created = service
        .create(NewProduct::new("Leash", 999, 5))
        .await
        .unwrap();
    let fetched = service.get(created.id).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(fetched.name, "Leash");
    assert_eq!(fetched.price_cents, 999);
    assert_eq!(fetched.stock, 5);
}

#[tokio::test]
async fn test_non_positive_price_never_persists() {
    let (repo, service) = service();

    for price in [0, -1, i64::MIN] {
        let err = service
            .create(NewProduct::new("Leash", price, 5))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::ValidationErr(ValidationError::InvalidPrice { price_cents: price })
        );
    }

    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_update_rejects_non_positive_price() {
    let (_, service) = service();
    let created = service.create(NewProduct::new("Leash", 999, 5)).await.unwrap();

    let err = service
        .update(created.id, NewProduct::new("Leash", 0, 5))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::InvalidPrice { .. })
    ));
    assert_eq!(service.get(created.id).await.unwrap().price_cents, 999);
}

#[tokio::test]
async fn test_field_bounds() {
    let (_, service) = service();

    let err = service.create(NewProduct::new("L", 999, 5)).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::InvalidLength { .. })
    ));

    let err = service.create(NewProduct::new("Leash", 999, -1)).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::OutOfRange { .. })
    ));

    let long_sku = "S".repeat(101);
    let err = service
        .create(NewProduct::new("Leash", 999, 1).with_sku(long_sku))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::InvalidLength { .. })
    ));
}

#[tokio::test]
async fn test_list_pages_with_grand_total() {
    let (_, service) = service();
    for i in 0..7 {
        service
            .create(NewProduct::new(format!("Item {}", i), 100, 1))
            .await
            .unwrap();
    }

    let page = service.list(PageParams::new(3, 3)).await.unwrap();

    assert_eq!(page.items.len(), 3);
    assert_eq!(page.total, 7);
    assert_eq!(page.limit, 3);
    assert_eq!(page.offset, 3);
    assert_eq!(page.items[0].name, "Item 3");
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let (_, service) = service();
    let created = service.create(NewProduct::new("Leash", 999, 5)).await.unwrap();

    service.delete(created.id).await.unwrap();

    assert!(service.get(created.id).await.unwrap_err().is_not_found());
    // Repeat deletes are accepted
    service.delete(created.id).await.unwrap();
    assert_eq!(service.list(PageParams::default()).await.unwrap().total, 0);
}

#[tokio::test]
async fn test_update_missing_product_is_not_found() {
    let (_, service) = service();

    let err = service
        .update(12, NewProduct::new("Ghost", 100, 1))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}
