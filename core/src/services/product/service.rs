//! Product service implementation

use std::sync::Arc;

use ps_shared::types::{PageParams, PaginatedResponse};
use ps_shared::utils::validation::length_between;

use crate::domain::entities::product::{
    NewProduct, Product, DESCRIPTION_MAX_LEN, NAME_MAX_LEN, NAME_MIN_LEN, SKU_MAX_LEN,
};
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::ProductRepository;

/// Product catalogue operations
///
/// Price positivity is enforced here before any write reaches the repository.
pub struct ProductService<P>
where
    P: ProductRepository,
{
    product_repository: Arc<P>,
}

impl<P> ProductService<P>
where
    P: ProductRepository,
{
    pub fn new(product_repository: Arc<P>) -> Self {
        Self { product_repository }
    }

    /// Validate and store a new product
    pub async fn create(&self, product: NewProduct) -> DomainResult<Product> {
        validate_product(&product)?;

        let product = self.product_repository.create(product).await?;
        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    /// Fetch a non-deleted product
    pub async fn get(&self, id: i64) -> DomainResult<Product> {
        self.product_repository.find_by_id(id).await
    }

    /// One page of products with the grand total of non-deleted products
    pub async fn list(&self, page: PageParams) -> DomainResult<PaginatedResponse<Product>> {
        let (items, total) = self.product_repository.list(page).await?;
        Ok(PaginatedResponse::new(items, total, page))
    }

    /// Validate and overwrite every mutable field of a product
    pub async fn update(&self, id: i64, product: NewProduct) -> DomainResult<Product> {
        validate_product(&product)?;

        let product = self.product_repository.update(id, product).await?;
        tracing::info!(product_id = %id, "Product updated");
        Ok(product)
    }

    /// Soft-delete a product. Deleting an absent product is not an error.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        if self.product_repository.soft_delete(id).await? {
            tracing::info!(product_id = %id, "Product deleted");
        } else {
            tracing::debug!(product_id = %id, "Delete of absent product ignored");
        }
        Ok(())
    }
}

fn validate_product(product: &NewProduct) -> Result<(), ValidationError> {
    if product.price_cents <= 0 {
        return Err(ValidationError::InvalidPrice {
            price_cents: product.price_cents,
        });
    }
    if !length_between(product.name.trim(), NAME_MIN_LEN, NAME_MAX_LEN) {
        return Err(ValidationError::InvalidLength {
            field: "name".to_string(),
            min: NAME_MIN_LEN,
            max: NAME_MAX_LEN,
        });
    }
    if product.stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
        });
    }
    if let Some(description) = &product.description {
        if !length_between(description, 0, DESCRIPTION_MAX_LEN) {
            return Err(ValidationError::InvalidLength {
                field: "description".to_string(),
                min: 0,
                max: DESCRIPTION_MAX_LEN,
            });
        }
    }
    if let Some(sku) = &product.sku {
        if !length_between(sku, 0, SKU_MAX_LEN) {
            return Err(ValidationError::InvalidLength {
                field: "sku".to_string(),
                min: 0,
                max: SKU_MAX_LEN,
            });
        }
    }
    Ok(())
}
