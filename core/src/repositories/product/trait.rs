//! Product repository trait defining the interface for product persistence.

use async_trait::async_trait;
use ps_shared::types::PageParams;

use crate::domain::entities::product::{NewProduct, Product};
use crate::errors::DomainError;

/// Repository trait for Product entity persistence operations
///
/// Storage does not check price positivity; `ProductService` does that
/// before calling into the repository.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product and return it with its assigned identifier
    ///
    /// # Returns
    /// * `Ok(Product)` - The stored product
    /// * `Err(DomainError::Conflict)` - The SKU is already taken
    async fn create(&self, product: NewProduct) -> Result<Product, DomainError>;

    /// Find a non-deleted product by identifier
    ///
    /// # Returns
    /// * `Ok(Product)` - Product found
    /// * `Err(DomainError::NotFound)` - Absent or soft-deleted
    async fn find_by_id(&self, id: i64) -> Result<Product, DomainError>;

    /// List one page of non-deleted products in identifier order
    ///
    /// # Arguments
    /// * `page` - Limit and offset of the window
    ///
    /// # Returns
    /// * `Ok((items, total))` - At most `page.limit` items and the count of
    ///   all non-deleted products, independent of the window
    async fn list(&self, page: PageParams) -> Result<(Vec<Product>, u64), DomainError>;

    /// Overwrite every mutable field of an existing product
    ///
    /// # Returns
    /// * `Ok(Product)` - The updated product
    /// * `Err(DomainError::NotFound)` - Absent or soft-deleted
    /// * `Err(DomainError::Conflict)` - The new SKU belongs to another product
    async fn update(&self, id: i64, product: NewProduct) -> Result<Product, DomainError>;

    /// Mark a product as deleted
    ///
    /// # Returns
    /// * `Ok(true)` - The product was marked
    /// * `Ok(false)` - No such non-deleted product
    async fn soft_delete(&self, id: i64) -> Result<bool, DomainError>;
}
