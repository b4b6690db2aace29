//! In-memory implementation of ProductRepository for tests and local runs

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use ps_shared::types::PageParams;

use crate::domain::entities::product::{NewProduct, Product};
use crate::errors::DomainError;

use super::trait_::ProductRepository;

#[derive(Default)]
struct State {
    products: BTreeMap<i64, Product>,
    last_id: i64,
}

/// In-memory product repository, ordered by identifier
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryProductRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows, including soft-deleted ones
    pub async fn len(&self) -> usize {
        self.state.read().await.products.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn sku_taken<'a>(mut others: impl Iterator<Item = &'a Product>, sku: Option<&str>) -> bool {
    match sku {
        Some(sku) => others.any(|p| p.sku.as_deref() == Some(sku)),
        None => false,
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        let mut state = self.state.write().await;

        if sku_taken(state.products.values(), product.sku.as_deref()) {
            return Err(DomainError::Conflict {
                field: "sku".to_string(),
            });
        }

        state.last_id += 1;
        let product = Product::from_new(state.last_id, product);
        state.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: i64) -> Result<Product, DomainError> {
        let state = self.state.read().await;
        state
            .products
            .get(&id)
            .filter(|p| !p.is_deleted())
            .cloned()
            .ok_or_else(|| DomainError::not_found("product"))
    }

    async fn list(&self, page: PageParams) -> Result<(Vec<Product>, u64), DomainError> {
        let state = self.state.read().await;
        let live = state.products.values().filter(|p| !p.is_deleted());

        let total = live.clone().count() as u64;
        let items = live
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .cloned()
            .collect();

        Ok((items, total))
    }

    async fn update(&self, id: i64, product: NewProduct) -> Result<Product, DomainError> {
        let mut state = self.state.write().await;

        if !state.products.get(&id).is_some_and(|p| !p.is_deleted()) {
            return Err(DomainError::not_found("product"));
        }
        if sku_taken(
            state.products.values().filter(|p| p.id != id),
            product.sku.as_deref(),
        ) {
            return Err(DomainError::Conflict {
                field: "sku".to_string(),
            });
        }

        let existing = state
            .products
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("product"))?;
        existing.apply(product);
        Ok(existing.clone())
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        match state.products.get_mut(&id) {
            Some(product) if !product.is_deleted() => {
                product.mark_deleted();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
