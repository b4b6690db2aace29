//! MySQL implementation of the ProductRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use ps_core::domain::entities::product::{NewProduct, Product};
use ps_core::errors::DomainError;
use ps_core::repositories::ProductRepository;
use ps_shared::types::PageParams;

use super::{db_now, map_read_error, map_write_error};

const PRODUCT_COLUMNS: &str =
    "id, name, description, price_cents, stock, sku, created_at, updated_at, deleted_at";

/// MySQL implementation of ProductRepository
pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_product(row: &sqlx::mysql::MySqlRow) -> Result<Product, DomainError> {
        let column = |name: &str, e: sqlx::Error| {
            DomainError::database(format!("Failed to get {}: {}", name, e))
        };

        Ok(Product {
            id: row.try_get("id").map_err(|e| column("id", e))?,
            name: row.try_get("name").map_err(|e| column("name", e))?,
            description: row
                .try_get("description")
                .map_err(|e| column("description", e))?,
            price_cents: row
                .try_get("price_cents")
                .map_err(|e| column("price_cents", e))?,
            stock: row.try_get("stock").map_err(|e| column("stock", e))?,
            sku: row.try_get("sku").map_err(|e| column("sku", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column("updated_at", e))?,
            deleted_at: row
                .try_get::<Option<DateTime<Utc>>, _>("deleted_at")
                .map_err(|e| column("deleted_at", e))?,
        })
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        let query = r#"
            INSERT INTO products (
                name, description, price_cents, stock, sku, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        let now = db_now();
        let result = sqlx::query(query)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price_cents)
            .bind(product.stock)
            .bind(&product.sku)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &["sku"], "Failed to create product"))?;

        let mut created = Product::from_new(result.last_insert_id() as i64, product);
        created.created_at = now;
        created.updated_at = now;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Product, DomainError> {
        let query = format!(
            "SELECT {} FROM products WHERE id = ? AND deleted_at IS NULL LIMIT 1",
            PRODUCT_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_read_error)?;

        match row {
            Some(row) => Self::row_to_product(&row),
            None => Err(DomainError::not_found("product")),
        }
    }

    async fn list(&self, page: PageParams) -> Result<(Vec<Product>, u64), DomainError> {
        // Two single statements; a write between them can make total and page disagree.
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE deleted_at IS NULL")
            .fetch_one(&self.pool)
            .await
            .map_err(map_read_error)?;

        let query = format!(
            "SELECT {} FROM products WHERE deleted_at IS NULL ORDER BY id LIMIT ? OFFSET ?",
            PRODUCT_COLUMNS
        );
        let rows = sqlx::query(&query)
            .bind(page.limit_i64())
            .bind(page.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(map_read_error)?;

        let items = rows
            .iter()
            .map(Self::row_to_product)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((items, total.max(0) as u64))
    }

    async fn update(&self, id: i64, product: NewProduct) -> Result<Product, DomainError> {
        let query = r#"
            UPDATE products SET
                name = ?,
                description = ?,
                price_cents = ?,
                stock = ?,
                sku = ?,
                updated_at = ?
            WHERE id = ? AND deleted_at IS NULL
        "#;

        let result = sqlx::query(query)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price_cents)
            .bind(product.stock)
            .bind(&product.sku)
            .bind(db_now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &["sku"], "Failed to update product"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("product"));
        }

        self.find_by_id(id).await
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, DomainError> {
        let now = db_now();
        let result = sqlx::query(
            "UPDATE products SET deleted_at = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(now)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &[], "Failed to delete product"))?;

        Ok(result.rows_affected() > 0)
    }
}
