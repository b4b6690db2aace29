//! Product entity for the shop inventory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum product name length in characters
pub const NAME_MIN_LEN: usize = 2;

/// Maximum product name length in characters
pub const NAME_MAX_LEN: usize = 255;

/// Maximum description length in characters
pub const DESCRIPTION_MAX_LEN: usize = 2000;

/// Maximum SKU length in characters
pub const SKU_MAX_LEN: usize = 100;

/// Product entity
///
/// Prices are integer minor currency units (cents). Positivity is enforced by
/// the product service, not by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier
    pub id: i64,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Price in minor currency units
    pub price_cents: i64,

    pub stock: i32,

    /// Stock keeping unit, unique when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Soft-delete marker
    #[serde(skip_serializing, default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Builds a persisted product from its mutable fields
    pub fn from_new(id: i64, fields: NewProduct) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price_cents: fields.price_cents,
            stock: fields.stock,
            sku: fields.sku,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Overwrites every mutable field in one pass
    pub fn apply(&mut self, fields: NewProduct) {
        self.name = fields.name;
        self.description = fields.description;
        self.price_cents = fields.price_cents;
        self.stock = fields.stock;
        self.sku = fields.sku;
        self.updated_at = Utc::now();
    }

    /// Marks the product as deleted without removing it
    pub fn mark_deleted(&mut self) {
        let now = Utc::now();
        self.deleted_at = Some(now);
        self.updated_at = now;
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Mutable product fields, used for both create and full update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub stock: i32,
    pub sku: Option<String>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price_cents: i64, stock: i32) -> Self {
        Self {
            name: name.into(),
            description: None,
            price_cents,
            stock,
            sku: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overwrites_all_fields() {
        let mut product = Product::from_new(
            7,
            NewProduct::new("Leash", 999, 5).with_sku("LEASH-1").with_description("red"),
        );
        product.apply(NewProduct::new("Collar", 1299, 0));

        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Collar");
        assert_eq!(product.price_cents, 1299);
        assert_eq!(product.stock, 0);
        assert!(product.sku.is_none());
        assert!(product.description.is_none());
    }

    #[test]
    fn test_serialization_omits_empty_optionals() {
        let product = Product::from_new(1, NewProduct::new("Leash", 999, 5));
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price_cents"], 999);
        assert!(json.get("sku").is_none());
        assert!(json.get("deleted_at").is_none());
    }
}
