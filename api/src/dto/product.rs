use ps_core::domain::entities::product::NewProduct;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of product create and full update
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductRequest {
    #[validate(length(min = 2, max = 255))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: Option<String>,

    /// Price in minor currency units
    #[validate(range(min = 1))]
    pub price_cents: i64,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub stock: i32,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub sku: Option<String>,
}

impl From<ProductRequest> for NewProduct {
    fn from(request: ProductRequest) -> Self {
        // Blank optional strings are stored as absent so empty SKUs never collide
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        NewProduct {
            name: request.name,
            description: non_blank(request.description),
            price_cents: request.price_cents,
            stock: request.stock,
            sku: non_blank(request.sku),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(price_cents: i64, stock: i32) -> ProductRequest {
        ProductRequest {
            name: "Leash".to_string(),
            description: None,
            price_cents,
            stock,
            sku: None,
        }
    }

    #[test]
    fn test_price_must_be_positive() {
        assert!(request(999, 5).validate().is_ok());

        let errors = request(0, 5).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price_cents"));
    }

    #[test]
    fn test_stock_must_not_be_negative() {
        assert!(request(999, 0).validate().is_ok());
        assert!(request(999, -1).validate().is_err());
    }

    #[test]
    fn test_blank_sku_becomes_none() {
        let mut body = request(999, 5);
        body.sku = Some("  ".to_string());
        body.description = Some("red nylon".to_string());

        let product = NewProduct::from(body);
        assert!(product.sku.is_none());
        assert_eq!(product.description.as_deref(), Some("red nylon"));
    }
}
