// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::models::product::Product;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

/// Full-record replacement; the id comes from the path and is immutable.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

#[derive(Debug, Serialize)]
pub struct UpdateProductResponse {
    pub message: String,
    pub product: ProductResponse,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_missing_description() {
        let req: CreateProductRequest =
            serde_json::from_str(r#"{"id":3,"name":"Cable","price":9.99,"quantity":200}"#)
                .unwrap();
        assert_eq!(req.id, 3);
        assert_eq!(req.name, "Cable");
        assert!(req.description.is_none());
        assert_eq!(req.price, 9.99);
        assert_eq!(req.quantity, 200);
    }

    #[test]
    fn create_request_rejects_missing_price() {
        let result: Result<CreateProductRequest, _> =
            serde_json::from_str(r#"{"id":3,"name":"Cable","quantity":200}"#);
        assert!(result.is_err());
    }

    #[test]
    fn response_round_trips_model_fields() {
        let product = Product {
            id: 3,
            name: "Cable".to_string(),
            description: Some("USB-C cable".to_string()),
            price: 9.99,
            quantity: 200,
        };
        let response = ProductResponse::from(product);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "name": "Cable",
                "description": "USB-C cable",
                "price": 9.99,
                "quantity": 200
            })
        );
    }
}
