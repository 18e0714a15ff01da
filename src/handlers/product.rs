// src/handlers/product.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::Error as SqlxError;
use tracing::{error, instrument};

use crate::dtos::product::{
    CreateProductRequest, MessageResponse, ProductResponse, UpdateProductRequest,
    UpdateProductResponse,
};
use crate::error::AppError;
use crate::models::product::Product;
use crate::state::AppState;

fn map_unique_violation(err: SqlxError, message: &str) -> AppError {
    match err {
        SqlxError::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            AppError::conflict(message)
        }
        other => other.into(),
    }
}

fn validate_fields(name: &str, description: Option<&str>) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Product name is required"));
    }
    if name.len() > 100 {
        return Err(AppError::validation(
            "Product name must be at most 100 characters",
        ));
    }
    if let Some(desc) = description {
        if desc.len() > 255 {
            return Err(AppError::validation(
                "Product description must be at most 255 characters",
            ));
        }
    }
    Ok(())
}

// GET /products - List all products
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    match sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, quantity FROM product ORDER BY id",
    )
    .fetch_all(&state.db_pool)
    .await
    {
        Ok(products) => {
            let response = products.into_iter().map(ProductResponse::from).collect();
            Ok(Json(response))
        }
        Err(e) => {
            error!(?e, "Failed to fetch products");
            Err(e.into())
        }
    }
}

// GET /products/:id - Get single product
#[instrument(skip(state), fields(id))]
pub async fn get_product(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, quantity FROM product WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(ProductResponse::from(product)))
}

// POST /products - Create new product (caller supplies the id)
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    validate_fields(&payload.name, payload.description.as_deref())?;

    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO product (id, name, description, price, quantity)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, name, description, price, quantity",
    )
    .bind(payload.id)
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(payload.price)
    .bind(payload.quantity)
    .fetch_one(&state.db_pool)
    .await
    .map_err(|e| map_unique_violation(e, "Product with this id already exists"))?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

// PUT /products/:id - Full-record update, id immutable
#[instrument(skip(state, payload), fields(id))]
pub async fn update_product(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<UpdateProductResponse>, AppError> {
    validate_fields(&payload.name, payload.description.as_deref())?;

    let product = sqlx::query_as::<_, Product>(
        "UPDATE product SET
         name = $1,
         description = $2,
         price = $3,
         quantity = $4
         WHERE id = $5
         RETURNING id, name, description, price, quantity",
    )
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(payload.price)
    .bind(payload.quantity)
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(UpdateProductResponse {
        message: "Product updated successfully".to_string(),
        product: ProductResponse::from(product),
    }))
}

// DELETE /products/:id - Delete product
#[instrument(skip(state), fields(id))]
pub async fn delete_product(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let result = sqlx::query("DELETE FROM product WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Product not found"));
    }

    Ok(Json(MessageResponse {
        message: "Product deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        assert!(validate_fields("  ", None).is_err());
    }

    #[test]
    fn overlong_name_is_rejected() {
        let name = "x".repeat(101);
        assert!(validate_fields(&name, None).is_err());
        assert!(validate_fields(&name[..100], None).is_ok());
    }

    #[test]
    fn overlong_description_is_rejected() {
        let desc = "y".repeat(256);
        assert!(validate_fields("Cable", Some(&desc)).is_err());
        assert!(validate_fields("Cable", Some(&desc[..255])).is_ok());
    }
}
