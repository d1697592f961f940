use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::product_dto::{
        CreateProductPayload, ProductListQuery, ProductListResponse, ProductResponse,
        UpdateProductPayload,
    },
    error::Result,
    utils::validation,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductPayload,
    responses(
        (status = 201, description = "Product created successfully", body = Json<ProductResponse>),
        (status = 400, description = "Invalid payload or duplicate name")
    )
)]
#[axum::debug_handler]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    validation::plain_name("name", &payload.name)?;
    if let Some(description) = &payload.description {
        validation::plain_text("description", description)?;
    }
    validation::positive_price(payload.price)?;

    let product = state.product_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateProductPayload,
    responses(
        (status = 200, description = "Product updated successfully", body = Json<ProductResponse>),
        (status = 400, description = "Invalid payload or duplicate name"),
        (status = 404, description = "Product not found")
    )
)]
#[axum::debug_handler]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProductPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    if let Some(name) = &payload.name {
        validation::plain_name("name", name)?;
    }
    if let Some(description) = &payload.description {
        validation::plain_text("description", description)?;
    }
    if let Some(price) = payload.price {
        validation::positive_price(price)?;
    }

    let product = state.product_service.update(id, payload).await?;
    Ok(Json(ProductResponse::from(product)))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("category_id" = Option<i64>, Query, description = "Filter by category"),
        ("search" = Option<String>, Query, description = "Substring match on name")
    ),
    responses(
        (status = 200, description = "List of active products", body = Json<ProductListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<impl IntoResponse> {
    let items = state.product_service.list(query).await?;
    let items: Vec<ProductResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(ProductListResponse { items }))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Json<ProductResponse>),
        (status = 404, description = "Product not found")
    )
)]
#[axum::debug_handler]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let product = state.product_service.get_by_id(id).await?;
    Ok(Json(ProductResponse::from(product)))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deactivated"),
        (status = 404, description = "Product not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.product_service.soft_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
