use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::category_dto::{
        CategoryListResponse, CategoryResponse, CreateCategoryPayload, UpdateCategoryPayload,
    },
    error::Result,
    utils::validation,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryPayload,
    responses(
        (status = 201, description = "Category created successfully", body = Json<CategoryResponse>),
        (status = 400, description = "Invalid payload or duplicate name")
    )
)]
#[axum::debug_handler]
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    validation::plain_name("name", &payload.name)?;
    if let Some(description) = &payload.description {
        validation::plain_text("description", description)?;
    }

    let category = state.category_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}

#[utoipa::path(
    patch,
    path = "/api/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryPayload,
    responses(
        (status = 200, description = "Category updated successfully", body = Json<CategoryResponse>),
        (status = 400, description = "Invalid payload or duplicate name"),
        (status = 404, description = "Category not found")
    )
)]
#[axum::debug_handler]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCategoryPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    if let Some(name) = &payload.name {
        validation::plain_name("name", name)?;
    }
    if let Some(description) = &payload.description {
        validation::plain_text("description", description)?;
    }

    let category = state.category_service.update(id, payload).await?;
    Ok(Json(CategoryResponse::from(category)))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of active categories", body = Json<CategoryListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.category_service.list().await?;
    let items: Vec<CategoryResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(CategoryListResponse { items }))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = Json<CategoryResponse>),
        (status = 404, description = "Category not found")
    )
)]
#[axum::debug_handler]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let category = state.category_service.get_by_id(id).await?;
    Ok(Json(CategoryResponse::from(category)))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deactivated"),
        (status = 404, description = "Category not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.category_service.soft_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
