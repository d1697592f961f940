use crate::dto::category_dto::{CreateCategoryPayload, UpdateCategoryPayload};
use crate::error::{Error, Result};
use crate::models::category::Category;
use sqlx::PgPool;

#[derive(Clone)]
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateCategoryPayload) -> Result<Category> {
        self.ensure_name_available(&payload.name, None).await?;

        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, is_active, created_at, updated_at
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    pub async fn update(&self, id: i64, payload: UpdateCategoryPayload) -> Result<Category> {
        if let Some(name) = &payload.name {
            self.ensure_name_available(name, Some(id)).await?;
        }
        self.ensure_exists(id).await?;

        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&payload.name)
        .bind(&payload.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    pub async fn list(&self) -> Result<Vec<Category>> {
        let items = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, is_active, created_at, updated_at
            FROM categories
            WHERE is_active = TRUE
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, is_active, created_at, updated_at
            FROM categories
            WHERE id = $1 AND is_active = TRUE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Category not found".to_string()))?;

        Ok(category)
    }

    pub async fn soft_delete(&self, id: i64) -> Result<Category> {
        self.ensure_exists(id).await?;

        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET is_active = FALSE, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    async fn ensure_exists(&self, id: i64) -> Result<()> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        if !exists {
            return Err(Error::NotFound("Category not found".to_string()));
        }
        Ok(())
    }

    async fn ensure_name_available(&self, name: &str, exclude_id: Option<i64>) -> Result<()> {
        let taken = match exclude_id {
            Some(id) => {
                sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS(SELECT 1 FROM categories WHERE name = $1 AND is_active = TRUE AND id <> $2)",
                )
                .bind(name)
                .bind(id)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS(SELECT 1 FROM categories WHERE name = $1 AND is_active = TRUE)",
                )
                .bind(name)
                .fetch_one(&self.pool)
                .await?
            }
        };
        if taken {
            return Err(Error::BadRequest(
                "A category with the same name already exists".to_string(),
            ));
        }
        Ok(())
    }
}
