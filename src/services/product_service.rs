use crate::dto::product_dto::{CreateProductPayload, ProductListQuery, UpdateProductPayload};
use crate::error::{Error, Result};
use crate::models::product::Product;
use sqlx::PgPool;

#[derive(Clone)]
pub struct ProductService {
    pool: PgPool,
}

impl ProductService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateProductPayload) -> Result<Product> {
        self.ensure_name_available(&payload.name, None).await?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, description, image_url, category_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, price, description, image_url, category_id, is_active, created_at, updated_at
            "#,
        )
        .bind(&payload.name)
        .bind(payload.price)
        .bind(&payload.description)
        .bind(&payload.image_url)
        .bind(payload.category_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    pub async fn update(&self, id: i64, payload: UpdateProductPayload) -> Result<Product> {
        if let Some(name) = &payload.name {
            self.ensure_name_available(name, Some(id)).await?;
        }
        self.ensure_exists(id).await?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET
                name = COALESCE($2, name),
                price = COALESCE($3, price),
                description = COALESCE($4, description),
                image_url = COALESCE($5, image_url),
                category_id = COALESCE($6, category_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, price, description, image_url, category_id, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&payload.name)
        .bind(payload.price)
        .bind(&payload.description)
        .bind(&payload.image_url)
        .bind(payload.category_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    pub async fn list(&self, query: ProductListQuery) -> Result<Vec<Product>> {
        let mut filters = vec!["is_active = TRUE".to_string()];
        let mut next_placeholder = 1;

        if query.category_id.is_some() {
            filters.push(format!("category_id = ${}", next_placeholder));
            next_placeholder += 1;
        }
        if query.search.is_some() {
            filters.push(format!("name ILIKE ${}", next_placeholder));
        }

        let items_query = format!(
            "SELECT id, name, price, description, image_url, category_id, is_active, created_at, updated_at
             FROM products
             WHERE {}
             ORDER BY created_at DESC",
            filters.join(" AND ")
        );

        let mut items_statement = sqlx::query_as::<_, Product>(&items_query);
        if let Some(category_id) = query.category_id {
            items_statement = items_statement.bind(category_id);
        }
        if let Some(search) = query.search {
            items_statement = items_statement.bind(format!("%{}%", search));
        }
        let items = items_statement.fetch_all(&self.pool).await?;

        Ok(items)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, description, image_url, category_id, is_active, created_at, updated_at
            FROM products
            WHERE id = $1 AND is_active = TRUE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Product not found".to_string()))?;

        Ok(product)
    }

    /// Soft delete: flips the active flag, the row stays behind.
    pub async fn soft_delete(&self, id: i64) -> Result<Product> {
        self.ensure_exists(id).await?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET is_active = FALSE, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, price, description, image_url, category_id, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    // Updates and deletes address rows by id regardless of the active flag.
    async fn ensure_exists(&self, id: i64) -> Result<()> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        if !exists {
            return Err(Error::NotFound("Product not found".to_string()));
        }
        Ok(())
    }

    async fn ensure_name_available(&self, name: &str, exclude_id: Option<i64>) -> Result<()> {
        let taken = match exclude_id {
            Some(id) => {
                sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS(SELECT 1 FROM products WHERE name = $1 AND is_active = TRUE AND id <> $2)",
                )
                .bind(name)
                .bind(id)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS(SELECT 1 FROM products WHERE name = $1 AND is_active = TRUE)",
                )
                .bind(name)
                .fetch_one(&self.pool)
                .await?
            }
        };
        if taken {
            return Err(Error::BadRequest(
                "A product with the same name already exists".to_string(),
            ));
        }
        Ok(())
    }
}
