//! PostgreSQL 仓储实现（`database` 特性）

use async_trait::async_trait;
use sqlx::postgres::PgPool;

use super::model::Product;
use super::repository::{ProductRepository, RepositoryError};

/// PostgreSQL 商品仓储
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products =
            sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY product_id")
                .fetch_all(&self.pool)
                .await?;
        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let product =
            sqlx::query_as::<_, Product>("SELECT * FROM products WHERE product_id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(product)
    }

    async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        let saved = match product.product_id {
            // 主键已设置：整体覆盖，不存在则按给定主键插入
            Some(id) => {
                sqlx::query_as::<_, Product>(
                    r#"
                    INSERT INTO products (product_id, product_name, description, price, star_rating)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (product_id) DO UPDATE SET
                        product_name = EXCLUDED.product_name,
                        description = EXCLUDED.description,
                        price = EXCLUDED.price,
                        star_rating = EXCLUDED.star_rating
                    RETURNING *
                    "#,
                )
                .bind(id)
                .bind(&product.product_name)
                .bind(&product.description)
                .bind(product.price)
                .bind(product.star_rating)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Product>(
                    r#"
                    INSERT INTO products (product_name, description, price, star_rating)
                    VALUES ($1, $2, $3, $4)
                    RETURNING *
                    "#,
                )
                .bind(&product.product_name)
                .bind(&product.description)
                .bind(product.price)
                .bind(product.star_rating)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(saved)
    }

    async fn save_all(&self, products: Vec<Product>) -> Result<Vec<Product>, RepositoryError> {
        let mut saved = Vec::with_capacity(products.len());
        for product in products {
            saved.push(self.save(product).await?);
        }
        Ok(saved)
    }

    async fn delete(&self, product: &Product) -> Result<(), RepositoryError> {
        if let Some(id) = product.product_id {
            sqlx::query("DELETE FROM products WHERE product_id = $1")
                .bind(id)
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_price_greater_than_equal(
        &self,
        price: f64,
    ) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE price >= $1 ORDER BY product_id",
        )
        .bind(price)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    async fn find_by_product_name_or_price(
        &self,
        name: &str,
        price: f64,
    ) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE product_name = $1 OR price = $2 ORDER BY product_id",
        )
        .bind(name)
        .bind(price)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    async fn find_by_product_name_like(
        &self,
        name: &str,
    ) -> Result<Vec<Product>, RepositoryError> {
        // 子串匹配
        let pattern = format!("%{}%", name);
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE product_name LIKE $1 ORDER BY product_id",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }
}
